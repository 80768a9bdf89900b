//! Core types for typed-action
//!
//! This crate provides typed `{type, payload}` action records and the
//! factories that build them, for Redux/Elm-style state management.
//!
//! # Core Concepts
//!
//! - **GenericAction**: an immutable record of a tag (`type`) and a payload
//! - **ActionCreator**: a factory bound to one tag, producing actions with an empty payload
//! - **PayloadActionCreator**: a factory bound to one tag and one payload type
//! - **payload**: declares the payload type of a creator
//! - **Store**: reducer-driven state container that consumes actions
//!
//! # Basic Example
//!
//! ```
//! use typed_action_core::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Status {
//!     status: bool,
//! }
//!
//! let reset = action("test_action_name");
//! assert_eq!(reset.create().action_type(), "test_action_name");
//! assert_eq!(reset.create().payload(), &EmptyPayload);
//!
//! let set_status = action_with_payload("test_action_name", payload::<Status>());
//! let created = set_status.create(Status { status: true });
//! assert_eq!(created.action_type(), "test_action_name");
//! assert_eq!(created.payload(), &Status { status: true });
//! ```
//!
//! # Declaring creators as constants
//!
//! Both creator types are `Copy` and `const`-constructible, so a module
//! usually declares its creators next to each other:
//!
//! ```
//! use typed_action_core::prelude::*;
//!
//! pub const TODO_ADD: PayloadActionCreator<String> = action_with_payload("todo/add", payload());
//! pub const TODO_CLEAR: ActionCreator = action("todo/clear");
//!
//! let add = TODO_ADD.create("write tests".to_string());
//! assert!(TODO_ADD.matches(&add));
//! assert!(!TODO_CLEAR.matches(&add));
//! ```

pub mod action;
pub mod creator;
pub mod defined;
pub mod logger;
pub mod payload;
pub mod store;
pub mod testing;

// Core exports
pub use action::{Action, ActionSummary, EmptyPayload, GenericAction};
pub use creator::{action, action_with_payload, ActionCreator, Creator, PayloadActionCreator};
pub use defined::{is_defined, MaybeDefined};
pub use payload::{payload, PayloadContainer, PayloadFactory};

// Store exports
pub use store::{Middleware, NoopMiddleware, Reducer, Store};

// Logger exports
pub use logger::{
    glob_match, ActionLog, ActionLogConfig, ActionLogEntry, ActionLoggerConfig,
    ActionLoggerMiddleware,
};

// Testing exports
pub use testing::TestHarness;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionSummary, EmptyPayload, GenericAction};
    pub use crate::creator::{
        action, action_with_payload, ActionCreator, Creator, PayloadActionCreator,
    };
    pub use crate::defined::is_defined;
    pub use crate::logger::{ActionLogConfig, ActionLoggerConfig, ActionLoggerMiddleware};
    pub use crate::payload::{payload, PayloadFactory};
    pub use crate::store::{Middleware, NoopMiddleware, Reducer, Store};
}

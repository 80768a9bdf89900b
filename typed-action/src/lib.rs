//! typed-action: typed `{type, payload}` action creators
//!
//! Declare a creator once per action kind, then call it wherever the
//! action is needed. Payload types are checked at compile time: a creator
//! declared with `payload::<P>()` only accepts a `P`, and one declared
//! without a payload takes no argument at all.
//!
//! # Example
//! ```
//! use typed_action::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Status {
//!     status: bool,
//! }
//!
//! const PING: ActionCreator = action("ping");
//! const SET_STATUS: PayloadActionCreator<Status> =
//!     action_with_payload("set_status", payload::<Status>());
//!
//! assert_eq!(PING.create().action_type(), "ping");
//! assert_eq!(
//!     SET_STATUS.create(Status { status: true }).into_parts(),
//!     ("set_status", Status { status: true })
//! );
//! ```
//!
//! Hand-written action enums get their tags from `#[derive(Action)]`:
//!
//! ```
//! use typed_action::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! #[action(prefix = "todo/")]
//! enum TodoAction {
//!     Add(String),
//!     ClearCompleted,
//! }
//!
//! assert_eq!(TodoAction::ClearCompleted.name(), "todo/clear_completed");
//! assert_eq!(TodoAction::tags(), &["todo/add", "todo/clear_completed"]);
//! ```

// Re-export everything from core
pub use typed_action_core::*;

// Re-export derive macros
pub use typed_action_macros::Action;

/// Prelude for convenient imports
pub mod prelude {
    // Types and traits
    pub use typed_action_core::{
        Action, ActionSummary, EmptyPayload, GenericAction, PayloadContainer, PayloadFactory,
    };

    // Creators
    pub use typed_action_core::{
        action, action_with_payload, is_defined, payload, ActionCreator, Creator,
        PayloadActionCreator,
    };

    // Store
    pub use typed_action_core::{Middleware, NoopMiddleware, Reducer, Store};

    // Logging
    pub use typed_action_core::{ActionLogConfig, ActionLoggerConfig, ActionLoggerMiddleware};

    // Derive macros
    pub use typed_action_macros::Action;
}

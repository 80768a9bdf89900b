//! Action creators: factories bound to a single tag
//!
//! A creator is declared once, usually as a `const`, and then called every
//! time the action is needed:
//!
//! ```
//! use typed_action_core::{action, action_with_payload, payload, ActionCreator, PayloadActionCreator};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Status {
//!     status: bool,
//! }
//!
//! const RESET: ActionCreator = action("reset");
//! const SET_STATUS: PayloadActionCreator<Status> =
//!     action_with_payload("set_status", payload::<Status>());
//!
//! assert_eq!(RESET.create().action_type(), "reset");
//!
//! let set = SET_STATUS.create(Status { status: true });
//! assert_eq!(set.action_type(), "set_status");
//! assert_eq!(set.payload(), &Status { status: true });
//! ```

use std::fmt;

use crate::action::{Action, EmptyPayload, GenericAction};
use crate::payload::PayloadFactory;

/// Creates `{type, payload: {}}` actions for one tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionCreator {
    tag: &'static str,
}

impl ActionCreator {
    /// Bind a creator to `tag`
    pub const fn new(tag: &'static str) -> Self {
        Self { tag }
    }

    /// Bind a creator to `tag`, with or without a payload factory
    ///
    /// This is the single-entry form of [`action`] and [`action_with_payload`]
    /// for callers that only know at runtime whether a payload is carried.
    pub fn from_optional<P>(tag: &'static str, factory: Option<PayloadFactory<P>>) -> Creator<P> {
        match factory {
            Some(factory) => Creator::WithPayload(PayloadActionCreator::new(tag, factory)),
            None => Creator::NoPayload(Self::new(tag)),
        }
    }

    /// Upgrade into a creator that carries a payload, keeping the tag
    pub const fn with_payload<P>(self, factory: PayloadFactory<P>) -> PayloadActionCreator<P> {
        PayloadActionCreator::new(self.tag, factory)
    }

    /// The tag every created action carries
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Create a fresh action with an empty payload
    pub fn create(&self) -> GenericAction<EmptyPayload> {
        GenericAction::new(self.tag, EmptyPayload)
    }

    /// Whether `action` carries this creator's tag
    pub fn matches<A: Action>(&self, action: &A) -> bool {
        action.name() == self.tag
    }

    /// Turn the creator into a plain zero-argument closure
    pub fn into_fn(self) -> impl Fn() -> GenericAction<EmptyPayload> + Copy + Send + Sync {
        move || self.create()
    }
}

/// Creates `{type, payload}` actions for one tag and payload type
pub struct PayloadActionCreator<P> {
    tag: &'static str,
    factory: PayloadFactory<P>,
}

// Manual impls: a function pointer is Copy for every P, so no bounds on P.
impl<P> Clone for PayloadActionCreator<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for PayloadActionCreator<P> {}

impl<P> fmt::Debug for PayloadActionCreator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayloadActionCreator")
            .field("tag", &self.tag)
            .field("payload", &std::any::type_name::<P>())
            .finish()
    }
}

impl<P> PayloadActionCreator<P> {
    /// Bind a creator to `tag` and a payload factory from [`payload`](fn@crate::payload)
    pub const fn new(tag: &'static str, factory: PayloadFactory<P>) -> Self {
        Self { tag, factory }
    }

    /// The tag every created action carries
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Create an action whose payload is exactly `payload`
    pub fn create(&self, payload: P) -> GenericAction<P> {
        let container = (self.factory)(payload);
        GenericAction::new(self.tag, container.into_inner())
    }

    /// Whether `action` carries this creator's tag
    pub fn matches<A: Action>(&self, action: &A) -> bool {
        action.name() == self.tag
    }

    /// Turn the creator into a plain one-argument closure
    pub fn into_fn(self) -> impl Fn(P) -> GenericAction<P> + Copy + Send + Sync {
        move |payload| self.create(payload)
    }
}

/// Either shape of creator, as chosen by [`ActionCreator::from_optional`]
pub enum Creator<P> {
    /// Zero-argument creator with an empty payload
    NoPayload(ActionCreator),
    /// One-argument creator carrying `P`
    WithPayload(PayloadActionCreator<P>),
}

impl<P> Clone for Creator<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Creator<P> {}

impl<P> fmt::Debug for Creator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Creator::NoPayload(c) => f.debug_tuple("NoPayload").field(c).finish(),
            Creator::WithPayload(c) => f.debug_tuple("WithPayload").field(c).finish(),
        }
    }
}

impl<P> Creator<P> {
    /// The tag every created action carries
    pub fn tag(&self) -> &'static str {
        match self {
            Creator::NoPayload(c) => c.tag(),
            Creator::WithPayload(c) => c.tag(),
        }
    }

    /// Whether this creator expects a payload argument
    pub fn takes_payload(&self) -> bool {
        matches!(self, Creator::WithPayload(_))
    }
}

/// Declare a creator for actions without a payload
///
/// Each call of [`ActionCreator::create`] returns a new
/// `{type: tag, payload: {}}` action.
pub const fn action(tag: &'static str) -> ActionCreator {
    ActionCreator::new(tag)
}

/// Declare a creator for actions carrying a `P` payload
///
/// ```
/// use typed_action_core::{action_with_payload, payload};
///
/// let select = action_with_payload("select", payload::<usize>());
/// assert_eq!(select.create(3).into_parts(), ("select", 3));
/// ```
pub const fn action_with_payload<P>(
    tag: &'static str,
    factory: PayloadFactory<P>,
) -> PayloadActionCreator<P> {
    PayloadActionCreator::new(tag, factory)
}

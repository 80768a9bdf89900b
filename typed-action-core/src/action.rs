//! Action records and the traits shared by every dispatchable action

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store
///
/// Actions represent intents to change state. They should be:
/// - Clone: Actions may be logged, replayed, or sent to multiple handlers
/// - Debug: For debugging and logging
/// - Send + 'static: For async dispatch across threads
///
/// [`GenericAction`] implements this trait by returning its tag. For
/// hand-written enums and structs, use `#[derive(Action)]` from
/// `typed-action-macros`.
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action tag for logging and filtering
    fn name(&self) -> &'static str;
}

/// Human-readable rendering of an action, used by the action log
pub trait ActionSummary: Action {
    /// One-line summary; defaults to the `Debug` output
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}

/// The payload of an action created without one: an empty record (`{}`)
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmptyPayload;

impl Debug for EmptyPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{}")
    }
}

/// A `{type, payload}` action record
///
/// Built by [`ActionCreator`](crate::ActionCreator) and
/// [`PayloadActionCreator`](crate::PayloadActionCreator). The record is
/// immutable: the tag and payload can be read or taken apart, but not
/// changed in place.
///
/// # Example
/// ```
/// use typed_action_core::{action, EmptyPayload};
///
/// let increment = action("increment").create();
/// assert_eq!(increment.action_type(), "increment");
/// assert_eq!(increment.payload(), &EmptyPayload);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenericAction<P> {
    tag: &'static str,
    payload: P,
}

impl<P> GenericAction<P> {
    /// Build an action directly from a tag and payload
    pub const fn new(tag: &'static str, payload: P) -> Self {
        Self { tag, payload }
    }

    /// The `type` field: the tag given to the creator, verbatim
    pub fn action_type(&self) -> &'static str {
        self.tag
    }

    /// The `payload` field
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Consume the action, keeping only the payload
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Consume the action into `(type, payload)`
    pub fn into_parts(self) -> (&'static str, P) {
        (self.tag, self.payload)
    }
}

impl<P: Clone + Debug + Send + 'static> Action for GenericAction<P> {
    fn name(&self) -> &'static str {
        self.tag
    }
}

/// Renders as `tag(payload)`, e.g. `set_status(Status { ok: true })` or `reset({})`.
impl<P: Clone + Debug + Send + 'static> ActionSummary for GenericAction<P> {
    fn summary(&self) -> String {
        format!("{}({:?})", self.tag, self.payload)
    }
}

//! Payload wrappers used to declare payload-carrying action creators

/// A value in transit from a payload factory to the action it ends up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayloadContainer<P> {
    payload: P,
}

impl<P> PayloadContainer<P> {
    /// Wrap a payload value unchanged
    pub const fn new(payload: P) -> Self {
        Self { payload }
    }

    /// Borrow the wrapped value
    pub fn get(&self) -> &P {
        &self.payload
    }

    /// Take the wrapped value back out
    pub fn into_inner(self) -> P {
        self.payload
    }
}

/// The callable returned by [`payload`]: wraps a value in a [`PayloadContainer`]
pub type PayloadFactory<P> = fn(P) -> PayloadContainer<P>;

/// Declare the payload type of an action creator
///
/// The returned factory performs no transformation; it only carries `P`
/// into [`action_with_payload`](crate::action_with_payload).
///
/// # Example
/// ```
/// use typed_action_core::payload;
///
/// let wrap = payload::<u32>();
/// assert_eq!(wrap(7).into_inner(), 7);
/// ```
pub const fn payload<P>() -> PayloadFactory<P> {
    PayloadContainer::new
}

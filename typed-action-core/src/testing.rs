//! Test utilities for code that emits actions
//!
//! - [`TestHarness`]: state plus an action channel for capturing emitted actions
//! - Assertion macros for verifying emitted actions by pattern or by tag
//!
//! # Example
//!
//! ```
//! use typed_action_core::testing::TestHarness;
//! use typed_action_core::{action, action_with_payload, assert_type_emitted, payload, GenericAction};
//!
//! let mut harness = TestHarness::<u32, GenericAction<u32>>::new(0);
//! let load = action_with_payload("page/load", payload::<u32>());
//!
//! harness.emit(load.create(1));
//! harness.emit(load.create(2));
//!
//! let emitted = harness.drain_emitted();
//! assert_type_emitted!(emitted, "page/load");
//! assert_eq!(emitted[1].payload(), &2);
//! ```

use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::Action;

/// Harness holding state under test and a channel of emitted actions
///
/// Handlers under test receive [`sender`](Self::sender) and send actions
/// into it; the test then drains and inspects them.
pub struct TestHarness<S, A: Action> {
    /// The state under test
    pub state: S,
    tx: mpsc::UnboundedSender<A>,
    rx: mpsc::UnboundedReceiver<A>,
    // Received but not yet drained; always older than anything still in `rx`
    pending: VecDeque<A>,
}

impl<S, A: Action> TestHarness<S, A> {
    pub fn new(state: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state,
            tx,
            rx,
            pending: VecDeque::new(),
        }
    }

    /// A sender to hand to the code under test
    pub fn sender(&self) -> mpsc::UnboundedSender<A> {
        self.tx.clone()
    }

    /// Emit an action as a handler would
    pub fn emit(&self, action: A) {
        // The harness owns the receiver, so the channel is never closed here.
        let _ = self.tx.send(action);
    }

    /// Take every emitted action, in emission order
    pub fn drain_emitted(&mut self) -> Vec<A> {
        self.receive_pending();
        self.pending.drain(..).collect()
    }

    /// Take only the actions carrying `tag`; the rest stay queued in order
    ///
    /// Actions sent concurrently through [`sender`](Self::sender) queue up
    /// behind the ones kept here.
    pub fn drain_type(&mut self, tag: &str) -> Vec<A> {
        self.receive_pending();
        let mut matching = Vec::new();
        self.pending.retain(|action| {
            if action.name() == tag {
                matching.push(action.clone());
                false
            } else {
                true
            }
        });
        matching
    }

    fn receive_pending(&mut self) {
        while let Ok(action) = self.rx.try_recv() {
            self.pending.push_back(action);
        }
    }

    /// Whether anything was emitted; drains the channel
    pub fn has_emitted(&mut self) -> bool {
        !self.drain_emitted().is_empty()
    }

    /// Whether an action carrying `tag` was emitted; drains only those
    pub fn has_type(&mut self, tag: &str) -> bool {
        !self.drain_type(tag).is_empty()
    }
}

impl<S: Default, A: Action> Default for TestHarness<S, A> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Assert that an action matching a pattern was emitted.
///
/// ```ignore
/// let actions = harness.drain_emitted();
/// assert_emitted!(actions, Msg::Select(3));
/// assert_emitted!(actions, a if a.action_type() == "todo/add");
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that no action matching a pattern was emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Find the first emitted action matching a pattern.
#[macro_export]
macro_rules! find_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().find(|a| matches!(a, $pattern $(if $guard)?))
    };
}

/// Count emitted actions matching a pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}

/// Assert that an action with the given tag was emitted.
///
/// ```ignore
/// assert_type_emitted!(actions, "todo/add");
/// ```
#[macro_export]
macro_rules! assert_type_emitted {
    ($actions:expr, $tag:expr) => {
        assert!(
            $actions.iter().any(|a| $crate::Action::name(a) == $tag),
            "Expected action with type `{}` to be emitted, but got: {:?}",
            $tag,
            $actions
        );
    };
}

/// Assert that no action with the given tag was emitted.
#[macro_export]
macro_rules! assert_type_not_emitted {
    ($actions:expr, $tag:expr) => {
        assert!(
            !$actions.iter().any(|a| $crate::Action::name(a) == $tag),
            "Expected NO action with type `{}` to be emitted, but got: {:?}",
            $tag,
            $actions
        );
    };
}

/// Count emitted actions with the given tag.
#[macro_export]
macro_rules! count_type {
    ($actions:expr, $tag:expr) => {
        $actions
            .iter()
            .filter(|a| $crate::Action::name(*a) == $tag)
            .count()
    };
}

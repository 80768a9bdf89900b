//! Centralized state store that consumes created actions

use crate::Action;
use std::marker::PhantomData;

/// A reducer function that handles actions and mutates state
///
/// Returns `true` if the state changed.
pub type Reducer<S, A> = fn(&mut S, A) -> bool;

/// State container with a Redux-like reducer and optional middleware
///
/// # Type Parameters
/// * `S` - The application state type
/// * `A` - The action type (must implement `Action`)
/// * `M` - Middleware run around every dispatch, [`NoopMiddleware`] by default
///
/// # Example
/// ```
/// use typed_action_core::{action, action_with_payload, payload, Action, GenericAction, Store};
///
/// #[derive(Clone, Debug)]
/// enum Msg {
///     Reset(GenericAction<typed_action_core::EmptyPayload>),
///     Add(GenericAction<i32>),
/// }
///
/// impl Action for Msg {
///     fn name(&self) -> &'static str {
///         match self {
///             Msg::Reset(a) => a.name(),
///             Msg::Add(a) => a.name(),
///         }
///     }
/// }
///
/// fn reducer(total: &mut i32, msg: Msg) -> bool {
///     match msg {
///         Msg::Reset(_) => std::mem::take(total) != 0,
///         Msg::Add(a) => {
///             *total += a.into_payload();
///             true
///         }
///     }
/// }
///
/// let add = action_with_payload("add", payload::<i32>());
/// let mut store = Store::new(0, reducer);
/// store.dispatch(Msg::Add(add.create(5)));
/// assert_eq!(*store.state(), 5);
///
/// assert!(store.dispatch(Msg::Reset(action("reset").create())));
/// assert_eq!(*store.state(), 0);
/// ```
pub struct Store<S, A: Action, M: Middleware<A> = NoopMiddleware> {
    state: S,
    reducer: Reducer<S, A>,
    middleware: M,
    _marker: PhantomData<A>,
}

impl<S, A: Action> Store<S, A> {
    /// Create a new store with initial state and reducer
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self::with_middleware(state, reducer, NoopMiddleware)
    }
}

impl<S, A: Action, M: Middleware<A>> Store<S, A, M> {
    /// Create a store whose dispatches pass through `middleware`
    pub fn with_middleware(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self {
            state,
            reducer,
            middleware,
            _marker: PhantomData,
        }
    }

    /// Replace the middleware, keeping state and reducer
    pub fn layer<N: Middleware<A>>(self, middleware: N) -> Store<S, A, N> {
        Store::with_middleware(self.state, self.reducer, middleware)
    }

    /// Dispatch an action through the middleware and reducer
    ///
    /// Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: A) -> bool {
        self.middleware.before(&action);
        let changed = (self.reducer)(&mut self.state, action.clone());
        self.middleware.after(&action, changed);
        changed
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get a mutable reference to the state, bypassing the reducer
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Take the state out of the store
    pub fn into_state(self) -> S {
        self.state
    }

    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    pub fn middleware_mut(&mut self) -> &mut M {
        &mut self.middleware
    }
}

/// Hooks run around every dispatch
pub trait Middleware<A: Action> {
    /// Called before the action reaches the reducer
    fn before(&mut self, action: &A);

    /// Called after the reducer ran
    fn after(&mut self, action: &A, state_changed: bool);
}

/// A middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Run a pair of middleware; `after` hooks run in reverse order
impl<A: Action, M1: Middleware<A>, M2: Middleware<A>> Middleware<A> for (M1, M2) {
    fn before(&mut self, action: &A) {
        self.0.before(action);
        self.1.before(action);
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        self.1.after(action, state_changed);
        self.0.after(action, state_changed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{action, action_with_payload, payload, ActionCreator, PayloadActionCreator};

    const TOGGLE: ActionCreator = action("todo/toggle");
    const RENAME: PayloadActionCreator<String> = action_with_payload("todo/rename", payload());

    #[derive(Default)]
    struct Todo {
        title: String,
        done: bool,
    }

    type TodoAction = crate::GenericAction<Option<String>>;

    fn reducer(state: &mut Todo, action: TodoAction) -> bool {
        if TOGGLE.matches(&action) {
            state.done = !state.done;
            return true;
        }
        if RENAME.matches(&action) {
            if let Some(title) = action.into_payload() {
                state.title = title;
                return true;
            }
        }
        false
    }

    fn toggle() -> TodoAction {
        crate::GenericAction::new(TOGGLE.tag(), None)
    }

    fn rename(title: &str) -> TodoAction {
        let (tag, title) = RENAME.create(title.to_string()).into_parts();
        crate::GenericAction::new(tag, Some(title))
    }

    #[test]
    fn test_store_dispatch() {
        let mut store = Store::new(Todo::default(), reducer);

        assert!(store.dispatch(toggle()));
        assert!(store.state().done);

        assert!(store.dispatch(rename("write docs")));
        assert_eq!(store.state().title, "write docs");
    }

    #[test]
    fn test_store_unknown_action() {
        let mut store = Store::new(Todo::default(), reducer);

        assert!(!store.dispatch(crate::GenericAction::new("todo/archive", None)));
        assert!(!store.state().done);
    }

    #[test]
    fn test_store_state_mut() {
        let mut store = Store::new(Todo::default(), reducer);

        store.state_mut().title = "seeded".into();
        assert_eq!(store.into_state().title, "seeded");
    }

    #[derive(Default)]
    struct CountingMiddleware {
        before_count: usize,
        changed_count: usize,
    }

    impl<A: Action> Middleware<A> for CountingMiddleware {
        fn before(&mut self, _action: &A) {
            self.before_count += 1;
        }

        fn after(&mut self, _action: &A, state_changed: bool) {
            if state_changed {
                self.changed_count += 1;
            }
        }
    }

    #[test]
    fn test_store_with_middleware() {
        let mut store =
            Store::with_middleware(Todo::default(), reducer, CountingMiddleware::default());

        store.dispatch(toggle());
        store.dispatch(crate::GenericAction::new("todo/archive", None));

        assert_eq!(store.middleware().before_count, 2);
        assert_eq!(store.middleware().changed_count, 1);
    }

    #[test]
    fn test_layer_pair() {
        let mut store = Store::new(Todo::default(), reducer).layer((
            CountingMiddleware::default(),
            CountingMiddleware::default(),
        ));

        store.dispatch(toggle());
        store.dispatch(crate::GenericAction::new("todo/archive", None));

        let (first, second) = store.middleware();
        assert_eq!((first.before_count, first.changed_count), (2, 1));
        assert_eq!((second.before_count, second.changed_count), (2, 1));
        assert!(store.state().done);
    }
}

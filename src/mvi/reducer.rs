//! Reducer trait and closure adapter.

use std::marker::PhantomData;

use super::action::Action;
use super::state::State;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, &Action) -> State. Actions the
/// reducer does not handle must return the state unchanged, so that
/// independent reducers can be combined.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    fn reduce(&self, state: Self::State, action: &Self::Action) -> Self::State;
}

impl<R: Reducer + ?Sized> Reducer for Box<R> {
    type State = R::State;
    type Action = R::Action;

    fn reduce(&self, state: Self::State, action: &Self::Action) -> Self::State {
        (**self).reduce(state, action)
    }
}

/// Reducer backed by a plain function or closure.
///
/// Created with [`from_fn`].
pub struct FnReducer<S, A, F> {
    f: F,
    _marker: PhantomData<fn(S, &A) -> S>,
}

/// Wrap a function `(State, &Action) -> State` as a [`Reducer`].
pub fn from_fn<S, A, F>(f: F) -> FnReducer<S, A, F>
where
    S: State,
    A: Action,
    F: Fn(S, &A) -> S,
{
    FnReducer {
        f,
        _marker: PhantomData,
    }
}

impl<S, A, F> Reducer for FnReducer<S, A, F>
where
    S: State,
    A: Action,
    F: Fn(S, &A) -> S,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: S, action: &A) -> S {
        (self.f)(state, action)
    }
}

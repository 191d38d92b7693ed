//! Reducer combinators: `Combine` and `Pullback`.
//!
//! Feature reducers are written against the smallest state they need
//! (a bare counter, a projection of the app state). `Pullback` lifts
//! them onto the global state through a [`Lens`], and `Combine` runs a
//! list of reducers over the same state one after another.

use std::fmt;

use super::action::Action;
use super::reducer::Reducer;
use super::state::State;

/// Runs every constituent reducer, in the order they were added,
/// against the same state.
pub struct Combine<S: State, A: Action> {
    reducers: Vec<Box<dyn Reducer<State = S, Action = A>>>,
}

impl<S: State, A: Action> Combine<S, A> {
    pub fn new() -> Self {
        Self {
            reducers: Vec::new(),
        }
    }

    /// Append a reducer. It runs after every reducer already added.
    pub fn with<R>(mut self, reducer: R) -> Self
    where
        R: Reducer<State = S, Action = A> + 'static,
    {
        self.reducers.push(Box::new(reducer));
        self
    }

    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S: State, A: Action> Default for Combine<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Action> Reducer for Combine<S, A> {
    type State = S;
    type Action = A;

    fn reduce(&self, state: S, action: &A) -> S {
        self.reducers
            .iter()
            .fold(state, |state, reducer| reducer.reduce(state, action))
    }
}

impl<S: State, A: Action> fmt::Debug for Combine<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combine")
            .field("reducers", &self.reducers.len())
            .finish()
    }
}

/// Build a [`Combine`] from a list of reducers.
///
/// ```
/// use prime_counter::combine;
/// use prime_counter::mvi::{from_fn, Reducer};
///
/// #[derive(Debug)]
/// struct Tick;
/// impl prime_counter::mvi::Action for Tick {}
///
/// let reducer = combine!(
///     from_fn(|n: i64, _: &Tick| n + 1),
///     from_fn(|n: i64, _: &Tick| n * 10),
/// );
/// assert_eq!(reducer.reduce(1, &Tick), 20);
/// ```
#[macro_export]
macro_rules! combine {
    ($($reducer:expr),+ $(,)?) => {
        $crate::mvi::Combine::new()$(.with($reducer))+
    };
}

/// Getter/setter pair focusing a `Local` slice inside a `Global` state.
///
/// `set(global, get(&global))` must return a value equal to `global`,
/// otherwise a pullback through this lens drops unrelated fields.
pub struct Lens<G, L> {
    get: fn(&G) -> L,
    set: fn(G, L) -> G,
}

impl<G, L> Lens<G, L> {
    pub const fn new(get: fn(&G) -> L, set: fn(G, L) -> G) -> Self {
        Self { get, set }
    }

    pub fn get(&self, global: &G) -> L {
        (self.get)(global)
    }

    pub fn set(&self, global: G, local: L) -> G {
        (self.set)(global, local)
    }
}

impl<G, L> Clone for Lens<G, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G, L> Copy for Lens<G, L> {}

impl<G, L> fmt::Debug for Lens<G, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lens").finish_non_exhaustive()
    }
}

/// A reducer over `Local` state lifted to operate on `Global` state.
///
/// Reads the slice out through the lens, runs the local reducer with the
/// unchanged action, then writes the slice back.
pub struct Pullback<R: Reducer, G> {
    reducer: R,
    lens: Lens<G, R::State>,
}

impl<R: Reducer, G: State> Pullback<R, G> {
    pub fn new(reducer: R, lens: Lens<G, R::State>) -> Self {
        Self { reducer, lens }
    }
}

impl<R: Reducer, G: State> Reducer for Pullback<R, G> {
    type State = G;
    type Action = R::Action;

    fn reduce(&self, state: G, action: &R::Action) -> G {
        let local = self.lens.get(&state);
        let local = self.reducer.reduce(local, action);
        self.lens.set(state, local)
    }
}

/// Method-style combinators available on every reducer.
pub trait ReducerExt: Reducer + Sized {
    /// Lift this reducer onto a larger state through `lens`.
    fn pullback<G: State>(self, lens: Lens<G, Self::State>) -> Pullback<Self, G> {
        Pullback::new(self, lens)
    }
}

impl<R: Reducer> ReducerExt for R {}

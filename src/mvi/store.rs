//! Store: the single owner of application state.

use std::fmt;

use super::reducer::Reducer;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<S> = Box<dyn FnMut(&S)>;

/// Holds the current state and the reducer that advances it.
///
/// All mutation goes through [`Store::send`]. After the reducer runs,
/// every observer is called with the new state before `send` returns.
/// `send` takes `&mut self`, so neither a reducer nor an observer can
/// dispatch another action while one is being applied.
pub struct Store<R: Reducer> {
    reducer: R,
    state: R::State,
    observers: Vec<(SubscriptionId, Observer<R::State>)>,
    next_subscription: u64,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial_state: R::State, reducer: R) -> Self {
        Self {
            reducer,
            state: initial_state,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Latest state.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Apply `action` through the reducer and publish the result.
    pub fn send(&mut self, action: R::Action) {
        tracing::debug!(?action, "dispatching action");
        self.state = self.reducer.reduce(std::mem::take(&mut self.state), &action);
        self.publish();
    }

    /// Register an observer.
    ///
    /// The observer is called once with the current state right away,
    /// then after every dispatched action.
    pub fn subscribe<F>(&mut self, mut observer: F) -> SubscriptionId
    where
        F: FnMut(&R::State) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;

        observer(&self.state);
        self.observers.push((id, Box::new(observer)));
        tracing::debug!(subscription = id.0, "observer subscribed");
        id
    }

    /// Remove an observer. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        let removed = self.observers.len() != before;
        if removed {
            tracing::debug!(subscription = id.0, "observer unsubscribed");
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    fn publish(&mut self) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.state);
        }
    }
}

impl<R: Reducer> fmt::Debug for Store<R>
where
    R::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

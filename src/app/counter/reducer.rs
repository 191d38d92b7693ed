//! Reducer for the counter.

use crate::app::AppAction;
use crate::mvi::Reducer;

use super::action::CounterAction;

/// Operates on the count alone; lifted onto `AppState` with a pullback.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = i64;
    type Action = AppAction;

    fn reduce(&self, count: i64, action: &AppAction) -> i64 {
        match action {
            AppAction::Counter(CounterAction::DecrTapped) => count.saturating_sub(1),
            AppAction::Counter(CounterAction::IncrTapped) => count.saturating_add(1),
            _ => count,
        }
    }
}

//! Reducer for the prime modal.

use crate::app::{Activity, ActivityKind, AppAction, AppState};
use crate::mvi::Reducer;

use super::action::PrimeModalAction;

/// Needs both the count and the favorites, so it runs on the whole
/// `AppState` without a pullback.
pub struct PrimeModalReducer;

impl Reducer for PrimeModalReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(&self, mut state: AppState, action: &AppAction) -> AppState {
        match action {
            AppAction::PrimeModal(PrimeModalAction::SaveFavoritePrimeTapped) => {
                let prime = state.count;
                state.favorite_primes.push(prime);
                state
                    .activity_feed
                    .push(Activity::now(ActivityKind::AddedFavoritePrime(prime)));
                state
            }
            AppAction::PrimeModal(PrimeModalAction::RemoveFavoritePrimeTapped) => {
                let prime = state.count;
                state.favorite_primes.retain(|&p| p != prime);
                state
                    .activity_feed
                    .push(Activity::now(ActivityKind::RemovedFavoritePrime(prime)));
                state
            }
            _ => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::CounterAction;

    fn kinds(state: &AppState) -> Vec<ActivityKind> {
        state.activity_feed.iter().map(|a| a.kind).collect()
    }

    #[test]
    fn save_appends_count_and_activity() {
        let state = AppState {
            count: 5,
            favorite_primes: vec![2],
            ..AppState::default()
        };
        let state =
            PrimeModalReducer.reduce(state, &PrimeModalAction::SaveFavoritePrimeTapped.into());
        assert_eq!(state.favorite_primes, vec![2, 5]);
        assert_eq!(kinds(&state), vec![ActivityKind::AddedFavoritePrime(5)]);
    }

    #[test]
    fn remove_drops_every_occurrence() {
        let state = AppState {
            count: 3,
            favorite_primes: vec![3, 2, 3, 5],
            ..AppState::default()
        };
        let state =
            PrimeModalReducer.reduce(state, &PrimeModalAction::RemoveFavoritePrimeTapped.into());
        assert_eq!(state.favorite_primes, vec![2, 5]);
        assert_eq!(kinds(&state), vec![ActivityKind::RemovedFavoritePrime(3)]);
    }

    #[test]
    fn counter_actions_are_ignored() {
        let state = AppState {
            count: 3,
            favorite_primes: vec![3],
            ..AppState::default()
        };
        let next = PrimeModalReducer.reduce(state.clone(), &CounterAction::IncrTapped.into());
        assert_eq!(next, state);
    }
}

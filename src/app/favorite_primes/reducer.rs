//! Reducer for the favorite primes list.

use crate::app::{Activity, ActivityKind, AppAction};
use crate::mvi::Reducer;

use super::action::FavoritePrimesAction;
use super::state::FavoritePrimesState;

/// Operates on the `FavoritePrimesState` projection; lifted onto
/// `AppState` with a pullback.
pub struct FavoritePrimesReducer;

impl Reducer for FavoritePrimesReducer {
    type State = FavoritePrimesState;
    type Action = AppAction;

    fn reduce(&self, mut state: FavoritePrimesState, action: &AppAction) -> FavoritePrimesState {
        let AppAction::FavoritePrimes(FavoritePrimesAction::DeleteFavoritePrimes(indices)) = action
        else {
            return state;
        };

        let len = state.favorite_primes.len();
        let (in_range, out_of_range): (Vec<usize>, Vec<usize>) =
            indices.iter().copied().partition(|&index| index < len);
        if !out_of_range.is_empty() {
            tracing::warn!(
                ?out_of_range,
                len,
                "skipping favorite prime indices past the end of the list"
            );
        }

        // Values are read before anything is removed; removal runs from the
        // highest index down so no pending index shifts.
        let removed: Vec<i64> = in_range
            .iter()
            .map(|&index| state.favorite_primes[index])
            .collect();
        for &index in in_range.iter().rev() {
            state.favorite_primes.remove(index);
        }

        state.activity_feed.extend(
            removed
                .into_iter()
                .map(|prime| Activity::now(ActivityKind::RemovedFavoritePrime(prime))),
        );
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{CounterAction, PrimeModalAction};

    fn with_primes(primes: &[i64]) -> FavoritePrimesState {
        FavoritePrimesState {
            favorite_primes: primes.to_vec(),
            activity_feed: Vec::new(),
        }
    }

    fn delete(indices: &[usize]) -> AppAction {
        FavoritePrimesAction::DeleteFavoritePrimes(indices.iter().copied().collect()).into()
    }

    fn removed(state: &FavoritePrimesState) -> Vec<ActivityKind> {
        state.activity_feed.iter().map(|a| a.kind).collect()
    }

    #[test]
    fn deletes_requested_entries_not_shifted_ones() {
        let state = FavoritePrimesReducer.reduce(with_primes(&[2, 3, 5, 7]), &delete(&[1, 3]));
        assert_eq!(state.favorite_primes, vec![2, 5]);
        assert_eq!(
            removed(&state),
            vec![
                ActivityKind::RemovedFavoritePrime(3),
                ActivityKind::RemovedFavoritePrime(7),
            ]
        );
    }

    #[test]
    fn deletes_adjacent_entries() {
        let state = FavoritePrimesReducer.reduce(with_primes(&[2, 3, 5, 7]), &delete(&[0, 1, 2]));
        assert_eq!(state.favorite_primes, vec![7]);
        assert_eq!(state.activity_feed.len(), 3);
    }

    #[test]
    fn out_of_range_indices_are_skipped() {
        let state = FavoritePrimesReducer.reduce(with_primes(&[2, 3]), &delete(&[1, 4]));
        assert_eq!(state.favorite_primes, vec![2]);
        assert_eq!(removed(&state), vec![ActivityKind::RemovedFavoritePrime(3)]);
    }

    #[test]
    fn empty_index_set_is_noop() {
        let state = FavoritePrimesReducer.reduce(with_primes(&[2, 3]), &delete(&[]));
        assert_eq!(state, with_primes(&[2, 3]));
    }

    #[test]
    fn other_features_are_ignored() {
        let original = with_primes(&[2, 3]);
        for action in [
            AppAction::from(CounterAction::IncrTapped),
            AppAction::from(PrimeModalAction::SaveFavoritePrimeTapped),
            AppAction::from(PrimeModalAction::RemoveFavoritePrimeTapped),
        ] {
            assert_eq!(FavoritePrimesReducer.reduce(original.clone(), &action), original);
        }
    }
}

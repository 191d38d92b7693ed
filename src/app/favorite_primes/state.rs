//! Projection of `AppState` used by the favorite primes feature.

use serde::Serialize;

use crate::app::{Activity, AppState};
use crate::mvi::{Lens, State};

/// The two `AppState` fields the favorite primes list reads and writes.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FavoritePrimesState {
    pub favorite_primes: Vec<i64>,
    pub activity_feed: Vec<Activity>,
}

impl State for FavoritePrimesState {}

impl FavoritePrimesState {
    /// Lens copying both fields out of `AppState` and back in.
    pub fn lens() -> Lens<AppState, FavoritePrimesState> {
        Lens::new(FavoritePrimesState::from_app, FavoritePrimesState::write_back)
    }

    fn from_app(state: &AppState) -> FavoritePrimesState {
        FavoritePrimesState {
            favorite_primes: state.favorite_primes.clone(),
            activity_feed: state.activity_feed.clone(),
        }
    }

    fn write_back(state: AppState, local: FavoritePrimesState) -> AppState {
        AppState {
            favorite_primes: local.favorite_primes,
            activity_feed: local.activity_feed,
            ..state
        }
    }
}

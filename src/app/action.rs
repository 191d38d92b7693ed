//! Application-wide action type.

use crate::mvi::Action;

use super::counter::CounterAction;
use super::favorite_primes::FavoritePrimesAction;
use super::prime_modal::PrimeModalAction;

/// Every action the application store accepts, grouped by feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    Counter(CounterAction),
    PrimeModal(PrimeModalAction),
    FavoritePrimes(FavoritePrimesAction),
}

impl Action for AppAction {}

impl From<CounterAction> for AppAction {
    fn from(action: CounterAction) -> Self {
        AppAction::Counter(action)
    }
}

impl From<PrimeModalAction> for AppAction {
    fn from(action: PrimeModalAction) -> Self {
        AppAction::PrimeModal(action)
    }
}

impl From<FavoritePrimesAction> for AppAction {
    fn from(action: FavoritePrimesAction) -> Self {
        AppAction::FavoritePrimes(action)
    }
}

//! The counter / favorite primes application.
//!
//! Each feature lives in its own module with an action enum and a
//! reducer written against the narrowest state it needs:
//! - `counter` - the bare count
//! - `prime_modal` - the whole `AppState`
//! - `favorite_primes` - the `FavoritePrimesState` projection
//!
//! [`app_reducer`] lifts and combines them into one reducer over `AppState`.

mod action;
pub mod counter;
pub mod favorite_primes;
pub mod prime_modal;
mod state;

pub use action::AppAction;
pub use counter::{CounterAction, CounterReducer};
pub use favorite_primes::{FavoritePrimesAction, FavoritePrimesReducer, FavoritePrimesState};
pub use prime_modal::{PrimeModalAction, PrimeModalReducer};
pub use state::{Activity, ActivityKind, AppState, User};

use crate::combine;
use crate::mvi::{Combine, ReducerExt, Store};

/// Reducer over the whole application state.
pub type AppReducer = Combine<AppState, AppAction>;

/// Store holding the application state.
pub type AppStore = Store<AppReducer>;

/// Counter, prime modal and favorite primes reducers, in that order.
pub fn app_reducer() -> AppReducer {
    combine!(
        CounterReducer.pullback(AppState::count_lens()),
        PrimeModalReducer,
        FavoritePrimesReducer.pullback(FavoritePrimesState::lens()),
    )
}

/// Store over `initial_state` driven by [`app_reducer`].
pub fn app_store(initial_state: AppState) -> AppStore {
    Store::new(initial_state, app_reducer())
}

//! Favorite primes feature: the list screen with swipe-to-delete.
//!
//! # Architecture
//!
//! - `state.rs` - `FavoritePrimesState`, a projection of `AppState`
//! - `action.rs` - list edits
//! - `reducer.rs` - deletions, recorded in the activity feed

mod action;
mod reducer;
mod state;

pub use action::FavoritePrimesAction;
pub use reducer::FavoritePrimesReducer;
pub use state::FavoritePrimesState;

//! Prime modal feature: save or remove the current count as a favorite.

mod action;
mod reducer;

pub use action::PrimeModalAction;
pub use reducer::PrimeModalReducer;

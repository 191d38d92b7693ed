//! Unidirectional state-management primitives.
//!
//! This module provides the store, the reducer trait and the combinators
//! used to assemble feature reducers into one application reducer.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Store::send ──→ Reducer ──→ State ──→ Observers
//!    ↑                                                │
//!    └────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: plain value describing everything the app shows
//! - **Action**: user intents or system events
//! - **Reducer**: pure function `(State, &Action) -> State`
//! - **Combine / Pullback**: build one reducer out of many feature reducers

mod action;
mod compose;
mod reducer;
mod state;
mod store;

pub use action::Action;
pub use compose::{Combine, Lens, Pullback, ReducerExt};
pub use reducer::{from_fn, FnReducer, Reducer};
pub use state::State;
pub use store::{Store, SubscriptionId};

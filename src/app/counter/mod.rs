//! Counter feature: increments and decrements the bare count.

mod action;
mod reducer;

pub use action::CounterAction;
pub use reducer::CounterReducer;

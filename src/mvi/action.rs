//! Base trait for actions dispatched into a store.

use std::fmt::Debug;

/// Marker trait for action values.
///
/// Actions represent:
/// - User intents (button taps, list edits)
/// - System events (lookup results, timers)
///
/// Actions are processed by reducers to produce new states. `Debug` is
/// required so every dispatch can be traced.
pub trait Action: Debug + 'static {}

//! Base trait for state held by a store or handled by a reducer.

/// Marker trait for state values.
///
/// States should be:
/// - Plain values (Clone to copy a slice out of a larger state)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
///
/// `Default` lets the store move the state into the reducer and back
/// without cloning it.
pub trait State: Clone + PartialEq + Default + 'static {}

/// A bare counter is a valid state slice.
impl State for i64 {}

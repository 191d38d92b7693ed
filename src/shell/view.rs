//! View-local state of the shell.
//!
//! This state belongs to the presentation, not to the store: it is
//! changed directly by the shell and never goes through a reducer.

/// Answer of a finished nth-prime lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeAlert {
    /// The `n` that was asked for.
    pub n: i64,
    pub prime: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterViewState {
    pub prime_modal_shown: bool,
    /// A lookup is running; further lookups are refused until it resolves.
    pub nth_prime_in_flight: bool,
    /// Latest lookup answer, cleared when a new lookup starts.
    pub alert: Option<PrimeAlert>,
}

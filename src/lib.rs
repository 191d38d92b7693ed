//! Counter and favorite primes, built on a unidirectional store.
//!
//! - [`mvi`] - store, reducer trait, `combine` / `pullback` combinators
//! - [`app`] - application state, actions and feature reducers
//! - [`primes`] - primality, nth prime lookup, ordinals
//! - [`shell`] - text front end driving the store
//! - [`config`], [`logging`] - ambient setup for the binary

pub mod mvi;

pub mod app;
pub mod config;
pub mod logging;
pub mod primes;
pub mod shell;

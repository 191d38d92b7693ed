//! Shared test utilities and stub services.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use std::sync::Arc;

use prime_counter::app::{ActivityKind, AppState};
use prime_counter::primes::{NthPrimeFuture, NthPrimeService};

pub type SpyBuffer = Arc<Mutex<Vec<u8>>>;

pub fn spy_buffer() -> SpyBuffer {
    Arc::new(Mutex::new(Vec::new()))
}

/// Everything written to the buffer so far, lossily decoded.
pub fn spy_text(buffer: &SpyBuffer) -> String {
    String::from_utf8_lossy(&buffer.lock()).into_owned()
}

/// Activity kinds in feed order, ignoring timestamps.
pub fn activity_kinds(state: &AppState) -> Vec<ActivityKind> {
    state.activity_feed.iter().map(|a| a.kind).collect()
}

/// Answers every lookup with the same value.
pub struct FixedNthPrime(pub Option<i64>);

impl NthPrimeService for FixedNthPrime {
    fn nth_prime(&self, _n: i64) -> NthPrimeFuture {
        let answer = self.0;
        Box::pin(async move { answer })
    }
}

/// Never resolves.
pub struct PendingNthPrime;

impl NthPrimeService for PendingNthPrime {
    fn nth_prime(&self, _n: i64) -> NthPrimeFuture {
        Box::pin(std::future::pending())
    }
}

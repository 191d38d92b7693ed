//! Asynchronous nth-prime lookup.

use std::future::Future;
use std::pin::Pin;

use super::nth_prime;

/// Future resolving to the looked-up prime, or `None` when there is no result.
pub type NthPrimeFuture = Pin<Box<dyn Future<Output = Option<i64>> + Send + 'static>>;

/// Looks up the `n`th prime without blocking the caller.
///
/// Failures and refusals are reported as `None`; callers that need a
/// deadline wrap the future in a timeout themselves.
pub trait NthPrimeService: Send + Sync {
    fn nth_prime(&self, n: i64) -> NthPrimeFuture;
}

/// Computes the answer with a sieve on tokio's blocking pool.
#[derive(Debug, Clone)]
pub struct LocalNthPrime {
    max_n: i64,
}

impl LocalNthPrime {
    /// Lookups for `n` above `max_n` resolve to `None` without computing.
    pub fn new(max_n: u64) -> Self {
        Self {
            max_n: i64::try_from(max_n).unwrap_or(i64::MAX),
        }
    }
}

impl NthPrimeService for LocalNthPrime {
    fn nth_prime(&self, n: i64) -> NthPrimeFuture {
        let max_n = self.max_n;
        Box::pin(async move {
            if n > max_n {
                tracing::info!(n, max_n, "nth prime request above configured limit");
                return None;
            }
            match tokio::task::spawn_blocking(move || nth_prime(n)).await {
                Ok(prime) => prime,
                Err(e) => {
                    tracing::warn!(n, error = %e, "nth prime task failed");
                    None
                }
            }
        })
    }
}

//! Prime number helpers used by the counter screens.

mod ordinal;
mod service;

pub use ordinal::ordinal;
pub use service::{LocalNthPrime, NthPrimeFuture, NthPrimeService};

/// Trial division up to the integer square root.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    let mut divisor = 2;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// The `n`th prime, 1-based (`nth_prime(1) == Some(2)`).
///
/// Returns `None` for `n <= 0`.
pub fn nth_prime(n: i64) -> Option<i64> {
    let n = usize::try_from(n).ok().filter(|&n| n > 0)?;
    let limit = sieve_limit(n);

    let mut composite = vec![false; limit + 1];
    let mut found = 0;
    for candidate in 2..=limit {
        if composite[candidate] {
            continue;
        }
        found += 1;
        if found == n {
            return i64::try_from(candidate).ok();
        }
        let mut multiple = candidate.saturating_mul(candidate);
        while multiple <= limit {
            composite[multiple] = true;
            multiple += candidate;
        }
    }
    None
}

/// Upper bound for the `n`th prime: `n (ln n + ln ln n)` holds for `n >= 6`.
fn sieve_limit(n: usize) -> usize {
    if n < 6 {
        return 15;
    }
    let n = n as f64;
    (n * (n.ln() + n.ln().ln())).ceil() as usize
}

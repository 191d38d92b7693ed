use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub nth_prime: NthPrimeConfig,
}

/// Initial values for the counter screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Count the store starts from (default: 0).
    #[serde(default)]
    pub initial_count: i64,
}

/// Settings for the "what is the nth prime?" lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NthPrimeConfig {
    /// Largest `n` the lookup will answer (default: 100000).
    #[serde(default = "default_max_n")]
    pub max_n: u64,
    /// Lookup deadline in milliseconds (default: 5000).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl NthPrimeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_max_n() -> u64 {
    100_000
}

fn default_timeout_ms() -> u64 {
    5_000
}

impl Default for NthPrimeConfig {
    fn default() -> Self {
        Self {
            max_n: default_max_n(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

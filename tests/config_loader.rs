use prime_counter::config::{Config, ConfigError, CounterConfig, NthPrimeConfig};
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.counter.initial_count, 0);
    assert_eq!(config.nth_prime.max_n, 100_000);
    assert_eq!(config.nth_prime.timeout_ms, 5_000);
    assert_eq!(config.nth_prime.timeout(), Duration::from_secs(5));
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("prime-counter/config.toml"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_file_is_parsed() {
    let (_dir, path) = write_config(
        r#"
[counter]
initial_count = -4

[nth_prime]
max_n = 500
timeout_ms = 250
"#,
    );
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(
        config,
        Config {
            counter: CounterConfig { initial_count: -4 },
            nth_prime: NthPrimeConfig {
                max_n: 500,
                timeout_ms: 250,
            },
        }
    );
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config("[nth_prime]\nmax_n = 42\n");
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.counter.initial_count, 0);
    assert_eq!(config.nth_prime.max_n, 42);
    assert_eq!(config.nth_prime.timeout_ms, 5_000);
}

#[test]
fn test_empty_file_is_default() {
    let (_dir, path) = write_config("");
    assert_eq!(Config::load_from(&path).expect("valid"), Config::default());
}

#[test]
fn test_validation_rejects_zero_limit() {
    let (_dir, path) = write_config("[nth_prime]\nmax_n = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("max_n"));
}

#[test]
fn test_validation_rejects_zero_timeout() {
    let mut config = Config::default();
    config.nth_prime.timeout_ms = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("timeout_ms"));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[counter\ninitial_count = 1\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = write_config("[counter]\ninitial_count = \"three\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

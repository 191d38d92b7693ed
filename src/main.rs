use anyhow::Context;
use clap::Parser;
use parking_lot::Mutex;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;

use prime_counter::app::AppState;
use prime_counter::config::Config;
use prime_counter::logging::init_tracing;
use prime_counter::primes::LocalNthPrime;
use prime_counter::shell::{Shell, HELP};

/// Counter with favorite primes, driven from the terminal.
#[derive(Debug, Parser)]
#[command(name = "prime-counter", version)]
struct Cli {
    /// Config file (default: ~/.config/prime-counter/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting count, overrides `counter.initial_count`.
    #[arg(long, allow_hyphen_values = true)]
    count: Option<i64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let initial_state = AppState {
        count: cli.count.unwrap_or(config.counter.initial_count),
        ..AppState::default()
    };
    let service = Arc::new(LocalNthPrime::new(config.nth_prime.max_n));
    let output = Arc::new(Mutex::new(io::stdout()));

    println!("{HELP}");
    let mut shell = Shell::new(initial_state, service, config.nth_prime.timeout(), output);
    shell
        .run(BufReader::new(tokio::io::stdin()))
        .await
        .context("shell input failed")?;
    Ok(())
}

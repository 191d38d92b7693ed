//! Text rendering of application state.

use std::fmt::Write as _;
use std::time::UNIX_EPOCH;

use crate::app::{ActivityKind, AppState};
use crate::primes::{is_prime, ordinal};

pub const HELP: &str = "\
commands:
  + | incr           increment the counter
  - | decr           decrement the counter
  prime              is the current count prime?
  save | remove      add / remove the count from favorites (prime modal open)
  close              close the prime modal
  nth                what is the nth prime for the current count?
  favorites          list favorite primes with their indices
  delete <i> [j..]   delete favorite primes by index
  feed               show the activity feed
  dump               print the state as JSON
  help               this text
  quit               exit";

/// One-line status shown after every state change.
pub fn summary(state: &AppState) -> String {
    let mut line = format!(
        "count: {} | favorite primes: {} | activity: {}",
        state.count,
        state.favorite_primes.len(),
        state.activity_feed.len()
    );
    if let Some(user) = &state.logged_in_user {
        let _ = write!(line, " | user: {}", user.name);
    }
    line
}

pub fn prime_modal(state: &AppState) -> String {
    let count = state.count;
    if !is_prime(count) {
        return format!("{count} is not prime :(");
    }
    if state.is_favorite(count) {
        format!("{count} is prime 🎉  ('remove' to remove from favorite primes)")
    } else {
        format!("{count} is prime 🎉  ('save' to save to favorite primes)")
    }
}

pub fn favorites(state: &AppState) -> String {
    if state.favorite_primes.is_empty() {
        return "no favorite primes yet".to_string();
    }
    state
        .favorite_primes
        .iter()
        .enumerate()
        .map(|(index, prime)| format!("  [{index}] {prime}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn feed(state: &AppState) -> String {
    if state.activity_feed.is_empty() {
        return "no activity yet".to_string();
    }
    state
        .activity_feed
        .iter()
        .map(|activity| {
            let secs = activity
                .timestamp
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            match activity.kind {
                ActivityKind::AddedFavoritePrime(prime) => format!("  {secs}  added {prime}"),
                ActivityKind::RemovedFavoritePrime(prime) => format!("  {secs}  removed {prime}"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn nth_prime_prompt(count: i64) -> String {
    format!("What is the {} prime?", ordinal(count))
}

pub fn nth_prime_answer(n: i64, prime: Option<i64>) -> String {
    match prime {
        Some(prime) => format!("The {} prime is {prime}", ordinal(n)),
        None => format!("No result for the {} prime", ordinal(n)),
    }
}

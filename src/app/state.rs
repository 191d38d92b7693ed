//! Application state.

use serde::Serialize;
use std::time::SystemTime;

use crate::mvi::{Lens, State};

/// Whole-application state held by the store.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AppState {
    pub count: i64,
    /// Insertion order is kept; duplicates are allowed.
    pub favorite_primes: Vec<i64>,
    pub logged_in_user: Option<User>,
    /// Append-only, oldest first.
    pub activity_feed: Vec<Activity>,
}

impl State for AppState {}

impl AppState {
    /// Lens focusing the counter value.
    pub fn count_lens() -> Lens<AppState, i64> {
        Lens::new(get_count, set_count)
    }

    pub fn is_favorite(&self, prime: i64) -> bool {
        self.favorite_primes.contains(&prime)
    }
}

fn get_count(state: &AppState) -> i64 {
    state.count
}

fn set_count(state: AppState, count: i64) -> AppState {
    AppState { count, ..state }
}

/// Record of a change to the favorite primes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub timestamp: SystemTime,
    pub kind: ActivityKind,
}

impl Activity {
    /// Activity stamped with the current time.
    pub fn now(kind: ActivityKind) -> Self {
        Self {
            timestamp: SystemTime::now(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityKind {
    AddedFavoritePrime(i64),
    RemovedFavoritePrime(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub bio: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let state = AppState::default();
        assert_eq!(state.count, 0);
        assert!(state.favorite_primes.is_empty());
        assert!(state.logged_in_user.is_none());
        assert!(state.activity_feed.is_empty());
    }

    #[test]
    fn count_lens_keeps_other_fields() {
        let state = AppState {
            count: 2,
            favorite_primes: vec![2, 3],
            logged_in_user: Some(User {
                id: 1,
                name: "Blob".to_string(),
                bio: "Blobbed around the world".to_string(),
            }),
            activity_feed: vec![Activity::now(ActivityKind::AddedFavoritePrime(2))],
        };

        let lens = AppState::count_lens();
        assert_eq!(lens.get(&state), 2);

        let updated = lens.set(state.clone(), 9);
        assert_eq!(updated.count, 9);
        assert_eq!(updated.favorite_primes, state.favorite_primes);
        assert_eq!(updated.logged_in_user, state.logged_in_user);
        assert_eq!(updated.activity_feed, state.activity_feed);
    }

    #[test]
    fn is_favorite_checks_membership() {
        let state = AppState {
            favorite_primes: vec![5, 7],
            ..AppState::default()
        };
        assert!(state.is_favorite(7));
        assert!(!state.is_favorite(11));
    }
}

use std::collections::BTreeSet;

/// Actions dispatched from the favorite primes list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritePrimesAction {
    /// Delete the entries at these positions of the list as it was shown.
    DeleteFavoritePrimes(BTreeSet<usize>),
}

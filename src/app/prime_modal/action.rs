/// Actions dispatched from the "is this prime?" modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimeModalAction {
    SaveFavoritePrimeTapped,
    RemoveFavoritePrimeTapped,
}

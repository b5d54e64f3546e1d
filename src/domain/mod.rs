pub mod listing;
pub mod tour;

pub use listing::Listing;
pub use tour::{Tour, ToursResponse};

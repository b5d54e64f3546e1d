mod client;
mod error;
pub mod panel;

pub use client::{HttpToursConnector, ToursApi, ToursConnector};
pub use error::ToursError;
pub use panel::{ToursPanel, ToursState, TOURS_LOAD_FAILED};

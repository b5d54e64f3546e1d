pub mod connection;
pub mod listings;

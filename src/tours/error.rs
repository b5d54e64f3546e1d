use thiserror::Error;

/// Why a tours request failed. Never shown to the seller as-is.
#[derive(Debug, Error)]
pub enum ToursError {
    #[error("tours client setup failed: {0}")]
    Client(String),
    #[error("tours request failed: {0}")]
    Network(String),
    #[error("tours backend answered {status}")]
    Status { status: u16 },
    #[error("tours payload malformed: {0}")]
    Decode(String),
}

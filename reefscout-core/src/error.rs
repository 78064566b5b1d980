use reefscout_client::ClientError;
use thiserror::Error;

/// Input rejected before any request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Search must contain at least {min} letters.")]
    TooShort { min: usize },
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Search request failed: {0}")]
    Backend(#[from] ClientError),
}

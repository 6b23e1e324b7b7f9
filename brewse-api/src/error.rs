use thiserror::Error;

/// Errors surfaced by catalog fetches.
///
/// Transport failures, non-2xx responses and body decode failures stay
/// distinguishable so logs can tell them apart.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Transport(reqwest::Error),

    #[error("Endpoint returned {0}")]
    Status(reqwest::StatusCode),

    #[error("Could not decode catalog response: {0}")]
    Decode(reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status(status)
        } else if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Transport(err)
        }
    }
}

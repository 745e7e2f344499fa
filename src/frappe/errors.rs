use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrappeError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Frappe returned HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Unexpected response body from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FrappeError {
    /// HTTP status for errors raised from a non-success response
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FrappeError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

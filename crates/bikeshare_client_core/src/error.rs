use thiserror::Error;

/// Failure of a backend or weather request.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("not logged in")]
    NotAuthenticated,

    #[error("invalid header value")]
    InvalidHeader,
}

/// Outcome of a single-shot position request that did not yield coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GeoError {
    #[error("location permission denied")]
    Denied,

    #[error("position unavailable: {0}")]
    Unavailable(String),

    #[error("geolocation not supported")]
    Unsupported,
}

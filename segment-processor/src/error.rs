use thiserror::Error;

/// Errors raised while fetching, building or writing a road network
#[derive(Error, Debug)]
pub enum Error {
    #[error("Place not found in geocoding index: {0}")]
    PlaceNotFound(String),
    #[error("No road network data available for: {0}")]
    NoNetworkData(String),
    #[cfg(feature = "reqwest")]
    #[error("Upstream service unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),
    #[error("Upstream service returned error {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("Invalid provider URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
    #[error("Malformed graph: {0}")]
    MalformedGraph(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

// Error taxonomy shared by the client, the series builder and the orchestrator
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    /// Connection failure, timeout or an unreadable response body.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status code from {url}: {status}")]
    RemoteStatus { url: String, status: String },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} not found")]
    NotFound(String),

    #[error("could not parse game date '{date}': {source}")]
    InvalidDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("tick count must be positive")]
    InvalidTickCount,
}

pub type StatsResult<T> = Result<T, StatsError>;

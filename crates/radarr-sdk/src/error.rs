use thiserror::Error;

#[derive(Debug, Error)]
pub enum RadarrError {
    /// Network, TLS or timeout failure reported by the HTTP client
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} failed with status {status}: {body}")]
    Status { status: u16, url: String, body: String },

    /// A field was present in the response but held a value of the wrong shape
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("endpoint '{template}' requires an id")]
    MissingPathId { template: &'static str },

    #[error("unrecognized {field} value '{value}'")]
    UnmappedStatus { field: &'static str, value: String },

    #[error("pagination stalled on page {page}: collected {collected} of {total} records")]
    PaginationStalled { page: u32, collected: usize, total: usize },

    #[error("pagination gave up after {pages} pages: collected {collected} of {total} records")]
    PaginationOverrun { pages: u32, collected: usize, total: usize },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RadarrError>;

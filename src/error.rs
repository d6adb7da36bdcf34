use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed with status {status}: {url}")]
    Fetch { status: u16, url: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("malformed requirement: {0:?}")]
    MalformedRequirement(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

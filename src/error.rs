use std::io;

use thiserror::Error;

/// Failures raised while discovering, fetching or storing minutes.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A date string matched none of the accepted formats. Fatal for discovery.
    #[error("no valid date format found for '{0}'")]
    DateParse(String),
    #[error("no 8-digit date embedded in link '{0}'")]
    MissingLinkDate(String),
    #[error("GET {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("invalid selector '{0}'")]
    Selector(String),
    #[error(transparent)]
    Pattern(#[from] regex::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;

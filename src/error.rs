use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("wikidata query failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("can't parse wikidata response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid date {value:?}: {source}")]
    Date {
        value: String,
        source: chrono::ParseError,
    },

    #[error("invalid sitelinks count {value:?}: {source}")]
    Sitelinks {
        value: String,
        source: ParseIntError,
    },

    #[error("couldn't write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

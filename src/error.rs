// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Everything that can go wrong between a configured collection and a
/// written `cards.json`.
///
/// Only [`ScrapeError::MissingNumber`] and [`ScrapeError::BadNumber`] can come
/// out of card assembly; every other card field falls back to a default.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("card number not found on page")]
    MissingNumber,

    #[error("unparseable card number {raw:?}")]
    BadNumber { raw: String },

    #[error("GET {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config: {0}")]
    Config(String),
}

impl ScrapeError {
    /// Errors that only affect one card; the fetch loop logs and moves on.
    pub fn is_per_card(&self) -> bool {
        matches!(
            self,
            ScrapeError::MissingNumber
                | ScrapeError::BadNumber { .. }
                | ScrapeError::Http { .. }
                | ScrapeError::HttpStatus { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_errors_are_per_card() {
        assert!(ScrapeError::MissingNumber.is_per_card());
        assert!(ScrapeError::BadNumber { raw: s!("abc") }.is_per_card());
        assert!(!ScrapeError::Config(s!("no collections")).is_per_card());
    }

    #[test]
    fn io_error_mentions_path() {
        let err = ScrapeError::Io {
            path: PathBuf::from("out/cards.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("out/cards.json"));
    }
}

// src/core/net.rs
//! Blocking HTTP GET, one request at a time.
//! No retries and no caching: a failed page is the caller's problem.

use std::time::Duration;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

/// Build the client once per run.
pub fn client() -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| ScrapeError::Http { url: s!(), source })
}

pub fn http_get(client: &reqwest::blocking::Client, url: &str) -> Result<String> {
    let http_err = |source| ScrapeError::Http { url: s!(url), source };

    let resp = client.get(url).send().map_err(http_err)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::HttpStatus { url: s!(url), status: status.as_u16() });
    }
    resp.text().map_err(http_err)
}

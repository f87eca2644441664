// src/config/options.rs
//! Run-time options chosen by the caller (CLI flags, tests).
//! Nothing here is global: every entry point takes the options it needs.

use std::path::PathBuf;

use super::consts::*;
use crate::specs::Site;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub site: Site,
    pub base_url: String,
    /// Collection codes to keep; empty means every configured collection.
    pub collections: Vec<String>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            site: Site::Serebii,
            base_url: s!(DEFAULT_BASE_URL),
            collections: Vec::new(),
        }
    }
}

impl ScrapeOptions {
    pub fn wants(&self, code: &str) -> bool {
        self.collections.is_empty()
            || self.collections.iter().any(|c| c.eq_ignore_ascii_case(code))
    }
}

/// How cards are written out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub path: PathBuf,
    /// Indented JSON.
    pub pretty: bool,
    /// Leave `null` members out instead of writing them.
    pub omit_null: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUT_FILE),
            pretty: true,
            omit_null: true,
        }
    }
}

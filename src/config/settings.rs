// src/config/settings.rs
//! `appsettings.json`: which collections exist and how many pages each has.
//!
//! ```json
//! { "collections": [
//!     { "name": "Genetic Apex", "code": "geneticapex", "cardCount": 286,
//!       "pokemonCardCount": 226, "uniqueCardCount": 226 } ] }
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub collections: Vec<Collection>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub name: String,
    /// URL path segment for the collection's pages.
    pub code: String,
    pub card_count: u32,
    #[serde(default)]
    pub pokemon_card_count: u32,
    #[serde(default)]
    pub unique_card_count: u32,
}

impl AppSettings {
    pub fn from_json(text: &str) -> Result<Self> {
        let settings: AppSettings = serde_json::from_str(text)?;
        for c in &settings.collections {
            if c.code.trim().is_empty() {
                return Err(ScrapeError::Config(format!("collection {:?} has an empty code", c.name)));
            }
        }
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|source| ScrapeError::Io { path: path.to_path_buf(), source })?;
        let settings = Self::from_json(&text)?;
        logd!("Loaded {} collection(s) from {}", settings.collections.len(), path.display());
        Ok(settings)
    }

    /// Total pages the fetch loop would request for the given filter.
    pub fn page_count(&self, wants: impl Fn(&str) -> bool) -> u32 {
        self.collections
            .iter()
            .filter(|c| wants(&c.code))
            .map(|c| c.card_count)
            .sum()
    }
}

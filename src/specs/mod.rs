// src/specs/mod.rs
//! # Site "specs"
//!
//! Each spec encodes *where the ground truth lives in one site's card pages*
//! and *how to read it robustly*. A spec is exposed as a [`SiteStrategy`]: a
//! plain struct of `fn` pointers, one per field, chosen once per run from the
//! [`Site`] tag and then called like ordinary functions by
//! [`crate::assemble`].
//!
//! ## What lives here
//! - Selector choice per field (name cell differs for Pokémon and trainers, …).
//! - Tolerant extraction: every field except the card number has a default.
//! - Light shaping into [`crate::model`] types.
//!
//! ## What does **not** live here
//! - Fetching, looping over collections, writing JSON.
//! - String-level parsing of damage, rarity and pull rates (`crate::parse`).
//!
//! ## Typical call chain
//! ```text
//! scrape::run → net::http_get → Html::parse_document
//!             → assemble(&doc, &strategy) → strategy.<field>(&doc)
//! ```

use std::fmt;
use std::str::FromStr;

use scraper::Html;

use crate::error::Result;
use crate::model::{Ability, Attack, Rate};

pub mod serebii;

/// Categories that are never Pokémon, whatever else the page shows.
pub const NON_POKEMON_CATEGORIES: [&str; 2] = ["Supporter", "Trainer"];

/// Which site the pages come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Site {
    #[default]
    Serebii,
}

impl Site {
    pub fn strategy(self) -> SiteStrategy {
        match self {
            Site::Serebii => serebii::strategy(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Site::Serebii => "serebii",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Site {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "serebii" => Ok(Site::Serebii),
            other => Err(format!("Unknown site: {other}")),
        }
    }
}

/// What kind of card a page shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Energy type for Pokémon (`grass`), literal category otherwise (`Trainer`).
    pub label: String,
    pub is_pokemon: bool,
}

impl Classification {
    /// Category read from an energy icon. Still not a Pokémon when the label
    /// is one of [`NON_POKEMON_CATEGORIES`].
    pub fn from_type_icon(label: impl Into<String>) -> Self {
        let label = label.into();
        let is_pokemon = !NON_POKEMON_CATEGORIES.contains(&label.as_str());
        Self { label, is_pokemon }
    }

    pub fn non_pokemon(label: impl Into<String>) -> Self {
        Self { label: label.into(), is_pokemon: false }
    }

    pub fn unknown() -> Self {
        Self::non_pokemon(crate::config::consts::UNKNOWN)
    }
}

/// Per-site extraction capability. Every function is pure over the parsed
/// document.
#[derive(Clone, Copy)]
pub struct SiteStrategy {
    pub site: Site,
    /// Page URL for `(base, collection code, card number)`.
    pub card_url: fn(&str, &str, u32) -> String,
    pub classify: fn(&Html) -> Classification,
    /// Second argument: is this a Pokémon page.
    pub name: fn(&Html, bool) -> String,
    pub number: fn(&Html) -> Result<u32>,
    pub set_name: fn(&Html) -> String,
    pub pack: fn(&Html) -> String,
    pub rate: fn(&Html) -> Rate,
    pub hp: fn(&Html) -> Option<u32>,
    pub attacks: fn(&Html) -> Vec<Attack>,
    pub weakness: fn(&Html) -> String,
    pub retreat_cost: fn(&Html) -> u32,
    pub abilities: fn(&Html) -> Vec<Ability>,
    pub effect: fn(&Html) -> String,
}

impl fmt::Debug for SiteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteStrategy").field("site", &self.site).finish_non_exhaustive()
    }
}

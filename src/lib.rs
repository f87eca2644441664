// src/lib.rs
//! Pokémon TCG Pocket card-page scraper.
//!
//! The interesting part is [`assemble`]: one parsed card page in, one
//! [`model::Card`] out. Everything around it (fetch loop, JSON writer, CLI)
//! is plumbing.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod assemble;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod model;
pub mod parse;
pub mod progress;
pub mod scrape;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use assemble::{assemble, assemble_html};
pub use error::{Result, ScrapeError};
pub use model::{Ability, Attack, Card, CardDetails, Rate};
pub use specs::{Site, SiteStrategy};

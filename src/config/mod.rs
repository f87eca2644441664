// src/config/mod.rs

pub mod consts;
pub mod options;
pub mod settings;

pub use options::{OutputOptions, ScrapeOptions};
pub use settings::{AppSettings, Collection};

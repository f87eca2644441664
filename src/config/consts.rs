// src/config/consts.rs

// Net config
pub const DEFAULT_BASE_URL: &str = "https://www.serebii.net/tcgpocket";
pub const PAGE_EXT: &str = "shtml";
pub const HTTP_TIMEOUT_SECS: u64 = 20;
pub const USER_AGENT: &str = concat!("tcgp_scrape/", env!("CARGO_PKG_VERSION"));

// Files
pub const DEFAULT_SETTINGS_FILE: &str = "appsettings.json";
pub const DEFAULT_OUT_FILE: &str = "cards.json";

// Extraction fallbacks
pub const UNKNOWN: &str = "Unknown";
pub const NO_WEAKNESS: &str = "None";
pub const NO_EFFECT: &str = "No effect found";

// Variable damage with no stated flip count assumes this many flips.
pub const DEFAULT_COIN_FLIPS: u32 = 3;

// src/parse/rarity.rs
use std::fmt;

/// Rarity as printed by the site's rarity icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rarity {
    Diamond(u8),
    Star(u8),
    Crown,
    Unknown,
}

impl Rarity {
    /// Classify an icon filename. The first family whose marker appears in
    /// the name decides; an unrecognised tier within that family is
    /// `Unknown`, not a fall-through to the next family.
    pub fn from_icon(src: &str) -> Self {
        let src = src.to_ascii_lowercase();
        if src.contains("diamond") {
            tier(&src, "diamond", 4).map_or(Rarity::Unknown, Rarity::Diamond)
        } else if src.contains("star") {
            tier(&src, "star", 3).map_or(Rarity::Unknown, Rarity::Star)
        } else if src.contains("crown") {
            Rarity::Crown
        } else {
            Rarity::Unknown
        }
    }

    /// `None` means the page had no rarity icon at all.
    pub fn from_optional_icon(src: Option<&str>) -> Self {
        src.map_or(Rarity::Unknown, Rarity::from_icon)
    }
}

/// `diamond3` → 3, for tiers 1..=max.
fn tier(src: &str, family: &str, max: u8) -> Option<u8> {
    (1..=max).find(|n| src.contains(&format!("{family}{n}")))
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rarity::Diamond(1) => f.write_str("1 Diamond"),
            Rarity::Diamond(n) => write!(f, "{n} Diamonds"),
            Rarity::Star(1) => f.write_str("1 Star"),
            Rarity::Star(n) => write!(f, "{n} Stars"),
            Rarity::Crown => f.write_str("Crown"),
            Rarity::Unknown => f.write_str(crate::config::consts::UNKNOWN),
        }
    }
}

/// Convenience: icon filename straight to the label stored on the card.
pub fn classify(src: &str) -> String {
    Rarity::from_icon(src).to_string()
}

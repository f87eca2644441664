// src/parse/mod.rs
//! Pure string parsers: no HTML in, no HTML out.
//! The site specs feed these with text already pulled out of the tree.

pub mod damage;
pub mod pull_rate;
pub mod rarity;

pub use damage::Damage;
pub use pull_rate::SlotRates;
pub use rarity::Rarity;

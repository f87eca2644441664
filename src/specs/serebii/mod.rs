// src/specs/serebii/mod.rs
//! Scraping *spec* for Serebii's TCG Pocket card pages
//! (`<base>/<collection>/<NNN>.shtml`).
//!
//! Page landmarks this spec relies on:
//! - `td.cardinfo`: the info block. Its own table holds the name row, one row
//!   per attack and the weakness/retreat strip.
//! - `td.small[align=right]`: printed `NNN / MMM` plus the rarity icon.
//! - `td.cen` with a bold "…Rate" label: the pull-rate block.
//! - `td.fooevo`: the pack name.
//! - `<title>`: `"<Set> - #NNN <Name> - …"`.
//!
//! Trainers have no `td.cardinfo` type icon; their category is an italic
//! label in the second cell of a row instead.

use std::sync::LazyLock;

use scraper::Selector;

use super::{Site, SiteStrategy};
use crate::config::consts::PAGE_EXT;
use crate::core::dom::selector;

mod classify;
mod fields;
mod moves;

pub use classify::classify;
pub use fields::{effect, hp, name, number, pack, rate, retreat_cost, set_name, weakness};
pub use moves::{abilities, attacks};

pub fn strategy() -> SiteStrategy {
    SiteStrategy {
        site: Site::Serebii,
        card_url,
        classify,
        name,
        number,
        set_name,
        pack,
        rate,
        hp,
        attacks,
        weakness,
        retreat_cost,
        abilities,
        effect,
    }
}

/// `https://…/tcgpocket`, `geneticapex`, 1 → `https://…/tcgpocket/geneticapex/001.shtml`
pub fn card_url(base: &str, code: &str, number: u32) -> String {
    format!("{}/{}/{:03}.{}", base.trim_end_matches('/'), code, number, PAGE_EXT)
}

/* ---------- selectors ---------- */

static TD: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static TR: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static BOLD: LazyLock<Selector> = LazyLock::new(|| selector("b"));

static TYPE_ICON: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"td.cardinfo td[align="center"] > img"#));
static CATEGORY_LABEL: LazyLock<Selector> =
    LazyLock::new(|| selector("tr > td:nth-of-type(2) > div > i"));

static POKEMON_NAME: LazyLock<Selector> =
    LazyLock::new(|| selector("td.cardinfo > table > tbody > tr > td.main > b > font"));
static TRAINER_NAME: LazyLock<Selector> = LazyLock::new(|| selector("tr > td > b"));

static HP: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"td.cardinfo td[align="right"] > b"#));
static CARD_ROWS: LazyLock<Selector> =
    LazyLock::new(|| selector("td.cardinfo > table > tbody > tr"));

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("head > title"));
static PACK: LazyLock<Selector> = LazyLock::new(|| selector("td.fooevo"));
static NUMBER_CELL: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"td.small[align="right"]"#));
static RARITY_ICON: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"td.small[align="right"] > img"#));
static RATE_CELL: LazyLock<Selector> = LazyLock::new(|| selector("td.cen"));
static EFFECT: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"td[colspan="3"][align="left"] > p"#));

// src/specs/serebii/fields.rs
//! One rule per scalar card field. All of them default instead of failing,
//! except [`number`].

use scraper::{ElementRef, Html};

use super::{BOLD, EFFECT, HP, NUMBER_CELL, PACK, POKEMON_NAME, RARITY_ICON, RATE_CELL, TD, TITLE, TRAINER_NAME};
use crate::config::consts::{NO_EFFECT, NO_WEAKNESS, UNKNOWN};
use crate::core::dom::{attr, cell_after_label, children_named, first, first_text_child, parent_element, text_of};
use crate::core::sanitize::{icon_stem, normalize_ws, strip_nbsp, transliterate_gender};
use crate::core::text::normalize;
use crate::error::{Result, ScrapeError};
use crate::model::Rate;
use crate::parse::{pull_rate, Rarity};

/// Card name. Pokémon keep the main name in `<b><font>…</font></b>`, other
/// cards in the first bold cell. Loose text next to the name node in its
/// parent ("ex") is a suffix for both.
pub fn name(doc: &Html, is_pokemon: bool) -> String {
    let node = if is_pokemon { first(doc, &POKEMON_NAME) } else { first(doc, &TRAINER_NAME) };
    let Some(node) = node else {
        logd!("Name node not found (pokemon={is_pokemon})");
        return s!(UNKNOWN);
    };

    let mut name = s!(text_of(node).trim());
    if let Some(suffix) = parent_element(node).and_then(first_text_child) {
        name.push(' ');
        name.push_str(suffix);
    }
    transliterate_gender(&normalize_ws(&name))
}

/// Printed card number, the left half of `NNN / MMM`.
/// The only field without a fallback.
pub fn number(doc: &Html) -> Result<u32> {
    let printed = doc
        .select(&NUMBER_CELL)
        .filter_map(first_text_child)
        .find(|t| t.contains('/'))
        .ok_or(ScrapeError::MissingNumber)?;

    let compact = strip_nbsp(printed);
    let left = compact.split('/').next().unwrap_or("").trim();
    match left.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ScrapeError::BadNumber { raw: s!(printed) }),
    }
}

/// First dash-separated segment of the page title.
pub fn set_name(doc: &Html) -> String {
    first(doc, &TITLE)
        .map(text_of)
        .and_then(|title| title.split('-').next().map(normalize_ws))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| s!(UNKNOWN))
}

pub fn pack(doc: &Html) -> String {
    first(doc, &PACK)
        .map(|td| normalize_ws(&text_of(td)))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| s!(UNKNOWN))
}

/// Rarity icon plus the per-slot pull rates.
pub fn rate(doc: &Html) -> Rate {
    let icon = first(doc, &RARITY_ICON).and_then(|img| attr(img, "src"));
    let rarity = Rarity::from_optional_icon(icon).to_string();

    let slots = match rate_block(doc) {
        Some(td) => pull_rate::parse(&text_of(td)),
        None => {
            logd!("No pull-rate block; slots left unset");
            Default::default()
        }
    };

    Rate {
        rarity,
        basic_slots: slots.basic,
        fourth_slot: slots.fourth,
        fifth_slot: slots.fifth,
    }
}

fn rate_block(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&RATE_CELL)
        .find(|td| children_named(*td, "b").any(|b| text_of(b).contains("Rate")))
}

/// `70 HP` → 70. Fossil items print HP too, so this runs for every category.
pub fn hp(doc: &Html) -> Option<u32> {
    let b = first(doc, &HP)?;
    text_of(b).split_whitespace().next()?.parse().ok()
}

/// Energy type of the icon next to the "Weakness" label.
pub fn weakness(doc: &Html) -> String {
    cell_after_label(doc, &TD, "Weakness")
        .and_then(|td| children_named(td, "img").next())
        .and_then(|img| attr(img, "src"))
        .map(icon_stem)
        .filter(|s| !s.is_empty())
        .map_or_else(|| s!(NO_WEAKNESS), |s| s!(s))
}

/// One icon per energy next to the "Retreat Cost" label.
pub fn retreat_cost(doc: &Html) -> u32 {
    cell_after_label(doc, &TD, "Retreat Cost")
        .map(|td| children_named(td, "img").count() as u32)
        .unwrap_or(0)
}

/// Effect paragraph of a trainer/item card. Never empty.
pub fn effect(doc: &Html) -> String {
    first(doc, &EFFECT)
        .and_then(normalize)
        .unwrap_or_else(|| {
            logd!("No effect paragraph found");
            s!(NO_EFFECT)
        })
}

/// Bold text inside an element, trimmed; empty counts as missing.
pub(super) fn bold_text(el: ElementRef<'_>) -> Option<String> {
    el.select(&BOLD)
        .next()
        .map(|b| s!(text_of(b).trim()))
        .filter(|s| !s.is_empty())
}

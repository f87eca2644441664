// src/specs/serebii/classify.rs
use scraper::Html;

use super::{CATEGORY_LABEL, TYPE_ICON};
use crate::core::dom::{attr, first, text_of};
use crate::core::sanitize::icon_stem;
use crate::specs::Classification;

/// Pokémon pages carry an energy icon in the info block (`…/grass.png`).
/// Everything else has an italic category label (`<i>Trainer</i>`).
/// A page with neither is `Unknown` and handled like a non-Pokémon card.
pub fn classify(doc: &Html) -> Classification {
    let type_icon = first(doc, &TYPE_ICON)
        .and_then(|img| attr(img, "src"))
        .map(icon_stem)
        .filter(|stem| !stem.is_empty());
    if let Some(stem) = type_icon {
        return Classification::from_type_icon(stem);
    }

    let label = first(doc, &CATEGORY_LABEL)
        .map(|i| s!(text_of(i).trim()))
        .filter(|l| !l.is_empty());
    match label {
        Some(label) => Classification::non_pokemon(label),
        None => {
            logd!("No type icon or category label; classifying as Unknown");
            Classification::unknown()
        }
    }
}

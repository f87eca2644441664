// src/specs/serebii/moves.rs
//! Attack and ability rows of the info table.
//!
//! Attack row:
//! ```text
//! <tr>
//!   <td><img alt="Grass"><img alt="Colorless"></td>          energy, in order
//!   <td><span class="main"><a><b>Vine Whip</b></a></span>…</td>  name + text
//!   <td><b>20</b></td>                                       damage token
//! </tr>
//! ```
//! Ability rows carry `<td><font><img alt="Ability"></font></td>` instead.
//! Rows matching neither shape are layout and get skipped.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::fields::bold_text;
use super::{CARD_ROWS, TR};
use crate::config::consts::UNKNOWN;
use crate::core::dom::{attr, cells, children_named, first_in, selector, text_of};
use crate::core::text::normalize;
use crate::model::{Ability, Attack};
use crate::parse::damage;

static ATTACK_NAME: LazyLock<Selector> = LazyLock::new(|| selector("span.main > a > b"));
static ABILITY_NAME: LazyLock<Selector> = LazyLock::new(|| selector("span.main > b"));

const ABILITY_ALT: &str = "Ability";

pub fn attacks(doc: &Html) -> Vec<Attack> {
    doc.select(&CARD_ROWS).filter_map(attack_row).collect()
}

fn attack_row(row: ElementRef<'_>) -> Option<Attack> {
    let tds = cells(row);
    let [energy_cell, name_cell, damage_cell, ..] = tds.as_slice() else {
        return None;
    };

    let energy_cost: Vec<String> = children_named(*energy_cell, "img")
        .filter_map(|img| attr(img, "alt"))
        .map(str::trim)
        .filter(|alt| !alt.is_empty())
        .map(String::from)
        .collect();
    if energy_cost.is_empty() {
        return None;
    }

    let name = first_in(*name_cell, &ATTACK_NAME).map(|b| s!(text_of(b).trim()))?;
    let raw_damage = bold_text(*damage_cell)?;

    let additional_text = normalize(*name_cell);
    let dmg = damage::parse(&raw_damage, additional_text.as_deref());
    logd!("Attack {name}: {raw_damage:?} -> {}..{}", dmg.min, dmg.max);

    Some(Attack {
        name,
        energy_cost,
        min_damage: dmg.min,
        max_damage: dmg.max,
        is_variable_damage: dmg.is_variable,
        coin_flips: dmg.coin_flips,
        additional_text,
    })
}

pub fn abilities(doc: &Html) -> Vec<Ability> {
    doc.select(&TR)
        .filter(|row| is_ability_row(*row))
        .map(|row| {
            let text_cell = cells(row).get(1).copied();
            let name = text_cell
                .and_then(|td| first_in(td, &ABILITY_NAME))
                .map(|b| s!(text_of(b).trim()))
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| s!(UNKNOWN));
            let description = text_cell.and_then(normalize);
            Ability { name, description }
        })
        .collect()
}

/// `<tr><td><font><img alt="Ability"></font></td>…`, direct children only.
fn is_ability_row(row: ElementRef<'_>) -> bool {
    children_named(row, "td").any(|td| {
        children_named(td, "font")
            .any(|font| children_named(font, "img").any(|img| attr(img, "alt") == Some(ABILITY_ALT)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rows: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><body><table><tr><td class="cardinfo"><table>{rows}</table></td></tr></table></body></html>"#
        ))
    }

    const VINE_WHIP: &str = r#"<tr>
        <td><img src="grass.png" alt="Grass"><img src="colorless.png" alt="Colorless"></td>
        <td><span class="main"><a href="/a"><b>Vine Whip</b></a></span></td>
        <td><b>20</b></td>
    </tr>"#;

    #[test]
    fn single_fixed_attack() {
        let got = attacks(&card(VINE_WHIP));
        assert_eq!(got.len(), 1);
        let a = &got[0];
        assert_eq!(a.name, "Vine Whip");
        assert_eq!(a.energy_cost, vec!["Grass", "Colorless"]);
        assert_eq!((a.min_damage, a.max_damage), (20, 20));
        assert!(!a.is_variable_damage);
        assert_eq!(a.coin_flips, None);
        assert_eq!(a.additional_text, None);
    }

    #[test]
    fn duplicate_energy_icons_are_kept() {
        let row = r#"<tr>
            <td><img alt="Grass"><img alt="Grass"><img alt="Colorless"></td>
            <td><span class="main"><a><b>Giant Bloom</b></a></span><br>Heal 30 damage from this Pokémon.</td>
            <td><b>100</b></td>
        </tr>"#;
        let a = &attacks(&card(row))[0];
        assert_eq!(a.energy_cost, vec!["Grass", "Grass", "Colorless"]);
        assert_eq!(a.additional_text.as_deref(), Some("Heal 30 damage from this Pokémon."));
    }

    #[test]
    fn coin_flip_text_feeds_damage() {
        let row = r#"<tr>
            <td><img alt="Colorless"></td>
            <td><span class="main"><a><b>Double Kick</b></a></span><br>Flip 2 coins. This attack does 50 damage for each heads.</td>
            <td><b>50x</b></td>
        </tr>"#;
        let a = &attacks(&card(row))[0];
        assert_eq!((a.min_damage, a.max_damage), (0, 100));
        assert!(a.is_variable_damage);
        assert_eq!(a.coin_flips, Some(2));
    }

    #[test]
    fn layout_rows_are_skipped() {
        let rows = format!(
            r#"<tr><td class="main"><b><font>Bulbasaur</font></b></td><td align="right"><b>70 HP</b></td></tr>
            {VINE_WHIP}
            <tr><td><b>Weakness</b></td><td><img alt="Fire"></td><td><b>Retreat Cost</b></td></tr>"#
        );
        let got = attacks(&card(&rows));
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].name, "Vine Whip");
    }

    #[test]
    fn ability_row() {
        let rows = format!(
            r#"<tr>
                <td><font><img src="ability.png" alt="Ability"></font></td>
                <td><span class="main"><b>Powder Heal</b></span><br>Once during your turn, you may heal 20 damage from each of your Pokémon.</td>
            </tr>
            {VINE_WHIP}"#
        );
        let doc = card(&rows);
        let got = abilities(&doc);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].name, "Powder Heal");
        assert_eq!(
            got[0].description.as_deref(),
            Some("Once during your turn, you may heal 20 damage from each of your Pokémon.")
        );
        assert_eq!(attacks(&doc).len(), 1);
    }

    #[test]
    fn ability_defaults() {
        let rows = r#"<tr><td><font><img alt="Ability"></font></td><td></td></tr>"#;
        let got = abilities(&card(rows));
        assert_eq!(got, vec![Ability { name: s!("Unknown"), description: None }]);
    }

    #[test]
    fn ability_icon_must_be_in_font() {
        let rows = r#"<tr><td><img alt="Ability"></td><td><span class="main"><b>X</b></span></td></tr>"#;
        assert!(abilities(&card(rows)).is_empty());
    }
}

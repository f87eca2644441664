// src/parse/damage.rs
//! Attack damage tokens.
//!
//! The damage cell holds one of three shapes:
//! - `50x`  – 50 per success; successes come from the attack text.
//! - `60+`  – 60 base, plus a conditional bonus spelled out in the text.
//! - `20`   – fixed.
//!
//! Anything else (blank cell, stray markup) is 0 damage. A malformed number
//! never fails the card.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::DEFAULT_COIN_FLIPS;
use crate::core::sanitize::leading_number;

static FLIP_COINS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Flip (\d+) coins").unwrap());

static MORE_DAMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) more damage").unwrap());

const SINGLE_FLIP_PHRASE: &str = "Flip a coin. If heads";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Damage {
    pub min: u32,
    pub max: u32,
    pub is_variable: bool,
    pub coin_flips: Option<u32>,
}

impl Damage {
    fn fixed(n: u32) -> Self {
        Self { min: n, max: n, is_variable: false, coin_flips: None }
    }
}

/// Parse a raw damage token together with the attack's normalized text.
pub fn parse(raw: &str, additional_text: Option<&str>) -> Damage {
    let token = raw.trim();
    let text = additional_text.unwrap_or("");

    if let Some(base) = strip_multiplier(token) {
        let per = leading_number(base).unwrap_or(0);
        let flips = capture_number(&FLIP_COINS_RE, text);
        // No stated flip count: the site convention is three.
        let max = per.saturating_mul(flips.unwrap_or(DEFAULT_COIN_FLIPS));
        return Damage { min: 0, max, is_variable: true, coin_flips: flips };
    }

    if let Some(base) = token.strip_suffix('+') {
        let base = leading_number(base).unwrap_or(0);
        let mut dmg = Damage::fixed(base);
        if let Some(bonus) = capture_number(&MORE_DAMAGE_RE, text) {
            dmg.max = base.saturating_add(bonus);
            if text.contains(SINGLE_FLIP_PHRASE) {
                dmg.coin_flips = Some(1);
            }
        }
        return dmg;
    }

    Damage::fixed(token.parse().unwrap_or(0))
}

/// `50x`, `50X` and `50×` all mean "50 per success".
fn strip_multiplier(token: &str) -> Option<&str> {
    token
        .strip_suffix('x')
        .or_else(|| token.strip_suffix('X'))
        .or_else(|| token.strip_suffix('×'))
}

fn capture_number(re: &Regex, text: &str) -> Option<u32> {
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

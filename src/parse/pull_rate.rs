// src/parse/pull_rate.rs
//! Pull-rate block: "1st - 3rd Slot: 2% 4th Slot: 0.333% 5th Slot: 1.332%".

use std::sync::LazyLock;

use regex::Regex;

pub const BASIC_SLOT_LABEL: &str = "1st - 3rd Slot:";
pub const FOURTH_SLOT_LABEL: &str = "4th Slot:";
pub const FIFTH_SLOT_LABEL: &str = "5th Slot:";

fn slot_regex(label: &str) -> Regex {
    let pattern = format!(r"{}\s*(\d+(?:\.\d+)?)%", regex::escape(label));
    Regex::new(&pattern).unwrap()
}

static BASIC_RE: LazyLock<Regex> = LazyLock::new(|| slot_regex(BASIC_SLOT_LABEL));
static FOURTH_RE: LazyLock<Regex> = LazyLock::new(|| slot_regex(FOURTH_SLOT_LABEL));
static FIFTH_RE: LazyLock<Regex> = LazyLock::new(|| slot_regex(FIFTH_SLOT_LABEL));

/// Per-slot drop rates as printed, e.g. `"2%"`. A slot the block does not
/// mention (or prints as `-`) stays `None`; it is never `"0%"`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlotRates {
    pub basic: Option<String>,
    pub fourth: Option<String>,
    pub fifth: Option<String>,
}

pub fn parse(block: &str) -> SlotRates {
    SlotRates {
        basic: slot_rate(&BASIC_RE, block),
        fourth: slot_rate(&FOURTH_RE, block),
        fifth: slot_rate(&FIFTH_RE, block),
    }
}

fn slot_rate(re: &Regex, block: &str) -> Option<String> {
    let number = re.captures(block)?.get(1)?.as_str();
    Some(join!(number, "%"))
}

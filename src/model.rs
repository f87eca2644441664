// src/model.rs
//! Card records handed to the serialization layer.
//!
//! Every record is built in one pass by [`crate::assemble`] and never touched
//! again. JSON member names are camelCase; the category label goes out as
//! `type`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub name: String,
    pub number: u32,
    pub set: String,
    pub pack: String,
    pub rate: Rate,
    pub details: CardDetails,
}

/// Category-specific stats.
///
/// Pokémon carry `attacks`, `weakness`, `retreat_cost` and `abilities`;
/// everything else carries `effect`. Exactly one group is populated: the
/// fields are private behind the two constructors, and deserialization
/// rejects records that mix or omit the groups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "DetailsRecord")]
pub struct CardDetails {
    #[serde(rename = "type")]
    pub kind: String,
    pub hp: Option<u32>,
    attacks: Option<Vec<Attack>>,
    weakness: Option<String>,
    retreat_cost: Option<u32>,
    abilities: Option<Vec<Ability>>,
    effect: Option<String>,
}

impl CardDetails {
    pub fn pokemon(
        kind: String,
        hp: Option<u32>,
        attacks: Vec<Attack>,
        weakness: String,
        retreat_cost: u32,
        abilities: Vec<Ability>,
    ) -> Self {
        Self {
            kind,
            hp,
            attacks: Some(attacks),
            weakness: Some(weakness),
            retreat_cost: Some(retreat_cost),
            abilities: Some(abilities),
            effect: None,
        }
    }

    pub fn non_pokemon(kind: String, hp: Option<u32>, effect: String) -> Self {
        Self {
            kind,
            hp,
            attacks: None,
            weakness: None,
            retreat_cost: None,
            abilities: None,
            effect: Some(effect),
        }
    }

    pub fn is_pokemon(&self) -> bool {
        self.effect.is_none()
    }

    pub fn attacks(&self) -> Option<&[Attack]> {
        self.attacks.as_deref()
    }

    pub fn weakness(&self) -> Option<&str> {
        self.weakness.as_deref()
    }

    pub fn retreat_cost(&self) -> Option<u32> {
        self.retreat_cost
    }

    pub fn abilities(&self) -> Option<&[Ability]> {
        self.abilities.as_deref()
    }

    pub fn effect(&self) -> Option<&str> {
        self.effect.as_deref()
    }
}

/// Unchecked wire shape of [`CardDetails`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailsRecord {
    #[serde(rename = "type")]
    kind: String,
    hp: Option<u32>,
    attacks: Option<Vec<Attack>>,
    weakness: Option<String>,
    retreat_cost: Option<u32>,
    abilities: Option<Vec<Ability>>,
    effect: Option<String>,
}

impl TryFrom<DetailsRecord> for CardDetails {
    type Error = String;

    fn try_from(r: DetailsRecord) -> Result<Self, Self::Error> {
        match (r.attacks, r.weakness, r.retreat_cost, r.abilities, r.effect) {
            (Some(attacks), Some(weakness), Some(retreat_cost), Some(abilities), None) => {
                Ok(Self::pokemon(r.kind, r.hp, attacks, weakness, retreat_cost, abilities))
            }
            (None, None, None, None, Some(effect)) => Ok(Self::non_pokemon(r.kind, r.hp, effect)),
            _ => Err(s!("card details need either attacks/weakness/retreatCost/abilities or effect, not a mix")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub name: String,
    /// Icon order as printed; repeats are meaningful.
    pub energy_cost: Vec<String>,
    pub min_damage: u32,
    pub max_damage: u32,
    pub is_variable_damage: bool,
    pub coin_flips: Option<u32>,
    pub additional_text: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    pub rarity: String,
    pub basic_slots: Option<String>,
    pub fourth_slot: Option<String>,
    pub fifth_slot: Option<String>,
}

impl Default for Rate {
    fn default() -> Self {
        Self {
            rarity: s!(crate::config::consts::UNKNOWN),
            basic_slots: None,
            fourth_slot: None,
            fifth_slot: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pokemon_and_effect_are_exclusive() {
        let mon = CardDetails::pokemon(s!("grass"), Some(70), vec![], s!("fire"), 1, vec![]);
        assert!(mon.is_pokemon());
        assert!(mon.effect().is_none());
        assert_eq!(mon.attacks(), Some(&[][..]));

        let trainer = CardDetails::non_pokemon(s!("Trainer"), None, s!("Draw 2 cards."));
        assert!(!trainer.is_pokemon());
        assert!(trainer.attacks().is_none());
        assert!(trainer.weakness().is_none());
        assert!(trainer.retreat_cost().is_none());
        assert!(trainer.abilities().is_none());
    }

    #[test]
    fn details_serialize_with_type_and_camel_case() {
        let mon = CardDetails::pokemon(s!("grass"), Some(70), vec![], s!("fire"), 1, vec![]);
        let v = serde_json::to_value(&mon).unwrap();
        assert_eq!(v["type"], "grass");
        assert_eq!(v["retreatCost"], 1);
        assert!(v["effect"].is_null());
    }

    #[test]
    fn deserialize_rejects_mixed_or_empty_details() {
        let mixed = r#"{"type":"grass","attacks":[],"weakness":"fire","retreatCost":1,"abilities":[],"effect":"x"}"#;
        assert!(serde_json::from_str::<CardDetails>(mixed).is_err());

        let neither = r#"{"type":"Trainer","hp":null}"#;
        assert!(serde_json::from_str::<CardDetails>(neither).is_err());

        let partial = r#"{"type":"grass","attacks":[],"weakness":"fire"}"#;
        assert!(serde_json::from_str::<CardDetails>(partial).is_err());
    }

    #[test]
    fn deserialize_accepts_either_group() {
        let mon = r#"{"type":"grass","hp":70,"attacks":[],"weakness":"fire","retreatCost":1,"abilities":[]}"#;
        let mon: CardDetails = serde_json::from_str(mon).unwrap();
        assert_eq!(mon, CardDetails::pokemon(s!("grass"), Some(70), vec![], s!("fire"), 1, vec![]));

        let trainer: CardDetails = serde_json::from_str(r#"{"type":"Trainer","effect":"Draw."}"#).unwrap();
        assert_eq!(trainer, CardDetails::non_pokemon(s!("Trainer"), None, s!("Draw.")));
    }

    #[test]
    fn rate_defaults_to_unknown() {
        let r = Rate::default();
        assert_eq!(r.rarity, "Unknown");
        assert!(r.basic_slots.is_none());
    }
}

//! Wire format of the card data service.
//!
//! The service answers `GET /card/{id}` with a flat JSON object. Numeric
//! fields are not reliably typed: the same field may arrive as a number, a
//! numeric string, an empty string or `null`. Text fields may be missing or
//! `null`. Only `name` is required.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::cards::{CardData, Skill};

/// A card record exactly as the service sends it.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCard {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub card_type: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub state: String,
    #[serde(rename = "monsterHP", default, deserialize_with = "lenient_number")]
    pub monster_hp: Option<u32>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub evolves_from: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub card_function: String,

    #[serde(rename = "Skill1DMG", default, deserialize_with = "lenient_number")]
    pub skill1_dmg: Option<u32>,
    #[serde(rename = "Skill1EnergyQty", default, deserialize_with = "lenient_number")]
    pub skill1_energy_qty: Option<u32>,
    #[serde(rename = "Skill1EnergyType", default, deserialize_with = "lenient_text")]
    pub skill1_energy_type: String,
    #[serde(rename = "Skill1Effect", default, deserialize_with = "lenient_text")]
    pub skill1_effect: String,

    #[serde(rename = "Skill2DMG", default, deserialize_with = "lenient_number")]
    pub skill2_dmg: Option<u32>,
    #[serde(rename = "Skill2EnergyQty", default, deserialize_with = "lenient_number")]
    pub skill2_energy_qty: Option<u32>,
    #[serde(rename = "Skill2EnergyType", default, deserialize_with = "lenient_text")]
    pub skill2_energy_type: String,
    #[serde(rename = "Skill2Effect", default, deserialize_with = "lenient_text")]
    pub skill2_effect: String,
}

impl ApiCard {
    /// Normalize into `CardData`, deriving the image URL from the name.
    #[must_use]
    pub fn into_card_data(self, image_base_url: &str) -> CardData {
        let image_url = image_url(image_base_url, &self.name);
        CardData {
            name: self.name,
            card_type: self.card_type,
            stage: self.state,
            hp: self.monster_hp,
            evolves_from: self.evolves_from,
            function: self.card_function,
            skills: [
                Skill {
                    damage: self.skill1_dmg,
                    energy_qty: self.skill1_energy_qty,
                    energy_type: self.skill1_energy_type,
                    effect: self.skill1_effect,
                },
                Skill {
                    damage: self.skill2_dmg,
                    energy_qty: self.skill2_energy_qty,
                    energy_type: self.skill2_energy_type,
                    effect: self.skill2_effect,
                },
            ],
            image_url,
        }
    }
}

/// Image location for a card name: `{base}/{name}.png`.
#[must_use]
pub fn image_url(image_base_url: &str, name: &str) -> String {
    format!("{}/{}.png", image_base_url.trim_end_matches('/'), name)
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .or_else(|| n.as_f64().and_then(whole_number)),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse()
                .ok()
                .or_else(|| s.parse().ok().and_then(whole_number))
        }
        _ => None,
    })
}

/// `60.0` counts as 60; fractions, negatives and out-of-range values do not.
fn whole_number(v: f64) -> Option<u32> {
    (v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&v)).then(|| v as u32)
}

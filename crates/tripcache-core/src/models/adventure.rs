//! Bookable adventures and their pricing rules.

use serde::{Deserialize, Serialize};

/// How an adventure's base price is quoted. Units the catalog grows later
/// deserialize to `Other` and price flat, same as the group-style units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingUnit {
    PerPerson,
    PerGroup,
    PerBoat,
    PerKayak,
    PerVehicle,
    PerKart,
    #[serde(other)]
    #[default]
    Other,
}

/// One bookable adventure from `adventures.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Adventure {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    /// Loose category tag ("dive", "trek", ...); kept as a string so new
    /// categories don't break decoding.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "durationMin", default)]
    pub duration_min: Option<i64>,
    #[serde(rename = "ageMin", default)]
    pub age_min: Option<i64>,
    /// Island codes this adventure runs on ("PB", "HL", ...).
    #[serde(rename = "operatedIn", default)]
    pub operated_in: Vec<String>,
    #[serde(default)]
    pub unit: PricingUnit,
    #[serde(rename = "basePriceINR", default)]
    pub base_price_inr: Option<f64>,
    #[serde(rename = "bookingType", default)]
    pub booking_type: String,
    #[serde(rename = "apiSource", default)]
    pub api_source: String,
    #[serde(rename = "gearIncluded", default)]
    pub gear_included: Vec<String>,
    #[serde(rename = "safetyNotes", default)]
    pub safety_notes: String,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub difficulty: String,
}

impl Adventure {
    /// Whether this adventure can be sold at all: it needs a base price
    /// and at least one island it operates on.
    pub fn is_priced(&self) -> bool {
        self.base_price_inr.is_some() && !self.operated_in.is_empty()
    }

    /// Effective price for a party. `per_person` scales with head count
    /// (clamped to at least one person); every other unit is a flat price.
    /// Adventures without a base price have no price at all.
    pub fn price_for(&self, people_count: u32) -> Option<f64> {
        let base = self.base_price_inr?;
        Some(match self.unit {
            PricingUnit::PerPerson => base * f64::from(people_count.max(1)),
            _ => base,
        })
    }

    pub fn operates_on(&self, island_code: &str) -> bool {
        self.operated_in.iter().any(|code| code == island_code)
    }
}

/// Row of the location <-> adventure join table (`location_adventures.json`).
/// That file uses snake_case keys, unlike the rest of the pack.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationAdventureLink {
    #[serde(default)]
    pub location_id: String,
    #[serde(default)]
    pub adventure_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adventure(unit: PricingUnit, base: Option<f64>) -> Adventure {
        Adventure {
            unit,
            base_price_inr: base,
            ..Adventure::default()
        }
    }

    #[test]
    fn per_person_scales_with_head_count() {
        let adv = adventure(PricingUnit::PerPerson, Some(800.0));
        assert_eq!(adv.price_for(3), Some(2400.0));
    }

    #[test]
    fn per_person_clamps_to_one_person() {
        let adv = adventure(PricingUnit::PerPerson, Some(800.0));
        assert_eq!(adv.price_for(0), Some(800.0));
        assert_eq!(adv.price_for(1), Some(800.0));
    }

    #[test]
    fn group_style_units_price_flat() {
        let adv = adventure(PricingUnit::PerBoat, Some(3000.0));
        assert_eq!(adv.price_for(0), Some(3000.0));
        assert_eq!(adv.price_for(6), Some(3000.0));
    }

    #[test]
    fn unknown_unit_prices_flat() {
        let adv: Adventure = serde_json::from_value(serde_json::json!({
            "unit": "per_helicopter",
            "basePriceINR": 12000.0
        }))
        .unwrap();
        assert_eq!(adv.unit, PricingUnit::Other);
        assert_eq!(adv.price_for(4), Some(12000.0));
    }

    #[test]
    fn unpriced_adventure_has_no_price() {
        let adv = adventure(PricingUnit::PerPerson, None);
        assert_eq!(adv.price_for(2), None);
        assert!(!adv.is_priced());
    }

    #[test]
    fn priced_needs_an_operating_island() {
        let mut adv = adventure(PricingUnit::PerPerson, Some(800.0));
        assert!(!adv.is_priced());
        adv.operated_in.push("HL".to_string());
        assert!(adv.is_priced());
    }
}

//! The merged reference snapshot and read-only catalog views over it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Adventure, BicycleRental, CabOption, FerryRoute, IslandMeta, Location, LocationAdventureLink,
    PricingMeta, ScooterRental,
};

/// The merged, immutable aggregate of every reference dataset plus pricing
/// metadata. Built once by the cache and shared read-only from then on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPack {
    pub locations: Vec<Location>,
    pub adventures: Vec<Adventure>,
    pub location_adventures: Vec<LocationAdventureLink>,
    pub ferries: Vec<FerryRoute>,
    pub cabs: Vec<CabOption>,
    pub scooters: Vec<ScooterRental>,
    pub bicycles: Vec<BicycleRental>,
    pub islands: Vec<IslandMeta>,
    pub meta: PricingMeta,
    /// When this snapshot was assembled. Informational, for display only.
    pub loaded_at: DateTime<Utc>,
}

impl DataPack {
    pub fn adventure_by_slug(&self, slug: &str) -> Option<&Adventure> {
        self.adventures.iter().find(|adv| adv.slug == slug)
    }

    pub fn location_by_slug(&self, slug: &str) -> Option<&Location> {
        self.locations.iter().find(|loc| loc.slug == slug)
    }

    /// Adventures that can actually be sold (priced, operated somewhere).
    pub fn priced_adventures(&self) -> Vec<&Adventure> {
        self.adventures.iter().filter(|adv| adv.is_priced()).collect()
    }

    pub fn adventures_on_island(&self, island_code: &str) -> Vec<&Adventure> {
        self.adventures
            .iter()
            .filter(|adv| adv.is_priced() && adv.operates_on(island_code))
            .collect()
    }

    pub fn adventures_in_category(&self, category: &str) -> Vec<&Adventure> {
        self.adventures
            .iter()
            .filter(|adv| adv.is_priced() && adv.category == category)
            .collect()
    }

    /// Adventure ids linked to a location through the join table.
    pub fn adventure_ids_for_location(&self, location_id: &str) -> &[String] {
        self.location_adventures
            .iter()
            .find(|link| link.location_id == location_id)
            .map(|link| link.adventure_ids.as_slice())
            .unwrap_or(&[])
    }

    pub fn cabs_on_island(&self, island_code: &str) -> Vec<&CabOption> {
        self.cabs.iter().filter(|cab| cab.island_id == island_code).collect()
    }

    pub fn ferries_between(&self, origin: &str, destination: &str) -> Vec<&FerryRoute> {
        self.ferries
            .iter()
            .filter(|route| route.origin_id == origin && route.destination_id == destination)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PricingUnit;

    fn pack() -> DataPack {
        DataPack {
            locations: vec![Location {
                id: "L1".to_string(),
                slug: "radhanagar-beach".to_string(),
                ..Location::default()
            }],
            adventures: vec![
                Adventure {
                    id: "ADV048".to_string(),
                    slug: "discover-scuba".to_string(),
                    category: "dive".to_string(),
                    unit: PricingUnit::PerPerson,
                    base_price_inr: Some(800.0),
                    operated_in: vec!["HL".to_string()],
                    ..Adventure::default()
                },
                Adventure {
                    id: "ADV099".to_string(),
                    slug: "unpriced-dive".to_string(),
                    category: "dive".to_string(),
                    ..Adventure::default()
                },
            ],
            location_adventures: vec![LocationAdventureLink {
                location_id: "L1".to_string(),
                adventure_ids: vec!["ADV048".to_string()],
            }],
            ferries: vec![FerryRoute {
                id: "PB-HL".to_string(),
                origin_id: "PB".to_string(),
                destination_id: "HL".to_string(),
                ..FerryRoute::default()
            }],
            cabs: vec![CabOption {
                id: "C1".to_string(),
                island_id: "PB".to_string(),
                ..CabOption::default()
            }],
            scooters: Vec::new(),
            bicycles: Vec::new(),
            islands: Vec::new(),
            meta: PricingMeta::default(),
            loaded_at: Utc::now(),
        }
    }

    #[test]
    fn slug_lookups_hit_and_miss() {
        let pack = pack();
        assert!(pack.adventure_by_slug("discover-scuba").is_some());
        assert!(pack.adventure_by_slug("nope").is_none());
        assert!(pack.location_by_slug("radhanagar-beach").is_some());
    }

    #[test]
    fn island_and_category_filters_only_show_sellable_adventures() {
        let pack = pack();
        assert_eq!(pack.priced_adventures().len(), 1);
        assert_eq!(pack.adventures_on_island("HL").len(), 1);
        assert!(pack.adventures_on_island("PB").is_empty());
        // The unpriced dive never shows up in catalog views.
        assert_eq!(pack.adventures_in_category("dive").len(), 1);
    }

    #[test]
    fn link_table_lookup() {
        let pack = pack();
        let ids = pack.adventure_ids_for_location("L1");
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0], "ADV048");
        assert!(pack.adventure_ids_for_location("L2").is_empty());
    }

    #[test]
    fn transport_filters_match_on_island_and_route() {
        let pack = pack();
        assert_eq!(pack.cabs_on_island("PB").len(), 1);
        assert_eq!(pack.ferries_between("PB", "HL").len(), 1);
        assert!(pack.ferries_between("HL", "PB").is_empty());
    }
}

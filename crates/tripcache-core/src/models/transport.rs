//! Transport option records: ferry routes, cabs, scooter and bicycle rentals.

use serde::{Deserialize, Serialize};

/// Sample fare one operator quotes for a ferry route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FerryOperatorFare {
    /// e.g. "Makruzz".
    #[serde(default)]
    pub operator: String,
    #[serde(rename = "sampleFareINR", default)]
    pub sample_fare_inr: Option<f64>,
}

/// Inter-island ferry route from `ferries.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FerryRoute {
    /// e.g. "PB-HL".
    #[serde(default)]
    pub id: String,
    /// Origin display label, e.g. "Port Blair".
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(rename = "originId", default)]
    pub origin_id: String,
    #[serde(rename = "destinationId", default)]
    pub destination_id: String,
    #[serde(default)]
    pub operators: Vec<FerryOperatorFare>,
    #[serde(rename = "typicalDurationMin", default)]
    pub typical_duration_min: f64,
}

impl FerryRoute {
    /// Lowest quoted fare across operators, when any operator quotes one.
    pub fn cheapest_fare(&self) -> Option<f64> {
        self.operators
            .iter()
            .filter_map(|op| op.sample_fare_inr)
            .min_by(|a, b| a.total_cmp(b))
    }
}

/// Cab category offered on one island, from `cabs.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CabOption {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "islandId", default)]
    pub island_id: String,
    /// "HATCHBACK", "SEDAN", "SUV", ... - kept loose for future tags.
    #[serde(default)]
    pub category: String,
    /// e.g. "AC Sedan (Dzire/Amaze)".
    #[serde(default)]
    pub label: String,
    #[serde(rename = "baseRateINR", default)]
    pub base_rate_inr: f64,
    /// "per_transfer", "per_day", ...
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Scooter rental plan from `scooters.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScooterRental {
    #[serde(rename = "islandId", default)]
    pub island_id: String,
    #[serde(default)]
    pub island: String,
    /// e.g. "Honda Activa (110-125cc)".
    #[serde(default)]
    pub model: String,
    /// "HALF_DAY" / "DAY".
    #[serde(default)]
    pub plan: String,
    #[serde(rename = "durationHours", default)]
    pub duration_hours: f64,
    #[serde(rename = "baseRateINR", default)]
    pub base_rate_inr: f64,
    #[serde(rename = "securityDepositINR", default)]
    pub security_deposit_inr: f64,
    #[serde(rename = "isAvailable", default)]
    pub is_available: bool,
    #[serde(rename = "lateFeePerHourINR", default)]
    pub late_fee_per_hour_inr: f64,
    #[serde(rename = "peakSeasonMarkupPct", default)]
    pub peak_season_markup_pct: f64,
}

/// Bicycle rental plan from `bicycle.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BicycleRental {
    #[serde(rename = "islandId", default)]
    pub island_id: String,
    #[serde(default)]
    pub island: String,
    /// e.g. "Hybrid City Bicycle".
    #[serde(default)]
    pub model: String,
    /// "M", "L", "Unisex" etc.
    #[serde(rename = "frameSize", default)]
    pub frame_size: String,
    /// "single-speed" / "7-speed".
    #[serde(default)]
    pub gears: String,
    #[serde(default)]
    pub plan: String,
    #[serde(rename = "durationHours", default)]
    pub duration_hours: f64,
    #[serde(rename = "baseRateINR", default)]
    pub base_rate_inr: f64,
    #[serde(rename = "securityDepositINR", default)]
    pub security_deposit_inr: f64,
    #[serde(rename = "isAvailable", default)]
    pub is_available: bool,
    #[serde(rename = "lateFeePerHourINR", default)]
    pub late_fee_per_hour_inr: f64,
    #[serde(rename = "peakSeasonMarkupPct", default)]
    pub peak_season_markup_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cheapest_fare_skips_operators_without_quotes() {
        let route = FerryRoute {
            operators: vec![
                FerryOperatorFare {
                    operator: "Makruzz".to_string(),
                    sample_fare_inr: Some(1200.0),
                },
                FerryOperatorFare {
                    operator: "Govt Ferry".to_string(),
                    sample_fare_inr: None,
                },
                FerryOperatorFare {
                    operator: "Green Ocean".to_string(),
                    sample_fare_inr: Some(950.0),
                },
            ],
            ..FerryRoute::default()
        };
        assert_eq!(route.cheapest_fare(), Some(950.0));
    }

    #[test]
    fn cheapest_fare_is_none_without_any_quote() {
        assert_eq!(FerryRoute::default().cheapest_fare(), None);
    }
}

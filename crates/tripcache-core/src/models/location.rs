//! Place records: visitable locations and the islands they sit on.

use serde::{Deserialize, Serialize};

/// One visitable spot from `locations.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub id: String,
    /// Island display label, e.g. "Port Blair (South Andaman)".
    #[serde(default)]
    pub island: String,
    /// Display name of the spot itself.
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub moods: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub brief: String,
    #[serde(rename = "typicalHours", default)]
    pub typical_hours: f64,
    #[serde(rename = "bestTime", default)]
    pub best_time: String,
    #[serde(rename = "permitRequired", default)]
    pub permit_required: bool,
    #[serde(rename = "bookingType", default)]
    pub booking_type: String,
    #[serde(rename = "recommendedTime", default)]
    pub recommended_time: String,
    #[serde(default)]
    pub slug: String,
}

/// Island metadata from `islands.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IslandMeta {
    /// Short island code: "PB", "HL", "NL", ...
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// "South" / "Middle" / "North" / "Remote".
    #[serde(default)]
    pub region: String,
    #[serde(rename = "isHub", default)]
    pub is_hub: Option<bool>,
}

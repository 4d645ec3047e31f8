//! The trip cart: heterogeneous line items and derived totals.
//!
//! The cart is a plain synchronous value held by one owner per session.
//! Mutations keep line-item ids unique; totals and the per-section
//! breakdown are recomputed from scratch on every read, never cached.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::PricingMeta;

/// Fixed classification buckets for the trip summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Activities,
    Cabs,
    Ferries,
    Scooters,
    Bicycles,
    Other,
}

impl Section {
    /// Every bucket, in display order. The breakdown always carries all six.
    pub const ALL: [Section; 6] = [
        Section::Activities,
        Section::Cabs,
        Section::Ferries,
        Section::Scooters,
        Section::Bicycles,
        Section::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Activities => "activities",
            Section::Cabs => "cabs",
            Section::Ferries => "ferries",
            Section::Scooters => "scooters",
            Section::Bicycles => "bicycles",
            Section::Other => "other",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar payload allowed in a line item's extra-info bag. The cart stores
/// and returns these untouched; it never looks inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Bool(bool),
    Number(f64),
    String(String),
}

impl From<bool> for MetaValue {
    fn from(value: bool) -> Self {
        MetaValue::Bool(value)
    }
}

impl From<f64> for MetaValue {
    fn from(value: f64) -> Self {
        MetaValue::Number(value)
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::String(value.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        MetaValue::String(value)
    }
}

/// One priced, quantified line in the cart.
///
/// `id` is caller-chosen and must encode the logical choice, so re-adding
/// the same choice updates the existing line instead of duplicating it.
/// Example ids: `activity:ADV048`, `cab:PB-HL:SEDAN`, `scooter:HL:DAY`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    /// What the user sees in the summary, e.g. "Discover Scuba - Havelock".
    pub label: String,
    /// Units of whatever the line sells (people, days, vehicles, rides).
    pub quantity: u32,
    /// Price per unit in the cart currency.
    pub unit_price: f64,
    /// Unset means the line lands in the `other` bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Extra info (island, route, vendor, date); opaque to the cart.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub meta: HashMap<String, MetaValue>,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    /// The bucket this line belongs to, defaulting unset to `other`.
    pub fn effective_section(&self) -> Section {
        self.section.unwrap_or(Section::Other)
    }
}

/// Overall trip totals, derived on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub sub_total: f64,
    pub tax: f64,
    pub service_fee: f64,
    pub grand_total: f64,
    pub currency: String,
}

/// One bucket of the per-section breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionTotals {
    pub section: Section,
    pub items: Vec<CartItem>,
    pub sub_total: f64,
}

/// The cart itself: line items plus trip-level pricing parameters.
///
/// Items are kept in insertion order for display; order is irrelevant to
/// pricing. The item sequence is only reachable through the operations
/// below, which preserve id uniqueness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
    currency: String,
    tax_percent: f64,
    service_fee: f64,
}

impl Default for Cart {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            currency: crate::models::meta::DEFAULT_CURRENCY.to_string(),
            tax_percent: 0.0,
            service_fee: 0.0,
        }
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn tax_percent(&self) -> f64 {
        self.tax_percent
    }

    pub fn service_fee(&self) -> f64 {
        self.service_fee
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Replace the trip-level pricing parameters wholesale. Values are
    /// taken as given; validation happens upstream.
    pub fn set_meta(&mut self, currency: impl Into<String>, tax_percent: f64, service_fee: f64) {
        self.currency = currency.into();
        self.tax_percent = tax_percent;
        self.service_fee = service_fee;
    }

    /// Seed the pricing parameters from the loaded data pack's metadata.
    pub fn apply_meta(&mut self, meta: &PricingMeta) {
        self.set_meta(meta.currency.clone(), meta.tax_percent, meta.service_fee);
    }

    /// Upsert by id: an existing line is replaced in place (keeping its
    /// position), otherwise the item is appended.
    pub fn add_or_update(&mut self, item: CartItem) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    /// Atomically replace the whole contents of one section. Every incoming
    /// item has its section forced to `section`, so no stale line from a
    /// previous submission of that section survives.
    pub fn set_section_items(&mut self, section: Section, items: Vec<CartItem>) {
        self.items.retain(|item| item.effective_section() != section);
        for mut item in items {
            item.section = Some(section);
            self.items.push(item);
        }
    }

    /// Remove one line by id; a no-op when no such line exists.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    /// Remove every line belonging to this section.
    pub fn clear_section(&mut self, section: Section) {
        self.items.retain(|item| item.effective_section() != section);
    }

    /// Empty the cart. Pricing parameters are untouched.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Overall trip totals, recomputed from the current lines.
    pub fn totals(&self) -> Totals {
        let sub_total: f64 = self.items.iter().map(CartItem::line_total).sum();
        let tax = sub_total * self.tax_percent / 100.0;
        let grand_total = sub_total + tax + self.service_fee;

        Totals {
            sub_total,
            tax,
            service_fee: self.service_fee,
            grand_total,
            currency: self.currency.clone(),
        }
    }

    /// Per-section breakdown. All six buckets are always present; every
    /// line lands in exactly one of them.
    pub fn by_section(&self) -> BTreeMap<Section, SectionTotals> {
        Section::ALL
            .iter()
            .map(|&section| {
                let items: Vec<CartItem> = self
                    .items
                    .iter()
                    .filter(|item| item.effective_section() == section)
                    .cloned()
                    .collect();
                let sub_total = items.iter().map(CartItem::line_total).sum();
                (section, SectionTotals { section, items, sub_total })
            })
            .collect()
    }
}

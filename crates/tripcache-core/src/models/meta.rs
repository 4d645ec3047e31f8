//! Trip-level pricing metadata (`meta.json`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Currency applied when the metadata source is missing or partial.
pub const DEFAULT_CURRENCY: &str = "INR";

/// Trip-level pricing parameters. Seeds the cart's currency, tax rate and
/// service fee once the data pack is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingMeta {
    pub currency: String,
    pub tax_percent: f64,
    pub service_fee: f64,
}

impl Default for PricingMeta {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            tax_percent: 0.0,
            service_fee: 0.0,
        }
    }
}

impl PricingMeta {
    /// Read pricing metadata out of a raw JSON payload. Each field falls
    /// back to its own default, so a source missing only one field still
    /// yields sane values for the others.
    pub fn from_value(value: &Value) -> Self {
        let defaults = Self::default();
        Self {
            currency: value
                .get("currency")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or(defaults.currency),
            tax_percent: value
                .get("taxPercent")
                .and_then(Value::as_f64)
                .unwrap_or(defaults.tax_percent),
            service_fee: value
                .get("serviceFee")
                .and_then(Value::as_f64)
                .unwrap_or(defaults.service_fee),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_all_fields_when_present() {
        let meta = PricingMeta::from_value(&json!({
            "currency": "USD",
            "taxPercent": 18.0,
            "serviceFee": 99.0
        }));
        assert_eq!(meta.currency, "USD");
        assert_eq!(meta.tax_percent, 18.0);
        assert_eq!(meta.service_fee, 99.0);
    }

    #[test]
    fn each_missing_field_gets_its_own_default() {
        let meta = PricingMeta::from_value(&json!({ "taxPercent": 5.0 }));
        assert_eq!(meta.currency, DEFAULT_CURRENCY);
        assert_eq!(meta.tax_percent, 5.0);
        assert_eq!(meta.service_fee, 0.0);
    }

    #[test]
    fn wrong_shaped_payload_yields_defaults() {
        assert_eq!(PricingMeta::from_value(&json!([1, 2, 3])), PricingMeta::default());
        assert_eq!(
            PricingMeta::from_value(&json!({ "currency": 42, "taxPercent": "five" })),
            PricingMeta::default()
        );
    }
}

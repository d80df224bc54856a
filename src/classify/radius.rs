use crate::types::{round_value, BorderRadiusToken, Origin, RadiusUsage};

use super::RuleTable;

const BUCKETS: RuleTable<f64, (&str, RadiusUsage)> = RuleTable(&[
    (|v: f64| v == 0.0, ("None", RadiusUsage::Small)),
    (|v: f64| v <= 4.0, ("Small", RadiusUsage::Small)),
    (|v: f64| v <= 8.0, ("Medium", RadiusUsage::Medium)),
    (|v: f64| v <= 16.0, ("Large", RadiusUsage::Large)),
    (|v: f64| v >= 100.0, ("Round", RadiusUsage::Round)),
]);

/// Build a border-radius token. Zero is a valid radius; negative or
/// non-finite values are rejected. Accepted values are rounded to three
/// decimals.
pub fn radius_from(value: f64, origin: Origin) -> Option<BorderRadiusToken> {
    if !(value.is_finite() && value >= 0.0) {
        return None;
    }
    let value = round_value(value);

    let (name, usage) = radius_bucket(value);
    Some(BorderRadiusToken {
        id: origin.id,
        name: name.to_string(),
        value,
        unit: "px".to_string(),
        usage,
        source: origin.source,
    })
}

/// Display name and usage for a radius value.
pub fn radius_bucket(value: f64) -> (&'static str, RadiusUsage) {
    BUCKETS
        .classify(value)
        .unwrap_or(("Custom", RadiusUsage::Medium))
}

use crate::source::SpacingField;
use crate::types::{round_value, Origin, SpacingToken, SpacingUsage};

use super::RuleTable;

const SIZE_NAMES: RuleTable<f64, &str> = RuleTable(&[
    (|v: f64| v <= 4.0, "XS"),
    (|v: f64| v <= 8.0, "S"),
    (|v: f64| v <= 16.0, "M"),
    (|v: f64| v <= 24.0, "L"),
    (|v: f64| v <= 32.0, "XL"),
    (|v: f64| v <= 48.0, "XXL"),
]);

/// Build a spacing token from one padding or gap field.
///
/// The value is rounded to three decimals first, and only strictly positive
/// results produce tokens. The scale index is left at zero for the
/// canonicalizer to assign.
pub fn spacing_from(field: SpacingField, value: f64, origin: Origin) -> Option<SpacingToken> {
    let value = round_value(value);
    if !(value.is_finite() && value > 0.0) {
        return None;
    }

    let usage = if field.is_gap() {
        SpacingUsage::Gap
    } else {
        SpacingUsage::Padding
    };

    Some(SpacingToken {
        id: origin.id,
        name: spacing_name(value).to_string(),
        value,
        unit: "px".to_string(),
        scale: 0,
        usage,
        source: origin.source,
    })
}

/// T-shirt size name for a spacing value.
pub fn spacing_name(value: f64) -> &'static str {
    SIZE_NAMES.classify(value).unwrap_or("Custom")
}

//! Deduplication and spacing-scale assignment.

use std::collections::HashSet;

use crate::types::{Metadata, SpacingToken, Token, TokenCollection};

use super::bag::RawBag;

/// Freeze a raw bag into a collection.
///
/// Each category keeps the first token per resolved value, in bag order.
/// Spacing tokens then receive their scale index. No category is re-sorted.
pub fn canonicalize(bag: RawBag, metadata: Metadata) -> TokenCollection {
    let mut spacing = dedup(bag.spacing);
    assign_scale(&mut spacing);

    TokenCollection::new(
        dedup(bag.colors),
        dedup(bag.typography),
        spacing,
        dedup(bag.shadows),
        dedup(bag.border_radius),
        metadata,
    )
}

/// Keep the first token for each dedup key.
pub fn dedup<T: Token>(tokens: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(tokens.len());
    tokens
        .into_iter()
        .filter(|token| seen.insert(token.dedup_key()))
        .collect()
}

/// Set each token's scale to the index of its value among the sorted
/// distinct spacing values. Equal values share an index; token order is
/// untouched.
pub fn assign_scale(spacing: &mut [SpacingToken]) {
    let mut values: Vec<f64> = spacing.iter().map(|t| t.value).collect();
    values.sort_by(f64::total_cmp);
    values.dedup();

    for token in spacing.iter_mut() {
        token.scale = values
            .binary_search_by(|v| v.total_cmp(&token.value))
            .unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{color_from, spacing_from};
    use crate::source::{RawColor, SpacingField};
    use crate::types::Origin;

    fn spacing(id: &str, value: f64) -> SpacingToken {
        spacing_from(SpacingField::PaddingLeft, value, Origin::node(id, id)).unwrap()
    }

    fn meta() -> Metadata {
        Metadata::new("Test", "2024-01-01T00:00:00Z")
    }

    #[test]
    fn test_first_occurrence_wins() {
        let mut bag = RawBag::new();
        bag.colors.push(color_from(&RawColor::rgb(1.0, 0.0, 0.0), Some("Brand"), Origin::node("a", "a")).unwrap());
        bag.colors.push(color_from(&RawColor::rgb(0.0, 1.0, 0.0), None, Origin::node("b", "b")).unwrap());
        bag.colors.push(color_from(&RawColor::rgb(1.0, 0.0, 0.0), None, Origin::node("c", "c")).unwrap());

        let collection = canonicalize(bag, meta());
        let ids: Vec<&str> = collection.colors().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(collection.colors()[0].name, "Brand");
    }

    #[test]
    fn test_spacing_scale() {
        let mut bag = RawBag::new();
        bag.spacing.push(spacing("n1", 8.0));
        bag.spacing.push(spacing("n2", 16.0));
        bag.spacing.push(spacing("n3", 8.0));

        let collection = canonicalize(bag, meta());
        let tokens = collection.spacing();
        assert_eq!(tokens.len(), 2);
        assert_eq!((tokens[0].value, tokens[0].scale), (8.0, 0));
        assert_eq!((tokens[1].value, tokens[1].scale), (16.0, 1));
    }

    #[test]
    fn test_scale_does_not_reorder() {
        let mut tokens = vec![spacing("a", 24.0), spacing("b", 4.0), spacing("c", 12.0)];
        assign_scale(&mut tokens);

        let pairs: Vec<(&str, usize)> = tokens.iter().map(|t| (t.id.as_str(), t.scale)).collect();
        assert_eq!(pairs, vec![("a", 2), ("b", 0), ("c", 1)]);
    }

    #[test]
    fn test_equal_values_share_scale() {
        let mut tokens = vec![spacing("a", 8.0), spacing("b", 8.0), spacing("c", 2.0)];
        assign_scale(&mut tokens);
        assert_eq!(tokens[0].scale, 1);
        assert_eq!(tokens[1].scale, 1);
        assert_eq!(tokens[2].scale, 0);
    }

    #[test]
    fn test_near_equal_spacing_merges() {
        let mut bag = RawBag::new();
        bag.spacing.push(spacing("a", 8.0));
        bag.spacing.push(spacing("b", 8.0004));
        bag.spacing.push(spacing("c", 8.0006));

        let collection = canonicalize(bag, meta());
        let pairs: Vec<(&str, usize)> = collection
            .spacing()
            .iter()
            .map(|t| (t.id.as_str(), t.scale))
            .collect();
        assert_eq!(pairs, vec![("a", 0), ("c", 1)]);
    }

    #[test]
    fn test_empty_bag() {
        let collection = canonicalize(RawBag::new(), meta());
        assert!(collection.is_empty());
    }
}

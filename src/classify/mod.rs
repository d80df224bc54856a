//! Token classifiers.
//!
//! Each classifier turns one raw design primitive into one typed token, or
//! `None` when the primitive lacks what its category needs. Usage
//! heuristics are ordered decision tables: the first matching row wins and
//! a fixed default applies when none does.

mod color;
mod radius;
mod shadow;
mod spacing;
mod typography;

pub use color::{color_from, color_name, color_usage};
pub use radius::{radius_bucket, radius_from};
pub use shadow::{shadow_from, shadow_usage};
pub use spacing::{spacing_from, spacing_name};
pub use typography::{font_weight, line_height, typography_from, typography_usage};

/// Ordered `(keywords, label)` rows matched against a lowercased name.
pub struct KeywordTable<L: 'static>(pub &'static [(&'static [&'static str], L)]);

impl<L: Copy> KeywordTable<L> {
    /// Label of the first row with a keyword contained in `name`.
    pub fn classify(&self, name: &str) -> Option<L> {
        let name = name.to_lowercase();
        self.0
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| name.contains(k)))
            .map(|(_, label)| *label)
    }
}

/// Ordered `(predicate, label)` rows.
pub struct RuleTable<T: 'static, L: 'static>(pub &'static [(fn(T) -> bool, L)]);

impl<T: Copy, L: Copy> RuleTable<T, L> {
    /// Label of the first row whose predicate holds for `input`.
    pub fn classify(&self, input: T) -> Option<L> {
        self.0
            .iter()
            .find(|(predicate, _)| predicate(input))
            .map(|(_, label)| *label)
    }
}

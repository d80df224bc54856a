use crate::types::{BorderRadiusToken, ColorToken, ShadowToken, SpacingToken, TypographyToken};

/// Tokens as extracted, before deduplication.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawBag {
    pub colors: Vec<ColorToken>,
    pub typography: Vec<TypographyToken>,
    pub spacing: Vec<SpacingToken>,
    pub shadows: Vec<ShadowToken>,
    pub border_radius: Vec<BorderRadiusToken>,
}

impl RawBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append another bag, keeping this bag's tokens first.
    pub fn extend(&mut self, other: RawBag) {
        self.colors.extend(other.colors);
        self.typography.extend(other.typography);
        self.spacing.extend(other.spacing);
        self.shadows.extend(other.shadows);
        self.border_radius.extend(other.border_radius);
    }

    pub fn len(&self) -> usize {
        self.colors.len()
            + self.typography.len()
            + self.spacing.len()
            + self.shadows.len()
            + self.border_radius.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

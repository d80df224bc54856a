//! Resolved colour value.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::format_number;

/// An 8-bit RGB colour with a unit-interval alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Convert unit-interval channels, as design tools store them.
    ///
    /// Each channel becomes `round(c * 255)`, clamped to `0..=255`. Alpha is
    /// clamped to `0..=1` and kept to three decimals so the value prints
    /// stably.
    pub fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: unit_to_byte(r),
            g: unit_to_byte(g),
            b: unit_to_byte(b),
            a: (a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0,
        }
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Perceived luminance in `0..=1`.
    pub fn luminance(self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }

    /// Six-digit lowercase hex, ignoring alpha.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgba(r, g, b, a)`.
    pub fn rgba_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            format_number(self.a)
        )
    }

    /// CSS value for a colour token: hex when opaque, `rgba(...)` otherwise.
    pub fn css(self) -> String {
        if self.is_opaque() {
            self.hex()
        } else {
            self.rgba_css()
        }
    }

    /// CSS value inside a shadow: `rgb(...)` when opaque, `rgba(...)` otherwise.
    pub fn shadow_css(self) -> String {
        if self.is_opaque() {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            self.rgba_css()
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css())
    }
}

fn unit_to_byte(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unit() {
        assert_eq!(Rgba::from_unit(1.0, 1.0, 1.0, 1.0), Rgba::WHITE);
        assert_eq!(Rgba::from_unit(0.5, 0.0, 0.2, 1.0), Rgba::rgb(128, 0, 51));
    }

    #[test]
    fn test_from_unit_clamps() {
        let c = Rgba::from_unit(1.5, -0.2, 0.0, 2.0);
        assert_eq!(c, Rgba::rgb(255, 0, 0));
    }

    #[test]
    fn test_alpha_is_rounded() {
        let c = Rgba::from_unit(0.0, 0.0, 0.0, 0.10000000149011612);
        assert_eq!(c.a, 0.1);
        assert_eq!(c.css(), "rgba(0, 0, 0, 0.1)");
    }

    #[test]
    fn test_hex() {
        assert_eq!(Rgba::rgb(255, 0, 0).hex(), "#ff0000");
        assert_eq!(Rgba::rgb(0x1a, 0x1a, 0x2e).hex(), "#1a1a2e");
    }

    #[test]
    fn test_css_forms() {
        let opaque = Rgba::rgb(16, 32, 48);
        assert_eq!(opaque.css(), "#102030");
        assert_eq!(opaque.shadow_css(), "rgb(16, 32, 48)");

        let translucent = Rgba::new(0, 0, 0, 0.25);
        assert_eq!(translucent.css(), "rgba(0, 0, 0, 0.25)");
        assert_eq!(translucent.shadow_css(), "rgba(0, 0, 0, 0.25)");
    }

    #[test]
    fn test_luminance() {
        assert!((Rgba::WHITE.luminance() - 1.0).abs() < 1e-9);
        assert_eq!(Rgba::BLACK.luminance(), 0.0);
    }
}

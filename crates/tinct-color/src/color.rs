// SPDX-License-Identifier: MIT
//
// tinct color value — an HSL triple plus its two string encodings.
//
// Hue is in degrees and conceptually wraps at 360. Saturation and lightness
// are fractions where 0.0–1.0 is the meaningful range. Arithmetic that
// produces this type (the theme engine) is free to leave those ranges; the
// formatters print whatever they are given, and CSS consumers clamp/wrap on
// their side.

use std::fmt;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A color stored as hue/saturation/lightness.
///
/// Immutable value type: every operation returns a new `Color`.
///
/// # Examples
///
/// ```
/// use tinct_color::Color;
///
/// let violet = Color::hsl(265.0, 0.7, 0.5);
/// assert_eq!(violet.to_string(), "hsl(265deg 70% 50%)");
/// assert_eq!(violet.components().to_string(), "265deg 70% 50%");
///
/// let parsed: Color = "hsl(265deg 70% 50%)".parse().unwrap();
/// assert_eq!(parsed, violet);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Hue angle in degrees. 0° = red, 120° = green, 240° = blue.
    pub hue: f64,

    /// Saturation: 0.0 (gray) to 1.0 (fully saturated).
    pub saturation: f64,

    /// Lightness: 0.0 (black) to 1.0 (white), 0.5 is the pure hue.
    pub lightness: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from HSL values.
    ///
    /// - `hue`: degrees, not wrapped
    /// - `saturation`: 0.0 to 1.0, not clamped
    /// - `lightness`: 0.0 to 1.0, not clamped
    #[inline]
    #[must_use]
    pub const fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Pure black.
    pub const BLACK: Self = Self::hsl(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::hsl(0.0, 0.0, 1.0);

    // ─── Builders ────────────────────────────────────────────────────────

    /// Return a copy with the given hue.
    #[inline]
    #[must_use]
    pub const fn with_hue(self, hue: f64) -> Self {
        Self { hue, ..self }
    }

    /// Return a copy with the given saturation.
    #[inline]
    #[must_use]
    pub const fn with_saturation(self, saturation: f64) -> Self {
        Self { saturation, ..self }
    }

    /// Return a copy with the given lightness.
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, lightness: f64) -> Self {
        Self { lightness, ..self }
    }

    /// Rotate the hue by `degrees`. The result is not wrapped into [0, 360).
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        self.with_hue(self.hue + degrees)
    }

    // ─── Range handling ──────────────────────────────────────────────────

    /// Wrap hue into [0, 360) and clamp saturation/lightness into [0, 1].
    ///
    /// The theme engine never calls this; it exists for consumers that need
    /// canonical values (e.g. converting to RGB).
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            hue: self.hue.rem_euclid(360.0),
            saturation: self.saturation.clamp(0.0, 1.0),
            lightness: self.lightness.clamp(0.0, 1.0),
        }
    }

    /// Whether every channel is already inside its canonical range.
    #[must_use]
    pub fn is_normalized(self) -> bool {
        (0.0..360.0).contains(&self.hue)
            && (0.0..=1.0).contains(&self.saturation)
            && (0.0..=1.0).contains(&self.lightness)
    }

    // ─── Encodings ───────────────────────────────────────────────────────

    /// Borrow-free display adapter for the components encoding.
    ///
    /// Formats as `<hue>deg <saturation>% <lightness>%`.
    #[inline]
    #[must_use]
    pub const fn components(self) -> Components {
        Components(self)
    }

    /// Saturation as a whole percentage, rounded half away from zero.
    #[inline]
    #[must_use]
    pub fn saturation_percent(self) -> f64 {
        percent(self.saturation)
    }

    /// Lightness as a whole percentage, rounded half away from zero.
    #[inline]
    #[must_use]
    pub fn lightness_percent(self) -> f64 {
        percent(self.lightness)
    }
}

/// Scale a fraction to a rounded percentage. `+ 0.0` folds `-0` into `0`.
fn percent(fraction: f64) -> f64 {
    (100.0 * fraction).round() + 0.0
}

/// Format a color as `"<hue>deg <s>% <l>%"`.
#[must_use]
pub fn components_string(color: Color) -> String {
    color.components().to_string()
}

/// Format a color as `"hsl(<components>)"`.
#[must_use]
pub fn color_string(color: Color) -> String {
    color.to_string()
}

// ─── Display ─────────────────────────────────────────────────────────────────

/// Display adapter returned by [`Color::components`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Components(Color);

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = self.0;
        write!(
            f,
            "{}deg {}% {}%",
            color.hue + 0.0,
            color.saturation_percent(),
            color.lightness_percent()
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({})", self.components())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Encodings ────────────────────────────────────────────────────────

    #[test]
    fn components_basic() {
        let c = Color::hsl(265.0, 0.7, 0.5);
        assert_eq!(components_string(c), "265deg 70% 50%");
    }

    #[test]
    fn color_string_wraps_components() {
        let c = Color::hsl(120.0, 0.25, 0.8);
        assert_eq!(color_string(c), "hsl(120deg 25% 80%)");
        assert_eq!(color_string(c), format!("hsl({})", components_string(c)));
    }

    #[test]
    fn hue_is_not_rounded() {
        let c = Color::hsl(12.5, 0.5, 0.5);
        assert_eq!(components_string(c), "12.5deg 50% 50%");
    }

    #[test]
    fn hue_is_not_wrapped() {
        let c = Color::hsl(475.0, 0.7, 0.5);
        assert_eq!(components_string(c), "475deg 70% 50%");
        let c = Color::hsl(-30.0, 0.7, 0.5);
        assert_eq!(components_string(c), "-30deg 70% 50%");
    }

    #[test]
    fn percent_rounds_half_away_from_zero() {
        assert_eq!(components_string(Color::hsl(0.0, 0.125, 0.5)), "0deg 13% 50%");
        assert_eq!(components_string(Color::hsl(0.0, -0.125, 0.5)), "0deg -13% 50%");
    }

    #[test]
    fn percent_follows_float_value_not_decimal_literal() {
        // 0.5 + 0.075 lands just under 0.575, so the percentage rounds down.
        let c = Color::hsl(0.0, 0.7, 0.5 + 0.075);
        assert_eq!(components_string(c), "0deg 70% 57%");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        let c = Color::hsl(-0.0, -0.001, -0.0);
        assert_eq!(components_string(c), "0deg 0% 0%");
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let c = Color::hsl(0.0, 1.5, -0.2);
        assert_eq!(components_string(c), "0deg 150% -20%");
    }

    #[test]
    fn display_matches_color_string() {
        let c = Color::hsl(300.0, 0.1, 0.975);
        assert_eq!(c.to_string(), color_string(c));
    }

    // ── Builders ─────────────────────────────────────────────────────────

    #[test]
    fn builders_replace_one_channel() {
        let c = Color::hsl(10.0, 0.2, 0.3);
        assert_eq!(c.with_hue(20.0), Color::hsl(20.0, 0.2, 0.3));
        assert_eq!(c.with_saturation(0.9), Color::hsl(10.0, 0.9, 0.3));
        assert_eq!(c.with_lightness(0.4), Color::hsl(10.0, 0.2, 0.4));
    }

    #[test]
    fn shift_hue_does_not_wrap() {
        let c = Color::hsl(265.0, 0.5, 0.5).shift_hue(210.0);
        assert_eq!(c.hue, 475.0);
    }

    // ── Normalization ────────────────────────────────────────────────────

    #[test]
    fn normalized_wraps_and_clamps() {
        let c = Color::hsl(475.0, 1.2, -0.1).normalized();
        assert_eq!(c, Color::hsl(115.0, 1.0, 0.0));
    }

    #[test]
    fn normalized_wraps_negative_hue() {
        let c = Color::hsl(-150.0, 0.5, 0.5).normalized();
        assert_eq!(c.hue, 210.0);
    }

    #[test]
    fn is_normalized() {
        assert!(Color::hsl(359.0, 1.0, 0.0).is_normalized());
        assert!(!Color::hsl(360.0, 0.5, 0.5).is_normalized());
        assert!(!Color::hsl(0.0, 0.5, 1.01).is_normalized());
        assert!(Color::hsl(720.0, 3.0, -1.0).normalized().is_normalized());
    }

    #[test]
    fn constants() {
        assert_eq!(Color::BLACK.to_string(), "hsl(0deg 0% 0%)");
        assert_eq!(Color::WHITE.to_string(), "hsl(0deg 0% 100%)");
    }
}

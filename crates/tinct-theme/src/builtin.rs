//! Built-in presets — the stock light and dark configuration.
//!
//! Both share the same violet brand hue and differ chiefly in `factor`.
//! Each variant is derived once, on first use, and shared read-only for
//! the rest of the process.

use std::sync::LazyLock;

use crate::engine::{ThemeColors, derive};
use crate::scheme::ColorScheme;
use crate::settings::{ColorSettings, Factor, ShadowSettings, ThemeSettings};
use crate::tokens::TokenTable;

/// Brand hue of the stock presets.
pub const BRAND_HUE: f64 = 265.0;

/// Class selector the dark sheet is scoped to by default.
pub const DEFAULT_DARK_CLASS: &str = "dark-theme";

static LIGHT: LazyLock<ThemeColors> = LazyLock::new(|| derive(&light_settings()));
static DARK: LazyLock<ThemeColors> = LazyLock::new(|| derive(&dark_settings()));

/// Settings of the stock light variant.
#[must_use]
pub fn light_settings() -> ThemeSettings {
    ThemeSettings {
        base: ColorSettings::new()
            .with_hue(BRAND_HUE)
            .with_saturation(0.7)
            .with_lightness(0.5)
            .with_bias(0.075)
            .with_factor(Factor::Positive),
        brand: Some(ColorSettings::new().with_lightness(0.15)),
        surface: Some(ColorSettings::new().with_factor(Factor::Positive)),
        ..ThemeSettings::default()
    }
}

/// Settings of the stock dark variant.
#[must_use]
pub fn dark_settings() -> ThemeSettings {
    ThemeSettings {
        base: ColorSettings::new()
            .with_hue(BRAND_HUE)
            .with_saturation(0.8)
            .with_lightness(0.5)
            .with_bias(0.075)
            .with_factor(Factor::Negative),
        brand: Some(ColorSettings::new().with_saturation(0.0).with_lightness(0.15)),
        text: Some(ColorSettings::new().with_lightness(0.9).with_factor(Factor::Negative)),
        surface: Some(
            ColorSettings::new()
                .with_saturation(0.005)
                .with_lightness(0.2)
                .with_step(0.075)
                .with_factor(Factor::Negative),
        ),
        shadow: Some(ShadowSettings { strength: Some(75.0) }),
        ..ThemeSettings::default()
    }
}

/// Stock settings for a scheme.
#[must_use]
pub fn settings(scheme: ColorScheme) -> ThemeSettings {
    match scheme {
        ColorScheme::Light => light_settings(),
        ColorScheme::Dark => dark_settings(),
    }
}

/// The stock light variant.
#[must_use]
pub fn light() -> &'static ThemeColors {
    &LIGHT
}

/// The stock dark variant.
#[must_use]
pub fn dark() -> &'static ThemeColors {
    &DARK
}

/// The stock variant for a scheme.
#[must_use]
pub fn theme(scheme: ColorScheme) -> &'static ThemeColors {
    match scheme {
        ColorScheme::Light => light(),
        ColorScheme::Dark => dark(),
    }
}

/// Look up a builtin variant by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_theme(name: &str) -> Option<&'static ThemeColors> {
    name.parse().ok().map(theme)
}

/// List all builtin variant names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["light", "dark"]
}

/// Render both variants as one style sheet: light tokens on `:root`, dark
/// tokens on `.<dark_class>`.
#[must_use]
pub fn stylesheet(light: &TokenTable, dark: &TokenTable, dark_class: &str) -> String {
    let mut css = light.to_css(":root");
    css.push('\n');
    css.push_str(&dark.to_css(&format!(".{dark_class}")));
    css
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

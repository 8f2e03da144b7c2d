//! Palette derivation — from [`ThemeSettings`] to [`ThemeColors`].
//!
//! One formula produces the four tones of every role:
//!
//! ```text
//! adjust    = factor * side * ((state / 2 + 1.5) * bias)
//!               side  = -1 for foreground, +1 for background
//!               state = factor when active, -factor when resting
//! lightness = base.lightness + lightness_bias + adjust
//! ```
//!
//! With `factor = 1` backgrounds sit above the base lightness and
//! foregrounds below it, and the active tone moves further out. With
//! `factor = -1` every one of those offsets flips, which is how the dark
//! variant falls out of the same math.
//!
//! The engine is pure. Equal settings give bit-identical results; nothing
//! is clamped or wrapped.

use tinct_color::Color;
use tracing::debug;

use crate::palette::{ColorVariant, Palette, Role, SemanticColor};
use crate::settings::{ColorSettings, Factor, ThemeSettings};
use crate::shadow::{self, SHADOW_LEVELS};

/// Number of text shades.
pub const TEXT_SHADES: usize = 2;

/// Number of surface shades.
pub const SURFACE_SHADES: usize = 4;

/// Primary/secondary sit this far past the complement of the base hue.
pub const ACCENT_OFFSET: f64 = 30.0;

const COMPLEMENT: f64 = 180.0;

// ── Defaults ─────────────────────────────────────────────────────────────

const BASE_HUE: f64 = 0.0;
const BASE_SATURATION: f64 = 0.5;
const BASE_LIGHTNESS: f64 = 0.5;
const BASE_BIAS: f64 = 0.2;

const TEXT_SATURATION: f64 = 0.2;
const TEXT_LIGHTNESS: f64 = 0.1;
const TEXT_STEP: f64 = 0.2;
const TEXT_BIAS: f64 = 0.0;

const SURFACE_SATURATION: f64 = 0.1;
const SURFACE_LIGHTNESS: f64 = 0.975;
const SURFACE_STEP: f64 = 0.025;
const SURFACE_BIAS: f64 = 0.0;

// ---------------------------------------------------------------------------
// ThemeColors
// ---------------------------------------------------------------------------

/// A fully derived theme variant.
///
/// `text` and `surface` are ordered by decreasing emphasis; `shadow` by
/// increasing elevation.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    pub color: Palette,
    pub text: [Color; TEXT_SHADES],
    pub surface: [Color; SURFACE_SHADES],
    pub shadow: [String; SHADOW_LEVELS],
}

/// Derive a complete theme variant.
#[must_use]
pub fn derive(settings: &ThemeSettings) -> ThemeColors {
    ThemeEngine::new(settings).derive()
}

// ---------------------------------------------------------------------------
// ThemeEngine
// ---------------------------------------------------------------------------

/// Settings with the base defaults resolved.
///
/// Exposes the individual derivation steps, and roles outside the exported
/// palette (e.g. [`Role::Emerald`]).
#[derive(Debug, Clone, Copy)]
pub struct ThemeEngine<'a> {
    settings: &'a ThemeSettings,
    hue: f64,
    saturation: f64,
    lightness: f64,
    bias: f64,
    factor: Factor,
}

impl<'a> ThemeEngine<'a> {
    #[must_use]
    pub fn new(settings: &'a ThemeSettings) -> Self {
        let base = &settings.base;
        Self {
            settings,
            hue: base.hue.unwrap_or(BASE_HUE),
            saturation: base.saturation.unwrap_or(BASE_SATURATION),
            lightness: base.lightness.unwrap_or(BASE_LIGHTNESS),
            bias: base.bias.unwrap_or(BASE_BIAS),
            factor: base.factor.unwrap_or_default(),
        }
    }

    /// The resolved base hue.
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    /// The resolved base factor.
    #[must_use]
    pub const fn factor(&self) -> Factor {
        self.factor
    }

    /// Run every step.
    #[must_use]
    pub fn derive(&self) -> ThemeColors {
        let colors = ThemeColors {
            color: self.palette(),
            text: self.text(),
            surface: self.surface(),
            shadow: self.shadow(),
        };
        debug!(
            hue = self.hue,
            saturation = self.saturation,
            lightness = self.lightness,
            bias = self.bias,
            factor = i64::from(self.factor),
            "derived theme colors"
        );
        colors
    }

    // ── Roles ────────────────────────────────────────────────────────────

    /// One tone of a role.
    fn cell(
        &self,
        hue: f64,
        saturation_bias: f64,
        lightness_bias: f64,
        foreground: bool,
        active: bool,
    ) -> Color {
        let factor = self.factor.sign();
        let side = if foreground { -1.0 } else { 1.0 };
        let state = if active { factor } else { -factor };
        let adjust = factor * side * ((state / 2.0 + 1.5) * self.bias);
        Color::hsl(
            hue,
            self.saturation + saturation_bias,
            self.lightness + lightness_bias + adjust,
        )
    }

    /// All four tones for a hue and a pair of biases.
    #[must_use]
    pub fn grab_color(&self, hue: f64, saturation_bias: f64, lightness_bias: f64) -> SemanticColor {
        let variant = |foreground| ColorVariant {
            normal: self.cell(hue, saturation_bias, lightness_bias, foreground, false),
            active: self.cell(hue, saturation_bias, lightness_bias, foreground, true),
        };
        SemanticColor {
            bg: variant(false),
            fg: variant(true),
        }
    }

    /// Derive any role, including ones outside the exported palette.
    #[must_use]
    pub fn semantic(&self, role: Role) -> SemanticColor {
        let o = self.settings.role_override(role).copied().unwrap_or_default();
        let saturation_bias = o.saturation.unwrap_or(0.0);
        let lightness_bias = o.lightness.unwrap_or(0.0);
        let accent = COMPLEMENT + ACCENT_OFFSET;

        let hue = match role {
            Role::Brand => self.hue,
            Role::Primary => self.hue + accent,
            Role::Secondary => self.hue - accent,
            fixed => o.hue.or(fixed.fixed_hue()).unwrap_or(self.hue),
        };
        self.grab_color(hue, saturation_bias, lightness_bias)
    }

    /// The exported palette.
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::from_fn(|role| self.semantic(role))
    }

    // ── Shades ───────────────────────────────────────────────────────────

    /// Text shades, strongest first.
    #[must_use]
    pub fn text(&self) -> [Color; TEXT_SHADES] {
        let s = self.settings.text.unwrap_or_default();
        let saturation = s.saturation.unwrap_or(TEXT_SATURATION);
        let lightness = s.lightness.unwrap_or(TEXT_LIGHTNESS);
        let step = s.step.unwrap_or(TEXT_STEP);
        let bias = s.bias.unwrap_or(TEXT_BIAS);
        let factor = s.factor.unwrap_or_default().sign();

        std::array::from_fn(|i| {
            let i = i as f64;
            Color::hsl(
                self.hue,
                saturation / (i + 1.0),
                lightness + i * factor * step - factor * bias,
            )
        })
    }

    /// Surface shades, a lightness staircase for nested panels.
    #[must_use]
    pub fn surface(&self) -> [Color; SURFACE_SHADES] {
        let s: ColorSettings = self.settings.surface.unwrap_or_default();
        let saturation = s.saturation.unwrap_or(SURFACE_SATURATION);
        let lightness = s.lightness.unwrap_or(SURFACE_LIGHTNESS);
        let step = s.step.unwrap_or(SURFACE_STEP);
        let bias = s.bias.unwrap_or(SURFACE_BIAS);
        let factor = s.factor.unwrap_or_default().sign();

        std::array::from_fn(|i| {
            let i = i as f64;
            Color::hsl(
                self.hue,
                saturation,
                lightness - factor * step * i + factor * bias,
            )
        })
    }

    /// Box-shadow strings, lowest elevation first.
    #[must_use]
    pub fn shadow(&self) -> [String; SHADOW_LEVELS] {
        let strength = self
            .settings
            .shadow
            .and_then(|s| s.strength)
            .unwrap_or(shadow::DEFAULT_STRENGTH);
        shadow::layered_shadows(self.hue, strength)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ShadowSettings;
    use pretty_assertions::assert_eq;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn base(factor: Factor) -> ColorSettings {
        ColorSettings::new()
            .with_hue(265.0)
            .with_saturation(0.7)
            .with_lightness(0.5)
            .with_bias(0.075)
            .with_factor(factor)
    }

    fn light() -> ThemeColors {
        derive(&ThemeSettings::new(base(Factor::Positive)))
    }

    fn dark() -> ThemeColors {
        derive(&ThemeSettings::new(base(Factor::Negative)))
    }

    // ── Defaults ─────────────────────────────────────────────────────────

    #[test]
    fn empty_settings_use_defaults() {
        let t = derive(&ThemeSettings::default());
        let brand = t.color.get(Role::Brand).unwrap();
        // bias .2, resting background: .5 + 1 * (1 * .2) = .7
        assert_eq!(brand.bg.normal, Color::hsl(0.0, 0.5, 0.7));
        assert!(approx(brand.bg.active.lightness, 0.9));
        assert!(approx(brand.fg.normal.lightness, 0.3));
        assert!(approx(brand.fg.active.lightness, 0.1));
        assert_eq!(t.shadow[0], "0 .1em .15em -.1em hsl(0 3% 15% / 10%)");
    }

    // ── Roles ────────────────────────────────────────────────────────────

    #[test]
    fn red_resting_background() {
        let red = *light().color.get(Role::Red).unwrap();
        assert_eq!(red.bg.normal.hue, 0.0);
        assert_eq!(red.bg.normal.saturation, 0.7);
        assert_eq!(format!("{:.3}", red.bg.normal.lightness), "0.575");
    }

    #[test]
    fn light_tones_fan_out_from_base() {
        let red = *light().color.get(Role::Red).unwrap();
        assert!(approx(red.bg.normal.lightness, 0.575));
        assert!(approx(red.bg.active.lightness, 0.65));
        assert!(approx(red.fg.normal.lightness, 0.425));
        assert!(approx(red.fg.active.lightness, 0.35));
    }

    #[test]
    fn dark_tones_mirror_light() {
        let l = *light().color.get(Role::Green).unwrap();
        let d = *dark().color.get(Role::Green).unwrap();
        assert!(approx(d.bg.normal.lightness, l.fg.active.lightness));
        assert!(approx(d.bg.active.lightness, l.fg.normal.lightness));
        assert!(approx(d.fg.normal.lightness, l.bg.active.lightness));
        assert!(approx(d.fg.active.lightness, l.bg.normal.lightness));
    }

    #[test]
    fn offsets_flip_sign_with_factor() {
        let l = *light().color.get(Role::Blue).unwrap();
        let d = *dark().color.get(Role::Blue).unwrap();
        let offset = |c: Color| c.lightness - 0.5;
        assert!(approx(offset(l.bg.normal), 0.075));
        assert!(approx(offset(l.bg.active), 0.15));
        assert!(approx(offset(d.bg.normal), -offset(l.bg.active)));
        assert!(approx(offset(d.bg.active), -offset(l.bg.normal)));
        assert!(approx(offset(d.fg.normal), -offset(l.fg.active)));
        assert!(approx(offset(d.fg.active), -offset(l.fg.normal)));
    }

    #[test]
    fn accent_hues() {
        let t = light();
        assert_eq!(t.color.get(Role::Brand).unwrap().bg.normal.hue, 265.0);
        assert_eq!(t.color.get(Role::Primary).unwrap().bg.normal.hue, 475.0);
        assert_eq!(t.color.get(Role::Secondary).unwrap().bg.normal.hue, 55.0);
    }

    #[test]
    fn fixed_hues_ignore_base() {
        let t = light();
        for role in Role::PALETTE.iter().filter(|r| r.fixed_hue().is_some()) {
            let c = t.color.get(*role).unwrap();
            assert_eq!(Some(c.fg.active.hue), role.fixed_hue(), "{role}");
        }
    }

    #[test]
    fn brand_override_biases_accents_only() {
        let settings = ThemeSettings {
            brand: Some(ColorSettings::new().with_saturation(-0.2).with_lightness(0.15)),
            ..ThemeSettings::new(base(Factor::Positive))
        };
        let t = derive(&settings);
        for role in [Role::Brand, Role::Primary, Role::Secondary] {
            let c = t.color.get(role).unwrap();
            assert!(approx(c.bg.normal.lightness, 0.725), "{role}");
            assert!(approx(c.bg.normal.saturation, 0.5), "{role}");
        }
        let red = t.color.get(Role::Red).unwrap();
        assert!(approx(red.bg.normal.lightness, 0.575));
    }

    #[test]
    fn role_override_replaces_fixed_hue() {
        let settings = ThemeSettings {
            red: Some(ColorSettings::new().with_hue(355.0).with_lightness(-0.05)),
            ..ThemeSettings::new(base(Factor::Positive))
        };
        let red = *derive(&settings).color.get(Role::Red).unwrap();
        assert_eq!(red.bg.normal.hue, 355.0);
        assert!(approx(red.bg.normal.lightness, 0.525));
    }

    #[test]
    fn emerald_is_derivable() {
        let settings = ThemeSettings::new(base(Factor::Positive));
        let engine = ThemeEngine::new(&settings);
        let emerald = engine.semantic(Role::Emerald);
        assert_eq!(emerald.bg.normal.hue, 150.0);
        assert_eq!(emerald.bg.normal.lightness, engine.semantic(Role::Red).bg.normal.lightness);
        assert!(engine.palette().get(Role::Emerald).is_none());
    }

    #[test]
    fn grab_color_matches_semantic() {
        let settings = ThemeSettings::new(base(Factor::Negative));
        let engine = ThemeEngine::new(&settings);
        assert_eq!(engine.grab_color(180.0, 0.0, 0.0), engine.semantic(Role::Cyan));
    }

    // ── Text ─────────────────────────────────────────────────────────────

    #[test]
    fn text_defaults() {
        let t = light();
        assert_eq!(t.text[0], Color::hsl(265.0, 0.2, 0.1));
        assert_eq!(t.text[1].saturation, 0.1);
        assert!(approx(t.text[1].lightness, 0.3));
    }

    #[test]
    fn text_factor_and_bias() {
        let settings = ThemeSettings {
            text: Some(
                ColorSettings::new()
                    .with_lightness(0.9)
                    .with_bias(0.05)
                    .with_factor(Factor::Negative),
            ),
            ..ThemeSettings::new(base(Factor::Negative))
        };
        let t = derive(&settings);
        assert!(approx(t.text[0].lightness, 0.95));
        assert!(approx(t.text[1].lightness, 0.75));
    }

    #[test]
    fn text_step_is_configurable() {
        let settings = ThemeSettings {
            text: Some(ColorSettings::new().with_step(0.3)),
            ..ThemeSettings::default()
        };
        let t = derive(&settings);
        assert!(approx(t.text[1].lightness, 0.4));
    }

    // ── Surface ──────────────────────────────────────────────────────────

    #[test]
    fn surface_staircase() {
        let t = light();
        let ls: Vec<f64> = t.surface.iter().map(|c| c.lightness).collect();
        for (got, want) in ls.iter().zip([0.975, 0.95, 0.925, 0.9]) {
            assert!(approx(*got, want), "{got} != {want}");
        }
        assert!(t.surface.iter().all(|c| c.saturation == 0.1 && c.hue == 265.0));
    }

    #[test]
    fn surface_factor_flips_bias_term() {
        let with = |factor| ThemeSettings {
            surface: Some(ColorSettings::new().with_bias(0.05).with_factor(factor)),
            ..ThemeSettings::new(base(factor))
        };
        let up = derive(&with(Factor::Positive));
        let down = derive(&with(Factor::Negative));
        assert!(approx(up.surface[0].lightness, 0.975 + 0.05));
        assert!(approx(down.surface[0].lightness, 0.975 - 0.05));
    }

    #[test]
    fn base_factor_leaves_surfaces_alone() {
        assert_eq!(light().surface, dark().surface);
    }

    #[test]
    fn dark_surface_climbs() {
        let settings = ThemeSettings {
            surface: Some(
                ColorSettings::new()
                    .with_saturation(0.005)
                    .with_lightness(0.2)
                    .with_step(0.075)
                    .with_factor(Factor::Negative),
            ),
            ..ThemeSettings::new(base(Factor::Negative))
        };
        let t = derive(&settings);
        assert!(approx(t.surface[3].lightness, 0.425));
        assert!(t.surface.windows(2).all(|w| w[0].lightness < w[1].lightness));
    }

    // ── Shadows ──────────────────────────────────────────────────────────

    #[test]
    fn shadow_strength_from_settings() {
        let settings = ThemeSettings {
            shadow: Some(ShadowSettings { strength: Some(75.0) }),
            ..ThemeSettings::new(base(Factor::Negative))
        };
        let t = derive(&settings);
        assert_eq!(t.shadow[0], "0 .1em .15em -.1em hsl(265 3% 15% / 84%)");
    }

    // ── Purity ───────────────────────────────────────────────────────────

    #[test]
    fn deterministic() {
        assert_eq!(light(), light());
        assert_eq!(dark(), dark());
        assert_ne!(light().color, dark().color);
    }

    #[test]
    fn engine_accessors() {
        let settings = ThemeSettings::new(base(Factor::Negative));
        let engine = ThemeEngine::new(&settings);
        assert_eq!(engine.hue(), 265.0);
        assert_eq!(engine.factor(), Factor::Negative);
        assert_eq!(engine.derive(), derive(&settings));
    }
}

//! Engine input — the seed parameters a theme is derived from.
//!
//! [`ThemeSettings`] is a closed record: every recognized option is a named
//! field, and unknown keys are rejected when deserializing. Every field
//! except `base` is optional and every numeric knob falls back to a fixed
//! default inside the engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::palette::Role;

/// Invalid settings values that survive type checking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// `factor` accepts exactly `1` or `-1`.
    #[error("factor must be 1 or -1, got {0}")]
    InvalidFactor(i64),
}

// ---------------------------------------------------------------------------
// Factor
// ---------------------------------------------------------------------------

/// Direction of every lightness/step adjustment.
///
/// Light themes use [`Factor::Positive`]; dark themes use
/// [`Factor::Negative`], which mirrors the same formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Factor {
    #[default]
    Positive,
    Negative,
}

impl Factor {
    /// `1.0` or `-1.0`.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

impl TryFrom<i64> for Factor {
    type Error = SettingsError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Positive),
            -1 => Ok(Self::Negative),
            other => Err(SettingsError::InvalidFactor(other)),
        }
    }
}

impl From<Factor> for i64 {
    fn from(factor: Factor) -> Self {
        match factor {
            Factor::Positive => 1,
            Factor::Negative => -1,
        }
    }
}

// ---------------------------------------------------------------------------
// ColorSettings
// ---------------------------------------------------------------------------

/// Optional tuning knobs for one part of the theme.
///
/// Which knobs are read, and what they default to, depends on where the
/// record sits in [`ThemeSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lightness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bias: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<Factor>,
}

impl ColorSettings {
    /// All knobs unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hue: None,
            saturation: None,
            lightness: None,
            step: None,
            bias: None,
            factor: None,
        }
    }

    #[must_use]
    pub const fn with_hue(mut self, hue: f64) -> Self {
        self.hue = Some(hue);
        self
    }

    #[must_use]
    pub const fn with_saturation(mut self, saturation: f64) -> Self {
        self.saturation = Some(saturation);
        self
    }

    #[must_use]
    pub const fn with_lightness(mut self, lightness: f64) -> Self {
        self.lightness = Some(lightness);
        self
    }

    #[must_use]
    pub const fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    #[must_use]
    pub const fn with_bias(mut self, bias: f64) -> Self {
        self.bias = Some(bias);
        self
    }

    #[must_use]
    pub const fn with_factor(mut self, factor: Factor) -> Self {
        self.factor = Some(factor);
        self
    }
}

/// Shadow tuning. Only the opacity offset is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShadowSettings {
    /// Added to every layer's opacity percentage (default `1`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
}

// ---------------------------------------------------------------------------
// ThemeSettings
// ---------------------------------------------------------------------------

/// Everything one `derive` call reads.
///
/// | Field     | Knobs read                                   | Effect |
/// |-----------|----------------------------------------------|--------|
/// | `base`    | hue, saturation, lightness, bias, factor     | seeds every role |
/// | `text`    | saturation, lightness, step, bias, factor    | the two text shades |
/// | `surface` | saturation, lightness, step, bias, factor    | the four surface shades |
/// | `shadow`  | strength                                     | shadow opacity offset |
/// | `brand`   | saturation, lightness                        | biases for brand, primary, secondary |
/// | `primary`, `secondary` | any                             | accepted, no effect; the accents follow `brand` |
/// | `red` … `pink`, `emerald` | hue, saturation, lightness   | hue replaces the fixed hue; the rest are biases |
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeSettings {
    pub base: ColorSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<ColorSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<ColorSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<ColorSettings>,
    /// Accepted for every role name, but the accents derive from `brand`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<ColorSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<ColorSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red: Option<ColorSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orange: Option<ColorSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yellow: Option<ColorSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green: Option<ColorSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emerald: Option<ColorSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cyan: Option<ColorSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue: Option<ColorSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purple: Option<ColorSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pink: Option<ColorSettings>,
}

impl ThemeSettings {
    /// Settings with only `base` filled in.
    #[must_use]
    pub fn new(base: ColorSettings) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// The override record that applies to `role`.
    ///
    /// Brand, primary and secondary all share `brand`; the `primary` and
    /// `secondary` records are never consulted.
    #[must_use]
    pub const fn role_override(&self, role: Role) -> Option<&ColorSettings> {
        match role {
            Role::Brand | Role::Primary | Role::Secondary => self.brand.as_ref(),
            Role::Red => self.red.as_ref(),
            Role::Orange => self.orange.as_ref(),
            Role::Yellow => self.yellow.as_ref(),
            Role::Green => self.green.as_ref(),
            Role::Emerald => self.emerald.as_ref(),
            Role::Cyan => self.cyan.as_ref(),
            Role::Blue => self.blue.as_ref(),
            Role::Purple => self.purple.as_ref(),
            Role::Pink => self.pink.as_ref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

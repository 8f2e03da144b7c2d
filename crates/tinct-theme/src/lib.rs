//! # tinct-theme — theme color derivation engine
//!
//! Expands a handful of numeric seeds (hue, saturation, lightness, bias,
//! factor) into a complete interface palette: semantic color roles, text
//! shades, surface shades and elevation shadows. The same formulas produce
//! the light and the dark variant; flipping `factor` mirrors every
//! directional adjustment.
//!
//! # Architecture
//!
//! ```text
//! ThemeSettings (settings.rs, config.rs for TOML)
//!     │
//!     ▼
//! engine.rs:  resolve defaults, derive ThemeColors (pure math)
//!     │         ├─ palette.rs: roles → bg/fg × normal/active
//!     │         └─ shadow.rs:  fixed layer tables → box-shadow strings
//!     ▼
//! tokens.rs:  flatten into named tokens (8 per role) + text/surface/shadows
//!     │
//!     ▼
//! builtin.rs: light/dark presets, derived once, rendered as CSS
//! ```
//!
//! Nothing here clamps or wraps color channels. See [`tinct_color::Color::normalized`]
//! for consumers that need canonical values.
//!
//! ```
//! use tinct_theme::{ColorSettings, Role, ThemeSettings, derive};
//!
//! let settings = ThemeSettings {
//!     base: ColorSettings::new().with_hue(265.0).with_saturation(0.7),
//!     ..ThemeSettings::default()
//! };
//! let colors = derive(&settings);
//! assert_eq!(colors.color.get(Role::Red).unwrap().bg.normal.hue, 0.0);
//! assert_eq!(colors.text.len(), 2);
//! ```

// Loop indices become shade multipliers.
#![allow(clippy::cast_precision_loss)]
// Formulas keep unfused evaluation order so token output is stable.
#![allow(clippy::suboptimal_flops)]

pub mod builtin;
pub mod config;
pub mod engine;
pub mod palette;
pub mod scheme;
pub mod settings;
pub mod shadow;
pub mod tokens;

pub use config::{ConfigError, ThemeConfig};
pub use engine::{SURFACE_SHADES, TEXT_SHADES, ThemeColors, ThemeEngine, derive};
pub use palette::{ColorVariant, Palette, Role, SemanticColor};
pub use scheme::ColorScheme;
pub use settings::{ColorSettings, Factor, SettingsError, ShadowSettings, ThemeSettings};
pub use shadow::{Elevation, SHADOW_LEVELS};
pub use tokens::{TOKENS_PER_ROLE, TokenTable, flatten};

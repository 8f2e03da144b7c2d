//! TOML configuration — per-variant [`ThemeSettings`] loaded from disk.
//!
//! ```toml
//! dark_class = "dark-theme"
//!
//! [light.base]
//! hue = 265
//! saturation = 0.7
//! bias = 0.075
//!
//! [dark.base]
//! hue = 265
//! factor = -1
//!
//! [dark.surface]
//! lightness = 0.2
//! factor = -1
//! ```
//!
//! A missing `[light]` or `[dark]` table falls back to the built-in preset.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::builtin;
use crate::engine::{ThemeColors, derive};
use crate::scheme::ColorScheme;
use crate::settings::ThemeSettings;

/// Failure to read or parse a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read theme config {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme config {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings for both variants plus presentation options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<ThemeSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<ThemeSettings>,
    /// Class the dark sheet is scoped to (default `dark-theme`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_class: Option<String>,
}

impl ThemeConfig {
    /// Read and parse a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file can't be read, [`ConfigError::Parse`]
    /// if its contents are not a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            light = config.light.is_some(),
            dark = config.dark.is_some(),
            "loaded theme config"
        );
        Ok(config)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed input, unknown keys, or
    /// out-of-range values such as `factor = 2`.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Settings for a scheme, falling back to the built-in preset.
    #[must_use]
    pub fn settings(&self, scheme: ColorScheme) -> ThemeSettings {
        let configured = match scheme {
            ColorScheme::Light => self.light.as_ref(),
            ColorScheme::Dark => self.dark.as_ref(),
        };
        configured.cloned().unwrap_or_else(|| builtin::settings(scheme))
    }

    /// Derive the variant for a scheme.
    #[must_use]
    pub fn derive(&self, scheme: ColorScheme) -> ThemeColors {
        derive(&self.settings(scheme))
    }

    /// Class selector for the dark sheet.
    #[must_use]
    pub fn dark_class(&self) -> &str {
        self.dark_class.as_deref().unwrap_or(builtin::DEFAULT_DARK_CLASS)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Light/dark selection.
//!
//! The application keeps two precomputed variants and picks one per
//! request: an explicit user choice wins, then the client's advertised
//! preference, then dark. Only an explicit `dark` selects the dark variant.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

/// Which theme variant to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

/// A scheme name other than `light` or `dark`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color scheme {0:?} (expected `light` or `dark`)")]
pub struct ParseSchemeError(String);

impl ColorScheme {
    /// Both schemes, light first.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Pick a scheme from a stored user choice and a client hint.
    ///
    /// The first value present decides: the user choice, else the hint,
    /// else dark. A present value that is not a scheme name means light.
    #[must_use]
    pub fn resolve(user: Option<&str>, system: Option<&str>) -> Self {
        let Some((source, value)) = [("user", user), ("system", system)]
            .into_iter()
            .find_map(|(source, value)| Some((source, value?)))
        else {
            return Self::default();
        };
        value.parse().unwrap_or_else(|err| {
            debug!(source, %err, "unrecognized color scheme, using light");
            Self::Light
        })
    }
}

impl FromStr for ColorScheme {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseSchemeError(s.to_owned())),
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("light".parse(), Ok(ColorScheme::Light));
        assert_eq!(" Dark ".parse(), Ok(ColorScheme::Dark));
        assert!("sepia".parse::<ColorScheme>().is_err());
    }

    #[test]
    fn display_roundtrip() {
        for scheme in ColorScheme::ALL {
            assert_eq!(scheme.to_string().parse(), Ok(scheme));
        }
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(ColorScheme::resolve(None, None), ColorScheme::Dark);
        assert!(ColorScheme::default().is_dark());
    }

    #[test]
    fn user_choice_wins() {
        assert_eq!(
            ColorScheme::resolve(Some("light"), Some("dark")),
            ColorScheme::Light
        );
    }

    #[test]
    fn system_hint_used_without_user_choice() {
        assert_eq!(ColorScheme::resolve(None, Some("light")), ColorScheme::Light);
    }

    #[test]
    fn unrecognized_value_means_light() {
        assert_eq!(
            ColorScheme::resolve(Some("no-preference"), Some("dark")),
            ColorScheme::Light
        );
        assert_eq!(ColorScheme::resolve(Some("???"), None), ColorScheme::Light);
        assert_eq!(ColorScheme::resolve(None, Some("")), ColorScheme::Light);
    }

    #[test]
    fn explicit_dark_is_honored() {
        assert_eq!(ColorScheme::resolve(Some(" DARK "), None), ColorScheme::Dark);
        assert_eq!(ColorScheme::resolve(None, Some("dark")), ColorScheme::Dark);
    }

    #[test]
    fn error_message() {
        let err = "sepia".parse::<ColorScheme>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown color scheme \"sepia\" (expected `light` or `dark`)"
        );
    }
}

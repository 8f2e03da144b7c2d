// SPDX-License-Identifier: MIT
//
// Parsing for the two tinct color encodings.
//
// Accepted forms (surrounding whitespace ignored):
//
//   265deg 70% 50%
//   hsl(265deg 70% 50%)
//
// Hue may be a signed decimal; percentages may carry a fractional part.
// Percentages are divided by 100 on the way in, so parsing the output of
// the formatters recovers the rounded channel values exactly.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::color::Color;

const NUMBER: &str = r"[+-]?(?:\d+(?:\.\d*)?|\.\d+)";

static HSL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^\s*(?P<open>hsl\(\s*)?(?P<h>{NUMBER})deg\s+(?P<s>{NUMBER})%\s+(?P<l>{NUMBER})%\s*(?P<close>\))?\s*$"
    );
    Regex::new(&pattern).expect("HSL pattern is valid")
});

/// Why a string could not be read as a [`Color`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The input does not have the `<h>deg <s>% <l>%` shape.
    #[error("expected `<hue>deg <saturation>% <lightness>%`, got {0:?}")]
    Malformed(String),

    /// `hsl(` without a closing `)` or the other way round.
    #[error("unbalanced parentheses in {0:?}")]
    Unbalanced(String),
}

impl Color {
    /// Parse either the components encoding or the `hsl(...)` encoding.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] when the input matches neither form.
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        let caps = HSL_PATTERN
            .captures(s)
            .ok_or_else(|| ParseColorError::Malformed(s.to_owned()))?;

        if caps.name("open").is_some() != caps.name("close").is_some() {
            return Err(ParseColorError::Unbalanced(s.to_owned()));
        }

        let number = |name: &str| -> Result<f64, ParseColorError> {
            caps.name(name)
                .and_then(|m| m.as_str().parse::<f64>().ok())
                .ok_or_else(|| ParseColorError::Malformed(s.to_owned()))
        };

        Ok(Self::hsl(
            number("h")?,
            number("s")? / 100.0,
            number("l")? / 100.0,
        ))
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

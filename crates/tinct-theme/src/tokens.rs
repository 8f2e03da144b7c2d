//! Design tokens — the flat name → color-string table handed to the
//! presentation layer.
//!
//! Each color is emitted twice: `<name>` holds the full `hsl(...)` value and
//! `<name>-hsl` the bare components, so style sheets can add their own alpha
//! (`hsl(var(--colors-brandBg-hsl) / 40%)`).

use std::collections::BTreeMap;

use serde::Serialize;
use tinct_color::Color;

use crate::engine::ThemeColors;
use crate::palette::{Palette, SemanticColor};
use crate::shadow::Elevation;

/// Tokens emitted per palette role.
pub const TOKENS_PER_ROLE: usize = 8;

/// Role token suffixes and the tone each one names.
const ROLE_SUFFIXES: [(&str, fn(&SemanticColor) -> Color); 4] = [
    ("Bg", |c| c.bg.normal),
    ("BgA", |c| c.bg.active),
    ("Fg", |c| c.fg.normal),
    ("FgA", |c| c.fg.active),
];

fn insert_pair(map: &mut BTreeMap<String, String>, name: String, color: Color) {
    map.insert(format!("{name}-hsl"), color.components().to_string());
    map.insert(name, color.to_string());
}

/// Expand a palette into `<role>{Bg,BgA,Fg,FgA}` tokens and their `-hsl`
/// twins.
#[must_use]
pub fn flatten(palette: &Palette) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for (role, color) in palette.iter() {
        for (suffix, tone) in ROLE_SUFFIXES {
            insert_pair(&mut map, format!("{role}{suffix}"), tone(color));
        }
    }
    map
}

// ---------------------------------------------------------------------------
// TokenTable
// ---------------------------------------------------------------------------

/// All tokens of one theme variant.
///
/// `colors` carries the flattened palette plus `text1..2` and
/// `surface1..4`; `shadows` maps elevation names to box-shadow values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenTable {
    pub colors: BTreeMap<String, String>,
    pub shadows: BTreeMap<String, String>,
}

impl TokenTable {
    /// Build the table for a derived theme.
    #[must_use]
    pub fn from_colors(theme: &ThemeColors) -> Self {
        let mut colors = flatten(&theme.color);
        for (i, &c) in theme.text.iter().enumerate() {
            insert_pair(&mut colors, format!("text{}", i + 1), c);
        }
        for (i, &c) in theme.surface.iter().enumerate() {
            insert_pair(&mut colors, format!("surface{}", i + 1), c);
        }

        let shadows = Elevation::ALL
            .iter()
            .map(|e| (e.name().to_owned(), theme.shadow[e.index()].clone()))
            .collect();

        Self { colors, shadows }
    }

    /// Look up a color token.
    #[must_use]
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    /// Look up a shadow token.
    #[must_use]
    pub fn shadow(&self, elevation: Elevation) -> Option<&str> {
        self.shadows.get(elevation.name()).map(String::as_str)
    }

    /// Render as a CSS rule of custom properties.
    ///
    /// ```text
    /// :root {
    ///   --colors-blueBg: hsl(220deg 70% 58%);
    ///   ...
    ///   --shadows-large: 0 -.15em .3em 0 hsl(265 3% 15% / 3%), ...;
    /// }
    /// ```
    #[must_use]
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = format!("{selector} {{\n");
        let groups = [("colors", &self.colors), ("shadows", &self.shadows)];
        for (group, tokens) in groups {
            for (name, value) in tokens {
                css.push_str(&format!("  --{group}-{name}: {value};\n"));
            }
        }
        css.push_str("}\n");
        css
    }
}

impl From<&ThemeColors> for TokenTable {
    fn from(theme: &ThemeColors) -> Self {
        Self::from_colors(theme)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

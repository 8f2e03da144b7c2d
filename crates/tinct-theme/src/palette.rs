//! Semantic color roles — the named colors a theme exposes.
//!
//! Every role expands into a [`SemanticColor`]: a background and a
//! foreground, each with a resting (`normal`) and an interaction (`active`)
//! tone. The exported [`Palette`] always holds the same eleven roles.

use std::fmt;

use tinct_color::Color;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// A named semantic purpose for a color, independent of light/dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// The base hue itself.
    Brand,
    /// Base hue + 210°.
    Primary,
    /// Base hue − 210°.
    Secondary,
    Red,
    Orange,
    Yellow,
    Green,
    /// Derivable on demand; not part of the exported palette.
    Emerald,
    Cyan,
    Blue,
    Purple,
    Pink,
}

/// Number of roles in an exported [`Palette`].
pub const PALETTE_ROLES: usize = 11;

impl Role {
    /// The roles present in every [`Palette`], in token order.
    pub const PALETTE: [Self; PALETTE_ROLES] = [
        Self::Brand,
        Self::Primary,
        Self::Secondary,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Cyan,
        Self::Blue,
        Self::Purple,
        Self::Pink,
    ];

    /// Every role the engine knows how to derive.
    pub const ALL: [Self; 12] = [
        Self::Brand,
        Self::Primary,
        Self::Secondary,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Emerald,
        Self::Cyan,
        Self::Blue,
        Self::Purple,
        Self::Pink,
    ];

    /// Token prefix for this role (`"brand"`, `"red"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Emerald => "emerald",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
        }
    }

    /// Parse a role from its token prefix (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::ALL.iter().find(|r| r.name() == lower).copied()
    }

    /// Absolute hue for the fixed-hue roles. `None` for roles derived from
    /// the base hue.
    #[must_use]
    pub const fn fixed_hue(self) -> Option<f64> {
        match self {
            Self::Brand | Self::Primary | Self::Secondary => None,
            Self::Red => Some(0.0),
            Self::Orange => Some(20.0),
            Self::Yellow => Some(50.0),
            Self::Green => Some(120.0),
            Self::Emerald => Some(150.0),
            Self::Cyan => Some(180.0),
            Self::Blue => Some(220.0),
            Self::Purple => Some(260.0),
            Self::Pink => Some(300.0),
        }
    }

    /// Whether this role appears in an exported [`Palette`].
    #[must_use]
    pub fn in_palette(self) -> bool {
        Self::PALETTE.contains(&self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// ColorVariant / SemanticColor
// ---------------------------------------------------------------------------

/// Resting and interaction (hover/press) tone of the same color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorVariant {
    pub normal: Color,
    pub active: Color,
}

/// Background/foreground pair for one role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemanticColor {
    pub bg: ColorVariant,
    pub fg: ColorVariant,
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// The exported semantic colors of one theme variant.
///
/// Always contains exactly the roles in [`Role::PALETTE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    colors: [SemanticColor; PALETTE_ROLES],
}

impl Palette {
    /// Build a palette by deriving each exported role.
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(Role) -> SemanticColor) -> Self {
        Self {
            colors: std::array::from_fn(|i| f(Role::PALETTE[i])),
        }
    }

    /// Look up a role. `None` for roles outside [`Role::PALETTE`].
    #[must_use]
    pub fn get(&self, role: Role) -> Option<&SemanticColor> {
        Role::PALETTE
            .iter()
            .position(|&r| r == role)
            .map(|i| &self.colors[i])
    }

    /// Look up a role by its token prefix.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&SemanticColor> {
        Role::from_name(name).and_then(|role| self.get(role))
    }

    /// Iterate roles in [`Role::PALETTE`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &SemanticColor)> {
        Role::PALETTE.iter().copied().zip(self.colors.iter())
    }

    /// Number of roles (always [`PALETTE_ROLES`]).
    #[must_use]
    pub const fn len(&self) -> usize {
        PALETTE_ROLES
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Elevation shadows — layered `box-shadow` values.
//!
//! The layer geometry and per-layer opacity deltas are fixed; only the
//! shadow hue (taken from the base hue) and the strength offset vary.
//! Index 0 is the lowest elevation.

/// Number of elevation levels.
pub const SHADOW_LEVELS: usize = 5;

/// Saturation and lightness of every shadow layer, as CSS components.
const SHADOW_TONE: &str = "3% 15%";

/// Default opacity offset.
pub const DEFAULT_STRENGTH: f64 = 1.0;

/// Named elevation level, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Elevation {
    Tiny,
    Small,
    Normal,
    Medium,
    Large,
}

impl Elevation {
    /// All levels in index order.
    pub const ALL: [Self; SHADOW_LEVELS] = [
        Self::Tiny,
        Self::Small,
        Self::Normal,
        Self::Medium,
        Self::Large,
    ];

    /// Token name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Small => "small",
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Position in the shadow sequence.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One shadow layer: geometry (`x y blur spread`) and opacity delta.
struct Layer {
    geometry: &'static str,
    alpha: f64,
}

const fn layer(geometry: &'static str, alpha: f64) -> Layer {
    Layer { geometry, alpha }
}

const LEVELS: [&[Layer]; SHADOW_LEVELS] = [
    &[layer("0 .1em .15em -.1em", 9.0)],
    &[
        layer("0 .2em .3em -.15em", 3.0),
        layer("0 .4em .9em -.3em", 5.0),
    ],
    &[
        layer("0 .2em .3em -.15em", 3.0),
        layer("0 .4em .9em -.3em", 5.0),
        layer("0 0 1em 0", 15.0),
    ],
    &[
        layer("0 -.1em 2em 0", 2.0),
        layer("0 .1em .15em -.275em", 2.0),
        layer("0 .15em .3em -.3em", 4.0),
        layer("0 .25em .7em -.3em", 5.0),
        layer("0 .7em .95em -.3em", 7.0),
    ],
    &[
        layer("0 -.15em .3em 0", 2.0),
        layer("0 .1em .1em -.15em", 3.0),
        layer("0 .15em .15em -.15em", 3.0),
        layer("0 .3em .3em -.15em", 4.0),
        layer("0 .55em .55em -.15em", 5.0),
        layer("0 1em 1em -.15em", 6.0),
    ],
];

/// The shadow color components for `hue`, e.g. `"265 3% 15%"`.
#[must_use]
pub fn shadow_components(hue: f64) -> String {
    format!("{} {SHADOW_TONE}", hue + 0.0)
}

/// Number of layers at each elevation.
#[must_use]
pub fn layer_count(elevation: Elevation) -> usize {
    LEVELS[elevation.index()].len()
}

/// Render all elevation levels for a shadow hue and strength.
#[must_use]
pub fn layered_shadows(hue: f64, strength: f64) -> [String; SHADOW_LEVELS] {
    let components = shadow_components(hue);
    std::array::from_fn(|level| render_level(LEVELS[level], &components, strength))
}

fn render_level(layers: &[Layer], components: &str, strength: f64) -> String {
    layers
        .iter()
        .map(|layer| {
            format!(
                "{} hsl({components} / {}%)",
                layer.geometry,
                strength + layer.alpha
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

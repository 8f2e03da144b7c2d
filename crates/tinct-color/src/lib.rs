// SPDX-License-Identifier: MIT
//
// tinct-color — HSL color primitives for the tinct theme engine.
//
// A color here is nothing more than a hue/saturation/lightness triple. The
// theme engine does all of its math on these triples and hands the results
// to the presentation layer as strings, in one of two encodings:
//
//   components  →  "265deg 70% 50%"        (for `hsl(var(--x) / 50%)` tricks)
//   function    →  "hsl(265deg 70% 50%)"   (drop-in CSS color value)
//
// Both encodings can be parsed back into a `Color`. Values are never
// clamped or wrapped implicitly; `Color::normalized` does that on request.

pub mod color;
pub mod parse;

pub use color::{Color, Components, color_string, components_string};
pub use parse::ParseColorError;

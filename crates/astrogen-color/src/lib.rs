//! Color values, gradients, and randomized palettes for celestial body generation.
//!
//! Every generated vertex carries an RGBA color in linear `[0, 1]` space. Static
//! palettes are expressed as [`ColorGradient`] (two boundary colors sampled along a
//! factor) or [`ColorRange`] (per-channel uniform random ranges), so each body type
//! picks a palette instead of hand-rolling its own color function.

mod gradient;
mod range;
mod rgba;

pub use gradient::ColorGradient;
pub use range::ColorRange;
pub use rgba::Rgba;

//! Randomized per-channel color ranges.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Rgba;

/// A per-channel uniform random color range: "a category of randomized but
/// plausible colors" for a body type, such as the near-white palette of stars.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorRange {
    pub min: Rgba,
    pub max: Rgba,
}

impl ColorRange {
    pub const fn new(min: Rgba, max: Rgba) -> Self {
        Self { min, max }
    }

    /// Hot near-white star surface colors: every channel in `[0.8, 1.0]`.
    pub const fn star() -> Self {
        Self::new(Rgba::opaque(0.8, 0.8, 0.8), Rgba::WHITE)
    }

    /// Unconstrained opaque colors, used for planet surfaces.
    pub const fn planet() -> Self {
        Self::new(Rgba::opaque(0.0, 0.0, 0.0), Rgba::WHITE)
    }

    /// Draw one color, each channel uniform in `[min, max]` for that channel.
    pub fn sample(&self, rng: &mut impl Rng) -> Rgba {
        Rgba::new(
            sample_channel(rng, self.min.r, self.max.r),
            sample_channel(rng, self.min.g, self.max.g),
            sample_channel(rng, self.min.b, self.max.b),
            sample_channel(rng, self.min.a, self.max.a),
        )
    }
}

fn sample_channel(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    if min >= max {
        return min;
    }
    rng.random_range(min..=max)
}

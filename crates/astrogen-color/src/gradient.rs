//! Two-color linear gradients.

use serde::{Deserialize, Serialize};

use crate::Rgba;

/// A linear gradient between two boundary colors, sampled by a factor in `[0, 1]`.
///
/// Pure and deterministic: the same factor always yields the same color. Factors
/// outside `[0, 1]` are clamped before lookup so a renderer that does not clamp
/// colors itself never receives out-of-gamut values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorGradient {
    pub start: Rgba,
    pub end: Rgba,
}

impl ColorGradient {
    pub const fn new(start: Rgba, end: Rgba) -> Self {
        Self { start, end }
    }

    /// The purple-to-blue gradient used along nebula spiral arms.
    pub const fn nebula() -> Self {
        Self::new(Rgba::new(0.5, 0.0, 0.5, 1.0), Rgba::new(0.0, 0.0, 1.0, 1.0))
    }

    /// Sample the gradient. `factor` is clamped to `[0, 1]`.
    ///
    /// `sample(0.0)` returns `start` exactly and `sample(1.0)` returns `end`
    /// exactly; in between, each channel moves monotonically from start to end.
    pub fn sample(&self, factor: f32) -> Rgba {
        self.start.lerp(self.end, factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_endpoints_exact() {
        let g = ColorGradient::nebula();
        assert_eq!(g.sample(0.0), g.start);
        assert_eq!(g.sample(1.0), g.end);
    }

    #[test]
    fn test_sample_is_monotonic_per_channel() {
        let g = ColorGradient::new(Rgba::new(0.2, 0.9, 0.1, 1.0), Rgba::new(0.8, 0.1, 0.7, 1.0));
        let steps = 64;
        let mut prev = g.sample(0.0);
        for i in 1..=steps {
            let cur = g.sample(i as f32 / steps as f32);
            // Red and blue rise, green falls, alpha is constant.
            assert!(cur.r >= prev.r, "red must not decrease: {} -> {}", prev.r, cur.r);
            assert!(cur.b >= prev.b, "blue must not decrease: {} -> {}", prev.b, cur.b);
            assert!(cur.g <= prev.g, "green must not increase: {} -> {}", prev.g, cur.g);
            assert_eq!(cur.a, 1.0, "alpha must stay at the shared endpoint value");
            prev = cur;
        }
    }

    #[test]
    fn test_out_of_range_factors_clamp() {
        let g = ColorGradient::nebula();
        assert_eq!(g.sample(-1.0), g.start, "negative factors clamp to start");
        assert_eq!(g.sample(2.0), g.end, "factors above one clamp to end");
    }
}

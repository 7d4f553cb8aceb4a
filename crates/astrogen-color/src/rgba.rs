//! The RGBA color value type shared by all generators.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// An RGBA color in linear space, each channel in `[0, 1]`.
///
/// `#[repr(C)]` and `Pod` so vertex buffers containing colors can be uploaded
/// to a renderer as raw bytes without conversion.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    /// Create a color from explicit channel values.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a grayscale color at the given intensity, fully opaque.
    pub const fn gray(intensity: f32) -> Self {
        Self::new(intensity, intensity, intensity, 1.0)
    }

    /// Channel values as an array, in RGBA order.
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Clamp every channel to `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }

    /// Per-channel linear interpolation. `t` is clamped to `[0, 1]`, never
    /// extrapolated, so the result stays inside the gamut of the endpoints.
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            (1.0 - t) * self.r + t * other.r,
            (1.0 - t) * self.g + t * other.g,
            (1.0 - t) * self.b + t * other.b,
            (1.0 - t) * self.a + t * other.a,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_are_exact() {
        let a = Rgba::new(0.1, 0.2, 0.3, 0.4);
        let b = Rgba::new(0.9, 0.8, 0.7, 0.6);
        assert_eq!(a.lerp(b, 0.0), a, "lerp(0) must return the start exactly");
        assert_eq!(a.lerp(b, 1.0), b, "lerp(1) must return the end exactly");
    }

    #[test]
    fn test_lerp_clamps_factor() {
        let a = Rgba::BLACK;
        let b = Rgba::WHITE;
        assert_eq!(a.lerp(b, -2.0), a, "factors below 0 clamp to the start");
        assert_eq!(a.lerp(b, 5.0), b, "factors above 1 clamp to the end");
    }

    #[test]
    fn test_clamped_restores_gamut() {
        let c = Rgba::new(-0.5, 1.5, 0.5, 2.0).clamped();
        assert_eq!(c, Rgba::new(0.0, 1.0, 0.5, 1.0));
    }
}

//! Stars: glowing spheres with a pulsating point light.

use astrogen_color::{ColorRange, Rgba};
use astrogen_mesh::{Mesh, generate_uv_sphere};
use glam::Vec3;
use rand::Rng;

use crate::BodyError;
use crate::error::ensure_finite;

/// Star generation parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarParams {
    pub radius: f32,
    pub position: Vec3,
    pub segments: u32,
    /// Angular speed of the brightness pulse, in radians per second.
    pub pulsation_speed: f32,
}

impl Default for StarParams {
    fn default() -> Self {
        Self { radius: 1.0, position: Vec3::ZERO, segments: 32, pulsation_speed: 0.5 }
    }
}

/// A static star. The mesh never changes; the pulsing light intensity is a
/// pure function of elapsed time, evaluated by whoever drives the lighting.
#[derive(Debug)]
pub struct Star {
    params: StarParams,
    mesh: Mesh,
}

impl Star {
    /// Attenuation for the star's point light: a very wide falloff so the
    /// glow reaches distant bodies.
    pub const LIGHT_ATTENUATION: [f32; 3] = [0.0, 1e-4, 1e-4];

    /// Generate a star with the near-white star palette.
    pub fn generate(params: StarParams, rng: &mut impl Rng) -> Result<Self, BodyError> {
        ensure_finite("pulsation_speed", params.pulsation_speed)?;

        let palette = ColorRange::star();
        let mesh = generate_uv_sphere(params.radius, params.segments, |_, _| palette.sample(rng))?;
        Ok(Self { params, mesh })
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn position(&self) -> Vec3 {
        self.params.position
    }

    pub fn params(&self) -> &StarParams {
        &self.params
    }

    /// Normalized brightness of the pulse at elapsed time `t` seconds:
    /// `(sin(t * pulsation_speed) + 1) / 2`, always in `[0, 1]`.
    pub fn brightness(&self, t: f32) -> f32 {
        ((t * self.params.pulsation_speed).sin() + 1.0) / 2.0
    }

    /// The light color to hand the renderer at elapsed time `t`: the pulse
    /// brightness applied to all channels.
    pub fn light_color(&self, t: f32) -> Rgba {
        Rgba::gray(self.brightness(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn star() -> Star {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        Star::generate(StarParams::default(), &mut rng).unwrap()
    }

    #[test]
    fn test_surface_colors_use_star_palette() {
        let star = star();
        for v in &star.mesh().vertices {
            for value in [v.color.r, v.color.g, v.color.b] {
                assert!((0.8..=1.0).contains(&value), "star colors are near-white, got {value}");
            }
        }
    }

    #[test]
    fn test_brightness_pulse_stays_normalized() {
        let star = star();
        for i in 0..1000 {
            let t = i as f32 * 0.1;
            let b = star.brightness(t);
            assert!((0.0..=1.0).contains(&b), "brightness({t}) = {b} escaped [0, 1]");
        }
    }

    #[test]
    fn test_brightness_follows_the_sine_pulse() {
        let star = star();
        assert!((star.brightness(0.0) - 0.5).abs() < 1e-6, "pulse starts at mid-brightness");
        // sin reaches 1 at t * speed = π/2.
        let peak_t = std::f32::consts::FRAC_PI_2 / 0.5;
        assert!((star.brightness(peak_t) - 1.0).abs() < 1e-5);
        let trough_t = 3.0 * std::f32::consts::FRAC_PI_2 / 0.5;
        assert!(star.brightness(trough_t) < 1e-5);
    }

    #[test]
    fn test_light_color_is_grayscale_pulse() {
        let star = star();
        let c = star.light_color(1.7);
        let b = star.brightness(1.7);
        assert_eq!(c, Rgba::gray(b));
    }
}

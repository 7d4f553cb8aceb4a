//! Planets: tessellated spheres with optional rings.

use astrogen_color::Rgba;
use astrogen_mesh::{Mesh, generate_ring, generate_uv_sphere};
use glam::Vec3;
use rand::Rng;

use crate::BodyError;
use crate::error::ensure_finite;

/// Ring radii relative to the planet radius.
const RING_INNER_FACTOR: f32 = 1.2;
const RING_OUTER_FACTOR: f32 = 1.5;

/// Planet generation parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetParams {
    pub radius: f32,
    pub position: Vec3,
    /// Tessellation density of the sphere (and of the ring, if any).
    pub segments: u32,
    /// Surface base color; each vertex jitters around it.
    pub base_color: Rgba,
    /// Per-channel jitter half-width applied to every vertex color.
    pub color_jitter: f32,
    pub has_rings: bool,
    pub ring_color: Rgba,
}

impl Default for PlanetParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            position: Vec3::ZERO,
            segments: 32,
            base_color: Rgba::opaque(0.5, 0.4, 0.3),
            color_jitter: 0.15,
            has_rings: false,
            ring_color: Rgba::new(1.0, 0.9, 0.8, 0.3),
        }
    }
}

/// A static planet: one sphere mesh, optionally a flat ring annulus.
#[derive(Debug)]
pub struct Planet {
    params: PlanetParams,
    mesh: Mesh,
    ring: Option<Mesh>,
}

impl Planet {
    /// Generate a planet. The surface color is the base color with uniform
    /// per-vertex jitter, clamped back into gamut.
    pub fn generate(params: PlanetParams, rng: &mut impl Rng) -> Result<Self, BodyError> {
        ensure_finite("color_jitter", params.color_jitter)?;

        let base = params.base_color;
        let jitter = params.color_jitter.abs();
        let mesh = generate_uv_sphere(params.radius, params.segments, |_, _| {
            jittered(base, jitter, rng)
        })?;

        let ring = if params.has_rings {
            Some(generate_ring(
                params.radius * RING_INNER_FACTOR,
                params.radius * RING_OUTER_FACTOR,
                params.segments,
                params.ring_color,
            )?)
        } else {
            None
        };

        Ok(Self { params, mesh, ring })
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn ring(&self) -> Option<&Mesh> {
        self.ring.as_ref()
    }

    pub fn position(&self) -> Vec3 {
        self.params.position
    }

    pub fn params(&self) -> &PlanetParams {
        &self.params
    }
}

fn jittered(base: Rgba, jitter: f32, rng: &mut impl Rng) -> Rgba {
    if jitter == 0.0 {
        return base.clamped();
    }
    Rgba::new(
        base.r + rng.random_range(-jitter..=jitter),
        base.g + rng.random_range(-jitter..=jitter),
        base.b + rng.random_range(-jitter..=jitter),
        base.a,
    )
    .clamped()
}

//! Comets: moving bodies with a scattered glowing core and a decaying trail.

use astrogen_color::Rgba;
use astrogen_mesh::{Mesh, MeshError, Vertex};
use astrogen_trail::{ParticleTrail, TrailConfig};
use glam::Vec3;
use rand::Rng;

use crate::BodyError;
use crate::error::ensure_finite;

/// Points in the comet's scattered core cloud.
const CORE_POINTS: usize = 10;

/// Comet generation parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CometParams {
    /// Half-extent of the core scatter cloud.
    pub radius: f32,
    pub position: Vec3,
    /// Displacement per second of simulation time.
    pub velocity: Vec3,
    pub trail: TrailConfig,
}

impl Default for CometParams {
    fn default() -> Self {
        Self {
            radius: 10.0,
            position: Vec3::ZERO,
            velocity: Vec3::new(0.1, 0.0, 0.0),
            trail: TrailConfig::default(),
        }
    }
}

/// A comet: position + velocity state, a point-cloud core, and an owned
/// [`ParticleTrail`] that follows it.
#[derive(Debug)]
pub struct Comet {
    core: Mesh,
    position: Vec3,
    velocity: Vec3,
    trail: ParticleTrail,
}

impl Comet {
    /// The comet's light-blue glow.
    pub const LIGHT_COLOR: Rgba = Rgba::new(0.5, 0.5, 1.0, 1.0);
    /// Tight falloff: the glow hugs the comet.
    pub const LIGHT_ATTENUATION: [f32; 3] = [1.0, 0.0, 0.01];

    /// Generate a comet. The core is a loose scatter of [`CORE_POINTS`] light
    /// blue points within `±radius` of the body origin, rendered as sprites.
    pub fn generate(params: CometParams, rng: &mut impl Rng) -> Result<Self, BodyError> {
        if !params.radius.is_finite() || params.radius <= 0.0 {
            return Err(BodyError::Mesh(MeshError::InvalidParameter {
                name: "radius",
                value: params.radius as f64,
                reason: "must be finite and positive",
            }));
        }
        for (name, value) in [
            ("velocity.x", params.velocity.x),
            ("velocity.y", params.velocity.y),
            ("velocity.z", params.velocity.z),
        ] {
            ensure_finite(name, value)?;
        }

        let mut vertices = Vec::with_capacity(CORE_POINTS);
        for _ in 0..CORE_POINTS {
            let offset = Vec3::new(
                rng.random_range(-1.0..=1.0),
                rng.random_range(-1.0..=1.0),
                rng.random_range(-1.0..=1.0),
            ) * params.radius;
            vertices.push(Vertex::new(
                offset.to_array(),
                offset.normalize_or(Vec3::Z).to_array(),
                Self::LIGHT_COLOR,
            ));
        }

        Ok(Self {
            core: Mesh::points(vertices),
            position: params.position,
            velocity: params.velocity,
            trail: ParticleTrail::new(params.trail)?,
        })
    }

    /// Advance one simulation tick: move, then tick the trail at the new
    /// position (the trail must always see the post-move position).
    pub fn update(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.trail.tick(self.position);
    }

    pub fn core(&self) -> &Mesh {
        &self.core
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn trail(&self) -> &ParticleTrail {
        &self.trail
    }
}

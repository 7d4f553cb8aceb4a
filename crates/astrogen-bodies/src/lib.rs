//! Celestial body domain objects: planets, stars, comets, and nebulae.
//!
//! Each body composes the geometry generators into a domain object with its own
//! palette and parameters, plus whatever per-tick behavior it has (a comet moves
//! and drags a particle trail; a star pulses its light; planets and nebulae are
//! static). [`SceneState`] drives all active bodies once per simulation tick and
//! forwards their output to a [`RenderSink`], the in-process boundary behind
//! which the real renderer lives.

mod comet;
mod error;
mod nebula;
mod planet;
mod scene;
mod sink;
mod star;

pub use comet::{Comet, CometParams};
pub use error::BodyError;
pub use nebula::Nebula;
pub use planet::{Planet, PlanetParams};
pub use scene::{BodyId, SceneState};
pub use sink::{RecordingSink, RenderHandle, RenderSink, SinkCall};
pub use star::{Star, StarParams};

use astrogen_mesh::Mesh;
use astrogen_trail::ParticleTrail;
use glam::Vec3;

use astrogen_color::Rgba;

/// A celestial body of any kind.
///
/// The body capability set (mesh, position, animation, trail, light) is modeled
/// as accessors that return `Option`/no-op for variants without the capability.
#[derive(Debug)]
pub enum CelestialBody {
    Planet(Planet),
    Star(Star),
    Comet(Comet),
    Nebula(Nebula),
}

impl CelestialBody {
    /// The body's primary geometry (solid mesh or point cloud).
    pub fn mesh(&self) -> &Mesh {
        match self {
            CelestialBody::Planet(p) => p.mesh(),
            CelestialBody::Star(s) => s.mesh(),
            CelestialBody::Comet(c) => c.core(),
            CelestialBody::Nebula(n) => n.cloud(),
        }
    }

    /// Secondary geometry, currently only a planet's rings.
    pub fn secondary_mesh(&self) -> Option<&Mesh> {
        match self {
            CelestialBody::Planet(p) => p.ring(),
            _ => None,
        }
    }

    /// Current world position.
    pub fn position(&self) -> Vec3 {
        match self {
            CelestialBody::Planet(p) => p.position(),
            CelestialBody::Star(s) => s.position(),
            CelestialBody::Comet(c) => c.position(),
            CelestialBody::Nebula(n) => n.position(),
        }
    }

    /// Whether [`Self::update`] does anything for this body.
    pub fn is_animated(&self) -> bool {
        matches!(self, CelestialBody::Comet(_))
    }

    /// Advance the body by one simulation tick. Static bodies ignore this.
    ///
    /// Must be called exactly once per tick by the scheduler; a comet updates
    /// its position first and then ticks its trail against the new position.
    pub fn update(&mut self, dt: f32) {
        if let CelestialBody::Comet(c) = self {
            c.update(dt);
        }
    }

    /// The comet's trail, if this body has one.
    pub fn trail(&self) -> Option<&ParticleTrail> {
        match self {
            CelestialBody::Comet(c) => Some(c.trail()),
            _ => None,
        }
    }

    /// Light emission for bodies that glow, as `(color, attenuation)` at
    /// elapsed time `t`. A star's intensity pulses over time; a comet's glow
    /// is constant.
    pub fn light(&self, t: f32) -> Option<(Rgba, [f32; 3])> {
        match self {
            CelestialBody::Star(s) => Some((s.light_color(t), Star::LIGHT_ATTENUATION)),
            CelestialBody::Comet(_) => Some((Comet::LIGHT_COLOR, Comet::LIGHT_ATTENUATION)),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CelestialBody::Planet(_) => "planet",
            CelestialBody::Star(_) => "star",
            CelestialBody::Comet(_) => "comet",
            CelestialBody::Nebula(_) => "nebula",
        }
    }
}

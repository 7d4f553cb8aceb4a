//! Time-decaying particle trails for moving celestial bodies.
//!
//! A [`ParticleTrail`] keeps an ordered (oldest-first) collection of short-lived
//! particles marking past positions of its owner. Each simulation tick drops
//! expired particles, spawns one new particle at the owner's current position,
//! and decays every particle's life. The renderer learns about spawns and
//! removals through [`TrailEvent`]s and reads each particle's remaining life as
//! its opacity.

use std::collections::VecDeque;

use glam::Vec3;

/// Identifier for one trail particle, unique within its owning trail.
///
/// Used by the renderer to track the displayed representation of a particle
/// across ticks until its [`TrailEvent::Expired`] arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(u64);

impl ParticleId {
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// One particle of a trail. Exclusively owned by the trail that created it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailParticle {
    pub id: ParticleId,
    /// Owner's position at the moment the particle was created.
    pub position: Vec3,
    /// Remaining life in `[0, 1]`; the particle starts at 1.0 and is removed
    /// on the tick after life reaches 0.
    pub life: f32,
    /// Life lost per tick.
    pub decay: f32,
}

impl TrailParticle {
    /// Rendering opacity for this particle.
    pub fn alpha(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }
}

/// Lifecycle notifications emitted by [`ParticleTrail::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailEvent {
    /// A particle was created this tick.
    Spawned(ParticleId),
    /// A particle was removed (expired or evicted); the renderer must release
    /// its displayed representation.
    Expired(ParticleId),
}

/// Trail behavior parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailConfig {
    /// Life lost per tick by every particle. The default of 0.01 gives a
    /// ~100-tick lifetime at a fixed timestep.
    pub decay: f32,
    /// Hard cap on live particles. When full, the oldest particle is evicted
    /// before spawning, so memory stays bounded under tick-rate spikes.
    pub max_particles: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self { decay: 0.01, max_particles: 256 }
    }
}

/// Trail configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum TrailError {
    #[error("invalid decay ({0}): must be finite and positive")]
    InvalidDecay(f32),
    #[error("invalid max_particles (0): the trail needs room for at least one particle")]
    ZeroCapacity,
}

/// The decaying visual tail behind a moving body.
#[derive(Debug)]
pub struct ParticleTrail {
    particles: VecDeque<TrailParticle>,
    config: TrailConfig,
    next_id: u64,
    events: Vec<TrailEvent>,
}

impl ParticleTrail {
    /// Create an empty trail. Fails fast on a non-positive decay or a zero cap
    /// rather than producing particles that never expire.
    pub fn new(config: TrailConfig) -> Result<Self, TrailError> {
        if !config.decay.is_finite() || config.decay <= 0.0 {
            return Err(TrailError::InvalidDecay(config.decay));
        }
        if config.max_particles == 0 {
            return Err(TrailError::ZeroCapacity);
        }
        Ok(Self {
            particles: VecDeque::with_capacity(config.max_particles.min(1024)),
            config,
            next_id: 0,
            events: Vec::new(),
        })
    }

    /// Advance the trail by one tick at the owner's current position.
    ///
    /// Order matters and is fixed:
    /// 1. remove expired particles (life ≤ 0), emitting [`TrailEvent::Expired`];
    /// 2. spawn one particle at `position` with life 1.0 (evicting the oldest
    ///    first if the trail is at capacity);
    /// 3. decay every particle, including the one just spawned.
    ///
    /// Returns the events of this tick, also available via [`Self::last_events`].
    pub fn tick(&mut self, position: Vec3) -> &[TrailEvent] {
        self.events.clear();

        let events = &mut self.events;
        self.particles.retain(|p| {
            if p.life <= 0.0 {
                events.push(TrailEvent::Expired(p.id));
                false
            } else {
                true
            }
        });

        if self.particles.len() >= self.config.max_particles
            && let Some(oldest) = self.particles.pop_front()
        {
            log::debug!("trail at capacity, evicting particle {}", oldest.id.0);
            self.events.push(TrailEvent::Expired(oldest.id));
        }

        let id = ParticleId(self.next_id);
        self.next_id += 1;
        self.particles.push_back(TrailParticle {
            id,
            position,
            life: 1.0,
            decay: self.config.decay,
        });
        self.events.push(TrailEvent::Spawned(id));

        for p in &mut self.particles {
            p.life -= p.decay;
        }

        &self.events
    }

    /// Events emitted by the most recent [`Self::tick`].
    pub fn last_events(&self) -> &[TrailEvent] {
        &self.events
    }

    /// Live particles, oldest first (creation order).
    pub fn iter(&self) -> impl Iterator<Item = &TrailParticle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }
}

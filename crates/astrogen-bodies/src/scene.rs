//! Scene state: the explicit per-tick value owned by the external scheduler.
//!
//! Holds the active bodies and their render handles, and drives one simulation
//! tick at a time. No globals: whoever runs the simulation owns a
//! [`SceneState`] and passes a [`RenderSink`] into each call.

use glam::Quat;

use crate::{CelestialBody, RenderHandle, RenderSink};
use astrogen_trail::TrailEvent;

/// Identifier for a spawned body, stable until despawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(u64);

impl BodyId {
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct SceneEntry {
    id: BodyId,
    body: CelestialBody,
    mesh_handle: RenderHandle,
    secondary_handle: Option<RenderHandle>,
}

/// All active bodies plus elapsed simulation time.
#[derive(Debug, Default)]
pub struct SceneState {
    entries: Vec<SceneEntry>,
    next_id: u64,
    elapsed: f32,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body to the scene: submits its geometry to the sink, places it,
    /// and attaches its light if it has one. Returns the id used to address
    /// the body later.
    pub fn spawn(&mut self, body: CelestialBody, sink: &mut impl RenderSink) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;

        let mesh_handle = sink.submit_mesh(body.mesh());
        let secondary_handle = body.secondary_mesh().map(|mesh| {
            let handle = sink.submit_mesh(mesh);
            sink.update_transform(handle, body.position(), Some(Quat::IDENTITY));
            handle
        });
        sink.update_transform(mesh_handle, body.position(), None);
        if let Some((color, attenuation)) = body.light(self.elapsed) {
            sink.apply_light(mesh_handle, color, attenuation);
        }

        log::debug!(
            "spawned {} #{} with {} vertices",
            body.kind(),
            id.0,
            body.mesh().vertex_count()
        );
        self.entries.push(SceneEntry { id, body, mesh_handle, secondary_handle });
        id
    }

    /// Remove a body. Returns false if the id is unknown (already despawned).
    /// The sink is told to release any remaining trail particles.
    pub fn despawn(&mut self, id: BodyId, sink: &mut impl RenderSink) -> bool {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            return false;
        };
        let entry = self.entries.swap_remove(index);
        if let Some(trail) = entry.body.trail() {
            for particle in trail.iter() {
                sink.remove_point(entry.mesh_handle, particle.id);
            }
        }
        true
    }

    /// Advance the whole scene by one tick.
    ///
    /// Each animated body is updated exactly once; a comet's own `update`
    /// moves it before its trail ticks, so the read-after-write ordering for a
    /// single body holds by construction. Bodies never read each other's
    /// state, so the iteration order across bodies carries no meaning.
    pub fn advance(&mut self, dt: f32, sink: &mut impl RenderSink) {
        self.elapsed += dt;

        for entry in &mut self.entries {
            entry.body.update(dt);

            match &entry.body {
                CelestialBody::Comet(comet) => {
                    sink.update_transform(entry.mesh_handle, comet.position(), None);
                    for event in comet.trail().last_events() {
                        if let TrailEvent::Expired(particle) = event {
                            sink.remove_point(entry.mesh_handle, *particle);
                        }
                    }
                    for particle in comet.trail().iter() {
                        sink.set_point_alpha(entry.mesh_handle, particle.id, particle.alpha());
                    }
                }
                CelestialBody::Star(star) => {
                    sink.apply_light(
                        entry.mesh_handle,
                        star.light_color(self.elapsed),
                        crate::Star::LIGHT_ATTENUATION,
                    );
                }
                _ => {}
            }
        }
    }

    pub fn body(&self, id: BodyId) -> Option<&CelestialBody> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.body)
    }

    /// Render handles for a body: `(mesh, optional secondary mesh)`.
    pub fn handles(&self, id: BodyId) -> Option<(RenderHandle, Option<RenderHandle>)> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| (e.mesh_handle, e.secondary_handle))
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate all live bodies with their ids.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &CelestialBody)> {
        self.entries.iter().map(|e| (e.id, &e.body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Comet, CometParams, Nebula, Planet, PlanetParams, RecordingSink, SinkCall, Star, StarParams,
    };
    use astrogen_mesh::SpiralCloudParams;
    use glam::Vec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(1)
    }

    fn comet(velocity: Vec3) -> CelestialBody {
        CelestialBody::Comet(
            Comet::generate(CometParams { velocity, ..Default::default() }, &mut rng()).unwrap(),
        )
    }

    #[test]
    fn test_spawn_submits_each_mesh_once() {
        let mut sink = RecordingSink::new();
        let mut scene = SceneState::new();

        let planet = Planet::generate(
            PlanetParams { has_rings: true, segments: 8, ..Default::default() },
            &mut rng(),
        )
        .unwrap();
        scene.spawn(CelestialBody::Planet(planet), &mut sink);
        assert_eq!(sink.submitted_meshes(), 2, "sphere and ring each submitted once");

        let nebula =
            Nebula::generate(&SpiralCloudParams::default(), Vec3::ZERO, &mut rng()).unwrap();
        scene.spawn(CelestialBody::Nebula(nebula), &mut sink);
        assert_eq!(sink.submitted_meshes(), 3);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_advance_moves_comet_and_updates_trail_alphas() {
        let mut sink = RecordingSink::new();
        let mut scene = SceneState::new();
        let id = scene.spawn(comet(Vec3::new(1.0, 0.0, 0.0)), &mut sink);
        let (handle, _) = scene.handles(id).unwrap();
        sink.clear();

        scene.advance(1.0, &mut sink);

        assert!(
            sink.calls().contains(&SinkCall::UpdateTransform {
                handle,
                position: Vec3::new(1.0, 0.0, 0.0)
            }),
            "comet transform must reflect the post-move position"
        );
        let alpha_updates = sink
            .calls()
            .iter()
            .filter(|c| matches!(c, SinkCall::SetPointAlpha { .. }))
            .count();
        assert_eq!(alpha_updates, 1, "one live trail particle after one tick");
    }

    #[test]
    fn test_advance_pulses_star_light() {
        let mut sink = RecordingSink::new();
        let mut scene = SceneState::new();
        let star = Star::generate(StarParams { segments: 4, ..Default::default() }, &mut rng())
            .unwrap();
        scene.spawn(CelestialBody::Star(star), &mut sink);
        sink.clear();

        scene.advance(0.5, &mut sink);
        scene.advance(0.5, &mut sink);

        let lights: Vec<_> = sink
            .calls()
            .iter()
            .filter(|c| matches!(c, SinkCall::ApplyLight { .. }))
            .collect();
        assert_eq!(lights.len(), 2, "one light update per tick");
        assert_ne!(lights[0], lights[1], "the pulse changes the light color over time");
    }

    #[test]
    fn test_expired_particles_are_removed_through_the_sink() {
        let mut sink = RecordingSink::new();
        let mut scene = SceneState::new();
        let fast_decay = CometParams {
            trail: astrogen_trail::TrailConfig { decay: 2.0, max_particles: 64 },
            ..Default::default()
        };
        let body =
            CelestialBody::Comet(Comet::generate(fast_decay, &mut rng()).unwrap());
        scene.spawn(body, &mut sink);

        scene.advance(1.0, &mut sink); // spawns a particle that expires instantly
        sink.clear();
        scene.advance(1.0, &mut sink); // removal surfaces on the next tick

        let removals = sink
            .calls()
            .iter()
            .filter(|c| matches!(c, SinkCall::RemovePoint { .. }))
            .count();
        assert_eq!(removals, 1, "the expired particle must be released exactly once");
    }

    #[test]
    fn test_despawn_is_idempotent_and_releases_trail_points() {
        let mut sink = RecordingSink::new();
        let mut scene = SceneState::new();
        let id = scene.spawn(comet(Vec3::X), &mut sink);
        scene.advance(1.0, &mut sink);
        sink.clear();

        assert!(scene.despawn(id, &mut sink), "first despawn succeeds");
        assert_eq!(
            sink.calls()
                .iter()
                .filter(|c| matches!(c, SinkCall::RemovePoint { .. }))
                .count(),
            1,
            "the live trail particle is released on despawn"
        );
        assert!(!scene.despawn(id, &mut sink), "second despawn is a no-op");
        assert!(scene.is_empty());
    }

    #[test]
    fn test_static_bodies_do_not_change_under_advance() {
        let mut sink = RecordingSink::new();
        let mut scene = SceneState::new();
        let nebula =
            Nebula::generate(&SpiralCloudParams::default(), Vec3::ZERO, &mut rng()).unwrap();
        let id = scene.spawn(CelestialBody::Nebula(nebula), &mut sink);
        sink.clear();

        scene.advance(1.0, &mut sink);
        assert!(sink.calls().is_empty(), "a static nebula emits nothing per tick");
        assert_eq!(scene.body(id).unwrap().position(), Vec3::ZERO);
    }
}

//! Randomized scene population from configured parameter ranges.

use astrogen_bodies::{
    BodyError, CelestialBody, Comet, CometParams, Nebula, Planet, PlanetParams, Star, StarParams,
};
use astrogen_color::{ColorRange, Rgba};
use astrogen_config::GenConfig;
use astrogen_mesh::SpiralCloudParams;
use astrogen_trail::TrailConfig;
use glam::Vec3;
use rand::Rng;

/// Draw one body of a random kind, with parameters uniform within the
/// configured ranges, positioned within `spawn_distance` of the origin.
pub fn random_body(config: &GenConfig, rng: &mut impl Rng) -> Result<CelestialBody, BodyError> {
    let position = random_position(config.scene.spawn_distance, rng);
    let body = match rng.random_range(0..4u8) {
        0 => {
            let c = &config.comet;
            CelestialBody::Comet(Comet::generate(
                CometParams {
                    radius: rng.random_range(c.radius_min..=c.radius_max),
                    position,
                    // Comets drift in the horizontal plane.
                    velocity: Vec3::new(
                        rng.random_range(c.speed_min..=c.speed_max),
                        0.0,
                        rng.random_range(c.speed_min..=c.speed_max),
                    ),
                    trail: TrailConfig { decay: c.trail_decay, max_particles: c.trail_max_particles },
                },
                rng,
            )?)
        }
        1 => {
            let n = &config.nebula;
            let params = SpiralCloudParams {
                num_arms: rng.random_range(n.arms_min..=n.arms_max),
                points_per_arm: rng.random_range(n.points_per_arm_min..=n.points_per_arm_max),
                scale: rng.random_range(n.scale_min..=n.scale_max),
                thickness: rng.random_range(n.thickness_min..=n.thickness_max),
                depth: n.depth,
                particles_per_point: n.particles_per_point,
            };
            CelestialBody::Nebula(Nebula::generate(&params, position, rng)?)
        }
        2 => {
            let p = &config.planet;
            let base_color = ColorRange::planet().sample(rng);
            CelestialBody::Planet(Planet::generate(
                PlanetParams {
                    radius: rng.random_range(p.radius_min..=p.radius_max),
                    position,
                    segments: p.segments,
                    base_color,
                    color_jitter: p.color_jitter,
                    has_rings: rng.random::<f32>() < p.ring_chance,
                    ring_color: Rgba::new(1.0, 0.9, 0.8, 0.3),
                },
                rng,
            )?)
        }
        _ => {
            let s = &config.star;
            CelestialBody::Star(Star::generate(
                StarParams {
                    radius: rng.random_range(s.radius_min..=s.radius_max),
                    position,
                    segments: s.segments,
                    pulsation_speed: s.pulsation_speed,
                },
                rng,
            )?)
        }
    };
    Ok(body)
}

fn random_position(distance: f32, rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.random_range(-distance..=distance),
        rng.random_range(-distance..=distance),
        rng.random_range(-distance..=distance),
    )
}

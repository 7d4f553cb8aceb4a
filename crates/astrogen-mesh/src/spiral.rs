//! Spiral-arm point cloud generation for nebulae.

use astrogen_color::ColorGradient;
use glam::Vec3;
use rand::Rng;

use crate::error::{ensure_at_least, ensure_non_negative, ensure_positive};
use crate::{Mesh, MeshError, Vertex};

/// Parameters for an Archimedean spiral-arm point cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralCloudParams {
    /// Number of spiral arms, evenly offset around the center.
    pub num_arms: u32,
    /// Backbone points along each arm.
    pub points_per_arm: u32,
    /// Spiral growth factor: arm radius is `scale * theta`.
    pub scale: f32,
    /// Jitter half-width on x/y around each backbone point.
    pub thickness: f32,
    /// Z jitter multiplier: z spreads over `thickness * depth`.
    pub depth: f32,
    /// Cloud samples scattered around each backbone point.
    pub particles_per_point: u32,
}

impl Default for SpiralCloudParams {
    fn default() -> Self {
        Self {
            num_arms: 2,
            points_per_arm: 100,
            scale: 1.0,
            thickness: 0.1,
            depth: 5.0,
            particles_per_point: 10,
        }
    }
}

impl SpiralCloudParams {
    /// Total number of generated points.
    pub fn point_count(&self) -> usize {
        self.num_arms as usize * self.points_per_arm as usize * self.particles_per_point as usize
    }

    fn validate(&self) -> Result<(), MeshError> {
        ensure_at_least("num_arms", self.num_arms, 1)?;
        ensure_at_least("points_per_arm", self.points_per_arm, 1)?;
        ensure_at_least("particles_per_point", self.particles_per_point, 1)?;
        ensure_positive("scale", self.scale)?;
        ensure_non_negative("thickness", self.thickness)?;
        ensure_non_negative("depth", self.depth)?;
        Ok(())
    }
}

/// Generate a scattered point cloud following Archimedean spiral arms
/// (`r = scale * theta`), colored along `gradient` from arm center to tip.
///
/// Each backbone point spawns `particles_per_point` samples jittered by
/// `±thickness` on x/y and `±thickness * depth` on z, giving the cloud its
/// volume. Normals are fixed to +Z for flat-facing point sprites. Yields
/// exactly `num_arms * points_per_arm * particles_per_point` points.
pub fn generate_spiral_cloud(
    params: &SpiralCloudParams,
    gradient: &ColorGradient,
    rng: &mut impl Rng,
) -> Result<Mesh, MeshError> {
    params.validate()?;

    let normal = Vec3::Z.to_array();
    let z_spread = params.thickness * params.depth;
    let mut vertices = Vec::with_capacity(params.point_count());

    for arm in 0..params.num_arms {
        let angle_offset = std::f32::consts::TAU * arm as f32 / params.num_arms as f32;
        for i in 0..params.points_per_arm {
            // A single-point arm sits at the arm's angle offset (factor 0);
            // the usual i / (points_per_arm - 1) would divide by zero.
            let factor = if params.points_per_arm == 1 {
                0.0
            } else {
                i as f32 / (params.points_per_arm - 1) as f32
            };
            let theta = factor * std::f32::consts::TAU + angle_offset;
            let r = params.scale * theta;
            let x = r * theta.cos();
            let y = r * theta.sin();

            let color = gradient.sample(factor);
            for _ in 0..params.particles_per_point {
                let position = [
                    x + jitter(rng, params.thickness),
                    y + jitter(rng, params.thickness),
                    jitter(rng, z_spread),
                ];
                vertices.push(Vertex::new(position, normal, color));
            }
        }
    }

    Ok(Mesh::points(vertices))
}

fn jitter(rng: &mut impl Rng, amount: f32) -> f32 {
    if amount == 0.0 {
        return 0.0;
    }
    rng.random_range(-amount..=amount)
}

//! Nebulae: static spiral-arm point clouds.

use astrogen_color::ColorGradient;
use astrogen_mesh::{Mesh, SpiralCloudParams, generate_spiral_cloud};
use glam::Vec3;
use rand::Rng;

use crate::BodyError;

/// A static nebula body. The cloud is generated once, colored purple-to-blue
/// along each arm, and never ticks.
#[derive(Debug)]
pub struct Nebula {
    cloud: Mesh,
    position: Vec3,
}

impl Nebula {
    pub fn generate(
        params: &SpiralCloudParams,
        position: Vec3,
        rng: &mut impl Rng,
    ) -> Result<Self, BodyError> {
        let cloud = generate_spiral_cloud(params, &ColorGradient::nebula(), rng)?;
        Ok(Self { cloud, position })
    }

    pub fn cloud(&self) -> &Mesh {
        &self.cloud
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

//! UV-sphere tessellation shared by planet and star generation.

use astrogen_color::Rgba;
use glam::Vec3;

use crate::error::{ensure_at_least, ensure_positive};
use crate::{Mesh, MeshError, Vertex};

/// Tessellate a UV-sphere of the given radius, centered at the origin.
///
/// The sphere is a latitude/longitude grid of `(segments + 1)^2` vertices over
/// θ ∈ [0, 2π] × φ ∈ [0, π], producing exactly `2 * segments^2` triangles with
/// consistent winding. Normals are the unit position vectors. `color_fn(i, j)`
/// supplies the color for grid vertex `(i, j)`, which lets planets and stars
/// share the tessellation while keeping their own palettes.
///
/// Triangles touching the poles are degenerate (zero area); they are kept so
/// the index pattern stays regular, and renderers simply draw nothing for them.
pub fn generate_uv_sphere(
    radius: f32,
    segments: u32,
    mut color_fn: impl FnMut(u32, u32) -> Rgba,
) -> Result<Mesh, MeshError> {
    ensure_positive("radius", radius)?;
    ensure_at_least("segments", segments, 1)?;

    let ring = segments + 1;
    let mut vertices = Vec::with_capacity((ring * ring) as usize);

    for i in 0..ring {
        let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
        for j in 0..ring {
            let phi = j as f32 / segments as f32 * std::f32::consts::PI;

            let direction = Vec3::new(
                phi.sin() * theta.cos(),
                phi.sin() * theta.sin(),
                phi.cos(),
            );
            let position = direction * radius;

            vertices.push(Vertex::new(
                position.to_array(),
                direction.to_array(),
                color_fn(i, j),
            ));
        }
    }

    let mut indices = Vec::with_capacity((2 * segments * segments) as usize);
    for i in 0..segments {
        for j in 0..segments {
            let i0 = i * ring + j;
            let i1 = i * ring + j + 1;
            let i2 = (i + 1) * ring + j;
            let i3 = (i + 1) * ring + j + 1;

            indices.push([i0, i2, i1]);
            indices.push([i1, i2, i3]);
        }
    }

    Mesh::triangles(vertices, indices)
}

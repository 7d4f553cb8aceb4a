//! Flat ring annulus generation for ringed planets.

use astrogen_color::Rgba;
use glam::Vec3;

use crate::error::{ensure_at_least, ensure_positive};
use crate::{Mesh, MeshError, Vertex};

/// Generate a flat annulus in the XY plane: two concentric circles of
/// `segments + 1` points each, triangulated as a closed strip.
///
/// The final angular step duplicates the angle-0 vertex pair, so the ring
/// wraps around with no seam. Every vertex lies exactly on the inner or outer
/// circle; all normals face +Z.
pub fn generate_ring(
    inner_radius: f32,
    outer_radius: f32,
    segments: u32,
    color: Rgba,
) -> Result<Mesh, MeshError> {
    ensure_positive("inner_radius", inner_radius)?;
    ensure_positive("outer_radius", outer_radius)?;
    ensure_at_least("segments", segments, 1)?;
    if outer_radius <= inner_radius {
        return Err(MeshError::InvalidParameter {
            name: "outer_radius",
            value: outer_radius as f64,
            reason: "must exceed inner_radius",
        });
    }

    let normal = Vec3::Z.to_array();
    let mut vertices = Vec::with_capacity(2 * (segments as usize + 1));
    for s in 0..=segments {
        let angle = s as f32 / segments as f32 * std::f32::consts::TAU;
        let (sin, cos) = angle.sin_cos();
        vertices.push(Vertex::new([inner_radius * cos, inner_radius * sin, 0.0], normal, color));
        vertices.push(Vertex::new([outer_radius * cos, outer_radius * sin, 0.0], normal, color));
    }

    // Two triangles per step; the vertex pair at s = segments closes the ring.
    let mut indices = Vec::with_capacity(2 * segments as usize);
    for s in 0..segments {
        let base = 2 * s;
        indices.push([base, base + 1, base + 2]);
        indices.push([base + 1, base + 3, base + 2]);
    }

    Mesh::triangles(vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_vertex_sits_on_a_ring_circle() {
        let (inner, outer) = (1.2, 1.5);
        let mesh = generate_ring(inner, outer, 24, Rgba::WHITE).unwrap();
        for (n, v) in mesh.vertices.iter().enumerate() {
            let r = (v.position[0].powi(2) + v.position[1].powi(2)).sqrt();
            let expected = if n % 2 == 0 { inner } else { outer };
            assert!(
                (r - expected).abs() < 1e-5,
                "vertex {n}: |xy| = {r}, expected {expected}"
            );
            assert_eq!(v.position[2], 0.0, "ring must be flat in the XY plane");
        }
    }

    #[test]
    fn test_ring_closes_without_a_seam() {
        let mesh = generate_ring(1.0, 2.0, 16, Rgba::WHITE).unwrap();
        let count = mesh.vertex_count();
        // First and last vertex pairs coincide (angle 0 vs angle 2π).
        for (first, last) in [(0, count - 2), (1, count - 1)] {
            let a = mesh.vertices[first].position;
            let b = mesh.vertices[last].position;
            for c in 0..3 {
                assert!(
                    (a[c] - b[c]).abs() < 1e-4,
                    "wrap-around vertices diverge on axis {c}: {} vs {}",
                    a[c],
                    b[c]
                );
            }
        }
    }

    #[test]
    fn test_counts_and_index_bounds() {
        let segments = 10;
        let mesh = generate_ring(1.0, 2.0, segments, Rgba::WHITE).unwrap();
        assert_eq!(mesh.vertex_count(), 2 * (segments as usize + 1));
        assert_eq!(mesh.triangle_count(), 2 * segments as usize);
        mesh.validate().unwrap();
    }

    #[test]
    fn test_invalid_radii_fail_fast() {
        assert!(generate_ring(2.0, 1.0, 8, Rgba::WHITE).is_err(), "inverted radii");
        assert!(generate_ring(1.0, 1.0, 8, Rgba::WHITE).is_err(), "equal radii");
        assert!(generate_ring(-1.0, 2.0, 8, Rgba::WHITE).is_err(), "negative inner");
        assert!(generate_ring(1.0, 2.0, 0, Rgba::WHITE).is_err(), "zero segments");
    }
}

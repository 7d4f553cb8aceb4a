//! Vertex and mesh data model consumed by the external renderer.

use bytemuck::{Pod, Zeroable};

use astrogen_color::Rgba;

use crate::MeshError;

/// One mesh vertex: position, normal, and RGBA color.
///
/// `#[repr(C)]` with no padding, so a `&[Vertex]` can be handed to a renderer
/// as a raw byte slice (`bytemuck::cast_slice`).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: Rgba,
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3], color: Rgba) -> Self {
        Self { position, normal, color }
    }
}

/// How a mesh's vertices are assembled into primitives.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Indexed triangle list. Winding is consistent across the mesh so face
    /// normals agree for lighting.
    Triangles(Vec<[u32; 3]>),
    /// Implicit point list: every vertex is one point sprite, no indices.
    Points,
}

/// Generated geometry: a vertex buffer plus its primitive assembly.
///
/// Immutable once generated. Static bodies build their mesh exactly once at
/// construction; the renderer keeps whatever handle it needs afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub primitive: Primitive,
}

impl Mesh {
    /// Build an indexed triangle mesh, checking the index invariant.
    pub fn triangles(vertices: Vec<Vertex>, indices: Vec<[u32; 3]>) -> Result<Self, MeshError> {
        let mesh = Self { vertices, primitive: Primitive::Triangles(indices) };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Build a point-cloud mesh (no indices).
    pub fn points(vertices: Vec<Vertex>) -> Self {
        Self { vertices, primitive: Primitive::Points }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        match &self.primitive {
            Primitive::Triangles(indices) => indices.len(),
            Primitive::Points => 0,
        }
    }

    pub fn is_point_cloud(&self) -> bool {
        matches!(self.primitive, Primitive::Points)
    }

    /// Check the mesh invariant: every index refers to an existing vertex.
    pub fn validate(&self) -> Result<(), MeshError> {
        if let Primitive::Triangles(indices) = &self.primitive {
            let count = self.vertices.len();
            for tri in indices {
                for &index in tri {
                    if index as usize >= count {
                        return Err(MeshError::IndexOutOfBounds { index, vertex_count: count });
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vert(x: f32) -> Vertex {
        Vertex::new([x, 0.0, 0.0], [0.0, 0.0, 1.0], Rgba::WHITE)
    }

    #[test]
    fn test_triangles_rejects_out_of_bounds_index() {
        let result = Mesh::triangles(vec![vert(0.0), vert(1.0)], vec![[0, 1, 2]]);
        assert!(
            matches!(result, Err(MeshError::IndexOutOfBounds { index: 2, vertex_count: 2 })),
            "index 2 must be rejected for a 2-vertex mesh"
        );
    }

    #[test]
    fn test_point_cloud_has_no_triangles() {
        let mesh = Mesh::points(vec![vert(0.0)]);
        assert!(mesh.is_point_cloud());
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.vertex_count(), 1);
    }

    #[test]
    fn test_vertex_buffer_casts_to_bytes() {
        let mesh = Mesh::points(vec![vert(1.0), vert(2.0)]);
        let bytes: &[u8] = bytemuck::cast_slice(&mesh.vertices);
        assert_eq!(bytes.len(), 2 * std::mem::size_of::<Vertex>());
    }
}

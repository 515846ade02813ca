//! # Arc Mesh Data Structure
//!
//! Output buffers of the generator: a vertex list and a triangle list.
//! Both are replaced wholesale on every regeneration.

use glam::{Vec2, Vec3};
use serde::Serialize;

use crate::error::{ArcMeshError, ArcMeshResult};

/// One emitted vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcVertex {
    /// Local position, always on the z = 0 plane.
    pub position: Vec3,
    /// Texture coordinate.
    pub uv: Vec2,
    /// RGBA tint.
    pub color: [f32; 4],
}

impl ArcVertex {
    /// Creates a vertex on the z = 0 plane.
    #[inline]
    pub fn new(position: Vec2, uv: Vec2, color: [f32; 4]) -> Self {
        Self {
            position: position.extend(0.0),
            uv,
            color,
        }
    }
}

/// Triangle mesh produced by the generator.
///
/// # Example
///
/// ```rust
/// use arc_mesh::{ArcMesh, ArcVertex};
/// use glam::Vec2;
///
/// let mut mesh = ArcMesh::new();
/// let color = [1.0; 4];
/// mesh.push_vertex(ArcVertex::new(Vec2::ZERO, Vec2::ZERO, color));
/// mesh.push_vertex(ArcVertex::new(Vec2::X, Vec2::X, color));
/// mesh.push_vertex(ArcVertex::new(Vec2::Y, Vec2::Y, color));
/// mesh.push_triangle([0, 1, 2]);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArcMesh {
    vertices: Vec<ArcVertex>,
    triangles: Vec<[u32; 3]>,
}

impl ArcMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of indices (three per triangle).
    #[inline]
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertices.
    #[inline]
    pub fn vertices(&self) -> &[ArcVertex] {
        &self.vertices
    }

    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Adds a vertex and returns its index.
    pub fn push_vertex(&mut self, vertex: ArcVertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Adds a triangle by vertex indices.
    #[inline]
    pub fn push_triangle(&mut self, triangle: [u32; 3]) {
        self.triangles.push(triangle);
    }

    /// Drops all vertices and triangles, keeping the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
    }

    /// Ensures room for at least the given counts without reallocating.
    pub fn reserve(&mut self, vertex_count: usize, triangle_count: usize) {
        self.vertices
            .reserve(vertex_count.saturating_sub(self.vertices.len()));
        self.triangles
            .reserve(triangle_count.saturating_sub(self.triangles.len()));
    }

    /// Allocated vertex and triangle slots.
    pub fn capacity(&self) -> (usize, usize) {
        (self.vertices.capacity(), self.triangles.capacity())
    }

    /// Triangle indices flattened for an index buffer.
    pub fn flat_indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some(first) = self.vertices.first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        self.vertices[1..]
            .iter()
            .fold((first.position, first.position), |(min, max), v| {
                (min.min(v.position), max.max(v.position))
            })
    }

    /// Checks that every triangle references vertices inside the buffer.
    pub fn validate(&self) -> ArcMeshResult<()> {
        let vertex_count = self.vertices.len();
        for (triangle, indices) in self.triangles.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(ArcMeshError::IndexOutOfBounds {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Flattens the mesh into upload-ready buffers.
    pub fn to_buffers(&self) -> MeshBuffers {
        MeshBuffers {
            positions: self.vertices.iter().map(|v| v.position.to_array()).collect(),
            uvs: self.vertices.iter().map(|v| v.uv.to_array()).collect(),
            colors: self.vertices.iter().map(|v| v.color).collect(),
            indices: self.flat_indices(),
        }
    }
}

/// Struct-of-arrays copy of an [`ArcMesh`] for a rendering backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeshBuffers {
    /// Vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Vertex texture coordinates.
    pub uvs: Vec<[f32; 2]>,
    /// Vertex colors, RGBA.
    pub colors: Vec<[f32; 4]>,
    /// Triangle list indices.
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of indices.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    fn triangle_mesh() -> ArcMesh {
        let mut mesh = ArcMesh::new();
        mesh.push_vertex(ArcVertex::new(Vec2::new(-1.0, 0.0), Vec2::ZERO, WHITE));
        mesh.push_vertex(ArcVertex::new(Vec2::new(2.0, 0.5), Vec2::X, WHITE));
        mesh.push_vertex(ArcVertex::new(Vec2::new(0.0, -3.0), Vec2::Y, WHITE));
        mesh.push_triangle([0, 1, 2]);
        mesh
    }

    #[test]
    fn test_counts() {
        let mesh = triangle_mesh();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.index_count(), 3);
        assert_eq!(mesh.flat_indices(), vec![0, 1, 2]);
    }

    #[test]
    fn test_bounding_box() {
        let (min, max) = triangle_mesh().bounding_box();
        assert_eq!(min, Vec3::new(-1.0, -3.0, 0.0));
        assert_eq!(max, Vec3::new(2.0, 0.5, 0.0));
        assert_eq!(ArcMesh::new().bounding_box(), (Vec3::ZERO, Vec3::ZERO));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut mesh = triangle_mesh();
        mesh.push_triangle([0, 2, 3]);
        assert_eq!(
            mesh.validate(),
            Err(ArcMeshError::IndexOutOfBounds {
                triangle: 1,
                index: 3,
                vertex_count: 3,
            })
        );
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut mesh = ArcMesh::with_capacity(16, 8);
        mesh.push_vertex(ArcVertex::new(Vec2::ZERO, Vec2::ZERO, WHITE));
        mesh.clear();
        assert!(mesh.is_empty());
        let (vertices, triangles) = mesh.capacity();
        assert!(vertices >= 16);
        assert!(triangles >= 8);
    }

    #[test]
    fn test_to_buffers() {
        let buffers = triangle_mesh().to_buffers();
        assert_eq!(buffers.vertex_count(), 3);
        assert_eq!(buffers.index_count(), 3);
        assert_eq!(buffers.positions[1], [2.0, 0.5, 0.0]);
        assert_eq!(buffers.uvs[2], [0.0, 1.0]);
        assert_eq!(buffers.colors[0], WHITE);

        let json = serde_json::to_value(&buffers).unwrap();
        assert_eq!(json["indices"], serde_json::json!([0, 1, 2]));
    }
}

//! Standalone mesh adapter.
//!
//! Radii are given directly as width and height, and the sweep starts at a
//! free angle offset in radians. Buffers are handed out only when a
//! regeneration actually ran, so the host re-uploads only on change.

use glam::Vec2;

use crate::arc::ArcMeshGenerator;
use crate::mesh::MeshBuffers;
use crate::params::StartAngle;

/// Free-standing circle / ring / arc mesh.
///
/// # Example
///
/// ```rust
/// use arc_mesh::StandaloneArcMesh;
///
/// let mut mesh = StandaloneArcMesh::new(2.0, 2.0);
/// mesh.generator_mut().set_hole_rate(0.5);
///
/// let buffers = mesh.refresh().expect("first refresh builds");
/// assert_eq!(buffers.index_count(), 6 * 36);
/// assert!(mesh.refresh().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct StandaloneArcMesh {
    generator: ArcMeshGenerator,
}

impl StandaloneArcMesh {
    /// Creates a mesh with the given horizontal and vertical radii.
    pub fn new(width: f32, height: f32) -> Self {
        let mut generator = ArcMeshGenerator::default();
        generator.set_extent(Vec2::new(width, height));
        generator.set_start(StartAngle::Free(0.0));
        Self { generator }
    }

    /// Wraps an existing generator.
    pub fn from_generator(generator: ArcMeshGenerator) -> Self {
        Self { generator }
    }

    /// Underlying generator.
    pub fn generator(&self) -> &ArcMeshGenerator {
        &self.generator
    }

    /// Underlying generator, for edge count, rates and direction.
    pub fn generator_mut(&mut self) -> &mut ArcMeshGenerator {
        &mut self.generator
    }

    /// Sets horizontal and vertical radii.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.generator.set_extent(Vec2::new(width, height));
    }

    /// Sets the start angle offset in radians.
    pub fn set_angle_offset(&mut self, radians: f32) {
        self.generator.set_start(StartAngle::Free(radians));
    }

    /// Sets the start angle offset in degrees.
    pub fn set_angle_offset_degrees(&mut self, degrees: f32) {
        self.generator.set_start(StartAngle::from_degrees(degrees));
    }

    /// Sets the tint applied to every vertex.
    pub fn set_color(&mut self, color: [f32; 4]) {
        self.generator.set_color(color);
    }

    /// Regenerates if needed; returns new buffers only when it did.
    pub fn refresh(&mut self) -> Option<MeshBuffers> {
        self.generator
            .poll()
            .then(|| self.generator.mesh().to_buffers())
    }

    /// Buffers for the current mesh, regenerating first if stale.
    pub fn buffers(&mut self) -> MeshBuffers {
        self.generator.poll();
        self.generator.mesh().to_buffers()
    }
}

//! UI overlay adapter.
//!
//! The host's layout system supplies a rect; the disc is inscribed in it, so
//! the radii are half the rect size. Image binding and tint changes arrive
//! outside the parameter setters and mark the generator dirty.

use glam::Vec2;

use crate::arc::ArcMeshGenerator;
use crate::mesh::{ArcMesh, ArcVertex};
use crate::params::{Origin, UvMapping, UvRect};

/// Host-side vertex stream receiving a populated overlay graphic.
pub trait VertexSink {
    /// Drops everything streamed so far.
    fn clear(&mut self);

    /// Appends one vertex.
    fn add_vertex(&mut self, vertex: &ArcVertex);

    /// Appends one triangle referencing streamed vertices.
    fn add_triangle(&mut self, a: u32, b: u32, c: u32);
}

impl VertexSink for ArcMesh {
    fn clear(&mut self) {
        ArcMesh::clear(self);
    }

    fn add_vertex(&mut self, vertex: &ArcVertex) {
        self.push_vertex(*vertex);
    }

    fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.push_triangle([a, b, c]);
    }
}

/// Filled circle / ring / arc drawn as a UI overlay primitive.
///
/// # Example
///
/// ```rust
/// use arc_mesh::{ArcMesh, OverlayCircle, Origin};
/// use glam::Vec2;
///
/// let mut circle = OverlayCircle::new();
/// circle.set_rect_size(Vec2::new(100.0, 50.0));
/// circle.set_origin(Origin::Left);
///
/// let mut stream = ArcMesh::new();
/// circle.populate(&mut stream);
/// let (min, max) = stream.bounding_box();
/// assert!((max.x - 50.0).abs() < 1e-3);
/// assert!((min.y + 25.0).abs() < 1e-2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OverlayCircle {
    generator: ArcMeshGenerator,
    image: Option<UvRect>,
}

impl OverlayCircle {
    /// Creates an overlay circle with default parameters and no image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing generator.
    pub fn from_generator(generator: ArcMeshGenerator) -> Self {
        Self {
            generator,
            image: None,
        }
    }

    /// Underlying generator.
    pub fn generator(&self) -> &ArcMeshGenerator {
        &self.generator
    }

    /// Underlying generator, for edge count, rates and direction.
    pub fn generator_mut(&mut self) -> &mut ArcMeshGenerator {
        &mut self.generator
    }

    /// Applies the rect size computed by the host's layout.
    pub fn set_rect_size(&mut self, size: Vec2) {
        self.generator.set_extent(size * 0.5);
    }

    /// Sets the enumerated start direction.
    pub fn set_origin(&mut self, origin: Origin) {
        self.generator.set_start(origin);
    }

    /// Binds or unbinds the image region sampled by the disc.
    pub fn set_image(&mut self, image: Option<UvRect>) {
        self.image = image;
        self.generator.set_uv(UvMapping::for_image(image));
    }

    /// Currently bound image region.
    pub fn image(&self) -> Option<UvRect> {
        self.image
    }

    /// Sets the tint applied to every vertex.
    pub fn set_color(&mut self, color: [f32; 4]) {
        self.generator.set_color(color);
    }

    /// Sets the visible fraction and marks dirty.
    pub fn show(&mut self, rate: f32) {
        self.generator.show(rate);
    }

    /// Regenerates if needed, then streams the whole mesh into `sink`.
    ///
    /// The sink is cleared first; hosts call this whenever they rebuild the
    /// graphic, whether or not parameters changed.
    pub fn populate<S: VertexSink + ?Sized>(&mut self, sink: &mut S) {
        self.generator.poll();

        sink.clear();
        for vertex in self.generator.vertices() {
            sink.add_vertex(vertex);
        }
        for &[a, b, c] in self.generator.triangles() {
            sink.add_triangle(a, b, c);
        }
    }
}

//! # Arc Mesh Generator
//!
//! Owns one parameter set, its regeneration gate and the output buffers.
//! Hosts change parameters at any time and call [`ArcMeshGenerator::poll`]
//! from their per-frame or per-invalidation callback.

use config::constants::{GeneratorConfig, PARAM_EPSILON};
use glam::Vec2;

use crate::gate::RegenerationGate;
use crate::generator;
use crate::mesh::{ArcMesh, ArcVertex};
use crate::params::{ArcParams, StartAngle, UvMapping};

/// Lazily regenerating disc / ring / arc mesh.
///
/// # Example
///
/// ```rust
/// use arc_mesh::{ArcMeshGenerator, ArcParams, Origin};
///
/// let mut arc = ArcMeshGenerator::new(ArcParams::default());
/// arc.set_outer_edges(4);
/// arc.set_start(Origin::Top);
///
/// assert!(arc.vertices().is_empty()); // nothing built yet
/// assert!(arc.poll());
/// assert_eq!(arc.vertex_count(), 6);
/// assert_eq!(arc.index_count(), 12);
///
/// assert!(!arc.poll()); // unchanged, nothing to do
/// ```
#[derive(Debug, Clone)]
pub struct ArcMeshGenerator {
    params: ArcParams,
    gate: RegenerationGate,
    mesh: ArcMesh,
}

impl Default for ArcMeshGenerator {
    fn default() -> Self {
        Self::new(ArcParams::default())
    }
}

impl ArcMeshGenerator {
    /// Creates a generator for `params`. No buffers are built until the
    /// first [`poll`](Self::poll) or [`initialize`](Self::initialize).
    pub fn new(params: ArcParams) -> Self {
        Self {
            params,
            gate: RegenerationGate::new(PARAM_EPSILON),
            mesh: ArcMesh::new(),
        }
    }

    /// Creates a generator using a shared configuration for its defaults.
    pub fn with_config(config: &GeneratorConfig) -> Self {
        let mut params = ArcParams::default();
        params.set_outer_edges(config.default_outer_edges);
        Self {
            params,
            gate: RegenerationGate::new(config.tolerance),
            mesh: ArcMesh::new(),
        }
    }

    /// Builds the first buffers immediately.
    ///
    /// Hosts call this once when the generator becomes active so the buffers
    /// are valid before the first frame.
    pub fn initialize(&mut self) {
        self.gate.mark_dirty();
        self.poll();
    }

    /// Regenerates the buffers if they are stale.
    ///
    /// Returns true when a regeneration ran.
    pub fn poll(&mut self) -> bool {
        if !self.gate.is_stale(&self.params) {
            log::trace!("arc mesh up to date, skipping regeneration");
            return false;
        }

        generator::build_into(&self.params, &mut self.mesh);
        self.gate.record(&self.params);
        debug_assert!(generator::verify(&self.params, &self.mesh).is_ok());

        log::debug!(
            "arc mesh regenerated: {} vertices, {} triangles (edges {}/{}, hole {})",
            self.mesh.vertex_count(),
            self.mesh.triangle_count(),
            self.params.visible_edges(),
            self.params.outer_edges(),
            self.params.hole_rate(),
        );
        true
    }

    /// Forces the next poll to regenerate.
    pub fn mark_dirty(&mut self) {
        self.gate.mark_dirty();
    }

    /// Sets the visible fraction (clamped to `[0, 1]`) and marks dirty.
    pub fn show(&mut self, rate: f32) {
        self.params.set_visible_rate(rate);
        self.gate.mark_dirty();
    }

    // =========================================================================
    // PARAMETERS
    // =========================================================================

    /// Current parameters.
    pub fn params(&self) -> &ArcParams {
        &self.params
    }

    /// Mutable parameters; changes are picked up by the next poll.
    pub fn params_mut(&mut self) -> &mut ArcParams {
        &mut self.params
    }

    /// Sets the edge count, clamped to `[3, 200]`.
    pub fn set_outer_edges(&mut self, edges: u32) {
        self.params.set_outer_edges(edges);
    }

    /// Sets the visible fraction, clamped to `[0, 1]`.
    pub fn set_visible_rate(&mut self, rate: f32) {
        self.params.set_visible_rate(rate);
    }

    /// Sets the hole fraction, clamped to `[0, 1]`.
    pub fn set_hole_rate(&mut self, rate: f32) {
        self.params.set_hole_rate(rate);
    }

    /// Sets the start of the sweep.
    pub fn set_start(&mut self, start: impl Into<StartAngle>) {
        self.params.set_start(start);
    }

    /// Sets the sweep direction.
    pub fn set_clockwise(&mut self, clockwise: bool) {
        self.params.set_clockwise(clockwise);
    }

    /// Sets horizontal and vertical radii.
    pub fn set_extent(&mut self, extent: Vec2) {
        self.params.set_extent(extent);
    }

    /// Sets the texture mapping.
    pub fn set_uv(&mut self, uv: UvMapping) {
        self.params.set_uv(uv);
    }

    /// Sets the uniform vertex tint.
    pub fn set_color(&mut self, color: [f32; 4]) {
        self.params.set_color(color);
    }

    // =========================================================================
    // OUTPUT
    // =========================================================================

    /// Buffers from the last regeneration.
    pub fn mesh(&self) -> &ArcMesh {
        &self.mesh
    }

    /// Vertices from the last regeneration; empty before the first.
    pub fn vertices(&self) -> &[ArcVertex] {
        self.mesh.vertices()
    }

    /// Triangles from the last regeneration; empty before the first.
    pub fn triangles(&self) -> &[[u32; 3]] {
        self.mesh.triangles()
    }

    /// Number of vertices from the last regeneration.
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// Number of indices from the last regeneration.
    pub fn index_count(&self) -> usize {
        self.mesh.index_count()
    }

    /// Vertex and triangle counts to preallocate for the current edge count.
    pub fn capacity_hint(&self) -> (usize, usize) {
        (
            generator::vertex_capacity(&self.params),
            generator::triangle_capacity(&self.params),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_before_first_poll() {
        let arc = ArcMeshGenerator::default();
        assert!(arc.vertices().is_empty());
        assert!(arc.triangles().is_empty());
        assert_eq!(arc.index_count(), 0);
    }

    #[test]
    fn test_initialize_builds_immediately() {
        let mut arc = ArcMeshGenerator::default();
        arc.initialize();
        assert_eq!(arc.triangles().len(), 36);
        assert!(!arc.poll());
    }

    #[test]
    fn test_with_config_uses_defaults() {
        let config = GeneratorConfig::new(1e-3, 8).unwrap();
        let mut arc = ArcMeshGenerator::with_config(&config);
        assert_eq!(arc.params().outer_edges(), 8);
        arc.poll();
        assert_eq!(arc.vertex_count(), 10);

        // Change inside the wider tolerance does not rebuild
        arc.set_extent(Vec2::new(1.0005, 1.0));
        assert!(!arc.poll());
    }

    #[test]
    fn test_show_clamps_and_marks_dirty() {
        let mut arc = ArcMeshGenerator::default();
        arc.poll();
        arc.show(1.0);
        assert!(arc.poll(), "show forces a regeneration even when unchanged");

        arc.show(-2.0);
        assert_eq!(arc.params().visible_rate(), 0.0);
        assert!(arc.poll());
        assert!(arc.vertices().is_empty());
    }

    #[test]
    fn test_mark_dirty_forces_regeneration() {
        let mut arc = ArcMeshGenerator::default();
        arc.poll();
        assert!(!arc.poll());
        arc.mark_dirty();
        assert!(arc.poll());
    }

    #[test]
    fn test_params_mut_changes_are_detected() {
        let mut arc = ArcMeshGenerator::default();
        arc.poll();
        arc.params_mut().set_hole_rate(0.5);
        assert!(arc.poll());
        assert_eq!(arc.vertex_count(), 2 * 37);
    }

    #[test]
    fn test_poll_is_idempotent() {
        let mut arc = ArcMeshGenerator::default();
        arc.set_hole_rate(0.25);
        arc.set_visible_rate(0.6);
        arc.poll();
        let first = arc.mesh().clone();
        arc.poll();
        assert_eq!(arc.mesh(), &first);
        arc.mark_dirty();
        arc.poll();
        assert_eq!(arc.mesh(), &first);
    }

    #[test]
    fn test_small_rate_change_rebuilds_when_segment_count_moves() {
        let mut arc = ArcMeshGenerator::default();
        arc.set_outer_edges(200);
        arc.set_visible_rate(0.5);
        arc.poll();
        assert_eq!(arc.vertex_count(), 102);

        arc.set_visible_rate(0.499_995);
        assert!(arc.poll());
        assert_eq!(arc.vertex_count(), 101);
        assert!(generator::verify(arc.params(), arc.mesh()).is_ok());
    }

    #[test]
    fn test_capacity_hint_tracks_variant() {
        let mut arc = ArcMeshGenerator::default();
        arc.set_outer_edges(10);
        assert_eq!(arc.capacity_hint(), (12, 10));
        arc.set_hole_rate(0.5);
        assert_eq!(arc.capacity_hint(), (22, 20));
    }
}

//! # Regeneration Gate
//!
//! Cache-validity check deciding whether the output buffers are stale.
//! Holds the parameters seen at the last regeneration plus an explicit
//! dirty flag; holds no rendering state and never fails.

use glam::Vec2;

use crate::params::ArcParams;

/// Every geometry-affecting parameter, as seen at one regeneration.
///
/// The start angle is stored resolved to radians, so switching between an
/// enumerated origin and the equal free angle is not a change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSnapshot {
    outer_edges: u32,
    visible_edges: u32,
    visible_rate: f32,
    hole_rate: f32,
    start: f32,
    clockwise: bool,
    extent: Vec2,
    uv_center: Vec2,
    uv_half_extent: Vec2,
    color: [f32; 4],
}

impl ParamSnapshot {
    /// Records the current parameter values.
    pub fn capture(params: &ArcParams) -> Self {
        let uv = params.uv();
        Self {
            outer_edges: params.outer_edges(),
            visible_edges: params.visible_edges(),
            visible_rate: params.visible_rate(),
            hole_rate: params.hole_rate(),
            start: params.start().radians(),
            clockwise: params.clockwise(),
            extent: params.extent(),
            uv_center: uv.center,
            uv_half_extent: uv.half_extent,
            color: params.color(),
        }
    }

    /// True when any value differs from `other` by more than `epsilon`.
    ///
    /// Crossing between solid and annulus, or a visible rate change that
    /// moves the truncated segment count, always counts as a change even
    /// inside the tolerance.
    pub fn differs(&self, other: &Self, epsilon: f32) -> bool {
        let near = |a: f32, b: f32| (a - b).abs() <= epsilon;
        let near2 = |a: Vec2, b: Vec2| a.abs_diff_eq(b, epsilon);

        self.outer_edges != other.outer_edges
            || self.visible_edges != other.visible_edges
            || self.clockwise != other.clockwise
            || (self.hole_rate > 0.0) != (other.hole_rate > 0.0)
            || !near(self.visible_rate, other.visible_rate)
            || !near(self.hole_rate, other.hole_rate)
            || !near(self.start, other.start)
            || !near2(self.extent, other.extent)
            || !near2(self.uv_center, other.uv_center)
            || !near2(self.uv_half_extent, other.uv_half_extent)
            || self
                .color
                .iter()
                .zip(other.color.iter())
                .any(|(&a, &b)| !near(a, b))
    }
}

/// Decides when the generator must rebuild its buffers.
///
/// # Example
///
/// ```rust
/// use arc_mesh::{ArcParams, RegenerationGate};
///
/// let mut params = ArcParams::new();
/// let mut gate = RegenerationGate::new(1e-5);
/// assert!(gate.is_stale(&params)); // never built
///
/// gate.record(&params);
/// assert!(!gate.is_stale(&params));
///
/// params.set_visible_rate(0.5);
/// assert!(gate.is_stale(&params));
/// ```
#[derive(Debug, Clone)]
pub struct RegenerationGate {
    last: Option<ParamSnapshot>,
    dirty: bool,
    tolerance: f32,
}

impl RegenerationGate {
    /// Creates a gate that has never seen a regeneration.
    pub fn new(tolerance: f32) -> Self {
        Self {
            last: None,
            dirty: false,
            tolerance,
        }
    }

    /// Tolerance applied when diffing float parameters.
    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Forces the next poll to regenerate.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// True when the explicit flag is set.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// True once at least one regeneration has been recorded.
    pub fn has_built(&self) -> bool {
        self.last.is_some()
    }

    /// True when the buffers must be rebuilt for `params`.
    pub fn is_stale(&self, params: &ArcParams) -> bool {
        match &self.last {
            None => true,
            Some(_) if self.dirty => true,
            Some(last) => last.differs(&ParamSnapshot::capture(params), self.tolerance),
        }
    }

    /// Snapshots `params` after a regeneration and clears the dirty flag.
    pub fn record(&mut self, params: &ArcParams) {
        self.last = Some(ParamSnapshot::capture(params));
        self.dirty = false;
    }
}

//! # Angle Resolver
//!
//! Turns the start angle, sweep direction and edge count into a start angle
//! plus a signed per-step increment.
//!
//! Positions use `(extent.x * sin(a), extent.y * cos(a))`: angle 0 points
//! along +Y and positive angles turn toward +X. Swapping sin and cos would
//! rotate every shape by a quarter turn.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::params::ArcParams;

/// Number of emitted segments for a visible fraction.
///
/// Truncates rather than rounds, and never exceeds `outer_edges`.
///
/// # Example
///
/// ```rust
/// use arc_mesh::angle::visible_edges;
///
/// assert_eq!(visible_edges(0.5, 10), 5);
/// assert_eq!(visible_edges(0.59, 10), 5);
/// assert_eq!(visible_edges(1.0, 7), 7);
/// assert_eq!(visible_edges(0.0, 200), 0);
/// ```
pub fn visible_edges(rate: f32, outer_edges: u32) -> u32 {
    let count = (rate * outer_edges as f32).floor();
    if count.is_nan() || count <= 0.0 {
        return 0;
    }
    (count as u32).min(outer_edges)
}

/// Resolved sweep: where it starts, how far each step turns, and how many
/// segments are emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    /// Angle of sample 0 in radians.
    pub start: f32,
    /// Signed increment between samples; positive when clockwise.
    pub step: f32,
    /// Number of segments; samples run `0..=visible_edges`.
    pub visible_edges: u32,
}

impl Sweep {
    /// Resolves the sweep for a parameter set.
    pub fn resolve(params: &ArcParams) -> Self {
        let magnitude = TAU / params.outer_edges() as f32;
        let step = if params.clockwise() {
            magnitude
        } else {
            -magnitude
        };
        Self {
            start: params.start().radians(),
            step,
            visible_edges: params.visible_edges(),
        }
    }

    /// Angle of sample `i`.
    #[inline]
    pub fn angle(&self, i: u32) -> f32 {
        self.start + self.step * i as f32
    }

    /// Unit direction `(sin, cos)` of sample `i`.
    #[inline]
    pub fn direction(&self, i: u32) -> Vec2 {
        let (sin, cos) = self.angle(i).sin_cos();
        Vec2::new(sin, cos)
    }

    /// Number of samples, one more than the segment count.
    #[inline]
    pub fn sample_count(&self) -> u32 {
        if self.visible_edges == 0 {
            0
        } else {
            self.visible_edges + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Origin, StartAngle};
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_visible_edges_truncates() {
        assert_eq!(visible_edges(0.99, 4), 3);
        assert_eq!(visible_edges(0.25, 4), 1);
        assert_eq!(visible_edges(0.24, 4), 0);
    }

    #[test]
    fn test_visible_edges_bounds() {
        for edges in 3..=200 {
            assert_eq!(visible_edges(0.0, edges), 0);
            assert_eq!(visible_edges(1.0, edges), edges);
        }
        assert_eq!(visible_edges(f32::NAN, 10), 0);
    }

    #[test]
    fn test_step_sign_follows_direction() {
        let mut params = ArcParams::new();
        params.set_outer_edges(8);
        let cw = Sweep::resolve(&params);
        assert_relative_eq!(cw.step, PI / 4.0);

        params.set_clockwise(false);
        let ccw = Sweep::resolve(&params);
        assert_relative_eq!(ccw.step, -PI / 4.0);
    }

    #[test]
    fn test_top_origin_points_up_and_turns_right() {
        let mut params = ArcParams::new();
        params.set_outer_edges(4);
        let sweep = Sweep::resolve(&params);

        let up = sweep.direction(0);
        assert_relative_eq!(up.x, 0.0);
        assert_relative_eq!(up.y, 1.0);

        let right = sweep.direction(1);
        assert_relative_eq!(right.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(right.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_origins_rotate_start() {
        let mut params = ArcParams::new();
        for origin in Origin::ALL {
            params.set_start(origin);
            assert_eq!(Sweep::resolve(&params).start, origin.radians());
        }
        params.set_start(StartAngle::Free(FRAC_PI_2));
        let dir = Sweep::resolve(&params).direction(0);
        assert_relative_eq!(dir.x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sample_count() {
        let mut params = ArcParams::new();
        params.set_outer_edges(10);
        params.set_visible_rate(0.5);
        assert_eq!(Sweep::resolve(&params).sample_count(), 6);
        params.set_visible_rate(0.0);
        assert_eq!(Sweep::resolve(&params).sample_count(), 0);
    }
}

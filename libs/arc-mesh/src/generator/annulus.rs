//! Annulus: interleaved (inner, outer) vertex pairs joined by quads.

use super::wind;
use crate::angle::Sweep;
use crate::mesh::{ArcMesh, ArcVertex};
use crate::params::ArcParams;

pub(super) fn emit(params: &ArcParams, sweep: &Sweep, mesh: &mut ArcMesh) {
    let extent = params.extent();
    let hole = params.hole_rate();
    let uv = params.uv();
    let color = params.color();

    // Inner vertex of sample i is 2i, outer is 2i + 1.
    for i in 0..=sweep.visible_edges {
        let direction = sweep.direction(i);
        mesh.push_vertex(ArcVertex::new(
            extent * direction * hole,
            uv.project(direction, hole),
            color,
        ));
        mesh.push_vertex(ArcVertex::new(
            extent * direction,
            uv.project(direction, 1.0),
            color,
        ));
    }

    for i in 0..sweep.visible_edges {
        let inner = 2 * i;
        let outer = inner + 1;
        let next_inner = inner + 2;
        let next_outer = inner + 3;
        mesh.push_triangle(wind(params.clockwise(), [inner, outer, next_outer]));
        mesh.push_triangle(wind(params.clockwise(), [inner, next_outer, next_inner]));
    }
}

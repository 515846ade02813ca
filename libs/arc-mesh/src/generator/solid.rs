//! Solid disc: one center vertex plus a fan of rim vertices.

use glam::Vec2;

use super::wind;
use crate::angle::Sweep;
use crate::mesh::{ArcMesh, ArcVertex};
use crate::params::ArcParams;

/// Index of the center vertex.
const CENTER: u32 = 0;

pub(super) fn emit(params: &ArcParams, sweep: &Sweep, mesh: &mut ArcMesh) {
    let extent = params.extent();
    let uv = params.uv();
    let color = params.color();

    mesh.push_vertex(ArcVertex::new(Vec2::ZERO, uv.center, color));

    for i in 0..=sweep.visible_edges {
        let direction = sweep.direction(i);
        mesh.push_vertex(ArcVertex::new(
            extent * direction,
            uv.project(direction, 1.0),
            color,
        ));
    }

    // Rim vertex i sits at index i + 1.
    for i in 0..sweep.visible_edges {
        mesh.push_triangle(wind(params.clockwise(), [CENTER, i + 1, i + 2]));
    }
}

use approx::assert_relative_eq;
use arc_mesh::{ArcMeshGenerator, ArcParams, Origin, StandaloneArcMesh};
use glam::Vec2;

fn quad_circle(hole: f32) -> ArcMeshGenerator {
    let mut params = ArcParams::new();
    params.set_outer_edges(4);
    params.set_visible_rate(1.0);
    params.set_hole_rate(hole);
    params.set_start(Origin::Top);
    params.set_clockwise(true);
    params.set_extent(Vec2::new(1.0, 1.0));
    ArcMeshGenerator::new(params)
}

#[test]
fn solid_quad_circle() {
    let mut arc = quad_circle(0.0);
    arc.poll();

    assert_eq!(arc.vertex_count(), 6);
    assert_eq!(arc.triangles().len(), 4);

    let first = arc.vertices()[1].position;
    assert_relative_eq!(first.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(first.y, 1.0, epsilon = 1e-6);

    let quarter = arc.vertices()[2].position;
    assert_relative_eq!(quarter.x, 1.0, epsilon = 1e-6);
    assert_relative_eq!(quarter.y, 0.0, epsilon = 1e-6);
}

#[test]
fn holed_quad_circle() {
    let mut arc = quad_circle(0.5);
    arc.poll();

    assert_eq!(arc.vertex_count(), 10);
    assert_eq!(arc.triangles().len(), 8);

    let inner = arc.vertices()[0].position;
    assert_relative_eq!(inner.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(inner.y, 0.5, epsilon = 1e-6);
}

#[test]
fn progress_ring_fills_over_time() {
    // A host animating visible_rate from 0 to 1, polling once per frame
    let mut arc = ArcMeshGenerator::default();
    arc.set_outer_edges(60);
    arc.set_hole_rate(0.8);

    let mut last_triangles = 0;
    for frame in 0..=60 {
        arc.show(frame as f32 / 60.0);
        arc.poll();
        let triangles = arc.triangles().len();
        assert!(triangles >= last_triangles);
        assert!(arc.mesh().validate().is_ok());
        last_triangles = triangles;
    }
    assert_eq!(last_triangles, 120);
}

#[test]
fn shrinking_edge_count_never_leaves_stale_indices() {
    let mut arc = ArcMeshGenerator::default();
    arc.set_outer_edges(200);
    arc.set_hole_rate(0.3);
    arc.poll();
    assert_eq!(arc.vertex_count(), 402);

    arc.set_outer_edges(3);
    arc.poll();
    assert_eq!(arc.vertex_count(), 8);
    let max_index = arc.triangles().iter().flatten().copied().max();
    assert_eq!(max_index, Some(7));
}

#[test]
fn standalone_gauge_buffers() {
    let mut gauge = StandaloneArcMesh::new(4.0, 4.0);
    gauge.set_angle_offset_degrees(-135.0);
    gauge.generator_mut().set_outer_edges(40);
    gauge.generator_mut().set_visible_rate(0.75);
    gauge.generator_mut().set_hole_rate(0.75);

    let buffers = gauge.refresh().expect("first refresh builds");
    assert_eq!(buffers.vertex_count(), 2 * 31);
    assert_eq!(buffers.index_count(), 6 * 30);

    // Gauge opens at the bottom: first and last outer vertices are mirrored
    let first = buffers.positions[1];
    let last = buffers.positions[buffers.vertex_count() - 1];
    assert_relative_eq!(first[0], -last[0], epsilon = 1e-4);
    assert_relative_eq!(first[1], last[1], epsilon = 1e-4);
    assert!(first[1] < 0.0);
}

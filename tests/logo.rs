use logo_gen::config::{RenderConfig, CYAN, PURPLE};
use logo_gen::geometry::{
    CubeGeometry, Point, APEX, BOTTOM_FRONT, BOTTOM_LEFT, BOTTOM_RIGHT, TOP_LEFT, TOP_RIGHT,
};
use logo_gen::render;

const EPSILON: f32 = 1e-3;

fn reference_geometry() -> CubeGeometry {
    CubeGeometry::new(Point::new(256.0, 256.0), 128.0)
}

#[test]
fn cube_vertices_are_deterministic() {
    assert_eq!(reference_geometry(), reference_geometry());
}

#[test]
fn apex_sits_above_center_and_bottom_vertices_below() {
    let geometry = reference_geometry();
    let center_y = 256.0;

    assert!(geometry.vertices[APEX].y < center_y);
    for index in [BOTTOM_RIGHT, BOTTOM_FRONT, BOTTOM_LEFT] {
        assert!(
            geometry.vertices[index].y > center_y,
            "vertex {index} should sit below the center"
        );
    }
}

#[test]
fn left_and_right_vertices_mirror_about_the_center() {
    let geometry = reference_geometry();
    let center_x = 256.0;

    for (left, right) in [(TOP_LEFT, TOP_RIGHT), (BOTTOM_LEFT, BOTTOM_RIGHT)] {
        let left = geometry.vertices[left];
        let right = geometry.vertices[right];

        assert!((left.x - center_x + (right.x - center_x)).abs() < EPSILON);
        assert!((left.y - right.y).abs() < EPSILON);
    }
}

#[test]
fn every_edge_is_stroked_exactly_once() {
    let geometry = reference_geometry();
    let faces = geometry.faces(CYAN, PURPLE);
    let edges = geometry.unique_edges(&faces);

    // 4 top edges + 3 right edges + 2 left edges; the edge shared by the two
    // lower faces appears only once.
    assert_eq!(edges.len(), 9);

    let cyan_edges = edges.iter().filter(|e| e.color == CYAN).count();
    let purple_edges = edges.iter().filter(|e| e.color == PURPLE).count();
    assert_eq!(cyan_edges, 6);
    assert_eq!(purple_edges, 3);
}

#[test]
fn rendered_canvas_has_requested_dimensions() {
    let config = RenderConfig {
        canvas_size: 256,
        ..RenderConfig::default()
    };

    let logo = render::render_logo(&config);
    assert_eq!(logo.width(), 256);
    assert_eq!(logo.height(), 256);
}

#[test]
fn edge_midpoints_are_painted() {
    let config = RenderConfig::default();
    let logo = render::render_logo(&config);

    let size = config.canvas_size as f32;
    let geometry = CubeGeometry::new(
        Point::new(size / 2.0, size / 2.0),
        size * config.cube_scale,
    );
    let faces = geometry.faces(config.cyan, config.purple);

    for edge in geometry.unique_edges(&faces) {
        let mid_x = ((edge.from.x + edge.to.x) / 2.0).round() as u32;
        let mid_y = ((edge.from.y + edge.to.y) / 2.0).round() as u32;

        let pixel = logo.get_pixel(mid_x, mid_y);
        assert!(
            pixel[3] > 0,
            "midpoint ({mid_x}, {mid_y}) should not be fully transparent"
        );
    }
}

#[test]
fn rendering_is_idempotent() {
    let config = RenderConfig::default();

    let first = render::render_logo(&config);
    let second = render::render_logo(&config);
    assert_eq!(first.as_raw(), second.as_raw());
}

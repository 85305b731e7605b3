use food_slicer::entities::{ShapeKind, Side};
use food_slicer::geometry::*;

use glam::Vec2;

const EPS: f32 = 1e-4;

fn c() -> Vec2 {
    Vec2::new(100.0, 100.0)
}

fn polygon(outline: Outline) -> Vec<Vec2> {
    match outline {
        Outline::Polygon(points) => points,
        other => panic!("expected polygon, got {:?}", other),
    }
}

// ── Vertex generators ─────────────────────────────────────────────────────────

#[test]
fn star_alternates_outer_and_inner_radius() {
    let pts = star_vertices(c(), 30.0);
    assert_eq!(pts.len(), 10);
    for (i, v) in pts.iter().enumerate() {
        let expected = if i % 2 == 0 { 30.0 } else { 15.0 };
        assert!((v.distance(c()) - expected).abs() < EPS, "vertex {}", i);
    }
    // First vertex at 0°.
    assert!(pts[0].distance(Vec2::new(130.0, 100.0)) < EPS);
}

#[test]
fn hexagon_vertices_on_circle() {
    let pts = hexagon_vertices(c(), 20.0);
    assert_eq!(pts.len(), 6);
    for v in &pts {
        assert!((v.distance(c()) - 20.0).abs() < EPS);
    }
    assert!(pts[3].distance(Vec2::new(80.0, 100.0)) < EPS);
}

// ── Full outlines ─────────────────────────────────────────────────────────────

#[test]
fn full_circle_is_disc() {
    assert_eq!(
        full_outline(ShapeKind::Circle, c(), 25.0),
        Outline::Disc {
            center: c(),
            radius: 25.0
        }
    );
}

#[test]
fn full_rectangle_is_square_of_twice_size() {
    assert_eq!(
        full_outline(ShapeKind::Rectangle, c(), 25.0),
        Outline::Rect {
            min: Vec2::new(75.0, 75.0),
            max: Vec2::new(125.0, 125.0)
        }
    );
}

#[test]
fn full_triangle_apex_up() {
    let pts = polygon(full_outline(ShapeKind::Triangle, c(), 20.0));
    assert_eq!(
        pts,
        vec![
            Vec2::new(100.0, 80.0),
            Vec2::new(80.0, 120.0),
            Vec2::new(120.0, 120.0)
        ]
    );
}

// ── Half outlines ─────────────────────────────────────────────────────────────

#[test]
fn half_circle_keeps_side() {
    assert_eq!(
        half_outline(ShapeKind::Circle, c(), 20.0, Side::Right),
        Some(Outline::HalfDisc {
            center: c(),
            radius: 20.0,
            side: Side::Right
        })
    );
}

#[test]
fn half_rectangle_split_at_centre() {
    assert_eq!(
        half_outline(ShapeKind::Rectangle, c(), 20.0, Side::Left),
        Some(Outline::Rect {
            min: Vec2::new(80.0, 80.0),
            max: Vec2::new(100.0, 120.0)
        })
    );
    assert_eq!(
        half_outline(ShapeKind::Rectangle, c(), 20.0, Side::Right),
        Some(Outline::Rect {
            min: Vec2::new(100.0, 80.0),
            max: Vec2::new(120.0, 120.0)
        })
    );
}

#[test]
fn half_triangle_shares_apex_and_base_midpoint() {
    let left = polygon(half_outline(ShapeKind::Triangle, c(), 20.0, Side::Left).unwrap());
    assert_eq!(
        left,
        vec![
            Vec2::new(100.0, 80.0),
            Vec2::new(80.0, 120.0),
            Vec2::new(100.0, 120.0)
        ]
    );
    let right = polygon(half_outline(ShapeKind::Triangle, c(), 20.0, Side::Right).unwrap());
    assert_eq!(right[1], Vec2::new(120.0, 120.0));
}

#[test]
fn half_star_filters_vertices_by_side() {
    let left = polygon(half_outline(ShapeKind::Star, c(), 30.0, Side::Left).unwrap());
    assert_eq!(left.len(), 5);
    assert!(left.iter().all(|v| v.x <= 100.0));

    let right = polygon(half_outline(ShapeKind::Star, c(), 30.0, Side::Right).unwrap());
    assert_eq!(right.len(), 5);
    assert!(right.iter().all(|v| v.x > 100.0));
}

#[test]
fn half_hexagon_filters_vertices_by_side() {
    let left = polygon(half_outline(ShapeKind::Hexagon, c(), 30.0, Side::Left).unwrap());
    let right = polygon(half_outline(ShapeKind::Hexagon, c(), 30.0, Side::Right).unwrap());
    assert_eq!(left.len(), 3);
    assert_eq!(right.len(), 3);
}

#[test]
fn degenerate_half_is_none() {
    // With zero size every vertex sits on the split line, so the right
    // side keeps nothing.
    assert_eq!(half_outline(ShapeKind::Hexagon, c(), 0.0, Side::Right), None);
    assert_eq!(half_outline(ShapeKind::Star, c(), 0.0, Side::Right), None);
}

// ── contains / bounds ─────────────────────────────────────────────────────────

#[test]
fn disc_contains_edge() {
    let d = full_outline(ShapeKind::Circle, c(), 10.0);
    assert!(d.contains(Vec2::new(110.0, 100.0)));
    assert!(!d.contains(Vec2::new(108.0, 108.0)));
}

#[test]
fn half_disc_contains_only_its_side() {
    let left = half_outline(ShapeKind::Circle, c(), 10.0, Side::Left).unwrap();
    assert!(left.contains(Vec2::new(95.0, 100.0)));
    assert!(!left.contains(Vec2::new(105.0, 100.0)));
}

#[test]
fn polygon_contains_interior_point() {
    let tri = full_outline(ShapeKind::Triangle, c(), 20.0);
    assert!(tri.contains(Vec2::new(100.0, 110.0)));
    assert!(!tri.contains(Vec2::new(82.0, 82.0)));
    assert!(!tri.contains(Vec2::new(100.0, 130.0)));
}

#[test]
fn star_contains_centre() {
    assert!(full_outline(ShapeKind::Star, c(), 30.0).contains(c()));
    assert!(full_outline(ShapeKind::Hexagon, c(), 30.0).contains(c()));
}

#[test]
fn bounds_cover_shape() {
    let (min, max) = full_outline(ShapeKind::Triangle, c(), 20.0).bounds();
    assert_eq!(min, Vec2::new(80.0, 80.0));
    assert_eq!(max, Vec2::new(120.0, 120.0));

    let (min, max) = half_outline(ShapeKind::Circle, c(), 10.0, Side::Right)
        .unwrap()
        .bounds();
    assert_eq!(min, Vec2::new(100.0, 90.0));
    assert_eq!(max, Vec2::new(110.0, 110.0));
}

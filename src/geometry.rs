/// Shape outlines for whole items and sliced halves.
///
/// Positions are shape centres in viewport pixels.  Whole and half outlines
/// share the same vertex generators so a half always lines up with the
/// shape it came from.

use glam::Vec2;

use crate::entities::{ShapeKind, Side};

/// A fillable region.
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    Disc { center: Vec2, radius: f32 },
    /// The half of a disc on one side of its vertical diameter.
    HalfDisc { center: Vec2, radius: f32, side: Side },
    /// Axis-aligned, inclusive of both corners.
    Rect { min: Vec2, max: Vec2 },
    Polygon(Vec<Vec2>),
}

impl Outline {
    /// Bounding box as `(min, max)`.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        match self {
            Outline::Disc { center, radius } => {
                (*center - Vec2::splat(*radius), *center + Vec2::splat(*radius))
            }
            Outline::HalfDisc { center, radius, side } => {
                let r = Vec2::splat(*radius);
                match side {
                    Side::Left => (*center - r, Vec2::new(center.x, center.y + radius)),
                    Side::Right => (Vec2::new(center.x, center.y - radius), *center + r),
                }
            }
            Outline::Rect { min, max } => (*min, *max),
            Outline::Polygon(points) => points.iter().fold(
                (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
                |(lo, hi), p| (lo.min(*p), hi.max(*p)),
            ),
        }
    }

    /// Whether `p` lies inside the region (edges included for discs and rects).
    pub fn contains(&self, p: Vec2) -> bool {
        match self {
            Outline::Disc { center, radius } => p.distance_squared(*center) <= radius * radius,
            Outline::HalfDisc { center, radius, side } => {
                let on_side = match side {
                    Side::Left => p.x <= center.x,
                    Side::Right => p.x >= center.x,
                };
                on_side && p.distance_squared(*center) <= radius * radius
            }
            Outline::Rect { min, max } => {
                p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
            }
            Outline::Polygon(points) => polygon_contains(points, p),
        }
    }
}

/// Even-odd ray casting.
fn polygon_contains(points: &[Vec2], p: Vec2) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

// ── Vertex generators ─────────────────────────────────────────────────────────

/// Ten vertices alternating between `size` and `size / 2`, every 36°
/// starting at 0°.
pub fn star_vertices(center: Vec2, size: f32) -> Vec<Vec2> {
    (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { size } else { size / 2.0 };
            center + Vec2::from_angle((i as f32 * 36.0).to_radians()) * r
        })
        .collect()
}

/// Six vertices of radius `size`, every 60° starting at 0°.
pub fn hexagon_vertices(center: Vec2, size: f32) -> Vec<Vec2> {
    (0..6)
        .map(|i| center + Vec2::from_angle((i as f32 * 60.0).to_radians()) * size)
        .collect()
}

/// Isosceles triangle, apex up, base `2 * size` wide.
fn triangle_vertices(center: Vec2, size: f32) -> Vec<Vec2> {
    vec![
        Vec2::new(center.x, center.y - size),
        Vec2::new(center.x - size, center.y + size),
        Vec2::new(center.x + size, center.y + size),
    ]
}

// ── Outlines ──────────────────────────────────────────────────────────────────

pub fn full_outline(shape: ShapeKind, center: Vec2, size: f32) -> Outline {
    match shape {
        ShapeKind::Circle => Outline::Disc {
            center,
            radius: size,
        },
        ShapeKind::Rectangle => Outline::Rect {
            min: center - Vec2::splat(size),
            max: center + Vec2::splat(size),
        },
        ShapeKind::Triangle => Outline::Polygon(triangle_vertices(center, size)),
        ShapeKind::Star => Outline::Polygon(star_vertices(center, size)),
        ShapeKind::Hexagon => Outline::Polygon(hexagon_vertices(center, size)),
    }
}

/// Outline of one half, or `None` when the vertex filter leaves too few
/// points to fill (star and hexagon only).
pub fn half_outline(shape: ShapeKind, center: Vec2, size: f32, side: Side) -> Option<Outline> {
    let outline = match shape {
        ShapeKind::Circle => Outline::HalfDisc {
            center,
            radius: size,
            side,
        },
        ShapeKind::Rectangle => {
            let (min_x, max_x) = match side {
                Side::Left => (center.x - size, center.x),
                Side::Right => (center.x, center.x + size),
            };
            Outline::Rect {
                min: Vec2::new(min_x, center.y - size),
                max: Vec2::new(max_x, center.y + size),
            }
        }
        ShapeKind::Triangle => {
            let base_x = match side {
                Side::Left => center.x - size,
                Side::Right => center.x + size,
            };
            Outline::Polygon(vec![
                Vec2::new(center.x, center.y - size),
                Vec2::new(base_x, center.y + size),
                Vec2::new(center.x, center.y + size),
            ])
        }
        ShapeKind::Star => return filtered_half(star_vertices(center, size), center.x, side),
        ShapeKind::Hexagon => return filtered_half(hexagon_vertices(center, size), center.x, side),
    };
    Some(outline)
}

/// Keep the vertices on one side of `split_x`.  An approximation, not a
/// polygon clip: the result may be empty or a sliver.
fn filtered_half(vertices: Vec<Vec2>, split_x: f32, side: Side) -> Option<Outline> {
    let kept: Vec<Vec2> = vertices
        .into_iter()
        .filter(|v| match side {
            Side::Left => v.x <= split_x,
            Side::Right => v.x > split_x,
        })
        .collect();
    if kept.len() < 3 {
        None
    } else {
        Some(Outline::Polygon(kept))
    }
}

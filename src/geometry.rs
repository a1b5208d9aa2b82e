use std::f64::consts::PI;

use crate::model::{Point, Rect};

pub const VERTEX_SIZE: f64 = 10.0;
pub const VERTEX_MIDDLE: f64 = VERTEX_SIZE * 0.5;

/// Layout of a line body: a `length`-wide, zero-height box anchored at
/// `(x, y)` and rotated by `angle` radians about its own center.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineGeometry {
    pub length: f64,
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

pub fn compute(a: Point, b: Point) -> LineGeometry {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let length = (dx * dx + dy * dy).sqrt();
    LineGeometry {
        length,
        x: (a.x + b.x - length) * 0.5,
        y: (a.y + b.y) * 0.5,
        // With dy == 0 the first atan2 argument is -0.0, so a left-to-right
        // horizontal line gets a full turn (2π) rather than 0.
        angle: PI - (-dy).atan2(dx),
    }
}

pub fn endpoints_from_body(g: &LineGeometry) -> (Point, Point) {
    let half = g.length * 0.5;
    let cx = g.x + half;
    let cy = g.y;
    let (sin, cos) = g.angle.sin_cos();
    (
        Point::new(cx - cos * half, cy - sin * half),
        Point::new(cx + cos * half, cy + sin * half),
    )
}

pub fn handle_origin(p: Point) -> Point {
    Point::new(p.x - VERTEX_MIDDLE, p.y - VERTEX_MIDDLE)
}

/// Maps a client-space pointer position into container space, clamped to the
/// container box. An axis with zero extent is treated as unbounded.
pub fn clamp_to_container(client: Point, container: Rect) -> Point {
    let width = if container.width == 0.0 {
        f64::MAX
    } else {
        container.width
    };
    let height = if container.height == 0.0 {
        f64::MAX
    } else {
        container.height
    };
    Point::new(
        width.min((client.x - container.left).max(0.0)),
        height.min((client.y - container.top).max(0.0)),
    )
}

use egui::{Pos2, Rect};

use crate::consts::{PENCIL_STROKE_WIDTH, RESIZE_HANDLE_RADIUS, SHAPE_STROKE_WIDTH};
use crate::shape::{Circle, Polyline, Rectangle};
use crate::widgets::Corner;

/// Extra slack around a shape outline so thin strokes stay clickable.
const HIT_TOLERANCE: f32 = 3.0;

pub fn hit_rectangle(rect: &Rectangle, pos: Pos2) -> bool {
    rect.bounding_rect()
        .expand(SHAPE_STROKE_WIDTH / 2.0 + HIT_TOLERANCE)
        .contains(pos)
}

pub fn hit_circle(circle: &Circle, pos: Pos2) -> bool {
    circle.center.distance(pos) <= circle.radius + SHAPE_STROKE_WIDTH / 2.0 + HIT_TOLERANCE
}

pub fn hit_polyline(line: &Polyline, pos: Pos2) -> bool {
    let reach = PENCIL_STROKE_WIDTH / 2.0 + HIT_TOLERANCE;
    match line.points.as_slice() {
        [] => false,
        [only] => only.distance(pos) <= reach,
        points => points
            .windows(2)
            .any(|pair| distance_to_segment(pos, pair[0], pair[1]) <= reach),
    }
}

/// Distance from a point to the closest point on segment `a`-`b`.
pub fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return a.distance(p);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (a + ab * t).distance(p)
}

/// Which resize handle of a selection rect the position grabs, if any.
pub fn corner_at(rect: Rect, pos: Pos2) -> Option<Corner> {
    let corners = [
        (rect.left_top(), Corner::TopLeft),
        (rect.right_top(), Corner::TopRight),
        (rect.left_bottom(), Corner::BottomLeft),
        (rect.right_bottom(), Corner::BottomRight),
    ];
    corners
        .into_iter()
        .find(|(handle, _)| handle.distance(pos) <= RESIZE_HANDLE_RADIUS)
        .map(|(_, corner)| corner)
}

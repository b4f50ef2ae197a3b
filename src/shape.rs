use egui::{Pos2, Rect, Vec2, vec2};
use uuid::Uuid;

/// Opaque identifier for a shape. Generated once at creation and never
/// reused; updates address shapes by id, never by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Axis-aligned rectangle anchored at the pointer-down position.
///
/// Width and height are signed: dragging up or left of the anchor keeps the
/// anchor fixed and grows the rectangle in the negative direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub id: ShapeId,
    pub origin: Pos2,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    /// The degenerate 1x1 rectangle appended at pointer-down.
    pub fn minimal(id: ShapeId, origin: Pos2) -> Self {
        Self {
            id,
            origin,
            width: 1.0,
            height: 1.0,
        }
    }

    /// Recompute width/height from the current pointer position.
    pub fn drag_to(&mut self, pos: Pos2) {
        self.width = pos.x - self.origin.x;
        self.height = pos.y - self.origin.y;
    }

    /// Normalized bounding rect (handles negative width/height).
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_two_pos(self.origin, self.origin + vec2(self.width, self.height))
    }
}

/// Circle grown from its center by the drag distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub id: ShapeId,
    pub center: Pos2,
    pub radius: f32,
}

impl Circle {
    pub fn minimal(id: ShapeId, center: Pos2) -> Self {
        Self {
            id,
            center,
            radius: 1.0,
        }
    }

    pub fn drag_to(&mut self, pos: Pos2) {
        self.radius = self.center.distance(pos);
    }

    pub fn bounding_rect(&self) -> Rect {
        Rect::from_center_size(self.center, Vec2::splat(self.radius * 2.0))
    }
}

/// Freehand stroke: an ordered, append-only point sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub id: ShapeId,
    pub points: Vec<Pos2>,
}

impl Polyline {
    pub fn minimal(id: ShapeId, start: Pos2) -> Self {
        Self {
            id,
            points: vec![start],
        }
    }

    /// Points are only ever appended during a stroke, never replaced.
    pub fn push_point(&mut self, pos: Pos2) {
        self.points.push(pos);
    }

    pub fn bounding_rect(&self) -> Rect {
        let mut rect = Rect::NOTHING;
        for p in &self.points {
            rect.extend_with(*p);
        }
        rect
    }
}

/// A shape of any variant, detached from its collection.
///
/// Used by the selection layer, which needs to hit-test and transform shapes
/// without caring which collection they live in. A shape's identity never
/// migrates across variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(Rectangle),
    Circle(Circle),
    Line(Polyline),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rect(r) => r.id,
            Shape::Circle(c) => c.id,
            Shape::Line(l) => l.id,
        }
    }

    pub fn bounding_rect(&self) -> Rect {
        match self {
            Shape::Rect(r) => r.bounding_rect(),
            Shape::Circle(c) => c.bounding_rect(),
            Shape::Line(l) => l.bounding_rect(),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Rect(r) => r.origin += delta,
            Shape::Circle(c) => c.center += delta,
            Shape::Line(l) => {
                for p in &mut l.points {
                    *p += delta;
                }
            }
        }
    }

    /// Refit the shape from one bounding rect into another, as a corner
    /// resize does. `from` must be the bounding rect the shape had when the
    /// resize started.
    pub fn fit_into(&mut self, from: Rect, to: Rect) {
        match self {
            Shape::Rect(r) => {
                r.origin = to.min;
                r.width = to.width();
                r.height = to.height();
            }
            Shape::Circle(c) => {
                c.center = to.center();
                c.radius = to.width().min(to.height()) / 2.0;
            }
            Shape::Line(l) => {
                for p in &mut l.points {
                    let tx = if from.width() > 0.0 {
                        (p.x - from.min.x) / from.width()
                    } else {
                        0.5
                    };
                    let ty = if from.height() > 0.0 {
                        (p.y - from.min.y) / from.height()
                    } else {
                        0.5
                    };
                    p.x = to.min.x + tx * to.width();
                    p.y = to.min.y + ty * to.height();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn rectangle_drag_allows_negative_growth() {
        let mut rect = Rectangle::minimal(ShapeId::new(), pos2(50.0, 50.0));
        rect.drag_to(pos2(10.0, 20.0));
        assert_eq!(rect.width, -40.0);
        assert_eq!(rect.height, -30.0);

        let bounds = rect.bounding_rect();
        assert_eq!(bounds.min, pos2(10.0, 20.0));
        assert_eq!(bounds.max, pos2(50.0, 50.0));
    }

    #[test]
    fn circle_radius_is_euclidean_distance() {
        let mut circle = Circle::minimal(ShapeId::new(), pos2(0.0, 0.0));
        circle.drag_to(pos2(3.0, 4.0));
        assert_eq!(circle.radius, 5.0);
    }

    #[test]
    fn polyline_fit_into_scales_points() {
        let id = ShapeId::new();
        let mut shape = Shape::Line(Polyline {
            id,
            points: vec![pos2(0.0, 0.0), pos2(10.0, 10.0)],
        });
        let from = shape.bounding_rect();
        shape.fit_into(from, Rect::from_min_max(pos2(0.0, 0.0), pos2(20.0, 20.0)));
        match shape {
            Shape::Line(l) => assert_eq!(l.points[1], pos2(20.0, 20.0)),
            _ => unreachable!(),
        }
    }
}

use egui::Pos2;

use crate::background::BackgroundImage;
use crate::geometry;
use crate::shape::{Circle, Polyline, Rectangle, Shape, ShapeId};
use crate::tool::Tool;

/// The whole drawable state: active tool, the three shape collections, the
/// optional background image and the current selection.
///
/// Shapes live in three independent ordered collections; insertion order is
/// z-order for rendering (rectangles below circles below pencil lines, each
/// group in creation order). Collections are only appended to or updated
/// element-wise by id; individual shapes are never removed, only a full
/// [`Stage::clear`] empties them.
#[derive(Debug, Default)]
pub struct Stage {
    tool: Tool,
    rects: Vec<Rectangle>,
    circles: Vec<Circle>,
    lines: Vec<Polyline>,
    background: Option<BackgroundImage>,
    selection: Option<ShapeId>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switch the active tool. Never touches the shape collections; leaving
    /// select mode drops the selection since it is meaningless elsewhere.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool != self.tool {
            log::info!("tool changed: {}", tool.name());
        }
        if tool != Tool::Select {
            self.selection = None;
        }
        self.tool = tool;
    }

    /// Atomic reset: back to select mode with an empty stage. Pure in-memory
    /// assignment with no partial-failure path; calling it twice is the same
    /// as calling it once.
    pub fn clear(&mut self) {
        log::info!("clearing stage");
        self.tool = Tool::Select;
        self.rects.clear();
        self.circles.clear();
        self.lines.clear();
        self.background = None;
        self.selection = None;
    }

    pub fn rects(&self) -> &[Rectangle] {
        &self.rects
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn lines(&self) -> &[Polyline] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.circles.is_empty()
            && self.lines.is_empty()
            && self.background.is_none()
    }

    pub fn add_rect(&mut self, rect: Rectangle) {
        self.rects.push(rect);
    }

    pub fn add_circle(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    pub fn add_line(&mut self, line: Polyline) {
        self.lines.push(line);
    }

    pub fn rect_mut(&mut self, id: ShapeId) -> Option<&mut Rectangle> {
        self.rects.iter_mut().find(|r| r.id == id)
    }

    pub fn circle_mut(&mut self, id: ShapeId) -> Option<&mut Circle> {
        self.circles.iter_mut().find(|c| c.id == id)
    }

    pub fn line_mut(&mut self, id: ShapeId) -> Option<&mut Polyline> {
        self.lines.iter_mut().find(|l| l.id == id)
    }

    /// Topmost shape at the given canvas position, following render z-order
    /// (pencil lines above circles above rectangles, later shapes on top).
    pub fn shape_at(&self, pos: Pos2) -> Option<ShapeId> {
        if let Some(line) = self
            .lines
            .iter()
            .rev()
            .find(|l| geometry::hit_polyline(l, pos))
        {
            return Some(line.id);
        }
        if let Some(circle) = self
            .circles
            .iter()
            .rev()
            .find(|c| geometry::hit_circle(c, pos))
        {
            return Some(circle.id);
        }
        self.rects
            .iter()
            .rev()
            .find(|r| geometry::hit_rectangle(r, pos))
            .map(|r| r.id)
    }

    /// Detached copy of a shape, whichever collection it lives in.
    pub fn find_shape(&self, id: ShapeId) -> Option<Shape> {
        if let Some(r) = self.rects.iter().find(|r| r.id == id) {
            return Some(Shape::Rect(r.clone()));
        }
        if let Some(c) = self.circles.iter().find(|c| c.id == id) {
            return Some(Shape::Circle(c.clone()));
        }
        self.lines
            .iter()
            .find(|l| l.id == id)
            .map(|l| Shape::Line(l.clone()))
    }

    /// Write a transformed shape back into its collection by id. A shape
    /// never migrates across collections, so the variant determines where it
    /// lands; unknown ids are ignored.
    pub fn update_shape(&mut self, shape: Shape) {
        match shape {
            Shape::Rect(rect) => {
                if let Some(slot) = self.rect_mut(rect.id) {
                    *slot = rect;
                }
            }
            Shape::Circle(circle) => {
                if let Some(slot) = self.circle_mut(circle.id) {
                    *slot = circle;
                }
            }
            Shape::Line(line) => {
                if let Some(slot) = self.line_mut(line.id) {
                    *slot = line;
                }
            }
        }
    }

    pub fn selection(&self) -> Option<ShapeId> {
        self.selection
    }

    pub fn select(&mut self, id: ShapeId) {
        self.selection = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn background(&self) -> Option<&BackgroundImage> {
        self.background.as_ref()
    }

    /// Install a new background image, replacing any previous one wholesale.
    pub fn set_background(&mut self, image: BackgroundImage) {
        log::info!(
            "background image set: {}x{} source pixels",
            image.source_size()[0],
            image.source_size()[1]
        );
        self.background = Some(image);
    }
}

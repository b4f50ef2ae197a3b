use egui::{Pos2, Rect};

use crate::shape::{Circle, Polyline, Rectangle, ShapeId};
use crate::stage::Stage;
use crate::tool::Tool;

/// State of the pointer interaction controller.
///
/// `Drawing` is entered on pointer-down with a drawing tool and left on
/// pointer-up, pointer-cancel, or the pointer moving outside the canvas
/// bounds. At most one gesture is in flight; the in-progress shape is
/// addressed by id so concurrent edits to other shapes are impossible.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Drawing {
        tool: Tool,
        shape_id: ShapeId,
        anchor: Pos2,
    },
}

/// Translates a continuous pointer gesture into shape creation and live
/// mutation. Positions are canvas-local; the caller resolves screen
/// coordinates and canvas bounds.
#[derive(Debug, Default)]
pub struct GestureController {
    state: GestureState,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, GestureState::Drawing { .. })
    }

    /// Pointer-down: in select mode this is a no-op (the selection layer owns
    /// the pointer there); with a drawing tool it appends a minimal shape and
    /// enters `Drawing`, recording the anchor.
    ///
    /// A missing pointer position is defaulted to the origin, not treated as
    /// an error. A down while a stale gesture is still registered supersedes
    /// it.
    pub fn pointer_down(&mut self, pos: Option<Pos2>, stage: &mut Stage) {
        self.end_gesture();

        let tool = stage.tool();
        if !tool.is_drawing_tool() {
            return;
        }

        let pos = pos.unwrap_or(Pos2::ZERO);
        let shape_id = ShapeId::new();
        match tool {
            Tool::Select => return,
            Tool::Rectangle => stage.add_rect(Rectangle::minimal(shape_id, pos)),
            Tool::Circle => stage.add_circle(Circle::minimal(shape_id, pos)),
            Tool::Pencil => stage.add_line(Polyline::minimal(shape_id, pos)),
        }
        log::debug!("gesture started: {} {}", tool.name(), shape_id);

        self.state = GestureState::Drawing {
            tool,
            shape_id,
            anchor: pos,
        };
    }

    /// Pointer-move while drawing recomputes the in-progress shape from the
    /// anchor. A position outside the canvas bounds ends the gesture instead
    /// (the window-level cancellation path); the shape keeps its last
    /// computed geometry.
    pub fn pointer_move(&mut self, pos: Pos2, canvas: Rect, stage: &mut Stage) {
        let GestureState::Drawing { tool, shape_id, .. } = self.state else {
            return;
        };

        if !canvas.contains(pos) {
            log::debug!("pointer left canvas bounds, ending gesture");
            self.end_gesture();
            return;
        }

        // Only the shape whose id matches the in-progress id is touched.
        match tool {
            Tool::Rectangle => {
                if let Some(rect) = stage.rect_mut(shape_id) {
                    rect.drag_to(pos);
                }
            }
            Tool::Circle => {
                if let Some(circle) = stage.circle_mut(shape_id) {
                    circle.drag_to(pos);
                }
            }
            Tool::Pencil => {
                if let Some(line) = stage.line_mut(shape_id) {
                    line.push_point(pos);
                }
            }
            Tool::Select => {}
        }
    }

    /// Pointer-up or pointer-cancel. The in-progress shape is left exactly as
    /// last computed: no snapping, no minimum size, no commit step. A gesture
    /// with zero moves leaves its degenerate shape in the collection.
    pub fn pointer_up(&mut self) {
        self.end_gesture();
    }

    pub fn cancel(&mut self) {
        self.end_gesture();
    }

    fn end_gesture(&mut self) {
        if let GestureState::Drawing { tool, shape_id, .. } = self.state {
            log::debug!("gesture ended: {} {}", tool.name(), shape_id);
        }
        self.state = GestureState::Idle;
    }
}

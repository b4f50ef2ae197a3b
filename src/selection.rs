use egui::{Pos2, Rect, Vec2};

use crate::geometry;
use crate::shape::Shape;
use crate::stage::Stage;
use crate::widgets::Corner;

/// Smallest box a selection may be resized down to.
const MIN_RESIZE_SIZE: f32 = 10.0;

/// What the selection layer is currently doing with the pointer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TransformState {
    #[default]
    Idle,
    /// Moving the selected shape by dragging its body.
    Dragging { last: Pos2 },
    /// Resizing the selected shape from one of its corner handles.
    ///
    /// The shape as it was at drag start is kept so each move refits the
    /// original geometry instead of accumulating rounding error.
    Resizing {
        corner: Corner,
        original: Shape,
        original_rect: Rect,
        start: Pos2,
    },
}

/// Selection and transform layer. Active only while the select tool is the
/// current tool; the interaction controller ignores selection entirely in
/// every other mode.
#[derive(Debug, Default)]
pub struct SelectionController {
    state: TransformState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TransformState {
        &self.state
    }

    pub fn is_transforming(&self) -> bool {
        !matches!(self.state, TransformState::Idle)
    }

    /// Pointer-down in select mode: grab a resize handle of the current
    /// selection if one is under the pointer, otherwise select the topmost
    /// shape there and start dragging it, otherwise clear the selection
    /// (background click).
    pub fn pointer_down(&mut self, pos: Pos2, stage: &mut Stage) {
        self.state = TransformState::Idle;

        if let Some(id) = stage.selection() {
            if let Some(shape) = stage.find_shape(id) {
                let rect = shape.bounding_rect();
                if let Some(corner) = geometry::corner_at(rect, pos) {
                    log::debug!("resize started: {} from {:?}", id, corner);
                    self.state = TransformState::Resizing {
                        corner,
                        original: shape,
                        original_rect: rect,
                        start: pos,
                    };
                    return;
                }
            }
        }

        match stage.shape_at(pos) {
            Some(id) => {
                log::debug!("shape selected: {id}");
                stage.select(id);
                self.state = TransformState::Dragging { last: pos };
            }
            None => stage.clear_selection(),
        }
    }

    pub fn pointer_move(&mut self, pos: Pos2, stage: &mut Stage) {
        match &mut self.state {
            TransformState::Idle => {}
            TransformState::Dragging { last } => {
                let delta = pos - *last;
                *last = pos;
                if let Some(id) = stage.selection() {
                    if let Some(mut shape) = stage.find_shape(id) {
                        shape.translate(delta);
                        stage.update_shape(shape);
                    }
                }
            }
            TransformState::Resizing {
                corner,
                original,
                original_rect,
                start,
            } => {
                let target = resize_rect(*original_rect, *corner, pos - *start);
                let mut shape = original.clone();
                shape.fit_into(*original_rect, target);
                stage.update_shape(shape);
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.state = TransformState::Idle;
    }
}

/// New selection rect for a corner dragged by `delta`, holding the opposite
/// corner fixed and enforcing a minimum size.
fn resize_rect(original: Rect, corner: Corner, delta: Vec2) -> Rect {
    let mut rect = original;
    match corner {
        Corner::TopLeft => {
            rect.min.x = (original.min.x + delta.x).min(rect.max.x - MIN_RESIZE_SIZE);
            rect.min.y = (original.min.y + delta.y).min(rect.max.y - MIN_RESIZE_SIZE);
        }
        Corner::TopRight => {
            rect.max.x = (original.max.x + delta.x).max(rect.min.x + MIN_RESIZE_SIZE);
            rect.min.y = (original.min.y + delta.y).min(rect.max.y - MIN_RESIZE_SIZE);
        }
        Corner::BottomLeft => {
            rect.min.x = (original.min.x + delta.x).min(rect.max.x - MIN_RESIZE_SIZE);
            rect.max.y = (original.max.y + delta.y).max(rect.min.y + MIN_RESIZE_SIZE);
        }
        Corner::BottomRight => {
            rect.max.x = (original.max.x + delta.x).max(rect.min.x + MIN_RESIZE_SIZE);
            rect.max.y = (original.max.y + delta.y).max(rect.min.y + MIN_RESIZE_SIZE);
        }
    }
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn resize_holds_opposite_corner() {
        let original = Rect::from_min_max(pos2(10.0, 10.0), pos2(50.0, 50.0));
        let resized = resize_rect(original, Corner::BottomRight, vec2(20.0, 10.0));
        assert_eq!(resized.min, pos2(10.0, 10.0));
        assert_eq!(resized.max, pos2(70.0, 60.0));
    }

    #[test]
    fn resize_enforces_minimum_size() {
        let original = Rect::from_min_max(pos2(10.0, 10.0), pos2(50.0, 50.0));
        let resized = resize_rect(original, Corner::TopLeft, vec2(100.0, 100.0));
        assert_eq!(resized.width(), MIN_RESIZE_SIZE);
        assert_eq!(resized.height(), MIN_RESIZE_SIZE);
    }
}

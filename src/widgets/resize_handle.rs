use egui::{Color32, CursorIcon, Pos2, Rect, Stroke, Ui, Vec2};

use crate::consts::RESIZE_HANDLE_RADIUS;

/// Represents a corner of a selection box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Position of this corner on a rect.
    pub fn of(&self, rect: Rect) -> Pos2 {
        match self {
            Corner::TopLeft => rect.left_top(),
            Corner::TopRight => rect.right_top(),
            Corner::BottomLeft => rect.left_bottom(),
            Corner::BottomRight => rect.right_bottom(),
        }
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            Corner::TopLeft | Corner::BottomRight => CursorIcon::ResizeNwSe,
            Corner::TopRight | Corner::BottomLeft => CursorIcon::ResizeNeSw,
        }
    }
}

/// Visual resize handles drawn at the corners of a selection box.
///
/// Interaction is resolved by the selection controller from raw pointer
/// events; this widget only paints the handles and sets the hover cursor.
pub struct ResizeHandle;

impl ResizeHandle {
    const FILL: Color32 = Color32::from_rgb(30, 120, 255);
    const SIDE: f32 = 9.0;

    /// Draw the four corner handles plus the selection outline.
    pub fn draw_selection_box(ui: &Ui, rect: Rect) {
        ui.painter().rect_stroke(
            rect,
            0.0,
            Stroke::new(1.0, Self::FILL),
        );
        for corner in Corner::ALL {
            let handle = Rect::from_center_size(corner.of(rect), Vec2::splat(Self::SIDE));
            ui.painter().rect_filled(handle, 2.0, Self::FILL);
            ui.painter().rect_stroke(handle, 2.0, Stroke::new(1.0, Color32::WHITE));
        }
    }

    /// Set the resize cursor when hovering a handle.
    pub fn update_cursor(ui: &Ui, rect: Rect, pointer: Option<Pos2>) {
        let Some(pos) = pointer else { return };
        for corner in Corner::ALL {
            if corner.of(rect).distance(pos) <= RESIZE_HANDLE_RADIUS {
                ui.ctx().set_cursor_icon(corner.cursor_icon());
                return;
            }
        }
    }
}

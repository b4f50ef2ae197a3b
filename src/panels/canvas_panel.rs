use eframe::egui::{self, Color32, Rect, Sense, Stroke, Vec2};

use crate::SketchApp;
use crate::consts;
use crate::widgets::ResizeHandle;

/// The drawing surface: a fixed square canvas centered in the remaining
/// space, sized by the responsive breakpoint.
pub fn canvas_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let side = consts::canvas_size(ctx.screen_rect().width());
        let canvas = Vec2::splat(side);
        let slack = ((ui.available_size() - canvas) / 2.0).max(Vec2::ZERO);
        let canvas_rect = Rect::from_min_size(ui.min_rect().min + slack, canvas);

        // Reserve the region so egui knows the canvas owns its pointer area.
        ui.allocate_rect(canvas_rect, Sense::click_and_drag());

        app.handle_canvas_input(ctx, canvas_rect);

        let painter = ui.painter_at(canvas_rect);
        app.draw_canvas(ctx, &painter, canvas_rect);
        painter.rect_stroke(canvas_rect, 0.0, Stroke::new(1.0, Color32::GRAY));

        // Transform handles, select mode only.
        if let Some(selection_rect) = app.selection_screen_rect(canvas_rect) {
            ResizeHandle::draw_selection_box(ui, selection_rect);
            ResizeHandle::update_cursor(ui, selection_rect, ctx.pointer_hover_pos());
        }
    });
}

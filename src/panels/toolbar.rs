use eframe::egui;

use crate::SketchApp;
use crate::tool::Tool;

/// Top toolbar: tool selection, stage clear, image upload and PNG export.
pub fn toolbar(app: &mut SketchApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            let current = app.stage().tool();
            for tool in Tool::ALL {
                if ui.selectable_label(current == tool, tool.name()).clicked() {
                    app.stage_mut().set_tool(tool);
                }
            }

            ui.separator();

            if ui
                .button("🗑 Clear")
                .on_hover_text("Clear the stage")
                .clicked()
            {
                app.stage_mut().clear();
            }

            ui.separator();

            if ui.button("📂 Upload image").clicked() {
                app.upload_background();
            }
            if ui.button("💾 Export image").clicked() {
                app.export_image();
            }
        });
    });
}

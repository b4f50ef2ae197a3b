use egui::{Pos2, Rect};

use crate::consts;
use crate::export;
use crate::file_handler::FileHandler;
use crate::gesture::GestureController;
use crate::input::{InputHandler, PointerEvent};
use crate::panels;
use crate::renderer::Renderer;
use crate::selection::SelectionController;
use crate::stage::Stage;
use crate::tool::Tool;

/// The application: stage state plus the controllers that mutate it and the
/// renderer that draws it.
pub struct SketchApp {
    stage: Stage,
    gesture: GestureController,
    selection: SelectionController,
    renderer: Renderer,
    input: InputHandler,
    file_handler: FileHandler,
    /// Side length the canvas had last frame, used for export.
    canvas_size: f32,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut stage = Stage::new();
        // Only the active tool survives a restart; drawings are not persisted.
        if let Some(storage) = cc.storage {
            if let Some(tool) = eframe::get_value::<Tool>(storage, eframe::APP_KEY) {
                stage.set_tool(tool);
            }
        }
        Self {
            stage,
            gesture: GestureController::new(),
            selection: SelectionController::new(),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            file_handler: FileHandler::new(),
            canvas_size: consts::CANVAS_SIZE,
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    /// Toolbar upload action. A dismissed dialog is a no-op; a file that
    /// fails to decode is logged and dropped.
    pub fn upload_background(&mut self) {
        match self.file_handler.pick_background_image() {
            None => {}
            Some(Ok(background)) => self.stage.set_background(background),
            Some(Err(err)) => log::error!("image upload failed: {err}"),
        }
    }

    /// Toolbar export action: rasterize at 3x density and deliver
    /// `image.png`. Failures degrade to a logged no-op.
    pub fn export_image(&mut self) {
        match export::render_png(&self.stage, self.canvas_size, consts::EXPORT_PIXEL_RATIO) {
            Ok(png) => self.deliver_png(&png),
            Err(err) => log::warn!("export skipped: {err}"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn deliver_png(&self, png: &[u8]) {
        let path = std::path::Path::new("image.png");
        match export::save_png(path, png) {
            Ok(()) => log::info!("exported canvas to {}", path.display()),
            Err(err) => log::error!("{err}"),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn deliver_png(&self, png: &[u8]) {
        // No filesystem on web; hand the payload to the console for now.
        let uri = export::data_uri(png);
        log::info!("exported canvas as data uri ({} chars)", uri.len());
    }

    /// Route this frame's pointer events to the gesture controller (drawing
    /// tools) or the selection controller (select mode).
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.canvas_size = canvas_rect.width();
        let local_bounds = Rect::from_min_size(Pos2::ZERO, canvas_rect.size());

        for event in self.input.collect(ctx, canvas_rect) {
            if self.stage.tool() == Tool::Select {
                match event {
                    PointerEvent::Down { pos } => self
                        .selection
                        .pointer_down(pos.unwrap_or(Pos2::ZERO), &mut self.stage),
                    PointerEvent::Move { pos } => self.selection.pointer_move(pos, &mut self.stage),
                    PointerEvent::Up | PointerEvent::Leave => self.selection.pointer_up(),
                }
            } else {
                match event {
                    PointerEvent::Down { pos } => self.gesture.pointer_down(pos, &mut self.stage),
                    PointerEvent::Move { pos } => {
                        self.gesture.pointer_move(pos, local_bounds, &mut self.stage)
                    }
                    PointerEvent::Up => self.gesture.pointer_up(),
                    PointerEvent::Leave => self.gesture.cancel(),
                }
            }
        }
    }

    pub fn draw_canvas(&mut self, ctx: &egui::Context, painter: &egui::Painter, canvas_rect: Rect) {
        self.renderer.draw_stage(ctx, painter, canvas_rect, &self.stage);
    }

    /// Bounding rect of the selected shape in screen coordinates, present
    /// only while the select tool is active and something is selected.
    pub fn selection_screen_rect(&self, canvas_rect: Rect) -> Option<Rect> {
        if self.stage.tool() != Tool::Select {
            return None;
        }
        let shape = self.stage.find_shape(self.stage.selection()?)?;
        Some(shape.bounding_rect().translate(canvas_rect.min.to_vec2()))
    }
}

impl eframe::App for SketchApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.stage.tool());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar(self, ctx);
        panels::canvas_panel(self, ctx);

        self.file_handler.preview_files_being_dropped(ctx);
        self.file_handler.check_for_dropped_files(ctx);
        if let Some(result) = self.file_handler.take_dropped_background() {
            match result {
                Ok(background) => self.stage.set_background(background),
                Err(err) => log::error!("image drop failed: {err}"),
            }
        }
    }
}

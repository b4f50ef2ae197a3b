use egui::{Color32, Context, Painter, Rect, Stroke, TextureHandle, TextureId, TextureOptions, pos2};

use crate::background::BackgroundImage;
use crate::consts::{PENCIL_STROKE_WIDTH, SHAPE_STROKE_WIDTH};
use crate::stage::Stage;

/// Paints the stage into an egui painter each frame: white backdrop, the
/// background image, then rectangles, circles and pencil lines in z-order.
///
/// Shapes are stored in canvas-local coordinates; the canvas rect supplies
/// the screen offset. The background texture is uploaded once per image
/// generation and cached.
pub struct Renderer {
    background_texture: Option<(u64, TextureHandle)>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            background_texture: None,
        }
    }

    pub fn draw_stage(&mut self, ctx: &Context, painter: &Painter, canvas_rect: Rect, stage: &Stage) {
        // White backdrop, also the background of the exported canvas.
        painter.rect_filled(canvas_rect, 0.0, Color32::WHITE);

        if let Some(bg) = stage.background() {
            let texture_id = self.background_texture(ctx, bg);
            let rect = Rect::from_min_size(canvas_rect.min, bg.display_size());
            painter.image(
                texture_id,
                rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        let offset = canvas_rect.min.to_vec2();
        let outline = Stroke::new(SHAPE_STROKE_WIDTH, Color32::BLACK);

        for rect in stage.rects() {
            painter.rect_stroke(rect.bounding_rect().translate(offset), 0.0, outline);
        }

        for circle in stage.circles() {
            painter.circle_stroke(circle.center + offset, circle.radius, outline);
        }

        let pencil = Stroke::new(PENCIL_STROKE_WIDTH, Color32::BLACK);
        for line in stage.lines() {
            match line.points.as_slice() {
                [] => {}
                // A zero-move stroke is a dot.
                [only] => {
                    painter.circle_filled(*only + offset, PENCIL_STROKE_WIDTH / 2.0, Color32::BLACK);
                }
                points => {
                    let screen_points = points.iter().map(|p| *p + offset).collect();
                    painter.add(egui::Shape::line(screen_points, pencil));
                }
            }
        }
    }

    fn background_texture(&mut self, ctx: &Context, bg: &BackgroundImage) -> TextureId {
        match &self.background_texture {
            Some((generation, texture)) if *generation == bg.generation() => texture.id(),
            _ => {
                log::debug!("uploading background texture, generation {}", bg.generation());
                let texture =
                    ctx.load_texture("background_image", bg.to_color_image(), TextureOptions::LINEAR);
                let id = texture.id();
                self.background_texture = Some((bg.generation(), texture));
                id
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use egui::{Pos2, Rect, pos2};
use image::{DynamicImage, Rgba, RgbaImage, imageops};

use crate::consts::{PENCIL_STROKE_WIDTH, SHAPE_STROKE_WIDTH};
use crate::error::SketchError;
use crate::stage::Stage;

const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Rasterize the stage to PNG bytes at `pixel_ratio` times the on-screen
/// canvas density. Pure with respect to the stage: white backdrop, the
/// background image anchored at the origin, then rectangles, circles and
/// pencil lines in z-order, all in black ink.
pub fn render_png(stage: &Stage, canvas_size: f32, pixel_ratio: f32) -> Result<Vec<u8>, SketchError> {
    let side = (canvas_size * pixel_ratio).round();
    if !side.is_finite() || side < 1.0 {
        return Err(SketchError::ExportUnavailable("canvas has no size"));
    }
    let side = side as u32;
    let mut img = RgbaImage::from_pixel(side, side, PAPER);

    if let Some(bg) = stage.background() {
        let w = ((bg.display_size().x * pixel_ratio).round() as u32).max(1);
        let h = ((bg.display_size().y * pixel_ratio).round() as u32).max(1);
        let scaled = imageops::resize(bg.rgba(), w, h, imageops::FilterType::Triangle);
        imageops::overlay(&mut img, &scaled, 0, 0);
    }

    for rect in stage.rects() {
        stroke_rect(&mut img, rect.bounding_rect(), SHAPE_STROKE_WIDTH, pixel_ratio);
    }
    for circle in stage.circles() {
        stroke_circle(&mut img, circle.center, circle.radius, SHAPE_STROKE_WIDTH, pixel_ratio);
    }
    for line in stage.lines() {
        let half = PENCIL_STROKE_WIDTH / 2.0 * pixel_ratio;
        match line.points.as_slice() {
            [] => {}
            [only] => stamp_disc(&mut img, scale(*only, pixel_ratio), half),
            points => {
                for pair in points.windows(2) {
                    stroke_segment(&mut img, pair[0], pair[1], PENCIL_STROKE_WIDTH, pixel_ratio);
                }
            }
        }
    }

    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(SketchError::PngEncode)?;
    log::info!("exported canvas: {}x{} px, {} bytes", side, side, bytes.len());
    Ok(bytes)
}

/// Encode PNG bytes as a `data:image/png;base64,…` payload.
pub fn data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

/// Write exported bytes next to the working directory, the download step the
/// original delivers through a synthesized anchor element.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_png(path: &std::path::Path, png: &[u8]) -> Result<(), SketchError> {
    std::fs::write(path, png)?;
    Ok(())
}

fn scale(p: Pos2, ratio: f32) -> Pos2 {
    pos2(p.x * ratio, p.y * ratio)
}

/// Stamp round pen tips along the segment, spaced closely enough to read as
/// a continuous stroke.
fn stroke_segment(img: &mut RgbaImage, a: Pos2, b: Pos2, width: f32, ratio: f32) {
    let a = scale(a, ratio);
    let b = scale(b, ratio);
    let half = width / 2.0 * ratio;
    let length = a.distance(b);
    let steps = (length / 0.5).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        stamp_disc(img, a + (b - a) * t, half);
    }
}

fn stroke_rect(img: &mut RgbaImage, rect: Rect, width: f32, ratio: f32) {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    for pair in corners.windows(2) {
        stroke_segment(img, pair[0], pair[1], width, ratio);
    }
}

fn stroke_circle(img: &mut RgbaImage, center: Pos2, radius: f32, width: f32, ratio: f32) {
    let center = scale(center, ratio);
    let radius = radius * ratio;
    let half = width / 2.0 * ratio;
    let steps = ((std::f32::consts::TAU * radius / 0.5).ceil() as usize).max(32);
    for i in 0..steps {
        let angle = i as f32 / steps as f32 * std::f32::consts::TAU;
        let p = pos2(center.x + radius * angle.cos(), center.y + radius * angle.sin());
        stamp_disc(img, p, half);
    }
}

fn stamp_disc(img: &mut RgbaImage, center: Pos2, radius: f32) {
    let (w, h) = img.dimensions();
    if center.x + radius < 0.0 || center.y + radius < 0.0 {
        return;
    }
    let min_x = (center.x - radius).floor().max(0.0) as u32;
    let min_y = (center.y - radius).floor().max(0.0) as u32;
    let max_x = ((center.x + radius).ceil() as u32).min(w.saturating_sub(1));
    let max_y = ((center.y + radius).ceil() as u32).min(h.saturating_sub(1));
    let radius_sq = radius * radius;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = x as f32 + 0.5 - center.x;
            let dy = y as f32 + 0.5 - center.y;
            if dx * dx + dy * dy <= radius_sq {
                img.put_pixel(x, y, INK);
            }
        }
    }
}

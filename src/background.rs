use std::sync::atomic::{AtomicU64, Ordering};

use egui::Vec2;
use image::RgbaImage;

use crate::consts::CANVAS_SIZE;
use crate::error::SketchError;

// Bumped for every decoded background so the renderer knows when its cached
// texture is stale.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// The single optional raster image behind the shapes.
///
/// At most one exists at a time; a new upload replaces it wholesale and a
/// stage clear drops it. Displayed anchored at the canvas origin at one third
/// of the canvas dimension, whatever the source resolution.
#[derive(Debug, Clone)]
pub struct BackgroundImage {
    rgba: RgbaImage,
    display_size: Vec2,
    generation: u64,
}

impl BackgroundImage {
    /// Decode an uploaded image file. Any format the `image` crate
    /// understands is accepted; anything else is an error the caller logs
    /// and drops.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SketchError> {
        let decoded = image::load_from_memory(bytes)?;
        log::info!("decoded background image: {}x{}", decoded.width(), decoded.height());
        Ok(Self {
            rgba: decoded.to_rgba8(),
            display_size: Vec2::splat(CANVAS_SIZE / 3.0),
            generation: NEXT_GENERATION.fetch_add(1, Ordering::SeqCst),
        })
    }

    /// Raw decoded pixels at source resolution.
    pub fn rgba(&self) -> &RgbaImage {
        &self.rgba
    }

    pub fn source_size(&self) -> [usize; 2] {
        [self.rgba.width() as usize, self.rgba.height() as usize]
    }

    /// Size the image occupies on the canvas, in points.
    pub fn display_size(&self) -> Vec2 {
        self.display_size
    }

    /// Cache key for uploaded textures.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(self.source_size(), self.rgba.as_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn decodes_and_sizes_to_a_third_of_the_canvas() {
        let bg = BackgroundImage::from_bytes(&png_bytes(8, 4)).unwrap();
        assert_eq!(bg.source_size(), [8, 4]);
        assert_eq!(bg.display_size(), Vec2::splat(CANVAS_SIZE / 3.0));
    }

    #[test]
    fn rejects_non_image_bytes() {
        assert!(BackgroundImage::from_bytes(b"not an image").is_err());
    }

    #[test]
    fn generations_are_unique() {
        let a = BackgroundImage::from_bytes(&png_bytes(2, 2)).unwrap();
        let b = BackgroundImage::from_bytes(&png_bytes(2, 2)).unwrap();
        assert_ne!(a.generation(), b.generation());
    }
}

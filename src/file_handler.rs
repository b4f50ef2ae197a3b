use eframe::egui;

use crate::background::BackgroundImage;
use crate::error::SketchError;

/// Image import: a native file picker for the toolbar button plus
/// drag-and-drop onto the window. Only does file plumbing; decoding lives in
/// [`BackgroundImage::from_bytes`] and the stage decides what to do with the
/// result.
#[derive(Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the OS file dialog filtered to image types. Returns `None` when
    /// the user dismisses the dialog without choosing a file, which is a
    /// no-op for the caller.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn pick_background_image(&self) -> Option<Result<BackgroundImage, SketchError>> {
        let path = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
            .pick_file()?;
        Some(match std::fs::read(&path) {
            Ok(bytes) => BackgroundImage::from_bytes(&bytes),
            Err(source) => Err(SketchError::ImageRead {
                path: path.display().to_string(),
                source,
            }),
        })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn pick_background_image(&self) -> Option<Result<BackgroundImage, SketchError>> {
        log::warn!("file dialog not available on web, drop an image file onto the window instead");
        None
    }

    /// Collect any newly dropped files from the UI context.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
            }
        });
    }

    /// Decode the first dropped image file, if any, consuming the drop queue.
    pub fn take_dropped_background(&mut self) -> Option<Result<BackgroundImage, SketchError>> {
        let files = std::mem::take(&mut self.dropped_files);
        for file in files {
            if !Self::is_image_file(&file) {
                log::warn!("dropped file is not a supported image type: {}", file.name);
                continue;
            }
            if let Some(bytes) = &file.bytes {
                return Some(BackgroundImage::from_bytes(bytes));
            }
            #[cfg(not(target_arch = "wasm32"))]
            if let Some(path) = &file.path {
                return Some(match std::fs::read(path) {
                    Ok(bytes) => BackgroundImage::from_bytes(&bytes),
                    Err(source) => Err(SketchError::ImageRead {
                        path: path.display().to_string(),
                        source,
                    }),
                });
            }
            log::warn!("dropped file has no accessible data: {}", file.name);
        }
        None
    }

    /// Check if a file is an image based on MIME type or extension
    fn is_image_file(file: &egui::DroppedFile) -> bool {
        if !file.mime.is_empty() {
            return file.mime.starts_with("image/");
        }
        if let Some(path) = &file.path {
            if let Some(ext) = path.extension() {
                let ext = ext.to_string_lossy().to_lowercase();
                return matches!(
                    ext.as_str(),
                    "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp"
                );
            }
        }
        false
    }

    /// Overlay shown while image files hover over the window.
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order, TextStyle};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            "Drop image to set the canvas background",
            TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }
}

use thiserror::Error;

/// Errors surfaced by image import and canvas export.
///
/// Nothing here corrupts stage state: callers log the error and carry on,
/// leaving the stage exactly as it was.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("failed to read image file {path}: {source}")]
    ImageRead {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to encode exported canvas: {0}")]
    PngEncode(image::ImageError),

    #[error("export skipped: {0}")]
    ExportUnavailable(&'static str),

    #[error("failed to write exported image: {0}")]
    ExportWrite(#[from] std::io::Error),
}

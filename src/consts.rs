/// Canvas side length on wide viewports, in points.
pub const CANVAS_SIZE: f32 = 600.0;

/// Canvas side length below the mobile breakpoint.
pub const CANVAS_MIN_SIZE: f32 = 300.0;

/// Viewport width at which the canvas drops to its small size.
pub const MOBILE_BREAKPOINT: f32 = 620.0;

/// Export density multiplier: the PNG is rendered at three times the
/// on-screen canvas resolution.
pub const EXPORT_PIXEL_RATIO: f32 = 3.0;

/// Outline width for rectangles and circles.
pub const SHAPE_STROKE_WIDTH: f32 = 3.0;

/// Stroke width for freehand pencil lines.
pub const PENCIL_STROKE_WIDTH: f32 = 5.0;

/// Grab distance around a selection corner handle.
pub const RESIZE_HANDLE_RADIUS: f32 = 15.0;

/// Square canvas side for the given viewport width.
pub fn canvas_size(viewport_width: f32) -> f32 {
    if viewport_width < MOBILE_BREAKPOINT {
        CANVAS_MIN_SIZE
    } else {
        CANVAS_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_shrinks_below_the_breakpoint() {
        assert_eq!(canvas_size(1024.0), CANVAS_SIZE);
        assert_eq!(canvas_size(620.0), CANVAS_SIZE);
        assert_eq!(canvas_size(619.0), CANVAS_MIN_SIZE);
        assert_eq!(canvas_size(320.0), CANVAS_MIN_SIZE);
    }
}

//! Shared geometry: stroke sizing constants and display-fit math
//!
//! The fit functions are pure: display size is always recomputed on demand
//! from the native size and the current container/viewport, never stored
//! across layout changes.

/// Stroke sizing constants
pub mod stroke {
    /// Fraction of the image's shorter dimension used as rasterized line
    /// width when no explicit override is configured
    pub const WIDTH_RATIO: f32 = 0.006;
    /// Minimum rasterized line width in native pixels
    pub const MIN_WIDTH: f32 = 2.0;
    /// Live stroke width in display pixels, inline editing
    pub const DISPLAY_WIDTH: f32 = 1.0;
    /// Live stroke width in display pixels, fullscreen editing
    pub const DISPLAY_WIDTH_FULLSCREEN: f32 = 3.0;

    /// Line width used when burning strokes into an image of the given
    /// dimensions
    pub fn raster_width(width: u32, height: u32, line_width: Option<f32>) -> f32 {
        line_width
            .unwrap_or_else(|| MIN_WIDTH.max((width.min(height) as f32 * WIDTH_RATIO).round()))
    }
}

/// Display-fit layout constants and math
pub mod layout {
    use crate::domain::{DisplaySize, NativeSize, Viewport};

    /// Horizontal padding subtracted from the container width, inline mode
    pub const CONTAINER_PADDING: f32 = 16.0;
    /// Maximum display height in inline (modal) mode
    pub const MAX_INLINE_HEIGHT: f32 = 400.0;
    /// Horizontal margin reserved around the fullscreen editing area
    pub const FULLSCREEN_MARGIN_X: f32 = 64.0;
    /// Vertical margin reserved around the fullscreen editing area
    pub const FULLSCREEN_MARGIN_Y: f32 = 120.0;
    /// Fullscreen target area never shrinks below this
    pub const MIN_FULLSCREEN_WIDTH: f32 = 400.0;
    pub const MIN_FULLSCREEN_HEIGHT: f32 = 300.0;

    /// Fit an image into a width/height target preserving aspect ratio:
    /// fill the width, and if that overflows the height cap, fix the
    /// height and derive the width. Rounded to integer display pixels.
    fn fit(native: NativeSize, target_width: f32, max_height: f32) -> DisplaySize {
        let ratio = native.aspect_ratio();
        let mut width = target_width;
        let mut height = target_width * ratio;
        if height > max_height {
            height = max_height;
            width = max_height / ratio;
        }
        DisplaySize {
            width: width.round() as u32,
            height: height.round() as u32,
        }
    }

    /// Display size for inline (modal) editing
    pub fn fit_inline(native: NativeSize, container_width: f32) -> DisplaySize {
        fit(
            native,
            container_width - CONTAINER_PADDING,
            MAX_INLINE_HEIGHT,
        )
    }

    /// Display size for fullscreen editing
    pub fn fit_fullscreen(native: NativeSize, viewport: Viewport) -> DisplaySize {
        let target_width = (viewport.width - FULLSCREEN_MARGIN_X).max(MIN_FULLSCREEN_WIDTH);
        let max_height = (viewport.height - FULLSCREEN_MARGIN_Y).max(MIN_FULLSCREEN_HEIGHT);
        fit(native, target_width, max_height)
    }
}

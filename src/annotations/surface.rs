//! Pointer-driven annotation surface
//!
//! Renders one shot's strokes scaled to the current display size and turns
//! pointer gestures into stroke edits. Works entirely in native
//! coordinates internally; display coordinates exist only at the pointer
//! boundary (normalized on the way in) and the render boundary
//! (denormalized on the way out).

use crate::domain::transform;
use crate::domain::{DisplaySize, NativeSize, Point, Stroke, Viewport};
use crate::render::geometry::{layout, stroke};

use super::history::StrokeHistory;

#[derive(Clone, Debug)]
pub struct AnnotationSurface {
    history: StrokeHistory,
    native_size: Option<NativeSize>,
    display_size: DisplaySize,
    fullscreen: bool,
    read_only: bool,
    drawing: bool,
}

impl AnnotationSurface {
    pub fn new(history_limit: usize) -> Self {
        Self {
            history: StrokeHistory::new(history_limit),
            native_size: None,
            display_size: DisplaySize::default(),
            fullscreen: false,
            read_only: false,
            drawing: false,
        }
    }

    /// Record the base image's pixel dimensions. Until this runs, pointer
    /// input is silently dropped (the image is still decoding, a benign
    /// race rather than an error).
    pub fn image_loaded(&mut self, native: NativeSize) {
        self.native_size = Some(native);
    }

    pub fn native_size(&self) -> Option<NativeSize> {
        self.native_size
    }

    pub fn display_size(&self) -> DisplaySize {
        self.display_size
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Recompute the display size for inline (modal) editing
    pub fn layout_inline(&mut self, container_width: f32) {
        if let Some(native) = self.native_size {
            self.display_size = layout::fit_inline(native, container_width);
        }
    }

    /// Recompute the display size for fullscreen editing
    pub fn layout_fullscreen(&mut self, viewport: Viewport) {
        if let Some(native) = self.native_size {
            self.display_size = layout::fit_fullscreen(native, viewport);
        }
    }

    /// Begin a stroke at a display-space pointer position
    pub fn pointer_down(&mut self, position: Point) {
        if self.read_only || self.native_size.is_none() {
            return;
        }
        self.drawing = true;
        self.history.begin_stroke();
        self.history.extend_active(self.normalize(position));
    }

    /// Extend the active stroke; only meaningful between down and up
    pub fn pointer_move(&mut self, position: Point) {
        if !self.drawing || self.native_size.is_none() {
            return;
        }
        self.history.extend_active(self.normalize(position));
    }

    /// End the active-drawing state, keeping the in-progress stroke
    pub fn pointer_up(&mut self) {
        self.drawing = false;
    }

    /// Pointer left the surface; same as a pointer-up
    pub fn pointer_leave(&mut self) {
        self.drawing = false;
    }

    pub fn undo(&mut self) {
        if !self.read_only {
            self.history.undo();
        }
    }

    pub fn redo(&mut self) {
        if !self.read_only {
            self.history.redo();
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drop every stroke (undoable)
    pub fn clear_all(&mut self) {
        self.history.clear();
    }

    /// Committed strokes in native coordinates
    pub fn strokes(&self) -> &[Stroke] {
        self.history.strokes()
    }

    /// Strokes denormalized to the current display size, computed on demand
    /// for the host renderer. Rounded joins/caps and smoothing are the
    /// renderer's concern; the surface supplies points and width.
    pub fn display_strokes(&self) -> Vec<Stroke> {
        transform::denormalize_strokes(
            self.history.strokes(),
            self.display_size,
            self.native_size,
        )
    }

    /// Live stroke width in display pixels
    pub fn stroke_display_width(&self) -> f32 {
        if self.fullscreen {
            stroke::DISPLAY_WIDTH_FULLSCREEN
        } else {
            stroke::DISPLAY_WIDTH
        }
    }

    /// Swap in another shot's strokes (or an empty canvas), dropping
    /// undo/redo history from the previous surface content
    pub fn load(&mut self, strokes: Vec<Stroke>, native: Option<NativeSize>) {
        self.history.load(strokes);
        self.native_size = native;
        self.drawing = false;
    }

    fn normalize(&self, position: Point) -> Point {
        transform::normalize_point(position, self.display_size, self.native_size)
    }
}

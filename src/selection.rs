//! Interactive rectangle selection over the viewport
//!
//! State machine: Idle → Selecting → Dragging → Selecting, until the
//! caller either hands the rectangle off to capture or abandons it; both
//! paths end in `reset()`. The transparent overlay the host stretches over
//! the viewport while selecting is chrome, not page content — the host
//! marks it capture-exempt so it never shows up in screenshots.

use crate::domain::{Point, SelectionRect};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionPhase {
    #[default]
    Idle,
    Selecting,
    Dragging,
}

#[derive(Clone, Debug, Default)]
pub struct AreaSelection {
    phase: SelectionPhase,
    anchor: Point,
    rect: Option<SelectionRect>,
    overlay_visible: bool,
}

impl AreaSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    pub fn rect(&self) -> Option<SelectionRect> {
        self.rect
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn is_selecting(&self) -> bool {
        self.phase != SelectionPhase::Idle
    }

    /// Enter selection mode: clear any previous rectangle and show the
    /// capture overlay
    pub fn start(&mut self) {
        self.phase = SelectionPhase::Selecting;
        self.rect = None;
        self.overlay_visible = true;
    }

    /// Anchor a drag. Only meaningful while selecting.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if self.phase != SelectionPhase::Selecting {
            return;
        }
        self.phase = SelectionPhase::Dragging;
        self.anchor = Point::new(x, y);
        self.rect = Some(SelectionRect::at(self.anchor));
    }

    /// Recompute the rectangle as the bounding box of anchor and pointer,
    /// making drag direction irrelevant. Only meaningful while dragging.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if self.phase != SelectionPhase::Dragging {
            return;
        }
        self.rect = Some(SelectionRect::from_corners(self.anchor, Point::new(x, y)));
    }

    /// End the drag, keeping the rectangle. Completion (capture vs.
    /// accidental-click discard) is the caller's decision.
    pub fn pointer_up(&mut self) {
        if self.phase == SelectionPhase::Dragging {
            self.phase = SelectionPhase::Selecting;
        }
    }

    /// Force Idle from any state, clearing rectangle and overlay.
    /// Callable at any time (escape-equivalent cancel included).
    pub fn reset(&mut self) {
        self.phase = SelectionPhase::Idle;
        self.rect = None;
        self.overlay_visible = false;
    }
}

//! Stroke editing: undo/redo history and the pointer-driven surface

pub mod history;
pub mod surface;

pub use history::StrokeHistory;
pub use surface::AnnotationSurface;

//! Runtime configuration for the feedback annotation core

use serde::{Deserialize, Serialize};

/// Serializable color for rasterized strokes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for StrokeColor {
    fn default() -> Self {
        // Rose, the burn-in color annotations are drawn with
        Self {
            r: 0.956_9,
            g: 0.247_1,
            b: 0.368_6,
        }
    }
}

impl StrokeColor {
    /// Convert to image crate RGBA format (0-255)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            255,
        ]
    }
}

/// Tunables for selection, capture and rasterization.
///
/// The thresholds here are configuration, not behavior: a host embedding the
/// core can persist this struct (it round-trips through serde) and hand it
/// back on startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Minimum selection width/height (viewport pixels) for a drag to count
    /// as a capture rather than an accidental click
    pub min_selection_size: f32,
    /// Supersampling factor applied to full-page captures
    pub capture_scale: f32,
    /// Color strokes are rasterized with at submission time
    pub stroke_color: StrokeColor,
    /// Explicit rasterization line width; `None` derives it from the image
    pub line_width: Option<f32>,
    /// Maximum number of undo snapshots kept per annotation surface
    pub history_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_selection_size: 10.0,
            capture_scale: 2.0,
            stroke_color: StrokeColor::default(),
            line_width: None,
            history_limit: 64,
        }
    }
}

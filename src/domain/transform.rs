//! Bidirectional mapping between display space and native image space
//!
//! Strokes are stored independent of the transient viewport size so they
//! stay correct across resizes, fullscreen toggles, and final
//! rasterization against the original-resolution image. Each axis scales
//! independently; no rounding is applied, so the two directions compose
//! and round-trip to within floating point precision.
//!
//! Both directions are the identity while the native size is unknown
//! (base image still decoding).

use super::geometry::{DisplaySize, NativeSize, Point};
use super::stroke::Stroke;

/// Map a display-space point into native image space
pub fn normalize_point(point: Point, display: DisplaySize, native: Option<NativeSize>) -> Point {
    let Some(native) = native else {
        return point;
    };
    Point {
        x: point.x * native.width as f32 / display.width as f32,
        y: point.y * native.height as f32 / display.height as f32,
    }
}

/// Map a native-space point back into display space
pub fn denormalize_point(point: Point, display: DisplaySize, native: Option<NativeSize>) -> Point {
    let Some(native) = native else {
        return point;
    };
    Point {
        x: point.x * display.width as f32 / native.width as f32,
        y: point.y * display.height as f32 / native.height as f32,
    }
}

/// Map whole strokes display → native, preserving stroke boundaries and
/// point order
pub fn normalize_strokes(
    strokes: &[Stroke],
    display: DisplaySize,
    native: Option<NativeSize>,
) -> Vec<Stroke> {
    strokes
        .iter()
        .map(|stroke| {
            stroke
                .points
                .iter()
                .map(|&p| normalize_point(p, display, native))
                .collect()
        })
        .collect()
}

/// Map whole strokes native → display
pub fn denormalize_strokes(
    strokes: &[Stroke],
    display: DisplaySize,
    native: Option<NativeSize>,
) -> Vec<Stroke> {
    strokes
        .iter()
        .map(|stroke| {
            stroke
                .points
                .iter()
                .map(|&p| denormalize_point(p, display, native))
                .collect()
        })
        .collect()
}

//! Stroke rasterization using tiny-skia
//!
//! Burns freehand strokes onto an RgbaImage, producing the flattened
//! raster that goes into a submitted report.

use image::RgbaImage;
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Transform};

use crate::config::StrokeColor;
use crate::domain::Stroke;
use crate::render::geometry::stroke;

/// Convert RgbaImage to Pixmap, apply drawing function, and copy back
fn with_pixmap(img: &mut RgbaImage, f: impl FnOnce(&mut Pixmap)) {
    let (w, h) = (img.width(), img.height());
    let Some(size) = tiny_skia::IntSize::from_wh(w, h) else {
        return;
    };
    let Some(mut pixmap) = Pixmap::from_vec(img.as_raw().clone(), size) else {
        return;
    };

    f(&mut pixmap);

    // Copy back
    img.copy_from_slice(pixmap.data());
}

/// Build a connected polyline path through a stroke's points
fn build_stroke_path(line: &Stroke) -> Option<tiny_skia::Path> {
    let (first, rest) = line.points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.finish()
}

/// Draw strokes onto an image with rounded caps and joins.
///
/// Coordinates must already be in the image's native space. Strokes with
/// fewer than two points would be invisible or degenerate and are skipped.
/// The line width defaults to a fraction of the image's shorter dimension
/// (2px floor) unless `line_width` overrides it.
pub fn draw_strokes_on_image(
    img: &mut RgbaImage,
    strokes: &[Stroke],
    color: StrokeColor,
    line_width: Option<f32>,
) {
    if !strokes.iter().any(Stroke::is_visible) {
        return;
    }

    let width = stroke::raster_width(img.width(), img.height(), line_width);
    let [r, g, b, a] = color.to_rgba_u8();

    with_pixmap(img, |pixmap| {
        for line in strokes {
            if !line.is_visible() {
                continue;
            }
            let Some(path) = build_stroke_path(line) else {
                continue;
            };

            let mut paint = Paint::default();
            paint.set_color_rgba8(r, g, b, a);
            paint.anti_alias = true;

            let sk_stroke = tiny_skia::Stroke {
                width,
                line_cap: LineCap::Round,
                line_join: LineJoin::Round,
                ..Default::default()
            };
            pixmap.stroke_path(&path, &paint, &sk_stroke, Transform::identity(), None);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;
    use image::Rgba;

    fn white_canvas() -> RgbaImage {
        RgbaImage::from_pixel(100, 60, Rgba([255, 255, 255, 255]))
    }

    fn stroke_of(points: &[(f32, f32)]) -> Stroke {
        points.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_no_strokes_leaves_image_unchanged() {
        let mut img = white_canvas();
        let original = img.clone();
        draw_strokes_on_image(&mut img, &[], StrokeColor::default(), None);
        assert_eq!(img, original);
    }

    #[test]
    fn test_single_point_stroke_is_skipped() {
        let mut img = white_canvas();
        let original = img.clone();
        draw_strokes_on_image(
            &mut img,
            &[stroke_of(&[(50.0, 30.0)])],
            StrokeColor::default(),
            None,
        );
        assert_eq!(img, original);
    }

    #[test]
    fn test_stroke_paints_along_its_path() {
        let mut img = white_canvas();
        draw_strokes_on_image(
            &mut img,
            &[stroke_of(&[(10.0, 30.0), (90.0, 30.0)])],
            StrokeColor::default(),
            None,
        );

        // On the line: strongly rose
        let on = img.get_pixel(50, 30);
        assert!(on[0] > 200 && on[1] < 120, "expected stroke color, got {on:?}");
        // Far corners untouched
        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(*img.get_pixel(99, 59), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_explicit_line_width_override() {
        let mut thin = white_canvas();
        let mut thick = white_canvas();
        let line = [stroke_of(&[(10.0, 30.0), (90.0, 30.0)])];
        draw_strokes_on_image(&mut thin, &line, StrokeColor::default(), Some(2.0));
        draw_strokes_on_image(&mut thick, &line, StrokeColor::default(), Some(12.0));

        // Five pixels above the line only the thick stroke reaches
        let above_thin = thin.get_pixel(50, 25);
        let above_thick = thick.get_pixel(50, 25);
        assert_eq!(*above_thin, Rgba([255, 255, 255, 255]));
        assert!(above_thick[1] < 120, "expected thick stroke, got {above_thick:?}");
    }
}

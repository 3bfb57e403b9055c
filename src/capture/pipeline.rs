//! Region capture and final rasterization
//!
//! Two independent operations. Region capture asks the host page to
//! rasterize itself (with capture-exempt chrome hidden), then crops to the
//! selection rectangle at the supersampling scale. Rasterization burns a
//! shot's strokes into its base raster, producing the flattened image a
//! report carries.

use futures::future::BoxFuture;
use image::RgbaImage;

use crate::config::StrokeColor;
use crate::domain::{SelectionRect, Shot};
use crate::error::{Error, Result};
use crate::render;

use super::image::RasterImage;

/// Host page collaborator.
///
/// Implementors own the page/DOM. Any element (or ancestor) flagged
/// capture-exempt — the selection overlay, the feedback modal, other host
/// chrome — must be excluded from `render_page` output whenever exempt
/// hiding is in effect.
pub trait CapturePage {
    /// Hide or restore every capture-exempt element
    fn set_exempt_hidden(&mut self, hidden: bool);

    /// Rasterize the entire page at `scale` (1.0 = viewport pixels)
    fn render_page(&mut self, scale: f32) -> BoxFuture<'_, anyhow::Result<RasterImage>>;
}

/// Capture `rect` from the live page at `scale`.
///
/// Exempt chrome is hidden for the duration of the page render and
/// restored before anything else happens — including on render failure, so
/// a failed capture never leaves the UI hidden. The output raster is
/// exactly `round(rect.width * scale) x round(rect.height * scale)`; page
/// regions outside the rendered raster come out transparent.
pub async fn capture_region<P: CapturePage + ?Sized>(
    page: &mut P,
    rect: SelectionRect,
    scale: f32,
) -> Result<RasterImage> {
    let out_width = (rect.width * scale).round() as u32;
    let out_height = (rect.height * scale).round() as u32;
    if out_width == 0 || out_height == 0 {
        return Err(Error::EmptyRegion);
    }

    page.set_exempt_hidden(true);
    let rendered = page.render_page(scale).await;
    page.set_exempt_hidden(false);
    let full = rendered.map_err(Error::Capture)?;

    let offset_x = (rect.x * scale).round() as i64;
    let offset_y = (rect.y * scale).round() as i64;
    let mut out = RgbaImage::new(out_width, out_height);
    image::imageops::overlay(&mut out, &full.rgba, -offset_x, -offset_y);

    log::debug!(
        "captured {}x{} region at ({offset_x}, {offset_y}) from a {}x{} page raster",
        out_width,
        out_height,
        full.width(),
        full.height()
    );
    Ok(RasterImage::new(out))
}

/// Flatten a shot's base raster and strokes into one output raster.
///
/// The base image was decoded at capture time, so this is pure CPU
/// compositing; the session controller still finishes every shot's
/// rasterization before submission proceeds.
pub fn rasterize(shot: &Shot, color: StrokeColor, line_width: Option<f32>) -> RasterImage {
    let mut rgba = shot.image.rgba.clone();
    render::image::draw_strokes_on_image(&mut rgba, &shot.strokes, color, line_width);
    RasterImage { rgba }
}

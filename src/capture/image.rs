//! Captured raster image type

use std::io::Cursor;

use anyhow::Context;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, RgbaImage};

use crate::domain::NativeSize;
use crate::error::Result;

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// A captured raster with raw RGBA data
#[derive(Clone, Debug)]
pub struct RasterImage {
    pub rgba: RgbaImage,
}

impl RasterImage {
    pub fn new(rgba: RgbaImage) -> Self {
        log::debug!("raster image: {}x{} pixels", rgba.width(), rgba.height());
        Self { rgba }
    }

    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    pub fn native_size(&self) -> NativeSize {
        NativeSize::new(self.rgba.width(), self.rgba.height())
    }

    /// Encode as PNG bytes
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.rgba.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    /// Encode as a self-describing `data:image/png;base64,…` string, the
    /// form the submit collaborator receives
    pub fn to_data_uri(&self) -> Result<String> {
        let png = self.encode_png()?;
        Ok(format!("{DATA_URI_PREFIX}{}", STANDARD.encode(png)))
    }

    /// Decode a `data:image/png;base64,…` string back into a raster
    pub fn from_data_uri(uri: &str) -> anyhow::Result<Self> {
        let encoded = uri
            .strip_prefix(DATA_URI_PREFIX)
            .context("not a png data uri")?;
        let png = STANDARD.decode(encoded).context("invalid base64 payload")?;
        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png)
            .context("invalid png payload")?;
        Ok(Self {
            rgba: decoded.to_rgba8(),
        })
    }
}

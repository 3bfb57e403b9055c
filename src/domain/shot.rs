//! Captured shot type
//!
//! A shot is one captured, independently annotatable raster image plus its
//! strokes. Shots are owned by the session; at most one is active at a time
//! and only the active shot's strokes are mutated (via the editing surface).

use std::fmt;

use super::geometry::NativeSize;
use super::stroke::Stroke;
use crate::capture::image::RasterImage;

/// Unique shot identifier, assigned at creation and immutable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShotId(pub u64);

impl fmt::Display for ShotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shot-{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Shot {
    pub id: ShotId,
    /// Captured raster, immutable after creation
    pub image: RasterImage,
    /// Pixel dimensions of `image`, recorded once at creation
    pub native_size: NativeSize,
    /// Committed strokes in native coordinates
    pub strokes: Vec<Stroke>,
}

impl Shot {
    pub fn new(id: ShotId, image: RasterImage) -> Self {
        let native_size = image.native_size();
        Self {
            id,
            image,
            native_size,
            strokes: Vec::new(),
        }
    }
}

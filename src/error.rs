//! Error taxonomy for capture and submission
//!
//! Transient unavailability (image not yet decoded) and undersized
//! selections are silent no-ops elsewhere, not errors. Every variant here
//! leaves the session in a consistent, retriable state.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Full-page rasterization failed. Capture-exempt chrome has already
    /// been restored and the capturing flag cleared when this surfaces.
    #[error("full-page capture failed: {0}")]
    Capture(#[source] anyhow::Error),

    /// The selection region, scaled for capture, has zero area
    #[error("capture region is empty")]
    EmptyRegion,

    /// PNG encoding of a finished shot failed
    #[error("failed to encode screenshot: {0}")]
    Encode(#[from] image::ImageError),

    /// The submit collaborator rejected outright (distinct from a delivered
    /// `success: false` outcome, which is not an `Error`)
    #[error("feedback transport failed: {0}")]
    Transport(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

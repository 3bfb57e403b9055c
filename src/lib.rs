//! Annotation and capture core for in-app feedback reports.
//!
//! The crate owns the nontrivial pieces of a feedback widget: the
//! display-space/native-space coordinate transform, the undo/redo-capable
//! stroke model, the interactive area-selection state machine, and the
//! capture/rasterization pipeline that burns live strokes into permanent
//! raster images. Host UI (buttons, modal layout, label text) and the
//! network call that persists a report stay outside, behind the
//! [`capture::CapturePage`] and [`session::SubmitTransport`] collaborator
//! traits.

pub mod annotations;
pub mod capture;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod selection;
pub mod session;

pub use capture::image::RasterImage;
pub use capture::pipeline::CapturePage;
pub use config::{Config, StrokeColor};
pub use error::Error;
pub use session::controller::SessionController;
pub use session::messages::{FeedbackPayload, Msg, SubmitOutcome, SubmitTransport};

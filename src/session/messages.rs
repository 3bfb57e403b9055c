//! Session messages and the submit collaborator contract

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

/// Discrete editing actions, produced by keyboard chords
/// (see [`shortcuts`](super::shortcuts)) or host buttons and applied via
/// [`SessionController::update`](super::SessionController::update)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Msg {
    Undo,
    Redo,
    ClearStrokes,
    CloseFullscreen,
    CancelSelection,
}

/// A finished feedback report, handed to the submit collaborator
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeedbackPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub description: String,
    /// One self-describing encoded image (`data:image/png;base64,…`) per shot
    pub screenshots: Vec<String>,
}

/// What the submit collaborator reported back
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl SubmitOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// External submission transport. The core never assumes a protocol; hosts
/// implement this over whatever persists a report.
pub trait SubmitTransport {
    fn submit(&mut self, payload: FeedbackPayload) -> BoxFuture<'_, anyhow::Result<SubmitOutcome>>;
}

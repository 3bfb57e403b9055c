//! Session orchestration: shots, active-shot editing, submission

pub mod controller;
pub mod messages;
pub mod shortcuts;
pub mod state;

pub use controller::SessionController;
pub use messages::{FeedbackPayload, Msg, SubmitOutcome, SubmitTransport};
pub use state::SessionState;

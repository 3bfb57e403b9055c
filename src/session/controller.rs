//! Session controller
//!
//! Owns the shot list, the transient editing surface, the area-selection
//! state machine, and the capture/submit collaborators. All mutation
//! happens on the host UI thread in response to discrete events; the only
//! suspension points are the full-page render inside a capture and the
//! external submit call, and each is strictly ordered within its own
//! operation.

use crate::annotations::AnnotationSurface;
use crate::capture::pipeline::{self, CapturePage};
use crate::config::Config;
use crate::domain::{NativeSize, Shot, ShotId};
use crate::error::{Error, Result};
use crate::selection::AreaSelection;

use super::messages::{FeedbackPayload, Msg, SubmitOutcome, SubmitTransport};
use super::shortcuts::ShortcutContext;
use super::state::SessionState;

pub struct SessionController<P: CapturePage, T: SubmitTransport> {
    config: Config,
    state: SessionState,
    surface: AnnotationSurface,
    selection: AreaSelection,
    page: P,
    transport: T,
}

impl<P: CapturePage, T: SubmitTransport> SessionController<P, T> {
    pub fn new(page: P, transport: T, config: Config) -> Self {
        let surface = AnnotationSurface::new(config.history_limit);
        Self {
            config,
            state: SessionState::default(),
            surface,
            selection: AreaSelection::new(),
            page,
            transport,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn shots(&self) -> &[Shot] {
        &self.state.shots
    }

    pub fn active_shot(&self) -> Option<&Shot> {
        self.state.active_shot()
    }

    pub fn surface(&self) -> &AnnotationSurface {
        &self.surface
    }

    /// Editing surface for host pointer/layout events. Shot switches must
    /// go through the controller so strokes are synced back first.
    pub fn surface_mut(&mut self) -> &mut AnnotationSurface {
        &mut self.surface
    }

    pub fn selection(&self) -> &AreaSelection {
        &self.selection
    }

    pub fn is_capturing(&self) -> bool {
        self.state.capturing
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.state.description = description.into();
    }

    pub fn set_email(&mut self, email: Option<String>) {
        self.state.email = email;
    }

    pub fn shortcut_context(&self) -> ShortcutContext {
        ShortcutContext {
            read_only: self.surface.is_read_only(),
            fullscreen: self.state.fullscreen,
            selecting: self.selection.is_selecting(),
        }
    }

    pub fn open_modal(&mut self) {
        self.state.modal_open = true;
    }

    /// Close the modal, writing any in-progress strokes back into the
    /// active shot first
    pub fn close_modal(&mut self) {
        self.sync_active_strokes();
        self.state.modal_open = false;
    }

    /// Apply a discrete editing message
    pub fn update(&mut self, msg: Msg) {
        match msg {
            Msg::Undo => self.surface.undo(),
            Msg::Redo => self.surface.redo(),
            Msg::ClearStrokes => self.surface.clear_all(),
            Msg::CloseFullscreen => self.close_fullscreen(),
            Msg::CancelSelection => self.selection.reset(),
        }
    }

    /// Hide the modal and arm the selection overlay
    pub fn start_area_selection(&mut self) {
        self.state.modal_open = false;
        self.selection.start();
    }

    pub fn selection_pointer_down(&mut self, x: f32, y: f32) {
        self.selection.pointer_down(x, y);
    }

    pub fn selection_pointer_move(&mut self, x: f32, y: f32) {
        self.selection.pointer_move(x, y);
    }

    /// End the drag; follow with [`complete_selection`](Self::complete_selection)
    pub fn selection_pointer_up(&mut self) {
        self.selection.pointer_up();
    }

    /// Decide what the finished drag becomes.
    ///
    /// An undersized rectangle is an accidental click: discarded, modal
    /// reopened, no shot. A valid one is captured into a new active shot
    /// with a fresh annotation canvas. Returns the new shot id, or `None`
    /// when nothing was captured. No-op while a capture is already in
    /// flight.
    pub async fn complete_selection(&mut self) -> Result<Option<ShotId>> {
        if self.state.capturing {
            return Ok(None);
        }

        let Some(rect) = self.selection.rect() else {
            self.selection.reset();
            self.state.modal_open = true;
            return Ok(None);
        };
        if !rect.exceeds(self.config.min_selection_size) {
            log::debug!(
                "discarding {:.0}x{:.0} selection below the {:.0}px minimum",
                rect.width,
                rect.height,
                self.config.min_selection_size
            );
            self.selection.reset();
            self.state.modal_open = true;
            return Ok(None);
        }

        self.state.modal_open = true;
        self.state.capturing = true;
        let captured =
            pipeline::capture_region(&mut self.page, rect, self.config.capture_scale).await;
        self.state.capturing = false;
        self.selection.reset();
        let image = captured?;

        // The new shot becomes active: write the outgoing shot's
        // in-progress strokes back into its record first
        self.sync_active_strokes();
        let id = self.state.allocate_id();
        let shot = Shot::new(id, image);
        let native = shot.native_size;
        log::info!("captured {id} ({}x{})", native.width, native.height);
        self.state.shots.push(shot);
        self.state.active_id = Some(id);
        // Fresh annotation canvas for the new shot
        self.surface.load(Vec::new(), Some(native));
        self.record_native_size(native);
        Ok(Some(id))
    }

    /// Write the editing surface's strokes back into the active shot record
    pub fn sync_active_strokes(&mut self) {
        let Some(id) = self.state.active_id else {
            return;
        };
        let strokes = self.surface.strokes().to_vec();
        if let Some(shot) = self.state.shot_mut(id) {
            shot.strokes = strokes;
        }
    }

    /// Make another shot the editing target, syncing the outgoing shot's
    /// strokes first
    pub fn set_active_shot(&mut self, id: ShotId) {
        if self.state.shot(id).is_none() {
            return;
        }
        self.sync_active_strokes();
        self.state.active_id = Some(id);
        if let Some(shot) = self.state.shot(id) {
            let strokes = shot.strokes.clone();
            let native = shot.native_size;
            self.surface.load(strokes, Some(native));
            self.record_native_size(native);
        }
    }

    pub fn open_fullscreen(&mut self, id: ShotId) {
        self.set_active_shot(id);
        self.state.fullscreen = true;
        self.surface.set_fullscreen(true);
    }

    pub fn close_fullscreen(&mut self) {
        self.sync_active_strokes();
        self.state.fullscreen = false;
        self.surface.set_fullscreen(false);
    }

    /// Remove a shot. If it was active, the first remaining shot (if any)
    /// becomes active; the transient editing buffer is cleared either way.
    pub fn delete_shot(&mut self, id: ShotId) {
        self.state.shots.retain(|s| s.id != id);
        if self.state.active_id == Some(id) {
            self.state.active_id = self.state.shots.first().map(|s| s.id);
        }
        let native = self.state.active_shot().map(|s| s.native_size);
        self.surface.load(Vec::new(), native);
    }

    /// Rasterize every shot and hand the report to the submit collaborator.
    ///
    /// Only a reported success clears the session; on `success: false` or a
    /// transport error all shot and description state is preserved so the
    /// user can retry.
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        self.sync_active_strokes();

        let mut screenshots = Vec::with_capacity(self.state.shots.len());
        for shot in &self.state.shots {
            let raster = pipeline::rasterize(shot, self.config.stroke_color, self.config.line_width);
            screenshots.push(raster.to_data_uri()?);
        }

        let payload = FeedbackPayload {
            email: self.state.email.clone(),
            description: self.state.description.trim().to_string(),
            screenshots,
        };
        let outcome = self
            .transport
            .submit(payload)
            .await
            .map_err(Error::Transport)?;

        if outcome.success {
            log::info!("feedback submitted, clearing session");
            self.reset_session();
        } else {
            log::warn!("feedback submission rejected: {:?}", outcome.error);
        }
        Ok(outcome)
    }

    /// Drop every shot, the description, and all transient editing state
    pub fn reset_session(&mut self) {
        self.state.clear();
        self.surface.load(Vec::new(), None);
        self.surface.set_fullscreen(false);
        self.selection.reset();
    }

    fn record_native_size(&mut self, native: NativeSize) {
        if self.state.native_size != Some(native) {
            self.state.native_size = Some(native);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::image::RasterImage;
    use crate::domain::Point;
    use futures::future::BoxFuture;
    use image::{Rgba, RgbaImage};
    use std::sync::{Arc, Mutex};

    struct FakePage;

    impl CapturePage for FakePage {
        fn set_exempt_hidden(&mut self, _hidden: bool) {}

        fn render_page(&mut self, scale: f32) -> BoxFuture<'_, anyhow::Result<RasterImage>> {
            Box::pin(async move {
                let w = (300.0 * scale) as u32;
                let h = (200.0 * scale) as u32;
                Ok(RasterImage::new(RgbaImage::from_pixel(
                    w,
                    h,
                    Rgba([255, 255, 255, 255]),
                )))
            })
        }
    }

    #[derive(Clone, Default)]
    struct FakeTransport {
        payloads: Arc<Mutex<Vec<FeedbackPayload>>>,
        outcome: SubmitOutcome,
    }

    impl SubmitTransport for FakeTransport {
        fn submit(&mut self, payload: FeedbackPayload) -> BoxFuture<'_, anyhow::Result<SubmitOutcome>> {
            self.payloads.lock().unwrap().push(payload);
            let outcome = self.outcome.clone();
            Box::pin(async move { Ok(outcome) })
        }
    }

    fn controller(outcome: SubmitOutcome) -> (SessionController<FakePage, FakeTransport>, Arc<Mutex<Vec<FeedbackPayload>>>) {
        let transport = FakeTransport {
            payloads: Arc::new(Mutex::new(Vec::new())),
            outcome,
        };
        let payloads = transport.payloads.clone();
        (
            SessionController::new(FakePage, transport, Config::default()),
            payloads,
        )
    }

    async fn capture_shot(
        controller: &mut SessionController<FakePage, FakeTransport>,
        width: f32,
        height: f32,
    ) -> Option<ShotId> {
        controller.start_area_selection();
        controller.selection_pointer_down(20.0, 20.0);
        controller.selection_pointer_move(20.0 + width, 20.0 + height);
        controller.selection_pointer_up();
        controller.complete_selection().await.unwrap()
    }

    #[tokio::test]
    async fn test_undersized_selection_produces_no_shot() {
        let (mut session, _) = controller(SubmitOutcome::ok());
        let id = capture_shot(&mut session, 5.0, 5.0).await;
        assert_eq!(id, None);
        assert!(session.shots().is_empty());
        // Discarded as an accidental click: modal back open, selection idle
        assert!(session.state().modal_open);
        assert!(!session.selection().is_selecting());
    }

    #[tokio::test]
    async fn test_valid_selection_creates_supersampled_shot() {
        let (mut session, _) = controller(SubmitOutcome::ok());
        let id = capture_shot(&mut session, 50.0, 30.0).await.unwrap();

        assert_eq!(session.shots().len(), 1);
        let shot = session.active_shot().unwrap();
        assert_eq!(shot.id, id);
        assert_eq!(shot.native_size, NativeSize::new(100, 60));
        assert!(shot.strokes.is_empty());
        assert!(!session.is_capturing());
        assert_eq!(session.state().native_size, Some(NativeSize::new(100, 60)));
    }

    #[tokio::test]
    async fn test_in_flight_capture_blocks_reentry() {
        let (mut session, _) = controller(SubmitOutcome::ok());
        session.start_area_selection();
        session.selection_pointer_down(0.0, 0.0);
        session.selection_pointer_move(100.0, 100.0);
        session.selection_pointer_up();

        session.state.capturing = true;
        let id = session.complete_selection().await.unwrap();
        assert_eq!(id, None);
        assert!(session.shots().is_empty());
        // The guard swallowed the attempt without touching the selection
        assert!(session.selection().rect().is_some());
    }

    #[tokio::test]
    async fn test_switching_shots_syncs_strokes_back() {
        let (mut session, _) = controller(SubmitOutcome::ok());
        let first = capture_shot(&mut session, 50.0, 30.0).await.unwrap();
        let second = capture_shot(&mut session, 40.0, 40.0).await.unwrap();
        assert_eq!(session.state().active_id, Some(second));

        // Draw on the second shot, then switch to the first
        let surface = session.surface_mut();
        surface.layout_inline(216.0);
        surface.pointer_down(Point::new(10.0, 10.0));
        surface.pointer_move(Point::new(50.0, 50.0));
        surface.pointer_up();
        session.set_active_shot(first);

        assert_eq!(session.state().shot(second).unwrap().strokes.len(), 1);
        assert!(session.surface().strokes().is_empty());
        // Surface now carries the first shot's native size
        assert_eq!(
            session.surface().native_size(),
            Some(NativeSize::new(100, 60))
        );
    }

    #[tokio::test]
    async fn test_delete_active_shot_promotes_first_remaining() {
        let (mut session, _) = controller(SubmitOutcome::ok());
        let first = capture_shot(&mut session, 50.0, 30.0).await.unwrap();
        let second = capture_shot(&mut session, 40.0, 40.0).await.unwrap();

        session.set_active_shot(second);
        session.delete_shot(second);
        assert_eq!(session.state().active_id, Some(first));
        assert!(session.surface().strokes().is_empty());

        session.delete_shot(first);
        assert_eq!(session.state().active_id, None);
        assert!(session.shots().is_empty());
    }

    #[tokio::test]
    async fn test_fullscreen_round_trip() {
        let (mut session, _) = controller(SubmitOutcome::ok());
        let id = capture_shot(&mut session, 50.0, 30.0).await.unwrap();

        session.open_fullscreen(id);
        assert!(session.state().fullscreen);
        assert!(session.surface().is_fullscreen());

        session.update(Msg::CloseFullscreen);
        assert!(!session.state().fullscreen);
        assert!(!session.surface().is_fullscreen());
    }

    #[tokio::test]
    async fn test_submit_success_clears_session() {
        let (mut session, payloads) = controller(SubmitOutcome::ok());
        capture_shot(&mut session, 50.0, 30.0).await.unwrap();
        session.set_description("  something broke  ");

        let outcome = session.submit().await.unwrap();
        assert!(outcome.success);

        let sent = payloads.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].description, "something broke");
        assert_eq!(sent[0].screenshots.len(), 1);
        assert!(sent[0].screenshots[0].starts_with("data:image/png;base64,"));

        assert!(session.shots().is_empty());
        assert!(session.state().description.is_empty());
        assert_eq!(session.state().active_id, None);
        assert!(!session.state().modal_open);
    }

    #[tokio::test]
    async fn test_submit_failure_preserves_state() {
        let (mut session, _) = controller(SubmitOutcome::failed("backend down"));
        capture_shot(&mut session, 50.0, 30.0).await.unwrap();
        session.set_description("still broken");

        let outcome = session.submit().await.unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("backend down"));

        assert_eq!(session.shots().len(), 1);
        assert_eq!(session.state().description, "still broken");
        assert!(session.state().active_id.is_some());
    }
}

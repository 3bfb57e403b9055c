//! Session state: shots, active-shot id, modal and capture flags

use crate::domain::{NativeSize, Shot, ShotId};

#[derive(Debug, Default)]
pub struct SessionState {
    pub shots: Vec<Shot>,
    pub active_id: Option<ShotId>,
    pub description: String,
    pub email: Option<String>,
    /// Native size of the most recently loaded base image; updated on every
    /// image load so late-arriving resize events can't report a stale size
    pub native_size: Option<NativeSize>,
    pub modal_open: bool,
    pub fullscreen: bool,
    /// In-flight capture guard: a second capture cannot start until the
    /// current one resolves (there is no cancellation)
    pub capturing: bool,
    next_id: u64,
}

impl SessionState {
    /// Next unique shot id; ids are never reused within a session
    pub fn allocate_id(&mut self) -> ShotId {
        self.next_id += 1;
        ShotId(self.next_id)
    }

    pub fn shot(&self, id: ShotId) -> Option<&Shot> {
        self.shots.iter().find(|s| s.id == id)
    }

    pub fn shot_mut(&mut self, id: ShotId) -> Option<&mut Shot> {
        self.shots.iter_mut().find(|s| s.id == id)
    }

    pub fn active_shot(&self) -> Option<&Shot> {
        self.active_id.and_then(|id| self.shot(id))
    }

    /// Drop all report state. Email is host identity and survives; the id
    /// counter keeps running so ids stay unique across resets.
    pub fn clear(&mut self) {
        self.shots.clear();
        self.active_id = None;
        self.description.clear();
        self.native_size = None;
        self.modal_open = false;
        self.fullscreen = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_stay_unique_across_clear() {
        let mut state = SessionState::default();
        let first = state.allocate_id();
        state.clear();
        let second = state.allocate_id();
        assert_ne!(first, second);
    }
}

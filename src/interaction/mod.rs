use serde::{Deserialize, Serialize};

/// Interaction lifecycle of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SlideMode {
    #[default]
    Idle,
    Sliding,
}

/// Tracks which handle, if any, is being slid.
///
/// While a slide is active the reconciler ignores external domain and value
/// updates; the in-flight interaction wins. This optional index is the only
/// mutable gating state in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SlideState {
    active_handle: Option<usize>,
}

impl SlideState {
    #[must_use]
    pub fn mode(self) -> SlideMode {
        if self.active_handle.is_some() {
            SlideMode::Sliding
        } else {
            SlideMode::Idle
        }
    }

    #[must_use]
    pub fn active_handle(self) -> Option<usize> {
        self.active_handle
    }

    #[must_use]
    pub fn is_sliding(self) -> bool {
        self.active_handle.is_some()
    }

    pub fn begin(&mut self, index: usize) {
        self.active_handle = Some(index);
    }

    pub fn finish(&mut self) {
        self.active_handle = None;
    }
}

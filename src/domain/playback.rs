// SPDX-License-Identifier: MPL-2.0
//! Media load and playback state machines.
//!
//! Load failures are terminal for the item instance and stay local: the
//! renderer falls back to a static image (or blank) and nothing propagates
//! upward. An autoplay rejection simply leaves the video paused.

/// Loading phase of an item's media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Media is still loading; a skeleton/spinner is shown.
    #[default]
    Loading,
    /// Media is ready to display.
    Ready,
    /// Load failed. Permanent for this item instance; no retry.
    Failed,
}

impl LoadPhase {
    /// Returns true while the skeleton/spinner should be visible.
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true once the media can be rendered.
    #[must_use]
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Returns true after a terminal load failure.
    #[must_use]
    pub fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Represents the current playback state of an item's video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Video is stopped at the beginning (item not active).
    #[default]
    Stopped,
    /// A play attempt is in flight; the engine may still reject it.
    Starting,
    /// Video is currently playing.
    Playing,
    /// Video is paused at the current position.
    Paused,
}

impl PlaybackState {
    /// Returns true if the video is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the video is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if the video is stopped at the start.
    #[must_use]
    pub fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }

    /// Returns true while a play attempt is pending.
    #[must_use]
    pub fn is_starting(self) -> bool {
        matches!(self, Self::Starting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_phase_is_loading() {
        assert_eq!(LoadPhase::default(), LoadPhase::Loading);
        assert!(LoadPhase::Loading.is_loading());
    }

    #[test]
    fn phase_checks() {
        assert!(LoadPhase::Ready.is_ready());
        assert!(!LoadPhase::Ready.is_failed());
        assert!(LoadPhase::Failed.is_failed());
        assert!(!LoadPhase::Failed.is_loading());
    }

    #[test]
    fn default_playback_is_stopped() {
        assert_eq!(PlaybackState::default(), PlaybackState::Stopped);
    }

    #[test]
    fn playback_state_checks() {
        assert!(PlaybackState::Playing.is_playing());
        assert!(!PlaybackState::Paused.is_playing());
        assert!(PlaybackState::Paused.is_paused());
        assert!(PlaybackState::Stopped.is_stopped());
        assert!(PlaybackState::Starting.is_starting());
    }
}

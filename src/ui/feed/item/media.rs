// SPDX-License-Identifier: MPL-2.0
//! Media playback sub-component for one feed item.
//!
//! Owns the load/playback state machine and reacts to the item's active
//! flag: an active video plays (or resumes), an inactive one pauses and
//! rewinds to the start. Images only track the load phase for the skeleton
//! UI. All failures stay local to this component.

use crate::domain::playback::{LoadPhase, PlaybackState};
use crate::domain::review::MediaSource;

/// Why a play attempt was refused by the media engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackRejection {
    /// Autoplay policy refused the attempt; a user tap can retry.
    AutoplayBlocked,
}

/// Media playback sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    phase: LoadPhase,
    playback: PlaybackState,
    is_video: bool,
    /// Whether the owning item is the active one.
    active: bool,
    /// Autoplay preference, captured from config at assignment.
    autoplay: bool,
}

/// Messages for the media sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The engine finished decoding the source.
    SourceLoaded,
    /// The engine failed to load the source. Terminal for this item
    /// instance; the view falls back to the poster or a blank surface.
    LoadFailed,
    /// Result of an asynchronous play attempt.
    PlayResolved(Result<(), PlaybackRejection>),
    /// Single tap on the card: toggle play/pause.
    ToggleRequested,
}

/// Commands for the media engine, issued by state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    /// Start (or resume) playback; resolves asynchronously via
    /// [`Message::PlayResolved`].
    Play,
    /// Pause and rewind to the start.
    PauseAndRewind,
    /// Pause at the current position.
    Pause,
}

impl State {
    /// Resets the component for a new media source.
    pub fn assign(&mut self, source: &MediaSource, autoplay: bool) {
        *self = Self {
            phase: LoadPhase::Loading,
            playback: PlaybackState::Stopped,
            is_video: source.is_video(),
            active: false,
            autoplay,
        };
    }

    /// Updates the active flag, returning the engine command to apply.
    ///
    /// Deactivation always pauses and rewinds, whatever the cause.
    pub fn set_active(&mut self, active: bool) -> Effect {
        if self.active == active {
            return Effect::None;
        }
        self.active = active;

        if !self.is_video {
            return Effect::None;
        }

        if active {
            self.try_autoplay()
        } else {
            self.playback = PlaybackState::Stopped;
            Effect::PauseAndRewind
        }
    }

    /// Handles a media message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::SourceLoaded => {
                if self.phase.is_failed() {
                    return Effect::None;
                }
                self.phase = LoadPhase::Ready;
                // A video that became active before decode finished starts
                // now.
                if self.is_video && self.active {
                    self.try_autoplay()
                } else {
                    Effect::None
                }
            }
            Message::LoadFailed => {
                self.phase = LoadPhase::Failed;
                self.playback = PlaybackState::Stopped;
                Effect::None
            }
            Message::PlayResolved(result) => {
                if !self.playback.is_starting() {
                    // A pause/rewind raced the play attempt; keep the
                    // settled state.
                    return Effect::None;
                }
                self.playback = match result {
                    Ok(()) => PlaybackState::Playing,
                    Err(PlaybackRejection::AutoplayBlocked) => PlaybackState::Paused,
                };
                Effect::None
            }
            Message::ToggleRequested => {
                if !self.is_video || !self.phase.is_ready() {
                    return Effect::None;
                }
                match self.playback {
                    PlaybackState::Playing | PlaybackState::Starting => {
                        self.playback = PlaybackState::Paused;
                        Effect::Pause
                    }
                    PlaybackState::Paused | PlaybackState::Stopped => {
                        self.playback = PlaybackState::Starting;
                        Effect::Play
                    }
                }
            }
        }
    }

    fn try_autoplay(&mut self) -> Effect {
        if self.autoplay && self.phase.is_ready() {
            self.playback = PlaybackState::Starting;
            Effect::Play
        } else {
            Effect::None
        }
    }

    /// Current load phase.
    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Current playback state.
    #[must_use]
    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    /// Whether the assigned source is a video.
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.is_video
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_source() -> MediaSource {
        MediaSource::Video {
            url: "v.mp4".to_string(),
            poster_url: None,
        }
    }

    fn image_source() -> MediaSource {
        MediaSource::Image {
            url: "p.jpg".to_string(),
        }
    }

    fn ready_video() -> State {
        let mut state = State::default();
        state.assign(&video_source(), true);
        state.handle(Message::SourceLoaded);
        state
    }

    #[test]
    fn assign_starts_in_loading() {
        let mut state = State::default();
        state.assign(&image_source(), true);
        assert!(state.phase().is_loading());
        assert!(state.playback().is_stopped());
    }

    #[test]
    fn activating_a_ready_video_attempts_play() {
        let mut state = ready_video();
        assert_eq!(state.set_active(true), Effect::Play);
        assert!(state.playback().is_starting());

        assert_eq!(state.handle(Message::PlayResolved(Ok(()))), Effect::None);
        assert!(state.playback().is_playing());
    }

    #[test]
    fn deactivation_pauses_and_rewinds() {
        let mut state = ready_video();
        state.set_active(true);
        state.handle(Message::PlayResolved(Ok(())));

        assert_eq!(state.set_active(false), Effect::PauseAndRewind);
        assert!(state.playback().is_stopped());
    }

    #[test]
    fn activation_before_decode_plays_once_loaded() {
        let mut state = State::default();
        state.assign(&video_source(), true);
        assert_eq!(state.set_active(true), Effect::None);

        assert_eq!(state.handle(Message::SourceLoaded), Effect::Play);
        assert!(state.playback().is_starting());
    }

    #[test]
    fn autoplay_rejection_leaves_video_paused() {
        let mut state = ready_video();
        state.set_active(true);
        state.handle(Message::PlayResolved(Err(
            PlaybackRejection::AutoplayBlocked,
        )));
        assert!(state.playback().is_paused());
    }

    #[test]
    fn stale_play_result_after_rewind_is_dropped() {
        let mut state = ready_video();
        state.set_active(true);
        state.set_active(false);

        state.handle(Message::PlayResolved(Ok(())));
        assert!(state.playback().is_stopped());
    }

    #[test]
    fn load_failure_is_terminal() {
        let mut state = State::default();
        state.assign(&video_source(), true);
        state.handle(Message::LoadFailed);
        assert!(state.phase().is_failed());

        // A late decode completion does not resurrect the item.
        state.handle(Message::SourceLoaded);
        assert!(state.phase().is_failed());

        // And activation no longer tries to play.
        assert_eq!(state.set_active(true), Effect::None);
    }

    #[test]
    fn toggle_flips_play_and_pause() {
        let mut state = ready_video();
        state.set_active(true);
        state.handle(Message::PlayResolved(Ok(())));

        assert_eq!(state.handle(Message::ToggleRequested), Effect::Pause);
        assert!(state.playback().is_paused());

        assert_eq!(state.handle(Message::ToggleRequested), Effect::Play);
        assert!(state.playback().is_starting());
    }

    #[test]
    fn toggle_on_image_is_a_noop() {
        let mut state = State::default();
        state.assign(&image_source(), true);
        state.handle(Message::SourceLoaded);
        assert_eq!(state.handle(Message::ToggleRequested), Effect::None);
    }

    #[test]
    fn autoplay_disabled_stays_stopped_until_tap() {
        let mut state = State::default();
        state.assign(&video_source(), false);
        state.handle(Message::SourceLoaded);

        assert_eq!(state.set_active(true), Effect::None);
        assert!(state.playback().is_stopped());

        assert_eq!(state.handle(Message::ToggleRequested), Effect::Play);
    }

    #[test]
    fn image_activation_has_no_engine_effect() {
        let mut state = State::default();
        state.assign(&image_source(), true);
        state.handle(Message::SourceLoaded);
        assert_eq!(state.set_active(true), Effect::None);
        assert_eq!(state.set_active(false), Effect::None);
    }
}

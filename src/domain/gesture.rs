// SPDX-License-Identifier: MPL-2.0
//! Gesture state management.
//!
//! Interprets a single pointer gesture on a feed card, from pointer-down to
//! pointer-up/cancel, as one of: tap, double-tap, swipe-vote, or cancelled
//! drag. While the drag is live it also provides the visual feedback
//! parameters (horizontal offset, card rotation, stamp opacities).

use crate::config::{
    DOUBLE_TAP_WINDOW, DRAG_NOISE_FLOOR, DRAG_ROTATION_FACTOR, STAMP_DEAD_ZONE,
    STAMP_MAX_EXTRA_SCALE, STAMP_RAMP_WIDTH, SWIPE_RELEASE_THRESHOLD, TAP_JITTER_THRESHOLD,
};
use std::time::Instant;

/// Direction of a committed swipe-vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Rightward swipe: agree.
    Agree,
    /// Leftward swipe: disagree.
    Disagree,
}

/// Classification emitted when a gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Isolated tap: toggles media play/pause.
    Tap,
    /// Second tap within the double-tap window: implicit agree plus pulse.
    DoubleTap,
    /// Drag released past the threshold in either direction.
    SwipeVote(SwipeDirection),
    /// Drag released inside the threshold: offset snaps back, nothing fires.
    Cancelled,
}

/// Manages drag-and-release state for one rendered feed item.
///
/// Ephemeral per gesture: a pointer-down resets the offset, a pointer-up
/// (or cancel) classifies and clears it. The double-tap timestamp and the
/// advancing lock survive across gestures and are cleared by [`reset`].
///
/// [`reset`]: GestureState::reset
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    /// X coordinate where the current gesture started.
    start_x: Option<f32>,

    /// Current horizontal drag offset relative to the start.
    drag_x: f32,

    /// Whether a drag operation is currently active.
    is_dragging: bool,

    /// When the previous tap was released, for double-tap detection.
    last_tap: Option<Instant>,

    /// Set while a swipe-vote transition is in flight; blocks re-triggering
    /// and new gestures until the coordinator finishes the advance.
    advancing: bool,
}

impl GestureState {
    /// Starts a gesture at the given X coordinate.
    ///
    /// Secondary pointers never start a gesture, and no gesture starts while
    /// an advance transition is in flight.
    pub fn pointer_down(&mut self, x: f32, is_primary: bool) {
        if !is_primary || self.advancing {
            return;
        }
        self.start_x = Some(x);
        self.drag_x = 0.0;
        self.is_dragging = true;
    }

    /// Updates the drag offset from the current pointer position.
    ///
    /// Movement below the noise floor is ignored so a resting finger does
    /// not jitter the card.
    pub fn pointer_move(&mut self, x: f32) {
        if !self.is_dragging || self.advancing {
            return;
        }
        let Some(start) = self.start_x else {
            return;
        };
        let diff = x - start;
        if diff.abs() > DRAG_NOISE_FLOOR {
            self.drag_x = diff;
        }
    }

    /// Ends the gesture and classifies it.
    ///
    /// Returns `None` if no gesture was in progress. A pointer-cancel or
    /// pointer-leave must be routed here as well, so an interrupted gesture
    /// is classified with its best-known offset instead of dangling.
    pub fn pointer_up(&mut self, now: Instant) -> Option<GestureOutcome> {
        if !self.is_dragging {
            return None;
        }
        self.is_dragging = false;

        let offset = self.drag_x;
        self.drag_x = 0.0;
        self.start_x = None;

        // Tap beats swipe whenever total movement stays under the jitter
        // threshold, regardless of sign.
        let outcome = if offset.abs() < TAP_JITTER_THRESHOLD {
            let is_double = self
                .last_tap
                .is_some_and(|prev| now.duration_since(prev) < DOUBLE_TAP_WINDOW);
            self.last_tap = Some(now);
            if is_double {
                GestureOutcome::DoubleTap
            } else {
                GestureOutcome::Tap
            }
        } else if offset > SWIPE_RELEASE_THRESHOLD {
            GestureOutcome::SwipeVote(SwipeDirection::Agree)
        } else if offset < -SWIPE_RELEASE_THRESHOLD {
            GestureOutcome::SwipeVote(SwipeDirection::Disagree)
        } else {
            GestureOutcome::Cancelled
        };

        Some(outcome)
    }

    /// Acquires the advancing lock.
    ///
    /// Returns true exactly once per transition, so overlapping release
    /// events cannot fire interaction-complete twice.
    pub fn begin_advance(&mut self) -> bool {
        if self.advancing {
            return false;
        }
        self.advancing = true;
        true
    }

    /// Releases the advancing lock once the transition has settled.
    pub fn end_advance(&mut self) {
        self.advancing = false;
    }

    /// Clears all state, including the double-tap timestamp and the
    /// advancing lock. Called whenever the rendered item identity changes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a drag operation is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Whether a swipe-vote transition is in flight.
    #[must_use]
    pub fn is_advancing(&self) -> bool {
        self.advancing
    }

    /// Current horizontal drag offset.
    #[must_use]
    pub fn drag_x(&self) -> f32 {
        self.drag_x
    }

    /// Card rotation in degrees, proportional to the drag offset.
    #[must_use]
    pub fn rotation_degrees(&self) -> f32 {
        self.drag_x * DRAG_ROTATION_FACTOR
    }

    /// Opacity of the AGREE stamp (rightward drag).
    #[must_use]
    pub fn agree_stamp_opacity(&self) -> f32 {
        stamp_opacity(self.drag_x)
    }

    /// Opacity of the NOPE stamp (leftward drag).
    #[must_use]
    pub fn nope_stamp_opacity(&self) -> f32 {
        stamp_opacity(-self.drag_x)
    }

    /// Scale applied to whichever stamp is visible, growing slightly with
    /// the drag.
    #[must_use]
    pub fn stamp_scale(&self) -> f32 {
        let past_dead_zone = (self.drag_x.abs() - STAMP_DEAD_ZONE).max(0.0);
        1.0 + (past_dead_zone / 300.0).min(STAMP_MAX_EXTRA_SCALE)
    }
}

/// Dead-zone-then-ramp curve shared by both stamp directions:
/// opacity = clamp((offset - dead_zone) / ramp_width, 0, 1).
fn stamp_opacity(directional_offset: f32) -> f32 {
    ((directional_offset - STAMP_DEAD_ZONE) / STAMP_RAMP_WIDTH).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn drag(state: &mut GestureState, to_x: f32) {
        state.pointer_down(0.0, true);
        state.pointer_move(to_x);
    }

    #[test]
    fn default_state_is_idle() {
        let state = GestureState::default();
        assert!(!state.is_dragging());
        assert!(!state.is_advancing());
        assert_eq!(state.drag_x(), 0.0);
    }

    #[test]
    fn secondary_pointer_does_not_start_a_gesture() {
        let mut state = GestureState::default();
        state.pointer_down(50.0, false);
        assert!(!state.is_dragging());
        assert_eq!(state.pointer_up(Instant::now()), None);
    }

    #[test]
    fn movement_below_noise_floor_is_ignored() {
        let mut state = GestureState::default();
        drag(&mut state, 1.5);
        assert_eq!(state.drag_x(), 0.0);
    }

    #[test]
    fn small_movement_classifies_as_tap_regardless_of_sign() {
        for offset in [4.0_f32, -4.0] {
            let mut state = GestureState::default();
            drag(&mut state, offset);
            assert_eq!(state.pointer_up(Instant::now()), Some(GestureOutcome::Tap));
        }
    }

    #[test]
    fn two_taps_within_window_form_a_double_tap() {
        let mut state = GestureState::default();
        let first = Instant::now();

        state.pointer_down(0.0, true);
        assert_eq!(state.pointer_up(first), Some(GestureOutcome::Tap));

        state.pointer_down(0.0, true);
        let second = first + Duration::from_millis(250);
        assert_eq!(state.pointer_up(second), Some(GestureOutcome::DoubleTap));
    }

    #[test]
    fn taps_outside_window_stay_single() {
        let mut state = GestureState::default();
        let first = Instant::now();

        state.pointer_down(0.0, true);
        assert_eq!(state.pointer_up(first), Some(GestureOutcome::Tap));

        state.pointer_down(0.0, true);
        let second = first + Duration::from_millis(400);
        assert_eq!(state.pointer_up(second), Some(GestureOutcome::Tap));
    }

    #[test]
    fn release_past_threshold_commits_swipe_vote() {
        let mut state = GestureState::default();
        drag(&mut state, 150.0);
        assert_eq!(
            state.pointer_up(Instant::now()),
            Some(GestureOutcome::SwipeVote(SwipeDirection::Agree))
        );

        let mut state = GestureState::default();
        drag(&mut state, -150.0);
        assert_eq!(
            state.pointer_up(Instant::now()),
            Some(GestureOutcome::SwipeVote(SwipeDirection::Disagree))
        );
    }

    #[test]
    fn release_inside_threshold_cancels_and_snaps_back() {
        let mut state = GestureState::default();
        drag(&mut state, 60.0);
        assert_eq!(
            state.pointer_up(Instant::now()),
            Some(GestureOutcome::Cancelled)
        );
        assert_eq!(state.drag_x(), 0.0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn pointer_up_without_gesture_returns_none() {
        let mut state = GestureState::default();
        assert_eq!(state.pointer_up(Instant::now()), None);
    }

    #[test]
    fn advancing_lock_fires_exactly_once() {
        let mut state = GestureState::default();
        assert!(state.begin_advance());
        assert!(!state.begin_advance());
        state.end_advance();
        assert!(state.begin_advance());
    }

    #[test]
    fn no_new_gesture_while_advancing() {
        let mut state = GestureState::default();
        assert!(state.begin_advance());
        state.pointer_down(0.0, true);
        assert!(!state.is_dragging());
    }

    #[test]
    fn reset_clears_tap_history_and_lock() {
        let mut state = GestureState::default();
        state.pointer_down(0.0, true);
        let first = Instant::now();
        state.pointer_up(first);
        state.begin_advance();

        state.reset();
        assert!(!state.is_advancing());

        // A tap right after reset is single, not a double-tap.
        state.pointer_down(0.0, true);
        let second = first + Duration::from_millis(100);
        assert_eq!(state.pointer_up(second), Some(GestureOutcome::Tap));
    }

    #[test]
    fn stamp_opacity_follows_dead_zone_then_ramp() {
        let mut state = GestureState::default();

        drag(&mut state, 30.0);
        assert_eq!(state.agree_stamp_opacity(), 0.0);

        state.pointer_move(65.0);
        assert!((state.agree_stamp_opacity() - 0.5).abs() < 1e-6);

        state.pointer_move(100.0);
        assert_eq!(state.agree_stamp_opacity(), 1.0);
        assert_eq!(state.nope_stamp_opacity(), 0.0);
    }

    #[test]
    fn nope_stamp_mirrors_agree_curve() {
        let mut state = GestureState::default();
        drag(&mut state, -65.0);
        assert!((state.nope_stamp_opacity() - 0.5).abs() < 1e-6);
        assert_eq!(state.agree_stamp_opacity(), 0.0);
    }

    #[test]
    fn stamp_scale_is_capped() {
        let mut state = GestureState::default();
        drag(&mut state, 500.0);
        assert!((state.stamp_scale() - (1.0 + STAMP_MAX_EXTRA_SCALE)).abs() < 1e-6);
    }

    #[test]
    fn rotation_tracks_offset() {
        let mut state = GestureState::default();
        drag(&mut state, 100.0);
        assert!((state.rotation_degrees() - 1.0).abs() < 1e-6);
    }
}

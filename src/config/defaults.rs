// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gesture**: Drag thresholds and tap timing
//! - **Stamp**: Opacity ramp for the AGREE/NOPE overlays
//! - **Pulse**: Double-tap heart pulse timing
//! - **Advance**: Programmatic scroll settle timing
//! - **Caption**: Text truncation and tag display limits
//! - **Latency**: Simulated backend latency for the mock repository

use std::time::Duration;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal offset (logical pixels) past which a released drag counts as a
/// swipe-vote.
pub const SWIPE_RELEASE_THRESHOLD: f32 = 100.0;

/// Total movement below this magnitude is treated as a tap, never a swipe.
pub const TAP_JITTER_THRESHOLD: f32 = 10.0;

/// Pointer movement below this magnitude is ignored entirely (sensor noise).
pub const DRAG_NOISE_FLOOR: f32 = 2.0;

/// Two taps closer together than this form a double-tap.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);

/// Rotation applied to the dragged card, in degrees per pixel of offset.
pub const DRAG_ROTATION_FACTOR: f32 = 0.01;

// ==========================================================================
// Stamp Overlay Defaults
// ==========================================================================

/// Offset magnitude below which the stamps stay fully transparent.
pub const STAMP_DEAD_ZONE: f32 = 30.0;

/// Width of the opacity ramp after the dead zone; at
/// `STAMP_DEAD_ZONE + STAMP_RAMP_WIDTH` the stamp is fully opaque.
pub const STAMP_RAMP_WIDTH: f32 = 70.0;

/// Maximum extra scale applied to a stamp at full drag.
pub const STAMP_MAX_EXTRA_SCALE: f32 = 0.1;

// ==========================================================================
// Pulse Defaults
// ==========================================================================

/// How long the full-screen heart pulse stays visible after a double-tap.
pub const DEFAULT_PULSE_DURATION_MS: u64 = 800;

/// Minimum pulse duration.
pub const MIN_PULSE_DURATION_MS: u64 = 200;

/// Maximum pulse duration.
pub const MAX_PULSE_DURATION_MS: u64 = 2_000;

// ==========================================================================
// Advance/Settle Defaults
// ==========================================================================

/// How long the scroll observer is suppressed after a programmatic advance,
/// while the animated scroll settles on the target item.
pub const DEFAULT_ADVANCE_SETTLE_MS: u64 = 600;

/// Minimum settle interval.
pub const MIN_ADVANCE_SETTLE_MS: u64 = 100;

/// Maximum settle interval.
pub const MAX_ADVANCE_SETTLE_MS: u64 = 2_000;

// ==========================================================================
// Caption/Tag Defaults
// ==========================================================================

/// Captions longer than this many characters get a "see more" affordance.
pub const CAPTION_TRUNCATION_CHARS: usize = 80;

/// At most this many tags are rendered on a feed item.
pub const VISIBLE_TAG_CAP: usize = 3;

// ==========================================================================
// Mock Backend Latency Defaults
// ==========================================================================

/// Default simulated latency for feed fetches.
pub const DEFAULT_FETCH_LATENCY_MS: u64 = 300;

/// Default simulated latency for post creation (fake upload time).
pub const DEFAULT_CREATE_LATENCY_MS: u64 = 800;

/// Default simulated latency for business search.
pub const DEFAULT_SEARCH_LATENCY_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Gesture validation
    assert!(TAP_JITTER_THRESHOLD > 0.0);
    assert!(SWIPE_RELEASE_THRESHOLD > TAP_JITTER_THRESHOLD);
    assert!(DRAG_NOISE_FLOOR < TAP_JITTER_THRESHOLD);

    // Stamp validation
    assert!(STAMP_DEAD_ZONE > 0.0);
    assert!(STAMP_RAMP_WIDTH > 0.0);
    assert!(STAMP_DEAD_ZONE + STAMP_RAMP_WIDTH <= SWIPE_RELEASE_THRESHOLD);

    // Pulse validation
    assert!(MIN_PULSE_DURATION_MS > 0);
    assert!(MAX_PULSE_DURATION_MS >= MIN_PULSE_DURATION_MS);
    assert!(DEFAULT_PULSE_DURATION_MS >= MIN_PULSE_DURATION_MS);
    assert!(DEFAULT_PULSE_DURATION_MS <= MAX_PULSE_DURATION_MS);

    // Settle validation
    assert!(MIN_ADVANCE_SETTLE_MS > 0);
    assert!(MAX_ADVANCE_SETTLE_MS >= MIN_ADVANCE_SETTLE_MS);
    assert!(DEFAULT_ADVANCE_SETTLE_MS >= MIN_ADVANCE_SETTLE_MS);
    assert!(DEFAULT_ADVANCE_SETTLE_MS <= MAX_ADVANCE_SETTLE_MS);

    // Caption validation
    assert!(CAPTION_TRUNCATION_CHARS > 0);
    assert!(VISIBLE_TAG_CAP > 0);
};

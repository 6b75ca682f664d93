// SPDX-License-Identifier: MPL-2.0
//! The vertical swipe feed: per-item cards, the scroll coordinator that
//! arbitrates the active index, and the empty/loading placeholders.

pub mod coordinator;
pub mod empty_state;
pub mod item;

pub use coordinator::{Coordinator, ScrollTarget, SCROLLABLE_ID};

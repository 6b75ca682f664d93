// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core feed logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`author`]: Post author variants ([`Author`](author::Author))
//! - [`business`]: Business records backing search ([`Business`](business::Business))
//! - [`collection`]: User lists and post drafts ([`UserList`](collection::UserList),
//!   [`PostDraft`](collection::PostDraft))
//! - [`feed`]: Feed session and active-index tracking ([`FeedSession`](feed::FeedSession))
//! - [`gesture`]: Drag/tap interpretation ([`GestureState`](gesture::GestureState),
//!   [`GestureOutcome`](gesture::GestureOutcome))
//! - [`playback`]: Media load/playback state machines ([`LoadPhase`](playback::LoadPhase),
//!   [`PlaybackState`](playback::PlaybackState))
//! - [`review`]: Review items and media descriptors ([`ReviewItem`](review::ReviewItem),
//!   [`MediaSource`](review::MediaSource))
//! - [`vote`]: Agree/disagree state machine ([`VoteState`](vote::VoteState))

pub mod author;
pub mod business;
pub mod collection;
pub mod feed;
pub mod gesture;
pub mod playback;
pub mod review;
pub mod vote;

// SPDX-License-Identifier: MPL-2.0
//! Data-service collaborator: an explicit in-memory repository.
//!
//! The feed engine treats these operations as opaque async calls that may
//! fail; failures are handled by the app layer, never inside the feed
//! components. The repository is constructed once per session and shared by
//! reference (no module-level mutable state).

pub mod repository;
pub mod seed;

pub use repository::{FeedRepository, Latency};

// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::review::ReviewItem;
use crate::error::DataError;
use crate::ui::feed::{empty_state, item};
use iced::widget::scrollable::AbsoluteOffset;
use iced::Rectangle;
use std::time::Instant;

/// Options parsed from the command line by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override, e.g. `--lang fr`.
    pub lang: Option<String>,
    /// Disable the mock backend's simulated latency.
    pub no_latency: bool,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// The feed fetch for the current source resolved.
    FeedLoaded(Result<Vec<ReviewItem>, DataError>),
    /// A message for the card at `index`.
    Item { index: usize, message: item::Message },
    /// The feed scrollable reported a new viewport.
    ViewportChanged {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    EmptyState(empty_state::Message),
    SearchInputChanged(String),
    SearchSubmitted,
    ClearSearch,
    /// The repository finished saving a post to the user's list.
    SaveResolved {
        post_id: String,
        result: Result<(), DataError>,
    },
    /// Periodic tick for pulse auto-hide and advance settling.
    Tick(Instant),
}

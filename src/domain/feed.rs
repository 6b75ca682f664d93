// SPDX-License-Identifier: MPL-2.0
//! Feed session: the ordered item sequence and its active index.
//!
//! This component is the single source of truth for which item is active
//! (eligible for media autoplay). Both index-update paths go through it:
//! scroll-position observation and programmatic advance. The suppression of
//! the scroll observer during an animated advance lives in the UI-side
//! coordinator; this type only enforces the index invariants.

use super::review::ReviewItem;

/// Ordered sequence of review items plus the active index.
///
/// Invariant: `0 <= active_index < len()` whenever the session is non-empty.
/// Replacing the items wholesale always resets the index to 0.
#[derive(Debug, Clone, Default)]
pub struct FeedSession {
    items: Vec<ReviewItem>,
    active_index: usize,
}

impl FeedSession {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the item sequence wholesale (e.g. switching from the home
    /// feed to search results). The active index never survives this.
    pub fn replace(&mut self, items: Vec<ReviewItem>) {
        self.items = items;
        self.active_index = 0;
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[ReviewItem] {
        &self.items
    }

    /// Number of items in the session.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the session holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The active index. Meaningless (0) while the session is empty.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The active item, if any. Empty sessions have no active item.
    #[must_use]
    pub fn active_item(&self) -> Option<&ReviewItem> {
        self.items.get(self.active_index)
    }

    /// Whether the item at `index` is the active one.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        !self.items.is_empty() && index == self.active_index
    }

    /// Sets the active index directly, clamped into range.
    ///
    /// Returns true if the index actually changed. No-op on an empty
    /// session.
    pub fn set_active_index(&mut self, index: usize) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let clamped = index.min(self.items.len() - 1);
        if clamped == self.active_index {
            return false;
        }
        self.active_index = clamped;
        true
    }

    /// Derives the active index from a scroll position.
    ///
    /// Returns the new index if it changed. When the container has not been
    /// laid out yet (`item_extent <= 0`), the update is skipped entirely
    /// rather than producing a division by zero or a bogus index.
    pub fn observe_scroll(&mut self, scroll_offset: f32, item_extent: f32) -> Option<usize> {
        if item_extent <= 0.0 || self.items.is_empty() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (scroll_offset / item_extent).round().max(0.0) as usize;
        if self.set_active_index(index) {
            Some(self.active_index)
        } else {
            None
        }
    }

    /// Programmatic advance to the next item after a completed interaction.
    ///
    /// Updates the index immediately (leading the scroll observer) and
    /// returns the new index. At the last item this is a no-op: the feed
    /// never wraps.
    pub fn advance(&mut self) -> Option<usize> {
        let next = self.active_index + 1;
        if next >= self.items.len() {
            return None;
        }
        self.active_index = next;
        Some(next)
    }

    /// Whether the active item is the last one.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        !self.items.is_empty() && self.active_index == self.items.len() - 1
    }
}

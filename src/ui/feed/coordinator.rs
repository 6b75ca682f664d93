// SPDX-License-Identifier: MPL-2.0
//! Feed scroll coordination.
//!
//! Owns the [`FeedSession`] and the per-item cards, and arbitrates between
//! the two sources of active-index changes: user scrolling (observed via
//! scrollable viewport updates) and programmatic advances after a
//! swipe-vote. During a programmatic advance the scroll observer is
//! suppressed until a settle deadline so intermediate viewport positions
//! cannot fight the transition.

use super::item::{self, media};
use crate::config::Config;
use crate::domain::feed::FeedSession;
use crate::domain::review::ReviewItem;
use std::time::Instant;

/// Widget id of the feed scrollable, shared with the app view so
/// programmatic scroll operations can target it.
pub const SCROLLABLE_ID: &str = "feed-scroll";

/// A programmatic scroll request, expressed as a relative offset into the
/// scrollable (0.0 = first item, 1.0 = last).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTarget {
    pub relative_y: f32,
}

/// Media engine commands produced by an active-index change, tagged with
/// the card index they apply to.
pub type MediaCommands = Vec<(usize, media::Effect)>;

/// Coordinates session state, card state, and scroll position.
#[derive(Debug, Default)]
pub struct Coordinator {
    session: FeedSession,
    cards: Vec<item::State>,
    /// Height of one item page, learned from viewport updates.
    item_extent: f32,
    /// While set, viewport updates do not move the active index.
    settling_until: Option<Instant>,
}

impl Coordinator {
    /// Replaces the whole item list, resetting the active index to the
    /// first item. Returns the media commands for the new activation.
    pub fn replace_items(&mut self, items: Vec<ReviewItem>, autoplay: bool) -> MediaCommands {
        self.session.replace(items.clone());
        self.cards = items
            .into_iter()
            .map(|item| item::State::new(item, autoplay))
            .collect();
        self.settling_until = None;
        self.apply_active()
    }

    /// Processes a scrollable viewport update.
    ///
    /// The viewport height is the extent of one item page. Updates that
    /// arrive while an advance transition is settling are ignored.
    pub fn on_viewport(
        &mut self,
        offset_y: f32,
        viewport_height: f32,
        now: Instant,
    ) -> MediaCommands {
        if viewport_height > 0.0 {
            self.item_extent = viewport_height;
        }
        if self.settling_until.is_some_and(|deadline| now < deadline) {
            return Vec::new();
        }
        match self.session.observe_scroll(offset_y, viewport_height) {
            Some(_) => self.apply_active(),
            None => Vec::new(),
        }
    }

    /// Reacts to a committed swipe-vote on the active card.
    ///
    /// Advances the session and returns the scroll request plus the media
    /// commands for the activation change. At the last item there is
    /// nowhere to go: the card unlocks immediately and nothing scrolls.
    pub fn interaction_complete(
        &mut self,
        now: Instant,
        config: &Config,
    ) -> (Option<ScrollTarget>, MediaCommands) {
        let Some(next_index) = self.session.advance() else {
            if let Some(card) = self.cards.get_mut(self.session.active_index()) {
                card.advance_settled();
            }
            return (None, Vec::new());
        };

        self.settling_until = Some(now + config.advance_settle());
        let commands = self.apply_active();

        let last = self.session.len().saturating_sub(1);
        let relative_y = if last == 0 {
            0.0
        } else {
            next_index as f32 / last as f32
        };
        (Some(ScrollTarget { relative_y }), commands)
    }

    /// Routes a message to the card at `index`.
    pub fn handle_card(
        &mut self,
        index: usize,
        message: item::Message,
        now: Instant,
        config: &Config,
    ) -> item::Event {
        match self.cards.get_mut(index) {
            Some(card) => card.handle(message, now, config),
            None => item::Event::None,
        }
    }

    /// Advances time-based state: expires the settle deadline (unlocking
    /// the cards' gesture surfaces) and the heart pulses.
    pub fn tick(&mut self, now: Instant) {
        if self.settling_until.is_some_and(|deadline| now >= deadline) {
            self.settling_until = None;
            for card in &mut self.cards {
                card.advance_settled();
            }
        }
        for card in &mut self.cards {
            card.tick(now);
        }
    }

    /// Whether any time-based state is pending.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.settling_until.is_some() || self.cards.iter().any(item::State::needs_tick)
    }

    fn apply_active(&mut self) -> MediaCommands {
        let active = self.session.active_index();
        self.cards
            .iter_mut()
            .enumerate()
            .filter_map(|(index, card)| {
                let effect = card.set_active(index == active);
                (effect != media::Effect::None).then_some((index, effect))
            })
            .collect()
    }

    /// The underlying session.
    #[must_use]
    pub fn session(&self) -> &FeedSession {
        &self.session
    }

    /// All cards, in feed order.
    #[must_use]
    pub fn cards(&self) -> &[item::State] {
        &self.cards
    }

    /// Mutable access to one card, for routing engine callbacks.
    pub fn card_mut(&mut self, index: usize) -> Option<&mut item::State> {
        self.cards.get_mut(index)
    }

    /// Height of one item page, as last reported by the viewport.
    #[must_use]
    pub fn item_extent(&self) -> f32 {
        self.item_extent
    }
}

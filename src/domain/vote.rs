// SPDX-License-Identifier: MPL-2.0
//! Agree/disagree vote state machine.
//!
//! Tracks the local optimistic vote for one rendered item. The canonical
//! counters on the item are never mutated here; the displayed agree count
//! gets a local +1 while the state is `Agreed`, pending any external sync.

/// Tri-state local vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Vote {
    #[default]
    None,
    Agreed,
    Disagreed,
}

/// Per-item vote state with optimistic display counters.
///
/// Reset whenever the underlying item identity changes; a vote never
/// survives a round trip away from and back to the same item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteState {
    vote: Vote,
}

impl VoteState {
    /// Current vote.
    #[must_use]
    pub fn vote(self) -> Vote {
        self.vote
    }

    /// Swipe right or double-tap: agree.
    pub fn agree(&mut self) {
        self.vote = Vote::Agreed;
    }

    /// Swipe left: disagree.
    pub fn disagree(&mut self) {
        self.vote = Vote::Disagreed;
    }

    /// Like-button tap. Toggles between `None` and `Agreed` only; a
    /// disagreed vote can only change via swipe or reset.
    pub fn toggle_like(&mut self) {
        self.vote = match self.vote {
            Vote::None => Vote::Agreed,
            Vote::Agreed => Vote::None,
            Vote::Disagreed => Vote::Disagreed,
        };
    }

    /// Clears the vote (item identity changed).
    pub fn reset(&mut self) {
        self.vote = Vote::None;
    }

    /// Agree count to display: canonical count plus the local optimistic
    /// vote.
    #[must_use]
    pub fn displayed_agree_count(self, base: u32) -> u32 {
        match self.vote {
            Vote::Agreed => base + 1,
            Vote::None | Vote::Disagreed => base,
        }
    }

    /// Disagree count to display. The disagree counter is not optimistically
    /// bumped; the swipe advances away before the count is visible again.
    #[must_use]
    pub fn displayed_disagree_count(self, base: u32) -> u32 {
        base
    }
}

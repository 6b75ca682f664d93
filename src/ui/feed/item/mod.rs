// SPDX-License-Identifier: MPL-2.0
//! One rendered feed card.
//!
//! Composes the media layer, the gesture surface, the vote overlays, the
//! action sidebar, and the info area for a single review. Gesture
//! interpretation and vote state live in the domain layer; this component
//! wires pointer events into them and turns the outcomes into events for
//! the scroll coordinator.

pub mod media;
mod overlay;

use crate::config::Config;
use crate::domain::gesture::{GestureOutcome, GestureState, SwipeDirection};
use crate::domain::playback::LoadPhase;
use crate::domain::review::ReviewItem;
use crate::domain::vote::VoteState;
use crate::i18n::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{mouse_area, Column, Container, Row, Space, Stack};
use iced::{Element, Length, Padding, Point};
use std::time::Instant;

/// Per-card state.
#[derive(Debug, Clone)]
pub struct State {
    item: ReviewItem,
    gesture: GestureState,
    vote: VoteState,
    media: media::State,
    /// While set, the heart pulse overlay is visible.
    pulse_until: Option<Instant>,
    /// Last known cursor X over the card; press events carry no position.
    cursor_x: f32,
}

/// Messages for one feed card.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    CursorMoved(Point),
    Pressed,
    Released,
    Exited,
    LikePressed,
    CommentsPressed,
    SavePressed,
    SharePressed,
    AuthorPressed,
    BusinessPressed,
    TagPressed(String),
    ReadMorePressed,
    Media(media::Message),
}

/// Events surfaced to the feed coordinator and the app shell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Event {
    #[default]
    None,
    /// A swipe-vote committed; the feed should advance to the next item.
    InteractionComplete,
    /// Open the author's profile.
    OpenProfile { author_id: String, is_business: bool },
    /// Open the business page for this review.
    OpenBusiness { business_id: String },
    OpenComments,
    SaveRequested,
    ShareRequested,
    ReadMoreRequested,
    TagSelected(String),
    /// A media engine command to execute for this card.
    Media(media::Effect),
}

impl State {
    /// Creates a card for the given review.
    #[must_use]
    pub fn new(item: ReviewItem, autoplay: bool) -> Self {
        let mut media = media::State::default();
        media.assign(&item.media, autoplay);
        Self {
            item,
            gesture: GestureState::default(),
            vote: VoteState::default(),
            media,
            pulse_until: None,
            cursor_x: 0.0,
        }
    }

    /// Replaces the rendered item.
    ///
    /// A changed identity resets gesture, vote, pulse, and media state; the
    /// same item keeps its interaction state (e.g. a refresh that returns
    /// identical data).
    pub fn set_item(&mut self, item: ReviewItem, autoplay: bool) {
        if self.item.id == item.id {
            self.item = item;
            return;
        }
        *self = Self::new(item, autoplay);
    }

    /// Marks this card active or inactive, returning the media command.
    pub fn set_active(&mut self, active: bool) -> media::Effect {
        if !active {
            self.pulse_until = None;
        }
        self.media.set_active(active)
    }

    /// The scroll transition after a swipe-vote has settled; unlocks the
    /// gesture surface.
    pub fn advance_settled(&mut self) {
        self.gesture.end_advance();
    }

    /// Handles a card message.
    pub fn handle(&mut self, message: Message, now: Instant, config: &Config) -> Event {
        match message {
            Message::CursorMoved(point) => {
                self.cursor_x = point.x;
                self.gesture.pointer_move(point.x);
                Event::None
            }
            Message::Pressed => {
                self.gesture.pointer_down(self.cursor_x, true);
                Event::None
            }
            Message::Released | Message::Exited => {
                // Pointer-leave classifies with the best-known offset so an
                // interrupted drag never dangles.
                match self.gesture.pointer_up(now) {
                    Some(outcome) => self.finish_gesture(outcome, now, config),
                    None => Event::None,
                }
            }
            Message::LikePressed => {
                self.vote.toggle_like();
                Event::None
            }
            Message::CommentsPressed => Event::OpenComments,
            Message::SavePressed => Event::SaveRequested,
            Message::SharePressed => Event::ShareRequested,
            Message::AuthorPressed => {
                let author = &self.item.author;
                Event::OpenProfile {
                    author_id: author.profile().id.clone(),
                    is_business: author.is_business(),
                }
            }
            Message::BusinessPressed => Event::OpenBusiness {
                business_id: self.item.business_id.clone(),
            },
            Message::TagPressed(tag) => Event::TagSelected(tag),
            Message::ReadMorePressed => Event::ReadMoreRequested,
            Message::Media(msg) => Event::Media(self.media.handle(msg)),
        }
    }

    fn finish_gesture(&mut self, outcome: GestureOutcome, now: Instant, config: &Config) -> Event {
        match outcome {
            GestureOutcome::Tap => Event::Media(self.media.handle(media::Message::ToggleRequested)),
            GestureOutcome::DoubleTap => {
                self.vote.agree();
                self.pulse_until = Some(now + config.pulse_duration());
                Event::None
            }
            GestureOutcome::SwipeVote(direction) => {
                match direction {
                    SwipeDirection::Agree => self.vote.agree(),
                    SwipeDirection::Disagree => self.vote.disagree(),
                }
                if self.gesture.begin_advance() {
                    Event::InteractionComplete
                } else {
                    Event::None
                }
            }
            GestureOutcome::Cancelled => Event::None,
        }
    }

    /// Expires the heart pulse once its deadline passes.
    pub fn tick(&mut self, now: Instant) {
        if self.pulse_until.is_some_and(|deadline| now >= deadline) {
            self.pulse_until = None;
        }
    }

    /// Whether the heart pulse overlay is currently shown.
    #[must_use]
    pub fn pulse_visible(&self, now: Instant) -> bool {
        self.pulse_until.is_some_and(|deadline| now < deadline)
    }

    /// Whether this card needs the animation tick subscription running.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.pulse_until.is_some()
    }

    /// The rendered review.
    #[must_use]
    pub fn item(&self) -> &ReviewItem {
        &self.item
    }

    /// Gesture state, for the coordinator's settle bookkeeping.
    #[must_use]
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Local vote state.
    #[must_use]
    pub fn vote(&self) -> VoteState {
        self.vote
    }

    /// Media sub-component state.
    #[must_use]
    pub fn media(&self) -> &media::State {
        &self.media
    }

    /// Builds the card view at the given height (one viewport page).
    pub fn view<'a>(
        &'a self,
        i18n: &I18n,
        is_saved: bool,
        height: f32,
        now: Instant,
    ) -> Element<'a, Message> {
        let drag_x = self.gesture.drag_x();

        let media_layer: Element<'a, Message> = match self.media.phase() {
            LoadPhase::Loading => overlay::media_placeholder(i18n, true),
            LoadPhase::Failed => overlay::media_placeholder(i18n, false),
            LoadPhase::Ready => Container::new(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::media_backdrop)
                .into(),
        };

        let bottom = Row::new()
            .width(Length::Fill)
            .align_y(iced::alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .spacing(spacing::MD)
            .push(
                Container::new(overlay::info_area(i18n, &self.item)).width(Length::FillPortion(4)),
            )
            .push(
                Container::new(overlay::sidebar(i18n, &self.item, self.vote, is_saved))
                    .width(Length::Shrink),
            );

        let chrome = Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(Space::new().width(Length::Fill).height(Length::Fill))
            .push(bottom);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(media_layer)
            .push(overlay::stamps(i18n, &self.gesture))
            .push(chrome);

        if self.pulse_visible(now) {
            layers = layers.push(overlay::pulse());
        }

        // The drag offset translates the whole card horizontally; release
        // inside the threshold snaps it back to zero.
        let card = Container::new(layers)
            .width(Length::Fill)
            .height(height)
            .padding(Padding {
                left: drag_x.max(0.0),
                right: (-drag_x).max(0.0),
                top: 0.0,
                bottom: 0.0,
            });

        mouse_area(card)
            .on_press(Message::Pressed)
            .on_release(Message::Released)
            .on_move(Message::CursorMoved)
            .on_exit(Message::Exited)
            .into()
    }
}

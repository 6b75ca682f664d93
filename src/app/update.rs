// SPDX-License-Identifier: MPL-2.0
//! The main update loop.

use super::{App, FeedSource, Message};
use crate::error::DataError;
use crate::ui::feed::coordinator::MediaCommands;
use crate::ui::feed::item::{self, media};
use crate::ui::feed::{empty_state, ScrollTarget, SCROLLABLE_ID};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::sync::Arc;
use std::time::Instant;

/// Title of the implicit list that the save button targets.
const SAVED_LIST_TITLE: &str = "Saved";

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FeedLoaded(Ok(items)) => {
                self.loading = false;
                self.load_error = None;
                let count = items.len();
                let commands = self.coordinator.replace_items(items, self.autoplay());

                // The mock media engine decodes every source immediately.
                let decoded = Task::batch((0..count).map(|index| {
                    Task::done(Message::Item {
                        index,
                        message: item::Message::Media(media::Message::SourceLoaded),
                    })
                }));
                Task::batch([decoded, media_tasks(commands)])
            }
            Message::FeedLoaded(Err(error)) => {
                self.loading = false;
                self.load_error = Some(error);
                Task::none()
            }
            Message::Item { index, message } => {
                let now = Instant::now();
                let event = self.coordinator.handle_card(index, message, now, &self.config);
                self.handle_item_event(index, event, now)
            }
            Message::ViewportChanged { bounds, offset } => {
                let commands =
                    self.coordinator
                        .on_viewport(offset.y, bounds.height, Instant::now());
                media_tasks(commands)
            }
            Message::EmptyState(empty_state::Message::RetryRequested) => self.reload(),
            Message::SearchInputChanged(value) => {
                self.search_input = value;
                Task::none()
            }
            Message::SearchSubmitted => {
                let query = self.search_input.trim().to_string();
                if query.is_empty() {
                    return Task::none();
                }
                self.source = FeedSource::Search(query);
                self.reload()
            }
            Message::ClearSearch => {
                self.search_input.clear();
                if self.source == FeedSource::Home {
                    return Task::none();
                }
                self.source = FeedSource::Home;
                self.reload()
            }
            Message::SaveResolved { post_id, result } => {
                if result.is_err() {
                    // Roll the optimistic save back.
                    self.saved_ids.remove(&post_id);
                }
                Task::none()
            }
            Message::Tick(now) => {
                self.coordinator.tick(now);
                Task::none()
            }
        }
    }

    /// Starts a fetch for the current feed source.
    pub(super) fn reload(&mut self) -> Task<Message> {
        self.loading = true;
        self.load_error = None;

        let repository = Arc::clone(&self.repository);
        let source = self.source.clone();
        Task::perform(
            async move {
                match source {
                    FeedSource::Home => repository.feed().await,
                    FeedSource::Search(query) => repository.search_posts(&query).await,
                }
            },
            Message::FeedLoaded,
        )
    }

    fn handle_item_event(
        &mut self,
        index: usize,
        event: item::Event,
        now: Instant,
    ) -> Task<Message> {
        match event {
            item::Event::None => Task::none(),
            item::Event::InteractionComplete => {
                let (target, commands) = self.coordinator.interaction_complete(now, &self.config);
                Task::batch([scroll_task(target), media_tasks(commands)])
            }
            item::Event::Media(effect) => media_task(index, effect),
            item::Event::TagSelected(tag) => {
                self.search_input = tag.clone();
                self.source = FeedSource::Search(tag);
                self.reload()
            }
            item::Event::SaveRequested => self.toggle_save(index),
            // The profile, business, comments, share, and full-caption
            // surfaces are separate screens that this shell does not host.
            item::Event::OpenProfile { .. }
            | item::Event::OpenBusiness { .. }
            | item::Event::OpenComments
            | item::Event::ShareRequested
            | item::Event::ReadMoreRequested => Task::none(),
        }
    }

    /// Saves (or locally unsaves) the post on the card at `index`.
    ///
    /// Saving is optimistic: the id is marked saved immediately and rolled
    /// back if the repository call fails. The target list is the user's
    /// "Saved" list, created on first use.
    fn toggle_save(&mut self, index: usize) -> Task<Message> {
        let Some(card) = self.coordinator.cards().get(index) else {
            return Task::none();
        };
        let post_id = card.item().id.clone();

        if self.saved_ids.contains(&post_id) {
            self.saved_ids.remove(&post_id);
            return Task::none();
        }
        self.saved_ids.insert(post_id.clone());

        let repository = Arc::clone(&self.repository);
        let id_for_call = post_id.clone();
        Task::perform(
            async move { save_to_list(&repository, &id_for_call).await },
            move |result| Message::SaveResolved {
                post_id: post_id.clone(),
                result,
            },
        )
    }
}

async fn save_to_list(
    repository: &crate::data::FeedRepository,
    post_id: &str,
) -> Result<(), DataError> {
    let user_id = repository.current_author().profile().id.clone();
    let lists = repository.user_lists(&user_id).await?;
    let list = match lists.into_iter().find(|l| l.title == SAVED_LIST_TITLE) {
        Some(list) => list,
        None => {
            repository
                .create_list(SAVED_LIST_TITLE.to_string(), true, Vec::new())
                .await?
        }
    };
    repository.add_to_list(&list.id, post_id).await
}

fn scroll_task(target: Option<ScrollTarget>) -> Task<Message> {
    match target {
        Some(target) => operation::snap_to(
            Id::new(SCROLLABLE_ID),
            RelativeOffset {
                x: 0.0,
                y: target.relative_y,
            },
        ),
        None => Task::none(),
    }
}

fn media_tasks(commands: MediaCommands) -> Task<Message> {
    Task::batch(commands.into_iter().map(|(index, effect)| media_task(index, effect)))
}

/// Bridges a media engine command back into the state machine. The mock
/// engine grants every play attempt; pauses need no acknowledgement.
fn media_task(index: usize, effect: media::Effect) -> Task<Message> {
    match effect {
        media::Effect::Play => Task::done(Message::Item {
            index,
            message: item::Message::Media(media::Message::PlayResolved(Ok(()))),
        }),
        media::Effect::None | media::Effect::Pause | media::Effect::PauseAndRewind => Task::none(),
    }
}

// SPDX-License-Identifier: MPL-2.0
//! The root view: search bar over the vertical feed.

use super::{App, FeedSource, Message, WINDOW_DEFAULT_HEIGHT};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::feed::{empty_state, SCROLLABLE_ID};
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{button, text_input, Column, Container, Row, Scrollable, Text};
use iced::widget::Id;
use iced::{Element, Length};
use std::time::Instant;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let search_bar = self.search_bar();
        let body = self.feed_body();

        Column::new()
            .push(search_bar)
            .push(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn search_bar(&self) -> Element<'_, Message> {
        let input = text_input(&self.i18n.tr("search-placeholder"), &self.search_input)
            .on_input(Message::SearchInputChanged)
            .on_submit(Message::SearchSubmitted)
            .padding(spacing::SM);

        let mut row = Row::new()
            .spacing(spacing::SM)
            .padding(spacing::SM)
            .push(input);

        if matches!(self.source, FeedSource::Search(_)) {
            row = row.push(
                button(Text::new(self.i18n.tr("search-clear")))
                    .style(styles::button::primary)
                    .padding([spacing::XS, spacing::SM])
                    .on_press(Message::ClearSearch),
            );
        }

        Container::new(row)
            .width(Length::Fill)
            .height(sizing::SEARCH_BAR_HEIGHT)
            .into()
    }

    fn feed_body(&self) -> Element<'_, Message> {
        if self.load_error.is_some() {
            return empty_state::view(&self.i18n, empty_state::Kind::Error)
                .map(Message::EmptyState);
        }
        if self.coordinator.cards().is_empty() {
            let kind = if self.loading {
                empty_state::Kind::Loading
            } else if matches!(self.source, FeedSource::Search(_)) {
                empty_state::Kind::EmptySearch
            } else {
                empty_state::Kind::EmptyHome
            };
            return empty_state::view(&self.i18n, kind).map(Message::EmptyState);
        }

        // Each card fills exactly one viewport page; until the first
        // viewport report arrives, fall back to the default window height.
        let extent = if self.coordinator.item_extent() > 0.0 {
            self.coordinator.item_extent()
        } else {
            WINDOW_DEFAULT_HEIGHT as f32 - sizing::SEARCH_BAR_HEIGHT
        };

        let now = Instant::now();
        let mut column = Column::new().width(Length::Fill);
        for (index, card) in self.coordinator.cards().iter().enumerate() {
            let is_saved = self.saved_ids.contains(&card.item().id);
            column = column.push(
                card.view(&self.i18n, is_saved, extent, now)
                    .map(move |message| Message::Item { index, message }),
            );
        }

        Scrollable::new(column)
            .id(Id::new(SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .direction(Direction::Vertical(Scrollbar::hidden()))
            .on_scroll(|viewport: Viewport| Message::ViewportChanged {
                bounds: viewport.bounds(),
                offset: viewport.absolute_offset(),
            })
            .into()
    }
}

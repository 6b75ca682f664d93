// SPDX-License-Identifier: MPL-2.0
//! Placeholder views shown when the feed has no cards to render: initial
//! loading, an empty result set, or a load failure with a retry button.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Which placeholder to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The initial fetch is still in flight.
    Loading,
    /// The home feed came back empty.
    EmptyHome,
    /// A search returned no posts.
    EmptySearch,
    /// The fetch failed; offers a retry.
    Error,
}

/// Message emitted by the placeholder views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    RetryRequested,
}

pub fn view(i18n: &I18n, kind: Kind) -> Element<'_, Message> {
    let content = match kind {
        Kind::Loading => Column::new().push(
            Text::new(i18n.tr("feed-loading"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        ),
        Kind::EmptyHome => titled(
            i18n.tr("feed-empty-title"),
            i18n.tr("feed-empty-subtitle"),
        ),
        Kind::EmptySearch => titled(
            i18n.tr("feed-empty-search-title"),
            i18n.tr("feed-empty-search-subtitle"),
        ),
        Kind::Error => titled(
            i18n.tr("error-feed-load"),
            String::new(),
        )
        .push(
            button(Text::new(i18n.tr("feed-retry-button")))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::RetryRequested),
        ),
    };

    Container::new(content.spacing(spacing::LG).align_x(alignment::Horizontal::Center))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn titled<'a>(title: String, subtitle: String) -> Column<'a, Message> {
    let mut column = Column::new().push(
        Text::new(title)
            .size(typography::TITLE_LG)
            .color(palette::GRAY_400),
    );
    if !subtitle.is_empty() {
        column = column.push(
            Text::new(subtitle)
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );
    }
    column
}

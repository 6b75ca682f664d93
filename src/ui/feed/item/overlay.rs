// SPDX-License-Identifier: MPL-2.0
//! Overlay views for one feed card: vote stamps, heart pulse, the action
//! sidebar, and the info area.

use super::Message;
use crate::domain::author::Author;
use crate::domain::gesture::GestureState;
use crate::domain::review::ReviewItem;
use crate::domain::vote::{Vote, VoteState};
use crate::config::{CAPTION_TRUNCATION_CHARS, VISIBLE_TAG_CAP};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Padding};

/// Both vote stamps. Their opacity ramps with the drag offset, so at rest
/// they are invisible but still laid out.
pub fn stamps<'a>(i18n: &I18n, gesture: &GestureState) -> Element<'a, Message> {
    let agree = Container::new(
        Text::new(i18n.tr("stamp-agree"))
            .size(typography::STAMP * gesture.stamp_scale()),
    )
    .padding([spacing::SM, spacing::MD])
    .style(styles::overlay::agree_stamp(gesture.agree_stamp_opacity()));

    let nope = Container::new(
        Text::new(i18n.tr("stamp-nope"))
            .size(typography::STAMP * gesture.stamp_scale()),
    )
    .padding([spacing::SM, spacing::MD])
    .style(styles::overlay::nope_stamp(gesture.nope_stamp_opacity()));

    Container::new(
        Row::new()
            .width(Length::Fill)
            .push(agree)
            .push(Space::new().width(Length::Fill))
            .push(nope),
    )
    .width(Length::Fill)
    .padding(Padding {
        top: 120.0,
        left: spacing::XL,
        right: spacing::XL,
        bottom: 0.0,
    })
    .into()
}

/// Full-screen heart pulse shown after a double-tap.
pub fn pulse<'a>() -> Element<'a, Message> {
    Container::new(
        Text::new("♥")
            .size(sizing::PULSE_GLYPH)
            .color(palette::WHITE),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

/// The action sidebar: avatar, like, comments, save, share.
pub fn sidebar<'a>(
    i18n: &I18n,
    item: &'a ReviewItem,
    vote: VoteState,
    is_saved: bool,
) -> Element<'a, Message> {
    let profile = item.author.profile();
    let avatar_glyph = profile
        .username
        .chars()
        .next()
        .unwrap_or('?')
        .to_uppercase()
        .to_string();

    let avatar = button(
        Container::new(Text::new(avatar_glyph).size(typography::TITLE))
            .width(sizing::AVATAR)
            .height(sizing::AVATAR)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .style(styles::button::sidebar_action(None))
    .on_press(Message::AuthorPressed);

    let like_accent = match vote.vote() {
        Vote::Agreed => Some(palette::NOPE_500),
        Vote::None | Vote::Disagreed => None,
    };
    let like = action_button(
        "♥",
        vote.displayed_agree_count(item.agree_count).to_string(),
        like_accent,
        Message::LikePressed,
    );

    let comments = action_button(
        "💬",
        item.comment_count.to_string(),
        None,
        Message::CommentsPressed,
    );

    let save_label = if is_saved {
        i18n.tr("action-saved")
    } else {
        i18n.tr("action-save")
    };
    let save_accent = is_saved.then_some(palette::BRAND_500);
    let save = action_button("🔖", save_label, save_accent, Message::SavePressed);

    let share = action_button("↗", i18n.tr("action-share"), None, Message::SharePressed);

    Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(avatar)
        .push(like)
        .push(comments)
        .push(save)
        .push(share)
        .into()
}

fn action_button<'a>(
    glyph: &'a str,
    label: String,
    accent: Option<Color>,
    message: Message,
) -> Element<'a, Message> {
    let circle = button(
        Container::new(Text::new(glyph).size(typography::TITLE))
            .width(sizing::ACTION_BUTTON)
            .height(sizing::ACTION_BUTTON)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .style(styles::button::sidebar_action(accent))
    .on_press(message);

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(circle)
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .color(palette::WHITE),
        )
        .into()
}

/// The info area: author line, business chip, caption, tags.
pub fn info_area<'a>(i18n: &I18n, item: &'a ReviewItem) -> Element<'a, Message> {
    let profile = item.author.profile();

    let mut author_row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            button(
                Text::new(format!("@{}", profile.username))
                    .size(typography::BODY)
                    .color(palette::WHITE),
            )
            .style(styles::button::ghost)
            .padding(0)
            .on_press(Message::AuthorPressed),
        );

    // Business posts get a verified badge; user reviews get the rating chip.
    match &item.author {
        Author::Business { .. } => {
            author_row = author_row.push(
                Text::new("✔")
                    .size(typography::BODY_SM)
                    .color(palette::INFO_500),
            );
        }
        Author::User { .. } => {
            if let Some(rating) = item.rating {
                author_row = author_row.push(
                    Container::new(
                        Text::new(format!("{rating:.1} ★")).size(typography::CAPTION),
                    )
                    .padding([2.0, 6.0])
                    .style(styles::container::rating_badge),
                );
            }
        }
    }

    let business_chip = button(
        Container::new(
            Text::new(format!("📍 {}", item.business_name)).size(typography::CAPTION),
        )
        .padding([spacing::XS, spacing::SM])
        .style(styles::container::chip),
    )
    .style(styles::button::ghost)
    .padding(0)
    .on_press(Message::BusinessPressed);

    let mut caption_column = Column::new().spacing(spacing::XS).push(
        Text::new(item.caption.as_str())
            .size(typography::BODY_SM)
            .color(palette::WHITE),
    );
    if item.caption_is_truncated(CAPTION_TRUNCATION_CHARS) {
        caption_column = caption_column.push(
            button(Text::new(i18n.tr("caption-see-more")).size(typography::CAPTION))
                .style(styles::button::ghost)
                .padding(0)
                .on_press(Message::ReadMorePressed),
        );
    }

    let mut tags_row = Row::new().spacing(spacing::SM);
    for tag in item.visible_tags(VISIBLE_TAG_CAP) {
        tags_row = tags_row.push(
            button(
                Container::new(Text::new(format!("#{tag}")).size(typography::CAPTION))
                    .padding([2.0, 6.0])
                    .style(styles::container::chip),
            )
            .style(styles::button::ghost)
            .padding(0)
            .on_press(Message::TagPressed(tag.clone())),
        );
    }

    let timestamp = Text::new(item.timestamp_label.as_str())
        .size(typography::CAPTION)
        .color(palette::GRAY_200);

    Column::new()
        .spacing(spacing::SM)
        .push(author_row)
        .push(business_chip)
        .push(caption_column)
        .push(tags_row)
        .push(timestamp)
        .into()
}

/// Skeleton/fallback surface while the media is loading or after a failure.
pub fn media_placeholder<'a>(i18n: &I18n, loading: bool) -> Element<'a, Message> {
    let label = if loading {
        i18n.tr("feed-loading")
    } else {
        // Terminal load failure: a quiet dark surface, no error text; the
        // caption and actions remain fully usable.
        String::new()
    };

    Container::new(
        Text::new(label)
            .size(typography::BODY_SM)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::media_placeholder)
    .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (brand colored).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::BRAND_500)),
            text_color: WHITE,
            border: Border {
                color: palette::BRAND_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::BRAND_400)),
            text_color: WHITE,
            border: Border {
                color: palette::BRAND_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Round sidebar action button over the media (like, comments, save, share).
///
/// `accent` tints the background when the action is engaged (liked, saved);
/// pass `None` for the resting translucent look.
pub fn sidebar_action(accent: Option<Color>) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match (accent, status) {
            (Some(color), _) => color,
            (None, button::Status::Hovered) => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..BLACK
            },
            (None, button::Status::Pressed) => Color {
                a: opacity::OVERLAY_PRESSED,
                ..BLACK
            },
            (None, _) => Color {
                a: opacity::OVERLAY_SUBTLE,
                ..BLACK
            },
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: Color {
                    a: 0.1,
                    ..WHITE
                },
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Flat text-only button used for "see more" and tag chips.
pub fn ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => WHITE,
        _ => Color {
            a: opacity::OVERLAY_STRONG,
            ..WHITE
        },
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

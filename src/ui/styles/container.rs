// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-bleed media backdrop behind each feed card.
pub fn media_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        ..Default::default()
    }
}

/// Placeholder surface shown while media loads or after a load failure.
pub fn media_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        ..Default::default()
    }
}

/// Translucent chip (business tag, hashtags).
pub fn chip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        })),
        border: Border {
            color: Color {
                a: 0.1,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// The rating badge on user reviews (brand colored).
pub fn rating_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BRAND_500)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

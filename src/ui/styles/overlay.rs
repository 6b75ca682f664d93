// SPDX-License-Identifier: MPL-2.0
//! Styles for the gesture-driven overlays (vote stamps, heart pulse).

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Border, Color, Theme};

/// The AGREE stamp frame; opacity is driven continuously by the drag offset.
pub fn agree_stamp(opacity: f32) -> impl Fn(&Theme) -> container::Style {
    stamp(palette::AGREE_500, opacity)
}

/// The NOPE stamp frame.
pub fn nope_stamp(opacity: f32) -> impl Fn(&Theme) -> container::Style {
    stamp(palette::NOPE_500, opacity)
}

fn stamp(color: Color, opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        border: Border {
            color: Color { a: opacity, ..color },
            width: 5.0,
            radius: radius::LG.into(),
        },
        text_color: Some(Color { a: opacity, ..color }),
        ..Default::default()
    }
}

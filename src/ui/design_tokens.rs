// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! # Organization
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii
//!
//! Tokens are designed to be consistent; maintain the ratios when modifying
//! (e.g. `MD = XS * 2`).

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand (warm orange)
    pub const BRAND_400: Color = Color::from_rgb(0.98, 0.62, 0.25);
    pub const BRAND_500: Color = Color::from_rgb(0.95, 0.52, 0.11);
    pub const BRAND_600: Color = Color::from_rgb(0.85, 0.42, 0.05);

    // Vote semantics
    pub const AGREE_500: Color = Color::from_rgb(0.06, 0.73, 0.51); // emerald
    pub const NOPE_500: Color = Color::from_rgb(0.96, 0.25, 0.37); // rose

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Diameter of the avatar bubble in the action sidebar.
    pub const AVATAR: f32 = 44.0;
    /// Diameter of the round action buttons.
    pub const ACTION_BUTTON: f32 = 44.0;
    /// Height of the search bar row at the top of the feed.
    pub const SEARCH_BAR_HEIGHT: f32 = 48.0;
    /// Width reserved for the action sidebar on the right edge.
    pub const SIDEBAR_WIDTH: f32 = 64.0;
    /// Heart glyph size for the double-tap pulse.
    pub const PULSE_GLYPH: f32 = 96.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 11.0;
    pub const BODY_SM: f32 = 13.0;
    pub const BODY: f32 = 15.0;
    pub const TITLE: f32 = 20.0;
    pub const TITLE_LG: f32 = 26.0;
    /// The AGREE/NOPE stamps are intentionally loud.
    pub const STAMP: f32 = 34.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 10.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 999.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 1.0),
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.35,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 2.0),
        blur_radius: 6.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_keeps_ratios() {
        assert_eq!(spacing::SM, spacing::XS * 2.0);
        assert_eq!(spacing::MD, spacing::SM * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn opacity_values_are_normalized() {
        for value in [
            opacity::TRANSPARENT,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
            opacity::OVERLAY_PRESSED,
            opacity::OPAQUE,
        ] {
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn vote_colors_are_distinct() {
        assert_ne!(palette::AGREE_500, palette::NOPE_500);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Shared color helpers for the wallet sheet, stamps and backdrops.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
};
use iced::Color;

/// Fill of the wallet sheet.
pub fn wallet_sheet_color() -> Color {
    palette::COFFEE_500
}

/// Fill of a loyalty card inside the sheet.
pub fn loyalty_card_color() -> Color {
    palette::COFFEE_700
}

/// Dimming layer behind an open wallet sheet at the given backdrop opacity.
pub fn sheet_backdrop_color(backdrop_opacity: f32) -> Color {
    Color {
        a: opacity::SCRIM * backdrop_opacity.clamp(0.0, 1.0),
        ..BLACK
    }
}

/// Dimming layer behind a modal sheet.
pub fn modal_backdrop_color() -> Color {
    Color {
        a: opacity::MODAL_SCRIM,
        ..BLACK
    }
}

/// Handle lines in the sheet header.
pub fn handle_color() -> Color {
    Color {
        a: 0.3,
        ..palette::AMBER_300
    }
}

/// Fill of a stamp slot.
pub fn stamp_color(filled: bool) -> Color {
    if filled {
        palette::AMBER_300
    } else {
        Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::AMBER_300
        }
    }
}

/// Outline of a stamp slot.
pub fn stamp_border_color() -> Color {
    Color {
        a: 0.4,
        ..palette::AMBER_300
    }
}

/// Text on the coffee surfaces.
pub fn on_coffee_text_color() -> Color {
    WHITE
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_scales_with_opacity() {
        assert_eq!(sheet_backdrop_color(0.0).a, 0.0);
        assert!((sheet_backdrop_color(1.0).a - opacity::SCRIM).abs() < f32::EPSILON);
        assert!((sheet_backdrop_color(0.5).a - opacity::SCRIM / 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn backdrop_opacity_is_clamped() {
        assert_eq!(sheet_backdrop_color(3.0).a, sheet_backdrop_color(1.0).a);
        assert_eq!(sheet_backdrop_color(-1.0).a, 0.0);
    }

    #[test]
    fn filled_stamps_are_more_opaque() {
        assert!(stamp_color(true).a > stamp_color(false).a);
    }
}

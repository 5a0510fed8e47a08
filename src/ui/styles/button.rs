// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action on coffee surfaces (modal close, etc.).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::AMBER_300,
        button::Status::Disabled => palette::GRAY_400,
        _ => Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::AMBER_300
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::GRAY_900,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Round translucent button floating over the map (profile, settings).
pub fn icon_button(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let base = if is_light { WHITE } else { palette::GRAY_700 };
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OPAQUE,
        _ => opacity::OVERLAY_HOVER,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..base })),
        text_color: if is_light { palette::GRAY_900 } else { WHITE },
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// White round buttons of the floating menu.
pub fn fab(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::GRAY_100,
        _ => WHITE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: BLACK,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        snap: true,
    }
}

/// Button without chrome, used to make whole cards clickable.
pub fn flat(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fab_is_white_when_idle() {
        let style = fab(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(WHITE)));
    }

    #[test]
    fn icon_button_alpha_changes_on_hover() {
        let theme = Theme::Dark;
        let normal = icon_button(&theme, button::Status::Active);
        let hover = icon_button(&theme, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn icon_button_follows_theme() {
        let light = icon_button(&Theme::Light, button::Status::Active);
        let dark = icon_button(&Theme::Dark, button::Status::Active);
        assert_ne!(light.text_color, dark.text_color);
    }
}

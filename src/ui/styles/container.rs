// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theme;
use iced::border::Radius;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn top_rounded(r: f32) -> Radius {
    Radius {
        top_left: r,
        top_right: r,
        bottom_right: 0.0,
        bottom_left: 0.0,
    }
}

/// Solid fill with no border, e.g. for backdrops.
pub fn fill(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// The wallet sheet: coffee surface with rounded top corners.
pub fn wallet_sheet(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::wallet_sheet_color())),
        text_color: Some(theme::on_coffee_text_color()),
        border: Border {
            radius: top_rounded(radius::LG),
            ..Default::default()
        },
        shadow: shadow::SHEET,
        ..Default::default()
    }
}

/// Modal bottom sheet surface.
pub fn modal_sheet(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_800)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: top_rounded(radius::XL),
            ..Default::default()
        },
        shadow: shadow::SHEET,
        ..Default::default()
    }
}

pub fn loyalty_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::loyalty_card_color())),
        text_color: Some(theme::on_coffee_text_color()),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// One stamp slot on a loyalty card.
pub fn stamp(filled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(theme::stamp_color(filled))),
        border: Border {
            color: theme::stamp_border_color(),
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Drag handle line in the sheet header.
pub fn handle(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::handle_color())),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// White tile behind the QR code.
pub fn qr_tile(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dark pill used for hints drawn over illustrations.
pub fn hint(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

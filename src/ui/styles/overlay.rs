// SPDX-License-Identifier: MPL-2.0
//! Styles for SVG icons drawn over buttons and sheets.

use iced::widget::svg;
use iced::{Color, Theme};

/// Tints a monochrome SVG icon.
pub fn icon(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}

/// Tints an icon with the theme's base text color.
pub fn themed_icon(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.palette().text),
    }
}

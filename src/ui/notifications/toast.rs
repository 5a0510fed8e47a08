// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, container, tooltip, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

fn severity_icon(severity: Severity) -> Svg<'static> {
    match severity {
        Severity::Success => icons::check(),
        Severity::Info => icons::info(),
        Severity::Warning | Severity::Error => icons::warning(),
    }
}

fn message_text(notification: &Notification, i18n: &I18n) -> String {
    if notification.args().is_empty() {
        return i18n.tr(notification.key());
    }
    let args: Vec<(&str, &str)> = notification
        .args()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    i18n.tr_with_args(notification.key(), &args)
}

/// One toast card: `[icon] [message] [dismiss]`.
pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let icon = icons::sized(severity_icon(notification.severity()), sizing::ICON_MD)
        .style(styles::overlay::icon(accent));

    let dismiss = tooltip(
        button(icons::sized(icons::close(), sizing::ICON_SM).style(styles::overlay::themed_icon))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style),
        Text::new(i18n.tr("notification-dismiss")).size(typography::CAPTION),
        tooltip::Position::Bottom,
    );

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(
            Text::new(message_text(notification, i18n))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent))
        .into()
}

/// Visible toasts stacked at the top centre, below the top bar.
pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Option<Element<'a, Message>> {
    if manager.visible_count() == 0 {
        return None;
    }

    let column = manager
        .visible()
        .fold(Column::new().spacing(spacing::XS), |column, n| {
            column.push(view(n, i18n))
        });

    Some(
        Container::new(column)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(iced::Padding {
                top: sizing::ICON_BUTTON + spacing::LG,
                ..iced::Padding::ZERO
            })
            .into(),
    )
}

fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let hover = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };
    let background = match status {
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };
    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_border_uses_accent() {
        let style = toast_container_style(&Theme::Light, palette::WARNING_500);
        assert_eq!(style.border.color, palette::WARNING_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_highlights_on_hover_only() {
        let theme = Theme::Light;
        assert!(dismiss_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }

    #[test]
    fn message_text_interpolates_args() {
        let i18n = I18n::new(Some("en-US".into()), &crate::config::Config::default());
        let n = Notification::info("shop-stamps")
            .with_arg("stamps", "2")
            .with_arg("max", "8");
        assert_eq!(message_text(&n, &i18n), "Stamps: 2 / 8");
    }

    #[test]
    fn empty_manager_renders_nothing() {
        let i18n = I18n::new(Some("en-US".into()), &crate::config::Config::default());
        assert!(view_overlay(&Manager::new(), &i18n).is_none());
    }
}

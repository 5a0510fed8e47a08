// SPDX-License-Identifier: MPL-2.0
//! Top bar of the map screen: profile on the left, settings on the right.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::svg::Svg;
use iced::widget::{button, tooltip, Row, Space, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Profile,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ProfileRequested,
    SettingsRequested,
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Profile => Event::ProfileRequested,
        Message::Settings => Event::SettingsRequested,
    }
}

pub fn view<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    Row::new()
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .push(icon_button(icons::user(), Message::Profile, i18n.tr("top-bar-profile")))
        .push(Space::new().width(Length::Fill))
        .push(icon_button(
            icons::settings(),
            Message::Settings,
            i18n.tr("top-bar-settings"),
        ))
        .into()
}

fn icon_button<'a>(icon: Svg<'static>, message: Message, label: String) -> Element<'a, Message> {
    let button = button(icons::sized(icon, sizing::ICON_MD).style(styles::overlay::themed_icon))
        .width(Length::Fixed(sizing::ICON_BUTTON))
        .height(Length::Fixed(sizing::ICON_BUTTON))
        .padding(spacing::SM)
        .on_press(message)
        .style(styles::button::icon_button);

    tooltip(
        button,
        Text::new(label).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .into()
}

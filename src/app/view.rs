// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Screens are layered stacks: background, chrome, wallet sheet, then the
//! modal and toasts on top.

use super::{Message, Screen};
use crate::domain::loyalty::CoffeeShop;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::notifications::{self, toast};
use crate::ui::{floating_menu, map, modal_sheet, sheet, styles, top_bar};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Stack, Text};
use iced::{Element, Length, Padding, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub window: Size,
    pub shops: &'a [CoffeeShop],
    pub map: &'a map::State,
    pub map_sheet: &'a sheet::State,
    pub wallet_sheet: &'a sheet::State,
    pub menu: &'a floating_menu::State,
    pub modal: &'a modal_sheet::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let sheet_ctx = sheet::ViewContext {
        i18n: ctx.i18n,
        shops: ctx.shops,
        window: ctx.window,
    };

    let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);
    stack = match ctx.screen {
        Screen::Map => stack
            .push(ctx.map.view(ctx.shops).map(Message::Map))
            .push(top_bar::view(ctx.i18n).map(Message::TopBar))
            .push(
                floating_menu::view(
                    ctx.menu,
                    floating_menu::ViewContext {
                        i18n: ctx.i18n,
                        window: ctx.window,
                    },
                )
                .map(Message::Menu),
            )
            .push(ctx.map_sheet.view(sheet_ctx).map(Message::Sheet)),
        Screen::Wallet => stack
            .push(wallet_backdrop(ctx.i18n))
            .push(ctx.wallet_sheet.view(sheet_ctx).map(Message::Sheet)),
    };

    let modal = modal_sheet::view(
        ctx.modal,
        modal_sheet::ViewContext {
            i18n: ctx.i18n,
            shops: ctx.shops,
            window: ctx.window,
        },
    );
    if let Some(modal) = modal {
        stack = stack.push(modal.map(Message::Modal));
    }

    if let Some(toasts) = toast::view_overlay(ctx.notifications, ctx.i18n) {
        stack = stack.push(toasts.map(Message::Notification));
    }

    stack.into()
}

/// Illustration area behind the wallet sheet, with the drag hint.
fn wallet_backdrop<'a>(i18n: &I18n) -> Element<'a, Message> {
    let hint = Container::new(
        Text::new(i18n.tr("wallet-hint")).size(typography::BODY_LG),
    )
    .padding(Padding::from([spacing::XS, spacing::MD]))
    .style(styles::container::hint);

    let content = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("wallet-title")).size(typography::TITLE_LG))
        .push(hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::fill(palette::CREMA_300))
        .into()
}

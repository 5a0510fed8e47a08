// SPDX-License-Identifier: MPL-2.0
//! Rendering of the wallet sheet and its backdrop.

use super::geometry::SheetGeometry;
use super::gesture::Region;
use super::{Message, TapTarget};
use crate::domain::loyalty::{CoffeeShop, LoyaltyCard};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theme;
use iced::alignment::{Horizontal, Vertical};
use iced::mouse::Interaction;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{mouse_area, Column, Container, Row, Scrollable, Space, Stack, Text};
use iced::{Element, Font, Length, Padding, Size};

/// Per-frame inputs of the sheet view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub shops: &'a [CoffeeShop],
    pub window: Size,
}

/// Presentation values resolved from the controller for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub geometry: SheetGeometry,
    /// Clamped position.
    pub position: f32,
    pub width: f32,
    pub horizontal_offset: f32,
    pub backdrop_opacity: f32,
    pub backdrop_interactive: bool,
    pub dragging: bool,
}

impl Frame {
    /// Height of the visible part of the sheet.
    #[must_use]
    pub fn visible_height(&self) -> f32 {
        self.geometry.min_height - self.position
    }

    /// Padding that places the sheet inside a window of the given size.
    #[must_use]
    pub fn placement(&self, window: Size) -> Padding {
        Padding {
            top: (window.height - self.visible_height()).max(0.0),
            right: 0.0,
            bottom: 0.0,
            left: (window.width / 2.0 + self.horizontal_offset).max(0.0),
        }
    }
}

/// Backdrop plus sheet, ready to be pushed on top of a screen.
pub fn view<'a>(frame: Frame, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);
    if let Some(backdrop) = backdrop(&frame) {
        stack = stack.push(backdrop);
    }
    stack.push(sheet(&frame, &ctx)).into()
}

fn backdrop<'a>(frame: &Frame) -> Option<Element<'a, Message>> {
    if frame.backdrop_opacity <= 0.0 {
        return None;
    }

    let layer = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::fill(theme::sheet_backdrop_color(
            frame.backdrop_opacity,
        )));

    // Only hit-testable when resting open
    if frame.backdrop_interactive {
        Some(mouse_area(layer).on_press(Message::BackdropPressed).into())
    } else {
        Some(layer.into())
    }
}

fn sheet<'a>(frame: &Frame, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let grab = if frame.dragging {
        Interaction::Grabbing
    } else {
        Interaction::Grab
    };

    let header = mouse_area(header(ctx.i18n, frame.geometry.min_height))
        .on_press(Message::Pressed(Region::Header, TapTarget::Header))
        .interaction(grab);

    // Spans the whole content area of the open sheet so every press on it
    // lands on the handler below
    let body = Column::new()
        .width(Length::Fill)
        .height(Length::Fixed(-frame.geometry.open_position()))
        .align_x(Horizontal::Center)
        .spacing(spacing::LG)
        .padding(Padding {
            top: spacing::XS,
            ..Padding::ZERO
        })
        .push(cards(ctx))
        .push(qr_section(ctx.i18n));

    // Inside the scrollable: on touch it captures any finger press that
    // reaches it first
    let body = mouse_area(body).on_press(Message::Pressed(Region::Content, TapTarget::Content));

    // Content is revealed from the top as the sheet rises instead of being squeezed
    let content = Scrollable::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Vertical(Scrollbar::hidden()));

    let surface = Container::new(Column::new().push(header).push(content))
        .width(Length::Fixed(frame.width))
        .height(Length::Fixed(frame.visible_height()))
        .clip(true)
        .style(styles::container::wallet_sheet);

    Container::new(surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(frame.placement(ctx.window))
        .into()
}

fn header<'a>(i18n: &I18n, height: f32) -> Element<'a, Message> {
    let line = || {
        Container::new(Space::new())
            .width(Length::Fixed(sizing::HANDLE_WIDTH))
            .height(Length::Fixed(sizing::HANDLE_HEIGHT))
            .style(styles::container::handle)
    };

    let column = Column::new()
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .spacing(spacing::XXS)
        .padding(Padding {
            top: spacing::SM,
            ..Padding::ZERO
        })
        .push(
            Text::new(i18n.tr("wallet-title"))
                .size(typography::BODY_LG)
                .font(Font {
                    weight: iced::font::Weight::Bold,
                    ..Font::DEFAULT
                }),
        )
        .push(Space::new().height(Length::Fixed(spacing::XXS)))
        .push(line())
        .push(line());

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .into()
}

fn cards<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let row = ctx
        .shops
        .iter()
        .fold(Row::new().spacing(spacing::SM), |row, shop| {
            row.push(card(shop, ctx.i18n))
        })
        .padding(Padding {
            left: spacing::MD,
            right: spacing::MD,
            ..Padding::ZERO
        });

    Scrollable::new(row)
        .width(Length::Fill)
        .height(Length::Shrink)
        .direction(Direction::Horizontal(Scrollbar::hidden()))
        .into()
}

fn card<'a>(shop: &'a CoffeeShop, i18n: &I18n) -> Element<'a, Message> {
    let stamps = shop
        .loyalty
        .slots()
        .fold(Row::new().spacing(spacing::XXS), |row, filled| {
            row.push(
                Container::new(Space::new())
                    .width(Length::Fixed(sizing::STAMP))
                    .height(Length::Fixed(sizing::STAMP))
                    .style(styles::container::stamp(filled)),
            )
        })
        .wrap();

    let mut caption = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);
    if shop.loyalty.is_complete() {
        caption = caption.push(
            icons::sized(icons::check(), sizing::ICON_SM)
                .style(styles::overlay::icon(palette::SUCCESS_500)),
        );
    }
    let caption = caption.push(
        Text::new(stamps_caption(&shop.loyalty, i18n))
            .size(typography::CAPTION)
            .color(theme::stamp_border_color()),
    );

    let content = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(shop.name.as_str())
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: iced::font::Weight::Bold,
                    ..Font::DEFAULT
                }),
        )
        .push(Space::new().height(Length::Fill))
        .push(stamps)
        .push(caption);

    let surface = Container::new(content)
        .width(Length::Fixed(sizing::LOYALTY_CARD_WIDTH))
        .height(Length::Fixed(sizing::LOYALTY_CARD_HEIGHT))
        .padding(spacing::MD)
        .style(styles::container::loyalty_card);

    mouse_area(surface)
        .on_press(Message::Pressed(Region::Content, TapTarget::Card(shop.id)))
        .interaction(Interaction::Pointer)
        .into()
}

/// Stamp count, or the reward notice once the card is full.
fn stamps_caption(card: &LoyaltyCard, i18n: &I18n) -> String {
    if card.is_complete() {
        return i18n.tr("loyalty-complete");
    }
    let stamped = card.stamps().to_string();
    let max = card.max_stamps().to_string();
    i18n.tr_with_args(
        "loyalty-stamps",
        &[("stamps", stamped.as_str()), ("max", max.as_str())],
    )
}

fn qr_section<'a>(i18n: &I18n) -> Element<'a, Message> {
    let code = Container::new(
        icons::fill(icons::qr_code()).style(styles::overlay::icon(palette::BLACK)),
    )
    .width(Length::Fixed(sizing::QR_CODE))
    .height(Length::Fixed(sizing::QR_CODE))
    .padding(spacing::MD)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::qr_tile);

    Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::SM)
        .padding(Padding {
            bottom: spacing::LG,
            ..Padding::ZERO
        })
        .push(Text::new(i18n.tr("wallet-qr-title")).size(typography::TITLE_SM))
        .push(code)
        .into()
}

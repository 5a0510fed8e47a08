// SPDX-License-Identifier: MPL-2.0
//! Modal bottom sheet for shop details and "coming soon" features.
//!
//! Slides in over a dimmed backdrop; tapping the backdrop slides it out.

use crate::config::DEFAULT_SPRING_DAMPING;
use crate::domain::loyalty::{self, CoffeeShop, ShopId};
use crate::i18n::fluent::I18n;
use crate::ui::animation::{Spring, SpringConfig};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::floating_menu::Feature;
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{mouse_area, Column, Container, Space, Stack, Text};
use iced::{Element, Font, Length, Padding, Size};
use std::time::Duration;

/// Fraction of the window height covered by the modal.
const HEIGHT_RATIO: f32 = 0.5;

/// What the modal shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    Shop(ShopId),
    Feature(Feature),
}

#[derive(Debug, Clone)]
pub enum Message {
    BackdropPressed,
}

/// Events propagated to the parent screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The modal finished sliding out.
    Closed,
}

#[derive(Debug, Clone)]
pub struct State {
    content: Option<Content>,
    slide: Spring,
    closing: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            content: None,
            slide: Spring::at_rest(slide_spring(), 0.0),
            closing: false,
        }
    }
}

fn slide_spring() -> SpringConfig {
    SpringConfig {
        damping: DEFAULT_SPRING_DAMPING,
        ..SpringConfig::progress()
    }
}

impl State {
    /// Shows `content`, replacing whatever was shown.
    pub fn open(&mut self, content: Content) {
        tracing::debug!(?content, "modal sheet opened");
        self.content = Some(content);
        self.closing = false;
        self.slide.retarget(1.0);
    }

    pub fn close(&mut self) {
        if self.content.is_some() {
            self.closing = true;
            self.slide.retarget(0.0);
        }
    }

    #[must_use]
    pub fn content(&self) -> Option<Content> {
        self.content
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.slide.is_at_rest()
    }

    /// Visible fraction, 0 (hidden) to 1 (fully in).
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.slide.value().clamp(0.0, 1.0)
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::BackdropPressed => {
                self.close();
                Event::None
            }
        }
    }

    /// Advances the slide. Reports [`Event::Closed`] once the modal is out.
    pub fn tick(&mut self, dt: Duration) -> Event {
        let moving = self.slide.step(dt);
        if !moving && self.closing {
            self.closing = false;
            self.content = None;
            return Event::Closed;
        }
        Event::None
    }
}

/// Contextual data needed to render the modal.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub shops: &'a [CoffeeShop],
    pub window: Size,
}

/// Renders the modal, or `None` when nothing is shown.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let content = state.content?;
    let progress = state.progress();

    let (title, subtitle) = match content {
        Content::Shop(id) => match loyalty::find(ctx.shops, id) {
            Some(shop) => {
                let stamps = shop.loyalty.stamps().to_string();
                let max = shop.loyalty.max_stamps().to_string();
                (
                    shop.name.clone(),
                    ctx.i18n.tr_with_args(
                        "shop-stamps",
                        &[("stamps", stamps.as_str()), ("max", max.as_str())],
                    ),
                )
            }
            None => (id.to_string(), String::new()),
        },
        Content::Feature(feature) => (
            ctx.i18n.tr(feature.i18n_key()),
            ctx.i18n.tr("feature-coming-soon"),
        ),
    };

    let mut scrim = theme::modal_backdrop_color();
    scrim.a *= progress;
    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::fill(scrim)),
    )
    .on_press(Message::BackdropPressed);

    let body = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(title)
                .size(typography::TITLE_LG)
                .font(Font {
                    weight: iced::font::Weight::Bold,
                    ..Font::DEFAULT
                }),
        )
        .push(
            Text::new(subtitle)
                .size(typography::TITLE_SM)
                .color(theme::muted_text_color()),
        );

    let height = ctx.window.height * HEIGHT_RATIO;
    let sheet = Container::new(body)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding(spacing::LG)
        .style(styles::container::modal_sheet);

    let placed = Container::new(sheet)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: ctx.window.height - height * progress,
            ..Padding::ZERO
        })
        .clip(true);

    Some(Stack::new().push(backdrop).push(placed).into())
}

// SPDX-License-Identifier: MPL-2.0
//! Floating radial menu.
//!
//! A round main button toggles three satellite buttons that fly out along
//! fixed offsets. A bouncy spring drives a single progress value from 0 to 1
//! and every visual property is interpolated from it.

use crate::i18n::fluent::I18n;
use crate::ui::animation::{interpolate, Spring, SpringConfig};
use crate::ui::design_tokens::{palette, sizing};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::svg::Svg;
use iced::widget::{button, tooltip, Container, Stack, Text};
use iced::{Color, Element, Length, Padding, Point, Radians, Size, Vector};
use std::time::Duration;

/// Placeholder features reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Events,
    Campaigns,
    Tasks,
}

impl Feature {
    pub const ALL: [Feature; 3] = [Feature::Events, Feature::Campaigns, Feature::Tasks];

    /// Offset of the fully extended satellite from the main button centre.
    #[must_use]
    pub fn extended_offset(self) -> Vector {
        match self {
            Feature::Events => Vector::new(-65.0, -20.0),
            Feature::Campaigns => Vector::new(0.0, -80.0),
            Feature::Tasks => Vector::new(65.0, -20.0),
        }
    }

    /// Translation key of the feature title.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Feature::Events => "feature-events",
            Feature::Campaigns => "feature-campaigns",
            Feature::Tasks => "feature-tasks",
        }
    }

    fn icon(self) -> Svg<'static> {
        match self {
            Feature::Events => icons::ticket(),
            Feature::Campaigns => icons::percent(),
            Feature::Tasks => icons::binoculars(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Toggle,
    Select(Feature),
}

/// Events propagated to the parent screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    FeatureSelected(Feature),
}

#[derive(Debug, Clone)]
pub struct State {
    open: bool,
    progress: Spring,
}

impl Default for State {
    fn default() -> Self {
        Self {
            open: false,
            progress: Spring::at_rest(SpringConfig::progress(), 0.0),
        }
    }
}

impl State {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.progress.is_at_rest()
    }

    /// Animation progress; may overshoot 1.0 briefly.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Toggle => {
                self.open = !self.open;
                self.progress.retarget(if self.open { 1.0 } else { 0.0 });
                Event::None
            }
            Message::Select(feature) => {
                if self.satellites_visible() {
                    Event::FeatureSelected(feature)
                } else {
                    Event::None
                }
            }
        }
    }

    pub fn tick(&mut self, dt: Duration) -> bool {
        self.progress.step(dt)
    }

    /// Current offset of a satellite from the main button centre.
    ///
    /// Offsets follow the spring unclamped, so satellites overshoot with it.
    #[must_use]
    pub fn satellite_offset(&self, feature: Feature) -> Vector {
        let target = feature.extended_offset();
        let p = self.progress();
        Vector::new(target.x * p, target.y * p)
    }

    /// Satellites stay invisible during the first half of the animation.
    #[must_use]
    pub fn satellite_opacity(&self) -> f32 {
        interpolate(self.progress(), &[0.0, 0.5, 1.0], &[0.0, 0.0, 1.0])
    }

    #[must_use]
    pub fn satellites_visible(&self) -> bool {
        self.satellite_opacity() > 0.0
    }

    /// Rotation of the main icon, 0 to 45 degrees.
    #[must_use]
    pub fn rotation_degrees(&self) -> f32 {
        interpolate(self.progress(), &[0.0, 1.0], &[0.0, 45.0])
    }
}

/// Contextual data needed to render the menu.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub window: Size,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let center = Point::new(
        ctx.window.width / 2.0,
        ctx.window.height - sizing::FAB_BOTTOM_OFFSET,
    );
    let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);

    if state.satellites_visible() {
        let alpha = state.satellite_opacity();
        for feature in Feature::ALL {
            let offset = state.satellite_offset(feature);
            let icon = icons::sized(feature.icon(), sizing::ICON_MD)
                .style(styles::overlay::icon(Color {
                    a: alpha,
                    ..palette::BLACK
                }));
            let satellite = button(centered(icon))
                .width(Length::Fixed(sizing::FAB_SATELLITE))
                .height(Length::Fixed(sizing::FAB_SATELLITE))
                .on_press(Message::Select(feature))
                .style(move |theme, status| {
                    let mut style = styles::button::fab(theme, status);
                    style.background = style.background.map(|bg| bg.scale_alpha(alpha));
                    style.shadow.color.a *= alpha;
                    style
                });
            let labelled = tooltip(
                satellite,
                Text::new(ctx.i18n.tr(feature.i18n_key())),
                tooltip::Position::Top,
            );
            stack = stack.push(place(labelled, center + offset, sizing::FAB_SATELLITE));
        }
    }

    let icon = icons::sized(icons::coffee_bean(), sizing::ICON_LG)
        .rotation(Radians(state.rotation_degrees().to_radians()))
        .style(styles::overlay::icon(palette::COFFEE_500));
    let main = button(centered(icon))
        .width(Length::Fixed(sizing::FAB_MAIN))
        .height(Length::Fixed(sizing::FAB_MAIN))
        .on_press(Message::Toggle)
        .style(styles::button::fab);

    stack.push(place(main, center, sizing::FAB_MAIN)).into()
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
}

/// Positions a square element of `size` centred on `center`.
fn place<'a>(content: impl Into<Element<'a, Message>>, center: Point, size: f32) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: (center.y - size / 2.0).max(0.0),
            left: (center.x - size / 2.0).max(0.0),
            right: 0.0,
            bottom: 0.0,
        })
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Map screen background: a stylized region with one pin per shop.

pub mod canvas;
pub mod projection;

pub use projection::Region;

use crate::domain::loyalty::{CoffeeShop, ShopId};
use iced::widget::Canvas;
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    PinPressed(ShopId),
}

/// Events propagated to the parent screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ShopSelected(ShopId),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    region: Region,
    selected: Option<ShopId>,
}

impl State {
    #[must_use]
    pub fn selected(&self) -> Option<ShopId> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::PinPressed(id) => {
                self.selected = Some(id);
                Event::ShopSelected(id)
            }
        }
    }

    pub fn view<'a>(&'a self, shops: &'a [CoffeeShop]) -> Element<'a, Message> {
        Canvas::new(canvas::MapCanvas {
            region: self.region,
            shops,
            selected: self.selected,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_press_selects_shop() {
        let mut state = State::default();
        let id = ShopId::new(4);
        assert_eq!(state.update(Message::PinPressed(id)), Event::ShopSelected(id));
        assert_eq!(state.selected(), Some(id));
        state.clear_selection();
        assert_eq!(state.selected(), None);
    }
}

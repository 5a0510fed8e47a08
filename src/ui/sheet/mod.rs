// SPDX-License-Identifier: MPL-2.0
//! Draggable wallet sheet.
//!
//! The sheet rests at one of two detents and follows the pointer while being
//! dragged. This module wires the pieces together in the usual component
//! shape (`State`, `Message`, `Event`):
//!
//! - [`geometry`] - detent positions and presentation values
//! - [`release`] - which detent a released drag settles at
//! - [`controller`] - the position state machine
//! - [`gesture`] - pointer samples to drag phases and taps
//! - [`view`] - backdrop and sheet rendering

pub mod controller;
pub mod geometry;
pub mod gesture;
pub mod release;
pub mod view;

pub use controller::{SheetController, SheetState};
pub use geometry::{Detent, SheetGeometry, CLOSED_POSITION};
pub use gesture::{DragRecognizer, Recognized, Region};
pub use release::{ReleaseHeuristic, ReleaseVariant};
pub use view::ViewContext;

use crate::config::SheetConfig;
use crate::domain::loyalty::ShopId;
use crate::ui::animation::SpringConfig;
use iced::{Element, Point, Size};
use std::time::{Duration, Instant};

/// What a press on the sheet reports if it turns out to be a tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapTarget {
    Header,
    Card(ShopId),
    /// Empty sheet content; taps there do nothing.
    Content,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Press on a sheet region, at the last known pointer position.
    Pressed(Region, TapTarget),
    /// Raw press reported by the window, used to re-anchor a touch press.
    PointerPressed(Point),
    PointerMoved(Point),
    PointerReleased(Point),
    /// Pointer left the window or the touch was cancelled.
    PointerLost,
    BackdropPressed,
}

/// Events propagated to the parent screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// A loyalty card was tapped.
    CardSelected(ShopId),
}

/// Sheet component state.
#[derive(Debug, Clone)]
pub struct State {
    controller: SheetController,
    recognizer: DragRecognizer<TapTarget>,
    config: SheetConfig,
    window: Size,
}

impl State {
    #[must_use]
    pub fn new(
        config: SheetConfig,
        release: ReleaseHeuristic,
        spring: SpringConfig,
        window: Size,
    ) -> Self {
        let geometry = SheetGeometry::for_window(&config, window);
        Self {
            controller: SheetController::new(geometry, release, spring),
            recognizer: DragRecognizer::new(),
            config,
            window,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &SheetController {
        &self.controller
    }

    /// Recomputes the geometry for a new window size.
    pub fn resize(&mut self, window: Size) {
        self.window = window;
        self.controller
            .set_geometry(SheetGeometry::for_window(&self.config, window));
    }

    /// Whether frame ticks should be delivered.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    /// Advances the settle animation. Returns `true` while still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.controller.tick(dt)
    }

    /// Settles closed, e.g. before another sheet opens.
    pub fn close(&mut self) {
        self.recognizer.cancel();
        self.controller.settle_to(Detent::Closed);
    }

    /// Handles a sheet message. `cursor` is the pointer position known to
    /// the application when the message was produced.
    pub fn update(&mut self, message: Message, cursor: Point, now: Instant) -> Event {
        match message {
            Message::Pressed(region, target) => {
                self.recognizer.press(region, target, cursor, now);
                Event::None
            }
            Message::PointerPressed(position) => {
                self.recognizer.anchor(position, now);
                Event::None
            }
            Message::PointerMoved(position) => {
                let recognized = self.recognizer.move_to(position, now);
                self.apply(recognized)
            }
            Message::PointerReleased(position) => {
                let recognized = self.recognizer.release(position, now);
                self.apply(recognized)
            }
            Message::PointerLost => {
                let recognized = self.recognizer.cancel();
                self.apply(recognized)
            }
            Message::BackdropPressed => {
                self.controller.tap_backdrop();
                Event::None
            }
        }
    }

    fn apply(&mut self, recognized: Recognized<TapTarget>) -> Event {
        match recognized {
            Recognized::None => {}
            Recognized::Began { translation_y } => {
                self.controller.drag_begin();
                self.controller.drag_update(translation_y);
            }
            Recognized::Update { translation_y } => self.controller.drag_update(translation_y),
            Recognized::End {
                translation_y,
                velocity_y,
            } => {
                self.controller.drag_end(translation_y, velocity_y);
            }
            Recognized::Tap(TapTarget::Header) => {
                self.controller.tap_header();
            }
            Recognized::Tap(TapTarget::Card(id)) => return Event::CardSelected(id),
            Recognized::Tap(TapTarget::Content) => {}
        }
        Event::None
    }

    /// Presentation values for the current frame.
    #[must_use]
    pub fn frame(&self) -> view::Frame {
        let c = &self.controller;
        view::Frame {
            geometry: *c.geometry(),
            position: c.presentation_position(),
            width: c.width(),
            horizontal_offset: c.horizontal_offset(),
            backdrop_opacity: c.backdrop_opacity(),
            backdrop_interactive: c.backdrop_interactive(),
            dragging: c.is_dragging(),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::view(self.frame(), ctx)
    }
}

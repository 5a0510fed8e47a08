// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer events are listened to globally so a drag keeps tracking once
//! the pointer leaves the sheet, whatever widget ends up under it.

use super::Message;
use crate::config::FRAME_INTERVAL_MS;
use iced::keyboard::{self, key};
use iced::{event, mouse, time, touch, window, Event, Subscription};
use std::time::Duration;

/// Pointer and window events, regardless of capture status.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased(None))
        }
        Event::Mouse(mouse::Event::CursorLeft) => Some(Message::PointerLost),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::PointerPressed(position))
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Message::PointerMoved(position))
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::PointerReleased(Some(position)))
        }
        Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::PointerLost),
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Tab),
            ..
        }) if status == event::Status::Ignored => Some(Message::ToggleScreen),
        _ => None,
    })
}

/// Animation frames, only while something moves.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(Message::Frame)
    } else {
        Subscription::none()
    }
}

/// Toast timer checks, only while toasts are shown.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

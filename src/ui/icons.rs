// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are monochrome SVGs embedded at compile time via `include_bytes!`
//! and tinted at draw time with [`styles::overlay::icon`](super::styles::overlay::icon).
//! Handles are cached using `OnceLock`.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `ticket` not `campaigns`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(user, "user.svg", "User silhouette: head and shoulders.");
define_icon!(settings, "settings.svg", "Gear-like sun: settings.");
define_icon!(coffee_bean, "coffee_bean.svg", "Coffee bean with center seam.");
define_icon!(ticket, "ticket.svg", "Ticket stub with perforation.");
define_icon!(percent, "percent.svg", "Percent sign.");
define_icon!(binoculars, "binoculars.svg", "Pair of binoculars.");
define_icon!(qr_code, "qr_code.svg", "Static QR code pattern.");
define_icon!(close, "close.svg", "Diagonal cross.");
define_icon!(info, "info.svg", "Letter i in a circle.");
define_icon!(check, "check.svg", "Check mark.");
define_icon!(warning, "warning.svg", "Exclamation mark in a triangle.");

/// Creates an icon with a fixed square size.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Creates an icon that fills its container.
pub fn fill(icon: Svg<'static>) -> Svg<'static> {
    icon.width(Length::Fill).height(Length::Fill)
}

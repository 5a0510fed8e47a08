// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Screen;
use crate::domain::loyalty::ShopId;
use crate::ui::{floating_menu, map, modal_sheet, notifications, sheet, top_bar};
use iced::{Point, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded; pointer and window events come from the subscription.
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation frame while something is moving.
    Frame(Instant),
    /// Periodic check of toast timers.
    Tick(Instant),
    Sheet(sheet::Message),
    Menu(floating_menu::Message),
    Map(map::Message),
    TopBar(top_bar::Message),
    Modal(modal_sheet::Message),
    Notification(notifications::Message),
    PointerPressed(Point),
    PointerMoved(Point),
    PointerReleased(Option<Point>),
    PointerLost,
    WindowResized(Size),
    /// Opens the shop detail once the wallet sheet had time to close.
    ShowShop(ShopId),
    /// Switches between the map and wallet screens (Tab key).
    ToggleScreen,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Locale override in BCP-47 form (e.g. `tr`, `en-US`).
    pub lang: Option<String>,
    /// Screen shown at startup; overrides `general.start_screen`.
    pub screen: Option<Screen>,
    /// Config directory override.
    /// Takes precedence over the `COFFEE_WALLET_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the application.
//!
//! Each handler receives the pieces of application state it may touch
//! through [`UpdateContext`] and returns the follow-up task.

use super::{Message, Screen};
use crate::config::SHOP_SHEET_DELAY_MS;
use crate::domain::loyalty::ShopId;
use crate::ui::animation::FrameClock;
use crate::ui::modal_sheet::{self, Content};
use crate::ui::notifications::{self, Notification};
use crate::ui::{floating_menu, map, sheet, top_bar};
use iced::{Point, Size, Task};
use std::time::{Duration, Instant};

/// Mutable application state shared by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub window: &'a mut Size,
    pub cursor: &'a mut Point,
    pub clock: &'a mut FrameClock,
    pub map: &'a mut map::State,
    pub map_sheet: &'a mut sheet::State,
    pub wallet_sheet: &'a mut sheet::State,
    pub menu: &'a mut floating_menu::State,
    pub modal: &'a mut modal_sheet::State,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    /// Sheet of the current screen.
    fn sheet(&mut self) -> &mut sheet::State {
        match *self.screen {
            Screen::Map => &mut *self.map_sheet,
            Screen::Wallet => &mut *self.wallet_sheet,
        }
    }

    fn animating(&self) -> bool {
        self.map_sheet.is_animating()
            || self.wallet_sheet.is_animating()
            || self.menu.is_animating()
            || self.modal.is_animating()
    }
}

pub fn handle_frame(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let dt = ctx.clock.tick(now);
    // The hidden screen's sheet keeps settling so it is at rest when shown
    ctx.map_sheet.tick(dt);
    ctx.wallet_sheet.tick(dt);
    ctx.menu.tick(dt);
    if ctx.modal.tick(dt) == modal_sheet::Event::Closed {
        ctx.map.clear_selection();
    }
    if !ctx.animating() {
        ctx.clock.reset();
    }
    Task::none()
}

pub fn handle_sheet_message(ctx: &mut UpdateContext<'_>, message: sheet::Message) -> Task<Message> {
    let cursor = *ctx.cursor;
    match ctx.sheet().update(message, cursor, Instant::now()) {
        sheet::Event::None => Task::none(),
        sheet::Event::CardSelected(id) => select_shop(ctx, id),
    }
}

pub fn handle_pointer_pressed(ctx: &mut UpdateContext<'_>, position: Point) -> Task<Message> {
    *ctx.cursor = position;
    handle_sheet_message(ctx, sheet::Message::PointerPressed(position))
}

pub fn handle_pointer_moved(ctx: &mut UpdateContext<'_>, position: Point) -> Task<Message> {
    *ctx.cursor = position;
    handle_sheet_message(ctx, sheet::Message::PointerMoved(position))
}

pub fn handle_pointer_released(
    ctx: &mut UpdateContext<'_>,
    position: Option<Point>,
) -> Task<Message> {
    let position = position.unwrap_or(*ctx.cursor);
    *ctx.cursor = position;
    handle_sheet_message(ctx, sheet::Message::PointerReleased(position))
}

pub fn handle_menu_message(
    ctx: &mut UpdateContext<'_>,
    message: floating_menu::Message,
) -> Task<Message> {
    match ctx.menu.update(message) {
        floating_menu::Event::None => {}
        floating_menu::Event::FeatureSelected(feature) => {
            tracing::info!(?feature, "feature selected");
            ctx.modal.open(Content::Feature(feature));
        }
    }
    Task::none()
}

pub fn handle_map_message(ctx: &mut UpdateContext<'_>, message: map::Message) -> Task<Message> {
    match ctx.map.update(message) {
        map::Event::None => Task::none(),
        map::Event::ShopSelected(id) => select_shop(ctx, id),
    }
}

pub fn handle_top_bar_message(
    ctx: &mut UpdateContext<'_>,
    message: top_bar::Message,
) -> Task<Message> {
    let key = match top_bar::update(message) {
        top_bar::Event::ProfileRequested => "notification-profile-coming-soon",
        top_bar::Event::SettingsRequested => "notification-settings-coming-soon",
    };
    ctx.notifications.push(Notification::info(key));
    Task::none()
}

pub fn handle_modal_message(
    ctx: &mut UpdateContext<'_>,
    message: modal_sheet::Message,
) -> Task<Message> {
    if ctx.modal.update(message) == modal_sheet::Event::Closed {
        ctx.map.clear_selection();
    }
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window = size;
    ctx.map_sheet.resize(size);
    ctx.wallet_sheet.resize(size);
    Task::none()
}

pub fn handle_show_shop(ctx: &mut UpdateContext<'_>, id: ShopId) -> Task<Message> {
    ctx.modal.open(Content::Shop(id));
    Task::none()
}

pub fn handle_toggle_screen(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.modal.is_open() {
        return Task::none();
    }
    // Drop any press in flight so it cannot leak into the other screen
    ctx.sheet().update(sheet::Message::PointerLost, Point::ORIGIN, Instant::now());
    *ctx.screen = ctx.screen.toggled();
    tracing::info!(screen = ?*ctx.screen, "screen selected");
    Task::none()
}

/// Closes the wallet sheet, then opens the shop detail once it is out of
/// the way.
fn select_shop(ctx: &mut UpdateContext<'_>, id: ShopId) -> Task<Message> {
    tracing::info!(shop = %id, "shop selected");
    ctx.sheet().close();
    // The timer is created on first poll, inside the runtime
    Task::perform(
        async { tokio::time::sleep(Duration::from_millis(SHOP_SHEET_DELAY_MS)).await },
        move |()| Message::ShowShop(id),
    )
}

// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct owns one wallet sheet per screen, each configured with
//! its own release heuristic, plus the map, the radial menu, the modal sheet
//! and the toast queue. Messages are routed to handlers in [`update`].

mod message;
pub mod paths;
pub mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::domain::loyalty::{self, CoffeeShop};
use crate::i18n::fluent::I18n;
use crate::ui::animation::FrameClock;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::{floating_menu, map, modal_sheet, sheet};
use iced::{window, Element, Point, Size, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 420.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    shops: Vec<CoffeeShop>,
    window: Size,
    /// Last pointer position reported by the window.
    cursor: Point,
    clock: FrameClock,
    map: map::State,
    map_sheet: sheet::State,
    wallet_sheet: sheet::State,
    menu: floating_menu::State,
    modal: modal_sheet::State,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("window", &self.window)
            .field("map_sheet", &self.map_sheet.controller().state())
            .field("wallet_sheet", &self.wallet_sheet.controller().state())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a reusable boot closure; the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default(), I18n::default(), Screen::default())
    }
}

impl App {
    /// Builds the application from an already loaded configuration.
    #[must_use]
    pub fn with_config(config: Config, i18n: I18n, screen: Screen) -> Self {
        let window = Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT);
        let spring = config.spring.sheet_spring();
        let sheet_for = |screen: Screen| {
            sheet::State::new(
                config.sheet.clone(),
                config.release.heuristic_for(screen),
                spring,
                window,
            )
        };

        Self {
            i18n,
            screen,
            theme_mode: config.general.theme_mode,
            shops: loyalty::catalog(),
            window,
            cursor: Point::ORIGIN,
            clock: FrameClock::default(),
            map: map::State::default(),
            map_sheet: sheet_for(Screen::Map),
            wallet_sheet: sheet_for(Screen::Wallet),
            menu: floating_menu::State::default(),
            modal: modal_sheet::State::default(),
            notifications: notifications::Manager::new(),
        }
    }

    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let screen = flags
            .screen
            .or(config.general.start_screen)
            .unwrap_or_default();
        tracing::info!(?screen, locale = %i18n.current_locale(), "starting");

        let mut app = Self::with_config(config, i18n, screen);
        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        (app, Task::none())
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn map_sheet(&self) -> &sheet::State {
        &self.map_sheet
    }

    #[must_use]
    pub fn wallet_sheet(&self) -> &sheet::State {
        &self.wallet_sheet
    }

    #[must_use]
    pub fn modal(&self) -> &modal_sheet::State {
        &self.modal
    }

    #[must_use]
    pub fn menu(&self) -> &floating_menu::State {
        &self.menu
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn is_animating(&self) -> bool {
        self.map_sheet.is_animating()
            || self.wallet_sheet.is_animating()
            || self.menu.is_animating()
            || self.modal.is_animating()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_frame_subscription(self.is_animating()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            window: &mut self.window,
            cursor: &mut self.cursor,
            clock: &mut self.clock,
            map: &mut self.map,
            map_sheet: &mut self.map_sheet,
            wallet_sheet: &mut self.wallet_sheet,
            menu: &mut self.menu,
            modal: &mut self.modal,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Frame(now) => update::handle_frame(&mut ctx, now),
            Message::Tick(now) => {
                ctx.notifications.tick(now);
                Task::none()
            }
            Message::Sheet(sheet_message) => update::handle_sheet_message(&mut ctx, sheet_message),
            Message::Menu(menu_message) => update::handle_menu_message(&mut ctx, menu_message),
            Message::Map(map_message) => update::handle_map_message(&mut ctx, map_message),
            Message::TopBar(bar_message) => update::handle_top_bar_message(&mut ctx, bar_message),
            Message::Modal(modal_message) => update::handle_modal_message(&mut ctx, modal_message),
            Message::Notification(notification_message) => {
                ctx.notifications.update(notification_message);
                Task::none()
            }
            Message::PointerPressed(position) => update::handle_pointer_pressed(&mut ctx, position),
            Message::PointerMoved(position) => update::handle_pointer_moved(&mut ctx, position),
            Message::PointerReleased(position) => {
                update::handle_pointer_released(&mut ctx, position)
            }
            Message::PointerLost => update::handle_sheet_message(&mut ctx, sheet::Message::PointerLost),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::ShowShop(id) => update::handle_show_shop(&mut ctx, id),
            Message::ToggleScreen => update::handle_toggle_screen(&mut ctx),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            window: self.window,
            shops: &self.shops,
            map: &self.map,
            map_sheet: &self.map_sheet,
            wallet_sheet: &self.wallet_sheet,
            menu: &self.menu,
            modal: &self.modal,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::loyalty::ShopId;
    use crate::ui::sheet::{Region, SheetState, TapTarget};
    use crate::ui::{modal_sheet::Content, top_bar};
    use std::time::{Duration, Instant};

    fn app() -> App {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        App::with_config(Config::default(), i18n, Screen::Map)
    }

    fn run_frames(app: &mut App) {
        let start = Instant::now();
        for i in 1..=2_000u64 {
            let _ = app.update(Message::Frame(start + Duration::from_millis(16 * i)));
            if !app.is_animating() {
                return;
            }
        }
        panic!("animations never settled");
    }

    fn tap_header(app: &mut App) {
        let p = Point::new(210.0, 820.0);
        let _ = app.update(Message::PointerMoved(p));
        let _ = app.update(Message::Sheet(sheet::Message::Pressed(
            Region::Header,
            TapTarget::Header,
        )));
        let _ = app.update(Message::PointerReleased(None));
    }

    #[test]
    fn header_tap_opens_the_sheet_of_the_current_screen() {
        let mut app = app();
        tap_header(&mut app);
        run_frames(&mut app);
        assert_eq!(app.map_sheet().controller().state(), SheetState::IdleOpen);
        assert_eq!(app.wallet_sheet().controller().state(), SheetState::IdleClosed);
    }

    #[test]
    fn map_pin_closes_sheet_and_schedules_shop_detail() {
        let mut app = app();
        tap_header(&mut app);
        run_frames(&mut app);

        let id = ShopId::new(3);
        let _ = app.update(Message::Map(map::Message::PinPressed(id)));
        assert!(app.map_sheet().is_animating());
        assert!(!app.modal().is_open(), "detail waits for the sheet to close");

        run_frames(&mut app);
        assert_eq!(app.map_sheet().controller().state(), SheetState::IdleClosed);

        let _ = app.update(Message::ShowShop(id));
        assert_eq!(app.modal().content(), Some(Content::Shop(id)));
    }

    #[test]
    fn feature_selection_opens_placeholder_modal() {
        let mut app = app();
        let _ = app.update(Message::Menu(floating_menu::Message::Toggle));
        run_frames(&mut app);
        let _ = app.update(Message::Menu(floating_menu::Message::Select(
            floating_menu::Feature::Campaigns,
        )));
        assert_eq!(
            app.modal().content(),
            Some(Content::Feature(floating_menu::Feature::Campaigns))
        );
    }

    #[test]
    fn modal_backdrop_closes_and_clears_selection() {
        let mut app = app();
        let id = ShopId::new(1);
        let _ = app.update(Message::Map(map::Message::PinPressed(id)));
        let _ = app.update(Message::ShowShop(id));
        run_frames(&mut app);

        let _ = app.update(Message::Modal(modal_sheet::Message::BackdropPressed));
        run_frames(&mut app);
        assert!(!app.modal().is_open());
        assert_eq!(app.map.selected(), None);
    }

    #[test]
    fn top_bar_buttons_post_info_toasts() {
        let mut app = app();
        let _ = app.update(Message::TopBar(top_bar::Message::Profile));
        let _ = app.update(Message::TopBar(top_bar::Message::Settings));
        assert_eq!(app.notifications().visible_count(), 2);
    }

    #[test]
    fn toggle_screen_switches_sheets() {
        let mut app = app();
        let _ = app.update(Message::ToggleScreen);
        assert_eq!(app.screen(), Screen::Wallet);
        tap_header(&mut app);
        run_frames(&mut app);
        assert_eq!(app.wallet_sheet().controller().state(), SheetState::IdleOpen);
        assert_eq!(app.map_sheet().controller().state(), SheetState::IdleClosed);
    }

    #[test]
    fn resize_reaches_both_sheets() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(600.0, 1000.0)));
        assert_eq!(app.map_sheet().controller().geometry().open_width, 560.0);
        assert_eq!(app.wallet_sheet().controller().geometry().open_width, 560.0);
    }

    #[test]
    fn title_is_localized() {
        assert_eq!(app().title(), "Coffee Wallet");
    }
}

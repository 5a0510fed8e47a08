// SPDX-License-Identifier: MPL-2.0
use coffee_wallet::app::Screen;
use coffee_wallet::config::{self, Config};
use coffee_wallet::domain::loyalty;
use coffee_wallet::i18n::fluent::I18n;
use coffee_wallet::ui::animation::SpringConfig;
use coffee_wallet::ui::sheet::{
    Detent, ReleaseHeuristic, ReleaseVariant, SheetController, SheetGeometry, SheetState,
    CLOSED_POSITION,
};
use std::time::Duration;
use tempfile::tempdir;

const FRAME: Duration = Duration::from_millis(16);

fn geometry() -> SheetGeometry {
    SheetGeometry {
        min_height: 80.0,
        max_height: 580.0,
        open_width: 380.0,
        closed_width: 256.0,
        max_backdrop_opacity: 1.0,
    }
}

fn controller(release: ReleaseHeuristic) -> SheetController {
    SheetController::new(geometry(), release, SpringConfig::sheet())
}

fn settle(c: &mut SheetController) {
    let mut frames = 0;
    while c.tick(FRAME) {
        frames += 1;
        assert!(frames < 10_000, "sheet never settled");
    }
}

#[test]
fn language_follows_config_file() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("tr".to_string());
    config::save_to_path(&config, &path).expect("failed to write config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "tr");
    assert_eq!(i18n.tr("wallet-title"), "Cüzdan");
}

#[test]
fn release_variants_come_from_config() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[release]\nmap = \"midpoint\"\nwallet = \"projected\"\n",
    )
    .expect("failed to write config");

    let config = config::load_from_path(&path).expect("failed to load config");
    assert_eq!(config.release.variant_for(Screen::Map), ReleaseVariant::Midpoint);
    assert_eq!(config.release.variant_for(Screen::Wallet), ReleaseVariant::Projected);
}

#[test]
fn drag_past_midpoint_opens() {
    let mut c = controller(ReleaseHeuristic::MIDPOINT);
    let open = geometry().open_position();
    c.drag_begin();
    c.drag_update(open * 0.3);
    assert_eq!(c.state(), SheetState::Dragging);
    assert_eq!(c.drag_end(open * 0.6, 0.0), Detent::Open);
    settle(&mut c);
    assert_eq!(c.state(), SheetState::IdleOpen);
    assert_eq!(c.position(), open);
    assert!(c.backdrop_interactive());
}

#[test]
fn upward_flick_opens_from_small_drag() {
    let mut c = controller(ReleaseHeuristic::MIDPOINT);
    c.drag_begin();
    assert_eq!(c.drag_end(-10.0, -1500.0), Detent::Open);
    settle(&mut c);
    assert_eq!(c.committed(), Detent::Open);
}

#[test]
fn exact_midpoint_release_closes() {
    let mut c = controller(ReleaseHeuristic::MIDPOINT);
    c.tap_header();
    settle(&mut c);
    let open = geometry().open_position();
    c.drag_begin();
    // Dragging down by half the travel lands exactly on the midpoint
    assert_eq!(c.drag_end(-open / 2.0, 0.0), Detent::Closed);
    settle(&mut c);
    assert_eq!(c.state(), SheetState::IdleClosed);
    assert_eq!(c.position(), CLOSED_POSITION);
}

#[test]
fn backdrop_tap_only_closes_a_resting_open_sheet() {
    let mut c = controller(ReleaseHeuristic::PROJECTED);
    assert!(!c.tap_backdrop());
    c.tap_header();
    settle(&mut c);
    c.drag_begin();
    assert!(!c.tap_backdrop(), "ignored while dragging");
    c.drag_end(0.0, 0.0);
    settle(&mut c);
    assert!(c.tap_backdrop());
    settle(&mut c);
    assert_eq!(c.state(), SheetState::IdleClosed);
}

#[test]
fn interrupting_a_settle_continues_from_drawn_position() {
    let mut c = controller(ReleaseHeuristic::MIDPOINT);
    c.tap_header();
    for _ in 0..5 {
        c.tick(FRAME);
    }
    let drawn = c.position();
    c.drag_begin();
    c.drag_update(0.0);
    assert_eq!(c.position(), drawn);
}

#[test]
fn presentation_stays_within_bounds_while_settling() {
    let mut c = controller(ReleaseHeuristic::PROJECTED);
    let g = geometry();
    c.drag_begin();
    c.drag_end(-200.0, -4000.0);
    while c.tick(FRAME) {
        let width = c.width();
        assert!(width >= g.closed_width && width <= g.open_width);
        assert_eq!(c.horizontal_offset(), -width / 2.0);
        let opacity = c.backdrop_opacity();
        assert!((0.0..=g.max_backdrop_opacity).contains(&opacity));
    }
}

#[test]
fn catalog_shops_have_localized_stamp_labels() {
    let i18n = I18n::new(Some("en-US".into()), &Config::default());
    for shop in loyalty::catalog() {
        let stamps = shop.loyalty.stamps().to_string();
        let max = shop.loyalty.max_stamps().to_string();
        let label = i18n.tr_with_args(
            "shop-stamps",
            &[("stamps", stamps.as_str()), ("max", max.as_str())],
        );
        assert_eq!(label, format!("Stamps: {stamps} / {max}"));
    }
}

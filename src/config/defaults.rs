// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Sheet**: Wallet sheet heights, widths and backdrop
//! - **Release**: Drag-release heuristic presets
//! - **Spring**: Settle animation physics
//! - **Gesture**: Pointer tolerance band and velocity sampling
//! - **Timing**: Frame interval and delayed transitions

// ==========================================================================
// Sheet Defaults
// ==========================================================================

/// Height of the sheet header strip visible when the sheet is closed.
pub const DEFAULT_SHEET_MIN_HEIGHT: f32 = 80.0;

/// Minimum allowed header height.
pub const MIN_SHEET_MIN_HEIGHT: f32 = 48.0;

/// Maximum allowed header height.
pub const MAX_SHEET_MIN_HEIGHT: f32 = 160.0;

/// Fully open sheet height as a fraction of the window height.
pub const DEFAULT_SHEET_MAX_HEIGHT_RATIO: f32 = 0.7;

/// Minimum open height ratio.
pub const MIN_SHEET_MAX_HEIGHT_RATIO: f32 = 0.3;

/// Maximum open height ratio.
pub const MAX_SHEET_MAX_HEIGHT_RATIO: f32 = 0.95;

/// Sheet width when closed (logical pixels).
pub const DEFAULT_CLOSED_SHEET_WIDTH: f32 = 256.0;

/// Minimum closed width.
pub const MIN_CLOSED_SHEET_WIDTH: f32 = 160.0;

/// Maximum closed width.
pub const MAX_CLOSED_SHEET_WIDTH: f32 = 480.0;

/// Horizontal margin left around the sheet when fully open.
pub const DEFAULT_OPEN_WIDTH_MARGIN: f32 = 40.0;

/// Minimum open margin.
pub const MIN_OPEN_WIDTH_MARGIN: f32 = 0.0;

/// Maximum open margin.
pub const MAX_OPEN_WIDTH_MARGIN: f32 = 160.0;

/// Backdrop layer opacity when the sheet is fully open.
pub const DEFAULT_MAX_BACKDROP_OPACITY: f32 = 1.0;

/// Minimum backdrop opacity.
pub const MIN_BACKDROP_OPACITY: f32 = 0.0;

/// Maximum backdrop opacity.
pub const MAX_BACKDROP_OPACITY: f32 = 1.0;

// ==========================================================================
// Release Heuristic Defaults
// ==========================================================================

/// Upward flick cutoff of the plain midpoint variant (px/s).
pub const MIDPOINT_FLICK_VELOCITY: f32 = -1000.0;

/// Upward flick cutoff of the velocity-projected variant (px/s).
pub const PROJECTED_FLICK_VELOCITY: f32 = -500.0;

/// Seconds of release velocity added to the resting point by the projected variant.
pub const PROJECTED_VELOCITY_FACTOR: f32 = 0.2;

/// Most negative flick cutoff accepted from the config file.
pub const MIN_FLICK_VELOCITY: f32 = -5000.0;

/// Least negative flick cutoff accepted from the config file.
pub const MAX_FLICK_VELOCITY: f32 = -100.0;

/// Minimum projection factor (seconds).
pub const MIN_PROJECTION_FACTOR: f32 = 0.0;

/// Maximum projection factor (seconds).
pub const MAX_PROJECTION_FACTOR: f32 = 1.0;

// ==========================================================================
// Spring Defaults
// ==========================================================================

/// Spring stiffness used for sheet settling.
pub const DEFAULT_SPRING_STIFFNESS: f32 = 230.2;

/// Spring damping used for sheet settling.
pub const DEFAULT_SPRING_DAMPING: f32 = 25.0;

/// Damping of the looser spring used by the radial menu.
pub const MENU_SPRING_DAMPING: f32 = 16.0;

/// Spring mass.
pub const DEFAULT_SPRING_MASS: f32 = 1.0;

pub const MIN_SPRING_STIFFNESS: f32 = 10.0;
pub const MAX_SPRING_STIFFNESS: f32 = 1000.0;
pub const MIN_SPRING_DAMPING: f32 = 1.0;
pub const MAX_SPRING_DAMPING: f32 = 200.0;
pub const MIN_SPRING_MASS: f32 = 0.1;
pub const MAX_SPRING_MASS: f32 = 10.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Movement (logical pixels) separating a tap from a drag.
pub const TOUCH_SLOP: f32 = 8.0;

/// Vertical travel needed before a content drag activates.
pub const CONTENT_ACTIVE_OFFSET_Y: f32 = 20.0;

/// Horizontal travel after which a content drag is abandoned to the card list.
pub const CONTENT_FAIL_OFFSET_X: f32 = 25.0;

/// Sample window used for release velocity estimation (milliseconds).
pub const VELOCITY_WINDOW_MS: u64 = 100;

/// Release velocity cap (px/s).
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Animation frame interval (milliseconds).
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Longest frame delta fed to the spring integrator (milliseconds).
pub const MAX_FRAME_DELTA_MS: u64 = 50;

/// Delay between closing the wallet sheet and opening a shop sheet (milliseconds).
pub const SHOP_SHEET_DELAY_MS: u64 = 300;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SHEET_MIN_HEIGHT > 0.0);
    assert!(DEFAULT_SHEET_MIN_HEIGHT >= MIN_SHEET_MIN_HEIGHT);
    assert!(DEFAULT_SHEET_MIN_HEIGHT <= MAX_SHEET_MIN_HEIGHT);

    assert!(MIN_SHEET_MAX_HEIGHT_RATIO > 0.0);
    assert!(MAX_SHEET_MAX_HEIGHT_RATIO <= 1.0);
    assert!(DEFAULT_SHEET_MAX_HEIGHT_RATIO >= MIN_SHEET_MAX_HEIGHT_RATIO);
    assert!(DEFAULT_SHEET_MAX_HEIGHT_RATIO <= MAX_SHEET_MAX_HEIGHT_RATIO);

    assert!(DEFAULT_CLOSED_SHEET_WIDTH >= MIN_CLOSED_SHEET_WIDTH);
    assert!(DEFAULT_CLOSED_SHEET_WIDTH <= MAX_CLOSED_SHEET_WIDTH);
    assert!(DEFAULT_OPEN_WIDTH_MARGIN >= MIN_OPEN_WIDTH_MARGIN);
    assert!(DEFAULT_OPEN_WIDTH_MARGIN <= MAX_OPEN_WIDTH_MARGIN);

    assert!(DEFAULT_MAX_BACKDROP_OPACITY >= MIN_BACKDROP_OPACITY);
    assert!(DEFAULT_MAX_BACKDROP_OPACITY <= MAX_BACKDROP_OPACITY);

    assert!(MIDPOINT_FLICK_VELOCITY < 0.0);
    assert!(PROJECTED_FLICK_VELOCITY < 0.0);
    assert!(MIDPOINT_FLICK_VELOCITY >= MIN_FLICK_VELOCITY);
    assert!(PROJECTED_FLICK_VELOCITY <= MAX_FLICK_VELOCITY);
    assert!(PROJECTED_VELOCITY_FACTOR >= MIN_PROJECTION_FACTOR);
    assert!(PROJECTED_VELOCITY_FACTOR <= MAX_PROJECTION_FACTOR);

    assert!(DEFAULT_SPRING_STIFFNESS >= MIN_SPRING_STIFFNESS);
    assert!(DEFAULT_SPRING_STIFFNESS <= MAX_SPRING_STIFFNESS);
    assert!(DEFAULT_SPRING_DAMPING >= MIN_SPRING_DAMPING);
    assert!(DEFAULT_SPRING_DAMPING <= MAX_SPRING_DAMPING);
    assert!(MENU_SPRING_DAMPING >= MIN_SPRING_DAMPING);
    assert!(DEFAULT_SPRING_MASS >= MIN_SPRING_MASS);
    assert!(DEFAULT_SPRING_MASS <= MAX_SPRING_MASS);

    assert!(TOUCH_SLOP > 0.0);
    assert!(CONTENT_ACTIVE_OFFSET_Y > TOUCH_SLOP);
    assert!(CONTENT_FAIL_OFFSET_X > CONTENT_ACTIVE_OFFSET_Y);
    assert!(MAX_FLING_VELOCITY > 0.0);

    assert!(MAX_FRAME_DELTA_MS > FRAME_INTERVAL_MS);
};

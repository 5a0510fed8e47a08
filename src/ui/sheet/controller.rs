// SPDX-License-Identifier: MPL-2.0
//! Drag sheet controller.
//!
//! Owns the sheet position and the last committed detent. Drag phases,
//! taps and frame ticks are the only mutations; presentation values are
//! read-only accessors derived from the position.

use super::geometry::{Detent, SheetGeometry};
use super::release::ReleaseHeuristic;
use crate::ui::animation::{Spring, SpringConfig};
use std::time::Duration;

/// Observable state of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetState {
    IdleClosed,
    IdleOpen,
    Dragging,
    /// Animating towards the given detent.
    Settling(Detent),
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    Dragging { baseline: f32 },
    Settling { spring: Spring, target: Detent },
}

/// Gesture-driven state machine behind a bottom sheet.
#[derive(Debug, Clone)]
pub struct SheetController {
    geometry: SheetGeometry,
    release: ReleaseHeuristic,
    spring: SpringConfig,
    position: f32,
    committed: Detent,
    phase: Phase,
}

impl SheetController {
    /// Creates a controller resting closed.
    #[must_use]
    pub fn new(geometry: SheetGeometry, release: ReleaseHeuristic, spring: SpringConfig) -> Self {
        Self {
            geometry,
            release,
            spring,
            position: geometry.position_of(Detent::Closed),
            committed: Detent::Closed,
            phase: Phase::Idle,
        }
    }

    #[must_use]
    pub fn geometry(&self) -> &SheetGeometry {
        &self.geometry
    }

    /// Applies new dimensions, e.g. after a window resize.
    ///
    /// An idle sheet jumps to its committed detent in the new geometry and a
    /// settling sheet is retargeted. A drag in progress keeps its baseline.
    pub fn set_geometry(&mut self, geometry: SheetGeometry) {
        self.geometry = geometry;
        match &mut self.phase {
            Phase::Idle => self.position = geometry.position_of(self.committed),
            Phase::Settling { spring, target } => spring.retarget(geometry.position_of(*target)),
            Phase::Dragging { .. } => {}
        }
    }

    /// Raw position, possibly outside the open/closed range during a drag.
    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Position clamped to the open/closed range.
    #[must_use]
    pub fn presentation_position(&self) -> f32 {
        self.geometry.clamp(self.position)
    }

    /// Detent the sheet last came to rest at.
    #[must_use]
    pub fn committed(&self) -> Detent {
        self.committed
    }

    #[must_use]
    pub fn committed_position(&self) -> f32 {
        self.geometry.position_of(self.committed)
    }

    #[must_use]
    pub fn state(&self) -> SheetState {
        match &self.phase {
            Phase::Idle => match self.committed {
                Detent::Closed => SheetState::IdleClosed,
                Detent::Open => SheetState::IdleOpen,
            },
            Phase::Dragging { .. } => SheetState::Dragging,
            Phase::Settling { target, .. } => SheetState::Settling(*target),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Whether frame ticks are needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Settling { .. })
    }

    // ---------------------------------------------------------------------
    // Gesture input
    // ---------------------------------------------------------------------

    /// Starts a drag, rebasing on the current position.
    ///
    /// Interrupting a settle captures the animation's instantaneous value,
    /// so the sheet continues from where it is drawn.
    pub fn drag_begin(&mut self) {
        let baseline = match &self.phase {
            Phase::Idle => self.committed_position(),
            Phase::Dragging { baseline } => *baseline,
            Phase::Settling { spring, .. } => spring.value(),
        };
        self.position = baseline;
        self.phase = Phase::Dragging { baseline };
    }

    /// Tracks the finger; the position is not clamped while dragging.
    ///
    /// An update without a preceding begin starts the drag implicitly.
    pub fn drag_update(&mut self, translation_y: f32) {
        let baseline = self.ensure_dragging();
        self.position = baseline + translation_y;
    }

    /// Releases the drag and starts settling towards the chosen detent.
    pub fn drag_end(&mut self, translation_y: f32, velocity_y: f32) -> Detent {
        let baseline = self.ensure_dragging();
        self.position = baseline + translation_y;

        let target = self.release.decide(
            baseline,
            translation_y,
            velocity_y,
            self.geometry.open_position(),
        );
        tracing::debug!(
            baseline,
            translation_y,
            velocity_y,
            ?target,
            "sheet released"
        );
        self.settle_with_velocity(target, velocity_y);
        target
    }

    /// Toggles between open and closed.
    ///
    /// While settling, the toggle is relative to where the sheet is heading.
    pub fn tap_header(&mut self) -> Detent {
        let current = match &self.phase {
            Phase::Settling { target, .. } => *target,
            Phase::Idle | Phase::Dragging { .. } => self.committed,
        };
        let target = current.toggled();
        self.settle_to(target);
        target
    }

    /// Whether the dimmed backdrop accepts taps: only when resting open.
    #[must_use]
    pub fn backdrop_interactive(&self) -> bool {
        matches!(self.phase, Phase::Idle) && self.committed == Detent::Open
    }

    /// Closes the sheet if the backdrop is hit-testable. Returns whether the
    /// tap was accepted.
    pub fn tap_backdrop(&mut self) -> bool {
        if !self.backdrop_interactive() {
            return false;
        }
        self.settle_to(Detent::Closed);
        true
    }

    /// Animates to `target` from wherever the sheet currently is.
    pub fn settle_to(&mut self, target: Detent) {
        self.settle_with_velocity(target, 0.0);
    }

    /// Advances a running settle animation by `dt`.
    ///
    /// Returns `true` while the animation needs more frames. The committed
    /// detent is updated when the spring comes to rest.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Phase::Settling { spring, target } = &mut self.phase else {
            return false;
        };

        let moving = spring.step(dt);
        self.position = spring.value();
        if moving {
            return true;
        }

        let target = *target;
        self.position = self.geometry.position_of(target);
        self.committed = target;
        self.phase = Phase::Idle;
        tracing::debug!(?target, "sheet settled");
        false
    }

    // ---------------------------------------------------------------------
    // Presentation
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn width(&self) -> f32 {
        self.geometry.width_at(self.position)
    }

    #[must_use]
    pub fn horizontal_offset(&self) -> f32 {
        self.geometry.horizontal_offset_at(self.position)
    }

    #[must_use]
    pub fn backdrop_opacity(&self) -> f32 {
        self.geometry.backdrop_opacity_at(self.position)
    }

    fn ensure_dragging(&mut self) -> f32 {
        if let Phase::Dragging { baseline } = self.phase {
            return baseline;
        }
        self.drag_begin();
        match self.phase {
            Phase::Dragging { baseline } => baseline,
            _ => self.position,
        }
    }

    fn settle_with_velocity(&mut self, target: Detent, velocity: f32) {
        let spring = Spring::new(
            self.spring,
            self.position,
            self.geometry.position_of(target),
            velocity,
        );
        if spring.is_at_rest() {
            self.position = self.geometry.position_of(target);
            self.committed = target;
            self.phase = Phase::Idle;
        } else {
            self.phase = Phase::Settling { spring, target };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn geometry() -> SheetGeometry {
        SheetGeometry {
            min_height: 80.0,
            max_height: 560.0,
            open_width: 360.0,
            closed_width: 256.0,
            max_backdrop_opacity: 1.0,
        }
    }

    fn controller(release: ReleaseHeuristic) -> SheetController {
        SheetController::new(geometry(), release, SpringConfig::sheet())
    }

    fn settle(controller: &mut SheetController) {
        let mut frames = 0;
        while controller.tick(FRAME) {
            frames += 1;
            assert!(frames < 10_000, "settle never finished");
        }
    }

    fn open_controller() -> SheetController {
        let mut c = controller(ReleaseHeuristic::PROJECTED);
        c.tap_header();
        settle(&mut c);
        assert_eq!(c.state(), SheetState::IdleOpen);
        c
    }

    #[test]
    fn starts_idle_closed() {
        let c = controller(ReleaseHeuristic::PROJECTED);
        assert_eq!(c.state(), SheetState::IdleClosed);
        assert_eq!(c.position(), 0.0);
        assert_eq!(c.width(), 256.0);
        assert_eq!(c.backdrop_opacity(), 0.0);
        assert!(!c.backdrop_interactive());
    }

    #[test]
    fn drag_tracks_translation_relative_to_committed_position() {
        let mut c = open_controller();
        c.drag_begin();
        c.drag_update(30.0);
        assert_eq!(c.position(), -450.0);
        assert_eq!(c.state(), SheetState::Dragging);
    }

    #[test]
    fn drag_overshoot_is_unclamped_but_presentation_is_clamped() {
        let mut c = controller(ReleaseHeuristic::MIDPOINT);
        c.drag_begin();
        c.drag_update(-900.0);
        assert_eq!(c.position(), -900.0);
        assert_eq!(c.presentation_position(), -480.0);
        assert_eq!(c.width(), 360.0);
        assert_eq!(c.backdrop_opacity(), 1.0);

        c.drag_update(200.0);
        assert_eq!(c.width(), 256.0);
        assert_eq!(c.horizontal_offset(), -128.0);
    }

    #[test]
    fn header_tap_twice_returns_to_closed() {
        let mut c = controller(ReleaseHeuristic::PROJECTED);
        assert_eq!(c.tap_header(), Detent::Open);
        settle(&mut c);
        assert_eq!(c.tap_header(), Detent::Closed);
        settle(&mut c);
        assert_eq!(c.state(), SheetState::IdleClosed);
        assert_eq!(c.position(), 0.0);
    }

    #[test]
    fn header_tap_during_settle_toggles_relative_to_target() {
        let mut c = controller(ReleaseHeuristic::PROJECTED);
        c.tap_header();
        c.tick(FRAME);
        assert_eq!(c.state(), SheetState::Settling(Detent::Open));
        assert_eq!(c.tap_header(), Detent::Closed);
        settle(&mut c);
        assert_eq!(c.state(), SheetState::IdleClosed);
    }

    #[test]
    fn scenario_drag_past_midpoint_settles_open() {
        let mut c = controller(ReleaseHeuristic::MIDPOINT);
        c.drag_begin();
        c.drag_update(-480.0 * 0.6);
        assert_eq!(c.drag_end(-480.0 * 0.6, 0.0), Detent::Open);
        assert_eq!(c.state(), SheetState::Settling(Detent::Open));
        settle(&mut c);
        assert_eq!(c.state(), SheetState::IdleOpen);
        assert_eq!(c.position(), -480.0);
        assert_eq!(c.committed(), Detent::Open);
    }

    #[test]
    fn scenario_fast_flick_settles_open() {
        let mut c = controller(ReleaseHeuristic::MIDPOINT);
        c.drag_begin();
        c.drag_update(-10.0);
        assert_eq!(c.drag_end(-10.0, -1500.0), Detent::Open);
        settle(&mut c);
        assert_eq!(c.state(), SheetState::IdleOpen);
    }

    #[test]
    fn scenario_small_nudge_from_open_stays_open() {
        let mut c = open_controller();
        c.drag_begin();
        c.drag_update(5.0);
        assert_eq!(c.drag_end(5.0, 0.0), Detent::Open);
        settle(&mut c);
        assert_eq!(c.state(), SheetState::IdleOpen);
    }

    #[test]
    fn scenario_release_at_exact_midpoint_from_open_closes() {
        let mut c = open_controller();
        c.drag_begin();
        assert_eq!(c.drag_end(240.0, 0.0), Detent::Closed);
        settle(&mut c);
        assert_eq!(c.state(), SheetState::IdleClosed);
    }

    #[test]
    fn scenario_backdrop_tap_when_open_closes() {
        let mut c = open_controller();
        assert!(c.backdrop_interactive());
        assert!(c.tap_backdrop());
        settle(&mut c);
        assert_eq!(c.state(), SheetState::IdleClosed);
    }

    #[test]
    fn scenario_backdrop_tap_mid_drag_is_ignored() {
        let mut c = open_controller();
        c.drag_begin();
        c.drag_update(100.0);
        assert!(!c.backdrop_interactive());
        assert!(!c.tap_backdrop());
        assert_eq!(c.state(), SheetState::Dragging);
        assert_eq!(c.position(), -380.0);
    }

    #[test]
    fn backdrop_is_not_interactive_while_settling_open() {
        let mut c = controller(ReleaseHeuristic::PROJECTED);
        c.tap_header();
        c.tick(FRAME);
        assert!(!c.backdrop_interactive());
        assert!(!c.tap_backdrop());
    }

    #[test]
    fn drag_begin_during_settle_rebases_on_instantaneous_value() {
        let mut c = controller(ReleaseHeuristic::PROJECTED);
        c.tap_header();
        for _ in 0..5 {
            c.tick(FRAME);
        }
        let drawn = c.position();
        assert!(drawn < 0.0 && drawn > -480.0);

        c.drag_begin();
        assert_eq!(c.position(), drawn, "no jump on interrupt");
        c.drag_update(0.0);
        assert_eq!(c.position(), drawn);
        c.drag_update(-10.0);
        assert_eq!(c.position(), drawn - 10.0);
        // The interrupted settle never committed
        assert_eq!(c.committed(), Detent::Closed);
    }

    #[test]
    fn update_without_begin_starts_drag() {
        let mut c = controller(ReleaseHeuristic::PROJECTED);
        c.drag_update(-50.0);
        assert_eq!(c.state(), SheetState::Dragging);
        assert_eq!(c.position(), -50.0);
    }

    #[test]
    fn end_without_begin_still_settles() {
        let mut c = controller(ReleaseHeuristic::MIDPOINT);
        assert_eq!(c.drag_end(-400.0, 0.0), Detent::Open);
        settle(&mut c);
        assert_eq!(c.state(), SheetState::IdleOpen);
    }

    #[test]
    fn tick_is_noop_when_idle() {
        let mut c = controller(ReleaseHeuristic::PROJECTED);
        assert!(!c.tick(FRAME));
        assert_eq!(c.state(), SheetState::IdleClosed);
    }

    #[test]
    fn settle_to_current_detent_is_immediate() {
        let mut c = controller(ReleaseHeuristic::PROJECTED);
        c.settle_to(Detent::Closed);
        assert_eq!(c.state(), SheetState::IdleClosed);
        assert!(!c.is_animating());
    }

    #[test]
    fn resize_moves_idle_open_sheet_to_new_open_position() {
        let mut c = open_controller();
        c.set_geometry(SheetGeometry {
            max_height: 700.0,
            ..geometry()
        });
        assert_eq!(c.position(), -620.0);
        assert_eq!(c.state(), SheetState::IdleOpen);
    }

    #[test]
    fn resize_retargets_running_settle() {
        let mut c = controller(ReleaseHeuristic::PROJECTED);
        c.tap_header();
        c.tick(FRAME);
        c.set_geometry(SheetGeometry {
            max_height: 700.0,
            ..geometry()
        });
        settle(&mut c);
        assert_eq!(c.position(), -620.0);
    }

    #[test]
    fn presentation_invariants_hold_through_a_settle() {
        let mut c = controller(ReleaseHeuristic::PROJECTED);
        c.drag_begin();
        c.drag_end(-30.0, -6000.0);
        while c.tick(FRAME) {
            let width = c.width();
            assert!((256.0..=360.0).contains(&width));
            assert!((0.0..=1.0).contains(&c.backdrop_opacity()));
            assert_eq!(c.horizontal_offset(), -width / 2.0);
        }
    }
}

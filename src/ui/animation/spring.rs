// SPDX-License-Identifier: MPL-2.0
//! Damped spring used for settle animations.
//!
//! The spring is integrated with semi-implicit Euler in fixed sub-steps so a
//! long frame (window drag, debugger pause) cannot make it explode.

use crate::config::{
    DEFAULT_SPRING_DAMPING, DEFAULT_SPRING_MASS, DEFAULT_SPRING_STIFFNESS, MAX_FRAME_DELTA_MS,
    MENU_SPRING_DAMPING,
};
use std::time::Duration;

/// Largest integration sub-step (seconds).
const MAX_SUBSTEP_SECS: f32 = 1.0 / 240.0;

/// Physical parameters of a spring plus its rest thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance to target below which the spring may come to rest.
    pub rest_displacement: f32,
    /// Speed below which the spring may come to rest.
    pub rest_velocity: f32,
}

impl SpringConfig {
    /// Spring for pixel-valued animations such as the wallet sheet.
    #[must_use]
    pub fn sheet() -> Self {
        Self {
            stiffness: DEFAULT_SPRING_STIFFNESS,
            damping: DEFAULT_SPRING_DAMPING,
            mass: DEFAULT_SPRING_MASS,
            rest_displacement: 0.5,
            rest_velocity: 10.0,
        }
    }

    /// Bouncier spring for unit progress values (0 to 1).
    #[must_use]
    pub fn progress() -> Self {
        Self {
            stiffness: DEFAULT_SPRING_STIFFNESS,
            damping: MENU_SPRING_DAMPING,
            mass: DEFAULT_SPRING_MASS,
            rest_displacement: 0.001,
            rest_velocity: 0.01,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::sheet()
    }
}

/// A spring moving `value` towards `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    at_rest: bool,
}

impl Spring {
    /// Starts a spring at `from` with an initial `velocity` (units per second).
    #[must_use]
    pub fn new(config: SpringConfig, from: f32, target: f32, velocity: f32) -> Self {
        let mut spring = Self {
            config,
            value: from,
            velocity,
            target,
            at_rest: false,
        };
        spring.at_rest = spring.within_rest_thresholds();
        if spring.at_rest {
            spring.value = target;
            spring.velocity = 0.0;
        }
        spring
    }

    /// A spring already resting at `value`.
    #[must_use]
    pub fn at_rest(config: SpringConfig, value: f32) -> Self {
        Self::new(config, value, value, 0.0)
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Moves the target while keeping the current value and velocity.
    pub fn retarget(&mut self, target: f32) {
        if (target - self.target).abs() > f32::EPSILON {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Advances the simulation by `dt`. Returns `true` while still moving.
    pub fn step(&mut self, dt: Duration) -> bool {
        if self.at_rest {
            return false;
        }

        let max_dt = Duration::from_millis(MAX_FRAME_DELTA_MS).as_secs_f32();
        let mut remaining = dt.as_secs_f32().min(max_dt);
        let mass = self.config.mass.max(f32::EPSILON);

        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP_SECS);
            let spring_force = (self.target - self.value) * self.config.stiffness;
            let damping_force = -self.velocity * self.config.damping;
            self.velocity += (spring_force + damping_force) / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if self.within_rest_thresholds() {
            self.value = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }

        !self.at_rest
    }

    fn within_rest_thresholds(&self) -> bool {
        (self.target - self.value).abs() < self.config.rest_displacement
            && self.velocity.abs() < self.config.rest_velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run_to_rest(spring: &mut Spring) -> usize {
        let mut frames = 0;
        while spring.step(FRAME) {
            frames += 1;
            assert!(frames < 10_000, "spring never settled");
        }
        frames
    }

    #[test]
    fn spring_settles_exactly_on_target() {
        let mut spring = Spring::new(SpringConfig::sheet(), 0.0, -400.0, 0.0);
        let frames = run_to_rest(&mut spring);
        assert!(frames > 1);
        assert_eq!(spring.value(), -400.0);
        assert_eq!(spring.velocity, 0.0);
        assert!(spring.is_at_rest());
    }

    #[test]
    fn spring_moves_towards_target_on_first_frame() {
        let mut spring = Spring::new(SpringConfig::sheet(), 0.0, -400.0, 0.0);
        spring.step(FRAME);
        assert!(spring.value() < 0.0);
        assert!(spring.value() > -400.0);
    }

    #[test]
    fn spring_starting_on_target_is_at_rest() {
        let spring = Spring::at_rest(SpringConfig::sheet(), 12.0);
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 12.0);
    }

    #[test]
    fn huge_frame_delta_stays_finite() {
        let mut spring = Spring::new(SpringConfig::sheet(), 0.0, -400.0, -8000.0);
        spring.step(Duration::from_secs(10));
        assert!(spring.value().is_finite());
        assert!(spring.velocity.is_finite());
    }

    #[test]
    fn retarget_wakes_a_resting_spring() {
        let mut spring = Spring::at_rest(SpringConfig::progress(), 0.0);
        spring.retarget(1.0);
        assert!(!spring.is_at_rest());
        run_to_rest(&mut spring);
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn progress_spring_overshoots_with_low_damping() {
        let mut spring = Spring::new(SpringConfig::progress(), 0.0, 1.0, 0.0);
        let mut peak: f32 = 0.0;
        while spring.step(FRAME) {
            peak = peak.max(spring.value());
        }
        assert!(peak > 1.0, "underdamped spring should overshoot, peak {peak}");
    }
}

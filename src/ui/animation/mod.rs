// SPDX-License-Identifier: MPL-2.0
//! Animation primitives shared by the wallet sheet and the radial menu.
//!
//! - [`spring`] - damped spring integrator for settle animations
//! - [`interpolate`] - clamped piecewise-linear mapping of animated values
//! - [`FrameClock`] - converts frame timestamps into deltas

pub mod interpolate;
pub mod spring;

pub use interpolate::{interpolate, lerp};
pub use spring::{Spring, SpringConfig};

use crate::config::FRAME_INTERVAL_MS;
use std::time::{Duration, Instant};

/// Turns the timestamps of consecutive frame ticks into frame deltas.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    /// Returns the time elapsed since the previous tick.
    ///
    /// The first tick after a [`reset`](Self::reset) reports one nominal
    /// frame interval.
    pub fn tick(&mut self, now: Instant) -> Duration {
        let dt = self
            .last
            .map_or(Duration::from_millis(FRAME_INTERVAL_MS), |last| {
                now.saturating_duration_since(last)
            });
        self.last = Some(now);
        dt
    }

    /// Forgets the previous tick, typically when animations go idle.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

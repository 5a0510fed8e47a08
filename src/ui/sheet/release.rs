// SPDX-License-Identifier: MPL-2.0
//! Drag-release heuristic: decides where a released sheet settles.

use super::geometry::Detent;
use crate::config::{
    MIDPOINT_FLICK_VELOCITY, PROJECTED_FLICK_VELOCITY, PROJECTED_VELOCITY_FACTOR,
};
use serde::{Deserialize, Serialize};

/// Named presets of the release heuristic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseVariant {
    /// Compare the release point with the midpoint; flick cutoff -1000 px/s.
    Midpoint,
    /// Project the release point along the velocity first; flick cutoff -500 px/s.
    #[default]
    Projected,
}

/// Release rule parameters.
///
/// 1. A release velocity below `flick_velocity` (a fast upward flick) opens.
/// 2. Otherwise the resting point `baseline + translation` is extended by
///    `projection_factor * velocity` and opens only when strictly past the
///    midpoint towards open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseHeuristic {
    /// Upward velocity cutoff (px/s, negative).
    pub flick_velocity: f32,
    /// Seconds of velocity added to the resting point.
    pub projection_factor: f32,
}

impl ReleaseHeuristic {
    pub const MIDPOINT: Self = Self {
        flick_velocity: MIDPOINT_FLICK_VELOCITY,
        projection_factor: 0.0,
    };

    pub const PROJECTED: Self = Self {
        flick_velocity: PROJECTED_FLICK_VELOCITY,
        projection_factor: PROJECTED_VELOCITY_FACTOR,
    };

    #[must_use]
    pub fn from_variant(variant: ReleaseVariant) -> Self {
        match variant {
            ReleaseVariant::Midpoint => Self::MIDPOINT,
            ReleaseVariant::Projected => Self::PROJECTED,
        }
    }

    /// Where the sheet would come to rest if released now.
    #[must_use]
    pub fn projected_position(&self, baseline: f32, translation_y: f32, velocity_y: f32) -> f32 {
        baseline + translation_y + self.projection_factor * velocity_y
    }

    /// Chooses the detent for a drag released at `baseline + translation_y`.
    #[must_use]
    pub fn decide(
        &self,
        baseline: f32,
        translation_y: f32,
        velocity_y: f32,
        open_position: f32,
    ) -> Detent {
        if velocity_y < self.flick_velocity {
            return Detent::Open;
        }

        let projected = self.projected_position(baseline, translation_y, velocity_y);
        if projected < open_position / 2.0 {
            Detent::Open
        } else {
            Detent::Closed
        }
    }
}

impl Default for ReleaseHeuristic {
    fn default() -> Self {
        Self::from_variant(ReleaseVariant::default())
    }
}

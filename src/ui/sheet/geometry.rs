// SPDX-License-Identifier: MPL-2.0
//! Sheet geometry and the presentation values derived from a position.
//!
//! Positions are vertical offsets from the closed resting place: `0.0` is
//! closed, [`SheetGeometry::open_position`] (negative) is fully open. Every
//! derived value clamps the position first, so drag overshoot never leaks
//! out of the output ranges.

use crate::config::SheetConfig;
use crate::ui::animation::interpolate;
use iced::Size;

/// Position of the closed sheet.
pub const CLOSED_POSITION: f32 = 0.0;

/// The two stable states of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Detent {
    #[default]
    Closed,
    Open,
}

impl Detent {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Detent::Closed => Detent::Open,
            Detent::Open => Detent::Closed,
        }
    }
}

/// Dimensions of a sheet for one window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    /// Height visible when closed (the header strip).
    pub min_height: f32,
    /// Height visible when fully open.
    pub max_height: f32,
    pub open_width: f32,
    pub closed_width: f32,
    pub max_backdrop_opacity: f32,
}

impl SheetGeometry {
    /// Derives the geometry for a window from the sheet configuration.
    ///
    /// The open width never drops below the closed width and the open
    /// height never drops below the header height, whatever the window size.
    #[must_use]
    pub fn for_window(config: &SheetConfig, window: Size) -> Self {
        let min_height = config.min_height();
        let closed_width = config.closed_width();
        Self {
            min_height,
            max_height: (window.height * config.max_height_ratio()).max(min_height),
            open_width: (window.width - config.open_width_margin()).max(closed_width),
            closed_width,
            max_backdrop_opacity: config.max_backdrop_opacity(),
        }
    }

    /// Offset of the fully open sheet: `-(max_height - min_height)`.
    #[must_use]
    pub fn open_position(&self) -> f32 {
        -(self.max_height - self.min_height).max(0.0)
    }

    /// Halfway point between open and closed.
    #[must_use]
    pub fn midpoint(&self) -> f32 {
        (self.open_position() + CLOSED_POSITION) / 2.0
    }

    #[must_use]
    pub fn position_of(&self, detent: Detent) -> f32 {
        match detent {
            Detent::Open => self.open_position(),
            Detent::Closed => CLOSED_POSITION,
        }
    }

    /// Clamps `position` into `[open_position, CLOSED_POSITION]`.
    #[must_use]
    pub fn clamp(&self, position: f32) -> f32 {
        if position.is_nan() {
            return CLOSED_POSITION;
        }
        position.clamp(self.open_position(), CLOSED_POSITION)
    }

    /// Sheet width at `position`.
    #[must_use]
    pub fn width_at(&self, position: f32) -> f32 {
        self.map(position, self.open_width, self.closed_width)
    }

    /// Horizontal offset from the centre line that keeps the sheet centred.
    #[must_use]
    pub fn horizontal_offset_at(&self, position: f32) -> f32 {
        -self.width_at(position) / 2.0
    }

    /// Backdrop opacity at `position`.
    #[must_use]
    pub fn backdrop_opacity_at(&self, position: f32) -> f32 {
        self.map(position, self.max_backdrop_opacity, 0.0)
    }

    fn map(&self, position: f32, at_open: f32, at_closed: f32) -> f32 {
        let open = self.open_position();
        if open >= CLOSED_POSITION {
            return at_closed;
        }
        interpolate(
            self.clamp(position),
            &[open, CLOSED_POSITION],
            &[at_open, at_closed],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> SheetGeometry {
        SheetGeometry {
            min_height: 80.0,
            max_height: 560.0,
            open_width: 360.0,
            closed_width: 256.0,
            max_backdrop_opacity: 1.0,
        }
    }

    #[test]
    fn open_position_is_negative_travel() {
        assert_eq!(geometry().open_position(), -480.0);
        assert_eq!(geometry().midpoint(), -240.0);
    }

    #[test]
    fn endpoints_match_configured_values() {
        let g = geometry();
        assert_eq!(g.width_at(CLOSED_POSITION), 256.0);
        assert_eq!(g.width_at(g.open_position()), 360.0);
        assert_eq!(g.backdrop_opacity_at(CLOSED_POSITION), 0.0);
        assert_eq!(g.backdrop_opacity_at(g.open_position()), 1.0);
    }

    #[test]
    fn derived_values_stay_in_range_for_every_position() {
        let g = geometry();
        let mut p = g.open_position() - 300.0;
        while p <= 300.0 {
            let width = g.width_at(p);
            let opacity = g.backdrop_opacity_at(p);
            assert!((g.closed_width..=g.open_width).contains(&width), "width {width} at {p}");
            assert!((0.0..=g.max_backdrop_opacity).contains(&opacity), "opacity {opacity} at {p}");
            assert_eq!(g.horizontal_offset_at(p), -width / 2.0);
            p += 7.5;
        }
    }

    #[test]
    fn midpoint_is_halfway_between_widths() {
        let g = geometry();
        assert!((g.width_at(g.midpoint()) - 308.0).abs() < 1e-3);
        assert!((g.backdrop_opacity_at(g.midpoint()) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn degenerate_geometry_reports_closed_values() {
        let g = SheetGeometry {
            max_height: 80.0,
            ..geometry()
        };
        assert_eq!(g.open_position(), 0.0);
        assert_eq!(g.width_at(0.0), 256.0);
        assert_eq!(g.backdrop_opacity_at(-50.0), 0.0);
    }

    #[test]
    fn for_window_keeps_open_width_at_least_closed_width() {
        let g = SheetGeometry::for_window(&SheetConfig::default(), Size::new(200.0, 700.0));
        assert!(g.open_width >= g.closed_width);
        assert!((g.max_height - 490.0).abs() < 1e-3);
    }

    #[test]
    fn clamp_handles_nan() {
        assert_eq!(geometry().clamp(f32::NAN), CLOSED_POSITION);
    }

    #[test]
    fn detent_toggles() {
        assert_eq!(Detent::Closed.toggled(), Detent::Open);
        assert_eq!(Detent::Open.toggled(), Detent::Closed);
    }
}

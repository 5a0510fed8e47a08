// SPDX-License-Identifier: MPL-2.0
//! Equirectangular projection of the visible map region onto the canvas.

use crate::domain::loyalty::Coordinate;
use iced::{Point, Size};

/// Latitude of the initial region centre.
pub const CENTER_LATITUDE: f64 = 39.905;
/// Longitude of the initial region centre.
pub const CENTER_LONGITUDE: f64 = 32.83;
/// Degrees of latitude covered by the shorter canvas side.
pub const SPAN_DEGREES: f64 = 0.06;

/// Visible map region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub center: Coordinate,
    pub span: f64,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            center: Coordinate::new(CENTER_LATITUDE, CENTER_LONGITUDE),
            span: SPAN_DEGREES,
        }
    }
}

impl Region {
    /// Pixels per degree of latitude for a canvas of `size`.
    fn scale(&self, size: Size) -> f64 {
        f64::from(size.width.min(size.height)) / self.span
    }

    /// Canvas position of `coordinate`.
    ///
    /// Longitude is shrunk by the cosine of the centre latitude so that
    /// distances look right near the centre.
    #[must_use]
    pub fn project(&self, coordinate: Coordinate, size: Size) -> Point {
        let scale = self.scale(size);
        let shrink = self.center.latitude().to_radians().cos();
        let dx = (coordinate.longitude() - self.center.longitude()) * shrink * scale;
        let dy = (coordinate.latitude() - self.center.latitude()) * scale;
        Point::new(
            size.width / 2.0 + dx as f32,
            size.height / 2.0 - dy as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size::new(400.0, 800.0);

    #[test]
    fn centre_projects_to_canvas_centre() {
        let region = Region::default();
        let p = region.project(region.center, SIZE);
        assert_eq!(p, Point::new(200.0, 400.0));
    }

    #[test]
    fn north_is_up_and_east_is_right() {
        let region = Region::default();
        let north_east = Coordinate::new(CENTER_LATITUDE + 0.01, CENTER_LONGITUDE + 0.01);
        let p = region.project(north_east, SIZE);
        assert!(p.x > 200.0);
        assert!(p.y < 400.0);
    }

    #[test]
    fn span_fits_shorter_side() {
        let region = Region::default();
        let top = Coordinate::new(CENTER_LATITUDE + SPAN_DEGREES / 2.0, CENTER_LONGITUDE);
        let p = region.project(top, Size::new(800.0, 400.0));
        assert!(p.y.abs() < 1e-3);
    }
}

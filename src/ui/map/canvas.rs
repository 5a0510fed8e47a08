// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the stylized map and shop pins.

use super::projection::Region;
use super::Message;
use crate::domain::loyalty::{CoffeeShop, Coordinate, ShopId};
use crate::ui::design_tokens::{palette, sizing, typography};
use iced::widget::canvas::{self, path, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, touch, Event, Pixels, Point, Rectangle, Renderer, Size, Theme};

/// Major roads as coordinate polylines.
const ROADS: &[&[(f64, f64)]] = &[
    &[(39.935, 32.80), (39.918, 32.822), (39.905, 32.835), (39.878, 32.86)],
    &[(39.92, 32.78), (39.912, 32.81), (39.906, 32.85), (39.90, 32.89)],
    &[(39.94, 32.855), (39.915, 32.853), (39.89, 32.85), (39.87, 32.845)],
    &[(39.89, 32.79), (39.895, 32.82), (39.898, 32.86)],
];

/// River crossing the region.
const RIVER: &[(f64, f64)] = &[
    (39.94, 32.77),
    (39.925, 32.80),
    (39.93, 32.83),
    (39.922, 32.87),
    (39.93, 32.90),
];

/// Park bounds as (north-west, south-east) corners.
const PARKS: &[((f64, f64), (f64, f64))] = &[
    ((39.912, 32.835), (39.905, 32.846)),
    ((39.888, 32.815), (39.882, 32.83)),
];

/// Returns the shop whose pin is closest to `point` within the hit radius.
#[must_use]
pub fn pin_at(shops: &[CoffeeShop], region: &Region, size: Size, point: Point) -> Option<ShopId> {
    shops
        .iter()
        .map(|shop| (shop.id, region.project(shop.coordinate, size).distance(point)))
        .filter(|(_, distance)| *distance <= sizing::PIN_HIT_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

pub struct MapCanvas<'a> {
    pub region: Region,
    pub shops: &'a [CoffeeShop],
    pub selected: Option<ShopId>,
}

impl MapCanvas<'_> {
    fn press_at(&self, point: Point, bounds: Rectangle) -> Option<Action<Message>> {
        let id = pin_at(self.shops, &self.region, bounds.size(), point)?;
        Some(Action::publish(Message::PinPressed(id)).and_capture())
    }

    fn polyline(&self, points: &[(f64, f64)], size: Size) -> Path {
        let mut builder = path::Builder::new();
        for (i, (lat, lon)) in points.iter().enumerate() {
            let p = self.region.project(Coordinate::new(*lat, *lon), size);
            if i == 0 {
                builder.move_to(p);
            } else {
                builder.line_to(p);
            }
        }
        builder.build()
    }

    fn draw_background(&self, frame: &mut Frame, size: Size) {
        frame.fill_rectangle(Point::ORIGIN, size, palette::MAP_LAND);

        for (north_west, south_east) in PARKS {
            let a = self
                .region
                .project(Coordinate::new(north_west.0, north_west.1), size);
            let b = self
                .region
                .project(Coordinate::new(south_east.0, south_east.1), size);
            frame.fill(
                &Path::rounded_rectangle(a, Size::new(b.x - a.x, b.y - a.y), 6.0_f32.into()),
                palette::MAP_PARK,
            );
        }

        frame.stroke(
            &self.polyline(RIVER, size),
            Stroke::default()
                .with_width(14.0)
                .with_color(palette::MAP_WATER)
                .with_line_cap(canvas::LineCap::Round)
                .with_line_join(canvas::LineJoin::Round),
        );

        for road in ROADS {
            frame.stroke(
                &self.polyline(road, size),
                Stroke::default()
                    .with_width(6.0)
                    .with_color(palette::MAP_ROAD)
                    .with_line_cap(canvas::LineCap::Round)
                    .with_line_join(canvas::LineJoin::Round),
            );
        }
    }

    fn draw_pin(&self, frame: &mut Frame, shop: &CoffeeShop, size: Size) {
        let center = self.region.project(shop.coordinate, size);
        let selected = self.selected == Some(shop.id);
        let radius = if selected {
            sizing::PIN_RADIUS * 1.3
        } else {
            sizing::PIN_RADIUS
        };
        let fill = if selected {
            palette::CREMA_300
        } else {
            palette::COFFEE_500
        };

        let pin = Path::circle(center, radius);
        frame.fill(&pin, fill);
        frame.stroke(
            &pin,
            Stroke::default().with_width(3.0).with_color(palette::WHITE),
        );

        frame.fill_text(canvas::Text {
            content: shop.name.clone(),
            position: Point::new(center.x + radius + 4.0, center.y - typography::CAPTION / 2.0),
            color: palette::GRAY_800,
            size: Pixels(typography::CAPTION),
            ..canvas::Text::default()
        });
    }
}

impl canvas::Program<Message> for MapCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let point = cursor.position_in(bounds)?;
                self.press_at(point, bounds)
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if !bounds.contains(*position) {
                    return None;
                }
                let local = Point::new(position.x - bounds.x, position.y - bounds.y);
                self.press_at(local, bounds)
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let size = bounds.size();
        let mut frame = Frame::new(renderer, size);
        self.draw_background(&mut frame, size);
        for shop in self.shops {
            self.draw_pin(&mut frame, shop, size);
        }
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let over_pin = cursor
            .position_in(bounds)
            .and_then(|point| pin_at(self.shops, &self.region, bounds.size(), point))
            .is_some();
        if over_pin {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Pointer-to-drag recognizer for the sheet.
//!
//! Raw press/move/release samples are turned into drag phases or taps.
//! The header region starts a drag after a small slop in any direction;
//! the content region only claims mostly vertical movement so the card list
//! can still scroll horizontally.

use crate::config::{
    CONTENT_ACTIVE_OFFSET_Y, CONTENT_FAIL_OFFSET_X, MAX_FLING_VELOCITY, TOUCH_SLOP,
    VELOCITY_WINDOW_MS,
};
use iced::Point;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Part of the sheet a press started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Header,
    Content,
}

/// Output of the recognizer for one pointer sample.
#[derive(Debug, Clone, PartialEq)]
pub enum Recognized<T> {
    None,
    Began { translation_y: f32 },
    Update { translation_y: f32 },
    End { translation_y: f32, velocity_y: f32 },
    /// Press released without moving past the slop.
    Tap(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Pending,
    Active,
    Failed,
}

#[derive(Debug, Clone)]
struct Session<T> {
    region: Region,
    tap: T,
    origin: Point,
    status: Status,
    samples: VecDeque<(Instant, f32)>,
}

/// Tracks one press at a time. `T` is the payload reported on a tap.
#[derive(Debug, Clone)]
pub struct DragRecognizer<T> {
    session: Option<Session<T>>,
}

impl<T> Default for DragRecognizer<T> {
    fn default() -> Self {
        Self { session: None }
    }
}

impl<T: Clone> DragRecognizer<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the tracked press has turned into a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.status == Status::Active)
    }

    /// Starts tracking a press. A press already in progress is replaced.
    pub fn press(&mut self, region: Region, tap: T, position: Point, at: Instant) {
        let mut samples = VecDeque::new();
        samples.push_back((at, position.y));
        self.session = Some(Session {
            region,
            tap,
            origin: position,
            status: Status::Pending,
            samples,
        });
    }

    /// Moves the origin of a press that has not seen any movement yet.
    ///
    /// Touch presses reach widgets before the window reports where the finger
    /// landed, so the press may have been recorded at a stale position.
    pub fn anchor(&mut self, position: Point, at: Instant) {
        if let Some(session) = self.session.as_mut() {
            if session.status == Status::Pending && session.samples.len() == 1 {
                session.origin = position;
                session.samples.clear();
                session.samples.push_back((at, position.y));
            }
        }
    }

    pub fn move_to(&mut self, position: Point, at: Instant) -> Recognized<T> {
        let Some(session) = self.session.as_mut() else {
            return Recognized::None;
        };

        let dx = position.x - session.origin.x;
        let dy = position.y - session.origin.y;

        match session.status {
            Status::Failed => Recognized::None,
            Status::Active => {
                record(&mut session.samples, at, position.y);
                Recognized::Update { translation_y: dy }
            }
            Status::Pending => {
                record(&mut session.samples, at, position.y);
                let activate = match session.region {
                    Region::Header => dx.hypot(dy) >= TOUCH_SLOP,
                    Region::Content => {
                        if dx.abs() >= CONTENT_FAIL_OFFSET_X {
                            session.status = Status::Failed;
                            return Recognized::None;
                        }
                        dy.abs() >= CONTENT_ACTIVE_OFFSET_Y
                    }
                };
                if activate {
                    session.status = Status::Active;
                    Recognized::Began { translation_y: dy }
                } else {
                    Recognized::None
                }
            }
        }
    }

    pub fn release(&mut self, position: Point, at: Instant) -> Recognized<T> {
        let Some(mut session) = self.session.take() else {
            return Recognized::None;
        };

        let dx = position.x - session.origin.x;
        let dy = position.y - session.origin.y;

        match session.status {
            Status::Failed => Recognized::None,
            Status::Active => {
                record(&mut session.samples, at, position.y);
                Recognized::End {
                    translation_y: dy,
                    velocity_y: velocity(&session.samples),
                }
            }
            Status::Pending => {
                if dx.hypot(dy) < TOUCH_SLOP {
                    Recognized::Tap(session.tap)
                } else {
                    Recognized::None
                }
            }
        }
    }

    /// Abandons the press, e.g. when the pointer leaves the window.
    ///
    /// An active drag ends at its last sample with zero velocity so the sheet
    /// still settles.
    pub fn cancel(&mut self) -> Recognized<T> {
        let Some(session) = self.session.take() else {
            return Recognized::None;
        };
        match (session.status, session.samples.back()) {
            (Status::Active, Some(&(_, y))) => Recognized::End {
                translation_y: y - session.origin.y,
                velocity_y: 0.0,
            },
            _ => Recognized::None,
        }
    }
}

fn record(samples: &mut VecDeque<(Instant, f32)>, at: Instant, y: f32) {
    samples.push_back((at, y));
    let window = Duration::from_millis(VELOCITY_WINDOW_MS);
    while let Some(&(first, _)) = samples.front() {
        if samples.len() > 2 && at.saturating_duration_since(first) > window {
            samples.pop_front();
        } else {
            break;
        }
    }
}

/// Vertical velocity over the retained samples, in px/s.
fn velocity(samples: &VecDeque<(Instant, f32)>) -> f32 {
    let (Some(&(t0, y0)), Some(&(t1, y1))) = (samples.front(), samples.back()) else {
        return 0.0;
    };
    let dt = t1.saturating_duration_since(t0).as_secs_f32();
    if dt <= f32::EPSILON {
        return 0.0;
    }
    ((y1 - y0) / dt).clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY)
}

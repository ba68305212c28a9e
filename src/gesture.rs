//! Drag gesture classification.
//!
//! DESIGN
//! ======
//! A completed drag is reduced to a spin direction and a step budget. The
//! direction comes from which quadrant of the board the drag *started* in
//! and the signs of the drag vector, an approximation of tangential motion
//! around the hub. The step budget is the straight-line drag length.
//!
//! EDGE CASES
//! ==========
//! Releases inside the dead zone are hub taps and never spin the disk, even
//! when the drag vector is long. A zero-length drag is ignored too, and so is
//! one whose length is not a finite number.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::angle::Direction;
use crate::geometry::Point;
use crate::spin::SpinRequest;

/// Why a drag did not produce a spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Released within the dead-zone radius of the board center.
    DeadZone,
    /// Released exactly where it was pressed.
    NoDisplacement,
    /// The press that started the drag landed outside the disk.
    OutsideDisk,
    /// The drag length is NaN or infinite.
    NotFinite,
}

/// Result of a pointer release.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Spin(SpinRequest),
    Ignored(IgnoreReason),
}

/// Quadrant of the board a point falls in, split at the board center.
///
/// Points exactly on a center line count as left/top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    RightBottom,
    RightTop,
    LeftBottom,
    LeftTop,
}

impl Quadrant {
    #[must_use]
    pub fn of(point: Point, center: Point) -> Self {
        let right = point.x > center.x;
        let bottom = point.y > center.y;
        match (right, bottom) {
            (true, true) => Self::RightBottom,
            (true, false) => Self::RightTop,
            (false, true) => Self::LeftBottom,
            (false, false) => Self::LeftTop,
        }
    }

    /// Whether a drag of `(move_x, move_y)` starting in this quadrant reads as clockwise.
    #[must_use]
    pub fn is_clockwise(self, move_x: f64, move_y: f64) -> bool {
        match self {
            Self::RightBottom => move_x < 0.0 && move_y > 0.0,
            Self::RightTop => move_x > 0.0 || (move_y > 0.0 && move_x < 0.0),
            Self::LeftBottom => move_x < 0.0 || (move_x > 0.0 && move_y < 0.0),
            Self::LeftTop => move_x > 0.0 || (move_x < 0.0 && move_y < 0.0),
        }
    }
}

/// Classify a drag from `start` to `end` against the board center.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn classify(start: Point, end: Point, board_center: Point, dead_zone_radius: f64) -> Gesture {
    if end.distance_to(board_center) < dead_zone_radius {
        return Gesture::Ignored(IgnoreReason::DeadZone);
    }

    let move_x = end.x - start.x;
    let move_y = end.y - start.y;
    if move_x == 0.0 && move_y == 0.0 {
        return Gesture::Ignored(IgnoreReason::NoDisplacement);
    }

    let direction = if Quadrant::of(start, board_center).is_clockwise(move_x, move_y) {
        Direction::Clockwise
    } else {
        Direction::Counterclockwise
    };
    let step_count = move_x.hypot(move_y);
    if !step_count.is_finite() {
        return Gesture::Ignored(IgnoreReason::NotFinite);
    }

    Gesture::Spin(SpinRequest::new(direction, step_count))
}

//! Input model: keys, keyboard nudge, and the pointer drag state machine.
//!
//! `DragState` tracks the gesture between pointer-down and pointer-up. Only a
//! press inside the disk arms a drag; a press anywhere else disarms it, so the
//! following release does nothing.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::angle::{Angle, Direction, SharedAngle};
use crate::geometry::{DiskBounds, Point};

/// A keyboard key as delivered by the input surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    /// Any other key, by name. Ignored by the wheel.
    Other(String),
}

impl Key {
    /// Direction this key nudges the disk, if any.
    #[must_use]
    pub fn nudge_direction(&self) -> Option<Direction> {
        match self {
            Self::Right => Some(Direction::Clockwise),
            Self::Left => Some(Direction::Counterclockwise),
            Self::Other(_) => None,
        }
    }
}

/// Apply a single-degree nudge for `key`. Returns the new angle, or `None` for unbound keys.
pub fn nudge(key: &Key, angle: &SharedAngle) -> Option<Angle> {
    key.nudge_direction().map(|direction| angle.step(direction))
}

/// Pointer gesture being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No armed drag; a release is ignored.
    #[default]
    Idle,
    /// Pointer went down inside the disk at `start`.
    Armed { start: Point },
}

impl DragState {
    /// Record a pointer-down. Returns whether the press armed a drag.
    pub fn press(&mut self, point: Point, disk: &DiskBounds) -> bool {
        if disk.contains(point) {
            *self = Self::Armed { start: point };
            true
        } else {
            *self = Self::Idle;
            false
        }
    }

    /// Record a pointer-up. Returns the drag start if a drag was armed.
    pub fn release(&mut self) -> Option<Point> {
        match std::mem::take(self) {
            Self::Armed { start } => Some(start),
            Self::Idle => None,
        }
    }
}

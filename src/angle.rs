//! Disk angle and its wraparound arithmetic.
//!
//! DESIGN
//! ======
//! `Angle` is a plain value: one-degree steps with the boundary fold and no
//! locking. `SharedAngle` is the single shared cell the spin worker, the key
//! handler and the redraw ticker all go through. Writers take the lock for
//! one step at a time; readers copy a snapshot out.
//!
//! FOLD
//! ====
//! A clockwise step from 360 first drops to -1 and lands on 0; a
//! counterclockwise step from 0 first jumps to 361 and lands on 360. Both 0
//! and 360 are resting positions, so a full lap takes 361 steps.

#[cfg(test)]
#[path = "angle_test.rs"]
mod angle_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Spin sense as seen on screen. Clockwise increases the angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    Counterclockwise,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clockwise => f.write_str("clockwise"),
            Self::Counterclockwise => f.write_str("counterclockwise"),
        }
    }
}

/// Whole-degree rotation of the disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Angle(i32);

impl Angle {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_degrees(degrees: i32) -> Self {
        Self(degrees)
    }

    /// Current value in degrees.
    #[must_use]
    pub fn current(self) -> f64 {
        f64::from(self.0)
    }

    #[must_use]
    pub const fn whole_degrees(self) -> i32 {
        self.0
    }

    pub fn step_clockwise(&mut self) {
        if self.0 == 360 {
            self.0 = -1;
        }
        self.0 += 1;
    }

    pub fn step_counterclockwise(&mut self) {
        if self.0 == 0 {
            self.0 = 361;
        }
        self.0 -= 1;
    }

    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Clockwise => self.step_clockwise(),
            Direction::Counterclockwise => self.step_counterclockwise(),
        }
    }
}

/// Lock-guarded angle shared between tasks. Clones share the same cell.
#[derive(Debug, Clone, Default)]
pub struct SharedAngle {
    inner: Arc<Mutex<Angle>>,
}

impl SharedAngle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the angle at this instant.
    #[must_use]
    pub fn snapshot(&self) -> Angle {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply one step and return the resulting angle.
    pub fn step(&self, direction: Direction) -> Angle {
        let mut angle = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        angle.step(direction);
        *angle
    }
}

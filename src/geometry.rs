#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in board space (pixels, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned bounds of the disk image on the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskBounds {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl DiskBounds {
    /// Whether `p` lies strictly inside the bounds. Edges do not count.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        let horizontally = p.x > self.origin.x && p.x < self.origin.x + self.width;
        let vertically = p.y > self.origin.y && p.y < self.origin.y + self.height;
        horizontally && vertically
    }
}

/// Board size plus the centered disk, the dead zone around the hub.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub board_size: f64,
    pub disk: DiskBounds,
    pub dead_zone_radius: f64,
}

impl BoardGeometry {
    /// Center a square disk of `disk_size` on a square board of `board_size`.
    ///
    /// The origin is truncated to whole pixels, matching how the disk image is
    /// placed when it is drawn.
    #[must_use]
    pub fn centered(board_size: f64, disk_size: f64, dead_zone_radius: f64) -> Self {
        let offset = ((board_size - disk_size) / 2.0).trunc();
        Self {
            board_size,
            disk: DiskBounds { origin: Point::new(offset, offset), width: disk_size, height: disk_size },
            dead_zone_radius,
        }
    }

    /// The board center; pivot for the dead zone and the quadrant split.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.board_size / 2.0, self.board_size / 2.0)
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        use crate::consts::{DEFAULT_BOARD_SIZE, DEFAULT_DEAD_ZONE_RADIUS, DEFAULT_DISK_SIZE};
        Self::centered(DEFAULT_BOARD_SIZE, DEFAULT_DISK_SIZE, DEFAULT_DEAD_ZONE_RADIUS)
    }
}

//! Angle to roulette number mapping.

#[cfg(test)]
#[path = "sector_test.rs"]
mod sector_test;

use crate::consts::{SECTOR_COUNT, SECTOR_WIDTH_CENTIDEGREES};

/// Numbers in the order they sit around a single-zero wheel, starting under the marker.
pub const WHEEL_ORDER: [u8; SECTOR_COUNT] = [
    0, 26, 3, 35, 12, 28, 7, 29, 18, 22, 9, 31, 14, 20, 1, 33, 16, 24, 5, 10, 23, 8, 30, 11, 36, 13, 27, 6, 34, 17,
    25, 2, 21, 4, 19, 15, 32,
];

/// Maps a disk angle to the number under the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorMapper {
    table: [u8; SECTOR_COUNT],
}

impl Default for SectorMapper {
    fn default() -> Self {
        Self { table: WHEEL_ORDER }
    }
}

impl SectorMapper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn table(&self) -> &[u8; SECTOR_COUNT] {
        &self.table
    }

    /// Sector index under the marker: `floor(angle / 9.73)`.
    ///
    /// Computed on hundredths of a degree so `9.73 * k` falls in sector `k`.
    /// Angles outside `[0, 360]` wrap onto the table instead of panicking.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn sector_index(angle: f64) -> usize {
        let centidegrees = (angle * 100.0).floor() as i64;
        centidegrees
            .div_euclid(SECTOR_WIDTH_CENTIDEGREES)
            .rem_euclid(SECTOR_COUNT as i64) as usize
    }

    /// Number shown for `angle`. Exactly zero degrees always shows 0.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn number_for_angle(&self, angle: f64) -> u8 {
        if angle == 0.0 {
            return 0;
        }
        self.table[Self::sector_index(angle)]
    }

    /// `number_for_angle` rendered as display text.
    #[must_use]
    pub fn label_for_angle(&self, angle: f64) -> String {
        self.number_for_angle(angle).to_string()
    }
}

//! Shared numeric constants for the wheel.

// ── Wheel layout ────────────────────────────────────────────────

/// Number of sectors on a single-zero wheel.
pub const SECTOR_COUNT: usize = 37;

/// Angular width of one sector in hundredths of a degree (9.73°).
///
/// Kept as an integer so sector boundaries at `9.73 * k` land exactly.
pub const SECTOR_WIDTH_CENTIDEGREES: i64 = 973;

// ── Geometry ────────────────────────────────────────────────────

/// Default board edge length in pixels.
pub const DEFAULT_BOARD_SIZE: f64 = 600.0;

/// Default disk image edge length in pixels.
pub const DEFAULT_DISK_SIZE: f64 = 500.0;

/// Releases closer than this to the board center are treated as hub taps.
pub const DEFAULT_DEAD_ZONE_RADIUS: f64 = 90.0;

// ── Timing ──────────────────────────────────────────────────────

/// Redraw cadence in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 20;

/// Delay after a spin step before the ease-out curve takes over, in milliseconds.
pub const SPIN_BASE_DELAY_MS: u64 = 3;

/// Scale of the ease-out curve: the last steps of a spin approach this delay.
pub const SPIN_EASE_OUT_SCALE_MS: f64 = 10.0;

/// Ratio above which `step_count / i` switches to the ease-out delay.
pub const SPIN_EASE_OUT_RATIO: f64 = 0.99;

//! Wheel configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::consts::{DEFAULT_BOARD_SIZE, DEFAULT_DEAD_ZONE_RADIUS, DEFAULT_DISK_SIZE, DEFAULT_TICK_MS};
use crate::geometry::BoardGeometry;
use crate::spin::SpinPolicy;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown ROULETTE_SPIN_POLICY: {0} (expected 'replace' or 'queue')")]
    UnknownSpinPolicy(String),
    #[error("disk of {disk} does not fit a board of {board}")]
    DiskTooLarge { disk: f64, board: f64 },
    #[error("{var} must be positive, got {value}")]
    NotPositive { var: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelConfig {
    pub geometry: BoardGeometry,
    pub tick: Duration,
    pub spin_policy: SpinPolicy,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            geometry: BoardGeometry::default(),
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            spin_policy: SpinPolicy::default(),
        }
    }
}

impl WheelConfig {
    /// Build typed wheel config from environment variables.
    ///
    /// Optional:
    /// - `ROULETTE_BOARD_SIZE`: default 600
    /// - `ROULETTE_DISK_SIZE`: default 500
    /// - `ROULETTE_DEAD_ZONE_RADIUS`: default 90
    /// - `ROULETTE_TICK_MS`: default 20
    /// - `ROULETTE_SPIN_POLICY`: `replace` (default) or `queue`
    ///
    /// Unparseable numbers fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let board_size = positive("ROULETTE_BOARD_SIZE", env_parse("ROULETTE_BOARD_SIZE", DEFAULT_BOARD_SIZE))?;
        let disk_size = positive("ROULETTE_DISK_SIZE", env_parse("ROULETTE_DISK_SIZE", DEFAULT_DISK_SIZE))?;
        if disk_size > board_size {
            return Err(ConfigError::DiskTooLarge { disk: disk_size, board: board_size });
        }
        let dead_zone_radius = env_parse("ROULETTE_DEAD_ZONE_RADIUS", DEFAULT_DEAD_ZONE_RADIUS).max(0.0);
        let tick_ms = env_parse("ROULETTE_TICK_MS", DEFAULT_TICK_MS).max(1);
        let spin_policy = parse_spin_policy(std::env::var("ROULETTE_SPIN_POLICY").ok().as_deref())?;

        Ok(Self {
            geometry: BoardGeometry::centered(board_size, disk_size, dead_zone_radius),
            tick: Duration::from_millis(tick_ms),
            spin_policy,
        })
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn positive(var: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value > 0.0 { Ok(value) } else { Err(ConfigError::NotPositive { var, value }) }
}

pub(crate) fn parse_spin_policy(raw: Option<&str>) -> Result<SpinPolicy, ConfigError> {
    match raw.map(str::trim).unwrap_or("replace") {
        "replace" => Ok(SpinPolicy::Replace),
        "queue" => Ok(SpinPolicy::Queue),
        other => Err(ConfigError::UnknownSpinPolicy(other.to_string())),
    }
}

//! Line-oriented input commands for the headless driver.
//!
//! One command per line, whitespace separated:
//!
//! | Line | Meaning |
//! |------|---------|
//! | `down X Y` | pointer pressed at (X, Y) |
//! | `up X Y` | pointer released at (X, Y) |
//! | `key NAME` | key pressed; `left` and `right` rotate |
//! | `sleep MS` | pause reading input |
//! | `wait` | pause until every submitted spin has finished |
//! | `quit` | stop |
//!
//! Blank lines and lines starting with `#` are skipped.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

use std::time::Duration;

use crate::geometry::Point;
use crate::input::Key;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' is missing its {argument} argument")]
    MissingArgument { command: &'static str, argument: &'static str },
    #[error("'{value}' is not a valid {argument}")]
    InvalidArgument { argument: &'static str, value: String },
    #[error("'{command}' takes no more arguments, got '{extra}'")]
    TrailingInput { command: &'static str, extra: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    PointerDown(Point),
    PointerUp(Point),
    Key(Key),
    Sleep(Duration),
    Wait,
    Quit,
}

impl Command {
    /// Parse one input line. Returns `Ok(None)` for blank and comment lines.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "down" => Self::PointerDown(point_arg("down", &mut words)?),
            "up" => Self::PointerUp(point_arg("up", &mut words)?),
            "key" => Self::Key(key_arg(&mut words)?),
            "sleep" => {
                let raw = words.next().ok_or(CommandError::MissingArgument { command: "sleep", argument: "MS" })?;
                Self::Sleep(Duration::from_millis(number_arg("MS", raw)?))
            }
            "wait" => Self::Wait,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        if let Some(extra) = words.next() {
            return Err(CommandError::TrailingInput { command: command.name(), extra: extra.to_string() });
        }
        Ok(Some(command))
    }

    fn name(&self) -> &'static str {
        match self {
            Self::PointerDown(_) => "down",
            Self::PointerUp(_) => "up",
            Self::Key(_) => "key",
            Self::Sleep(_) => "sleep",
            Self::Wait => "wait",
            Self::Quit => "quit",
        }
    }
}

fn point_arg<'a>(command: &'static str, words: &mut impl Iterator<Item = &'a str>) -> Result<Point, CommandError> {
    let x = words.next().ok_or(CommandError::MissingArgument { command, argument: "X" })?;
    let y = words.next().ok_or(CommandError::MissingArgument { command, argument: "Y" })?;
    Ok(Point::new(coordinate_arg("X", x)?, coordinate_arg("Y", y)?))
}

fn coordinate_arg(argument: &'static str, raw: &str) -> Result<f64, CommandError> {
    let value: f64 = number_arg(argument, raw)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CommandError::InvalidArgument { argument, value: raw.to_string() })
    }
}

fn key_arg<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Key, CommandError> {
    let name = words.next().ok_or(CommandError::MissingArgument { command: "key", argument: "NAME" })?;
    Ok(match name.to_ascii_lowercase().as_str() {
        "left" => Key::Left,
        "right" => Key::Right,
        _ => Key::Other(name.to_string()),
    })
}

fn number_arg<T: std::str::FromStr>(argument: &'static str, raw: &str) -> Result<T, CommandError> {
    raw.parse::<T>().map_err(|_| CommandError::InvalidArgument { argument, value: raw.to_string() })
}

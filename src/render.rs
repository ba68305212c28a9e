//! Render port and the fixed-rate redraw task.
//!
//! DESIGN
//! ======
//! Pixel work happens outside this crate. Once per tick the redraw task reads
//! a snapshot of the shared angle, maps it to the number under the marker and
//! hands the resulting `RenderFrame` to a `RenderPort`. Animation never waits
//! on drawing and drawing never waits on animation; they only share the angle.
//!
//! ERROR HANDLING
//! ==============
//! A port error stops the redraw task. The port is returned from `stop` so the
//! caller can inspect or flush it.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::io::Write;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use crate::angle::{Angle, SharedAngle};
use crate::sector::SectorMapper;

/// Window title drawn by the host.
pub const TITLE: &str = "Roulette";

/// Instruction lines drawn under the disk.
pub const INSTRUCTIONS: [&str; 2] = ["Use your arrows <- -> to rotate", "Use your mouse to spin the disk"];

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("render output failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("frame encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Everything the host needs to paint one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    /// Disk rotation in degrees.
    pub angle: f64,
    /// Number under the marker.
    pub number: u8,
    /// `number` as display text.
    pub label: String,
}

impl RenderFrame {
    #[must_use]
    pub fn new(angle: Angle, sectors: &SectorMapper) -> Self {
        let degrees = angle.current();
        let number = sectors.number_for_angle(degrees);
        Self { angle: degrees, number, label: sectors.label_for_angle(degrees) }
    }
}

/// Consumer of rendered frames, called once per tick.
pub trait RenderPort {
    fn draw(&mut self, frame: &RenderFrame) -> Result<(), RenderError>;
}

// =============================================================================
// JSON LINES RENDERER
// =============================================================================

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Record<'a> {
    Header { title: &'a str, instructions: &'a [&'a str] },
    Frame(&'a RenderFrame),
}

/// Writes a header line, then one JSON line per frame that differs from the last.
pub struct JsonLinesRenderer<W: Write> {
    out: W,
    last: Option<RenderFrame>,
}

impl<W: Write> JsonLinesRenderer<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, record: &Record<'_>) -> Result<(), RenderError> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> RenderPort for JsonLinesRenderer<W> {
    fn draw(&mut self, frame: &RenderFrame) -> Result<(), RenderError> {
        if self.last.as_ref() == Some(frame) {
            return Ok(());
        }
        if self.last.is_none() {
            self.write_record(&Record::Header { title: TITLE, instructions: &INSTRUCTIONS })?;
        }
        self.write_record(&Record::Frame(frame))?;
        self.last = Some(frame.clone());
        Ok(())
    }
}

// =============================================================================
// REDRAW TASK
// =============================================================================

/// Handle to a running redraw task.
pub struct RedrawHandle<P> {
    stop: oneshot::Sender<()>,
    task: JoinHandle<P>,
}

impl<P> RedrawHandle<P> {
    /// Stop ticking and return the port.
    pub async fn stop(self) -> Option<P> {
        if self.stop.send(()).is_err() {
            warn!("redraw task already stopped");
        }
        match self.task.await {
            Ok(port) => Some(port),
            Err(e) => {
                error!(error = %e, "redraw task ended abnormally");
                None
            }
        }
    }
}

/// Spawn the redraw task. Draws immediately, then every `tick`.
pub fn spawn_redraw_task<P>(angle: SharedAngle, sectors: SectorMapper, mut port: P, tick: Duration) -> RedrawHandle<P>
where
    P: RenderPort + Send + 'static,
{
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
    info!(tick = ?tick, "redraw task configured");

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = &mut stop_rx => break,
                _ = ticker.tick() => {
                    let frame = RenderFrame::new(angle.snapshot(), &sectors);
                    if let Err(e) = port.draw(&frame) {
                        error!(error = %e, "render port failed; stopping redraw");
                        break;
                    }
                }
            }
        }
        port
    });

    RedrawHandle { stop: stop_tx, task }
}

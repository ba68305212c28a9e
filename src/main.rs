//! Headless roulette driver.
//!
//! Reads input commands from stdin (see [`roulette::command`]), feeds them to
//! the wheel and writes render frames to stdout as JSON lines. Logs go to
//! stderr.

use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use roulette::command::Command;
use roulette::config::WheelConfig;
use roulette::render::{JsonLinesRenderer, RenderFrame, RenderPort, spawn_redraw_task};
use roulette::wheel::Wheel;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = match WheelConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut wheel = Wheel::new(&config);
    let angle = wheel.shared_angle();
    let sectors = wheel.sectors().clone();
    let redraw = spawn_redraw_task(angle.clone(), sectors.clone(), JsonLinesRenderer::new(std::io::stdout()), config.tick);

    info!(
        board_size = config.geometry.board_size,
        dead_zone_radius = config.geometry.dead_zone_radius,
        policy = %config.spin_policy,
        "roulette ready"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut quit = false;
    while !quit {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(error = %e, line = %line, "ignoring command");
                continue;
            }
        };

        match command {
            Command::PointerDown(point) => {
                wheel.on_pointer_down(point);
            }
            Command::PointerUp(point) => {
                wheel.on_pointer_up(point);
            }
            Command::Key(key) => {
                wheel.on_key_down(&key);
            }
            Command::Sleep(duration) => tokio::time::sleep(duration).await,
            Command::Wait => {
                wheel.animator().wait_idle().await;
            }
            Command::Quit => quit = true,
        }
    }

    // End of input lets running spins finish; `quit` cuts them short.
    if !quit {
        wheel.animator().wait_idle().await;
    }
    wheel.shutdown().await;

    let Some(mut port) = redraw.stop().await else {
        return ExitCode::FAILURE;
    };
    if let Err(e) = port.draw(&RenderFrame::new(angle.snapshot(), &sectors)) {
        error!(error = %e, "failed to draw final frame");
        return ExitCode::FAILURE;
    }

    info!(angle = angle.snapshot().whole_degrees(), "roulette stopped");
    ExitCode::SUCCESS
}

//! Input handling over the shared angle.
//!
//! `Wheel` wires pointer and key events to the rotation core. It owns the drag
//! state, the sector table and the spin worker; the angle itself is shared
//! with the redraw task through `shared_angle`.

#[cfg(test)]
#[path = "wheel_test.rs"]
mod wheel_test;

use tracing::debug;

use crate::angle::{Angle, SharedAngle};
use crate::config::WheelConfig;
use crate::geometry::{BoardGeometry, Point};
use crate::gesture::{self, Gesture, IgnoreReason};
use crate::input::{self, DragState, Key};
use crate::render::RenderFrame;
use crate::sector::SectorMapper;
use crate::spin::SpinAnimator;

pub struct Wheel {
    angle: SharedAngle,
    sectors: SectorMapper,
    geometry: BoardGeometry,
    drag: DragState,
    animator: SpinAnimator,
}

impl Wheel {
    /// Create a wheel at angle 0. Spawns the spin worker on the current runtime.
    #[must_use]
    pub fn new(config: &WheelConfig) -> Self {
        let angle = SharedAngle::new();
        let animator = SpinAnimator::spawn(angle.clone(), config.spin_policy);
        Self { angle, sectors: SectorMapper::new(), geometry: config.geometry, drag: DragState::default(), animator }
    }

    // --- Input events ---

    /// Pointer went down. Returns whether it armed a drag.
    pub fn on_pointer_down(&mut self, point: Point) -> bool {
        let armed = self.drag.press(point, &self.geometry.disk);
        debug!(x = point.x, y = point.y, armed, "pointer down");
        armed
    }

    /// Pointer went up. Starts a spin when the drag classifies as one.
    pub fn on_pointer_up(&mut self, point: Point) -> Gesture {
        let Some(start) = self.drag.release() else {
            debug!(x = point.x, y = point.y, "pointer up without armed drag");
            return Gesture::Ignored(IgnoreReason::OutsideDisk);
        };

        let gesture = gesture::classify(start, point, self.geometry.center(), self.geometry.dead_zone_radius);
        match &gesture {
            Gesture::Spin(request) => {
                self.animator.start(request.clone());
            }
            Gesture::Ignored(reason) => {
                debug!(?reason, x = point.x, y = point.y, "drag ignored");
            }
        }
        gesture
    }

    /// Key went down. Returns the nudged angle, or `None` for unbound keys.
    pub fn on_key_down(&mut self, key: &Key) -> Option<Angle> {
        let nudged = input::nudge(key, &self.angle);
        if let Some(angle) = nudged {
            debug!(?key, angle = angle.whole_degrees(), "key nudge");
        }
        nudged
    }

    // --- Queries ---

    #[must_use]
    pub fn angle(&self) -> Angle {
        self.angle.snapshot()
    }

    /// Number currently under the marker.
    #[must_use]
    pub fn number(&self) -> u8 {
        self.sectors.number_for_angle(self.angle().current())
    }

    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        RenderFrame::new(self.angle(), &self.sectors)
    }

    /// Handle on the angle cell, for readers outside the wheel.
    #[must_use]
    pub fn shared_angle(&self) -> SharedAngle {
        self.angle.clone()
    }

    #[must_use]
    pub fn sectors(&self) -> &SectorMapper {
        &self.sectors
    }

    #[must_use]
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn animator(&self) -> &SpinAnimator {
        &self.animator
    }

    /// Stop the spin worker, cancelling any spin in flight.
    pub async fn shutdown(self) {
        self.animator.shutdown().await;
    }
}

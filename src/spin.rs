//! Spin animation: background worker that turns gestures into eased rotation.
//!
//! DESIGN
//! ======
//! A single worker task owns every spin. Gestures are submitted over an
//! unbounded channel; the worker steps the shared angle one degree at a time
//! and sleeps between steps. While sleeping it keeps listening on the channel,
//! so a new request is seen at the next suspension point of the current spin.
//!
//! Under `SpinPolicy::Replace` a new request ends the current spin and any
//! requests already waiting behind it, and only the newest runs. Under
//! `SpinPolicy::Queue` requests run back to back in submission order. Either
//! way there is exactly one writer driving spins at any time.
//!
//! EASE-OUT
//! ========
//! The first step waits 3 ms. Every later step `i` waits
//! `trunc(i * 10 / step_count)` ms, so delays grow from 0 toward 10 ms as
//! the spin runs out of budget.
//!
//! SHUTDOWN
//! ========
//! Dropping the animator closes the channel. The in-flight spin stops at its
//! next suspension point; the angle is left wherever that step put it.

#[cfg(test)]
#[path = "spin_test.rs"]
mod spin_test;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::angle::{Angle, Direction, SharedAngle};
use crate::consts::{SPIN_BASE_DELAY_MS, SPIN_EASE_OUT_RATIO, SPIN_EASE_OUT_SCALE_MS};

// =============================================================================
// REQUESTS
// =============================================================================

/// One gesture's worth of rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinRequest {
    pub id: Uuid,
    pub direction: Direction,
    /// Straight-line drag length; steps run while `i < step_count`. A
    /// non-finite budget runs no steps.
    pub step_count: f64,
}

impl SpinRequest {
    #[must_use]
    pub fn new(direction: Direction, step_count: f64) -> Self {
        Self { id: Uuid::new_v4(), direction, step_count: step_count.abs() }
    }

    /// Delays to wait after each step, in order.
    #[must_use]
    pub fn schedule(&self) -> SpinSchedule {
        SpinSchedule { step_count: self.step_count, next: 0 }
    }
}

/// How the worker treats a request that arrives while a spin is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinPolicy {
    /// Cancel the running spin and start the new one.
    #[default]
    Replace,
    /// Run the new one after everything already submitted.
    Queue,
}

impl std::fmt::Display for SpinPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Replace => f.write_str("replace"),
            Self::Queue => f.write_str("queue"),
        }
    }
}

// =============================================================================
// EASE-OUT SCHEDULE
// =============================================================================

/// Delay to wait after step `i` of a spin with the given budget.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn step_delay(i: u32, step_count: f64) -> Duration {
    let mut delay_ms = SPIN_BASE_DELAY_MS;
    if i != 0 {
        let i = f64::from(i);
        if step_count / i > SPIN_EASE_OUT_RATIO {
            delay_ms = (i * SPIN_EASE_OUT_SCALE_MS / step_count) as u64;
        }
    }
    Duration::from_millis(delay_ms)
}

/// Iterator over the post-step delays of one spin.
#[derive(Debug, Clone)]
pub struct SpinSchedule {
    step_count: f64,
    next: u32,
}

impl Iterator for SpinSchedule {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        if !self.step_count.is_finite() || f64::from(self.next) >= self.step_count {
            return None;
        }
        let delay = step_delay(self.next, self.step_count);
        self.next += 1;
        Some(delay)
    }
}

// =============================================================================
// OUTCOMES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinEnd {
    /// Every step in the budget ran.
    Completed,
    /// Stopped early by a newer request or by shutdown.
    Cancelled,
}

/// What a finished spin did.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub id: Uuid,
    pub direction: Direction,
    pub steps_taken: u32,
    pub end: SpinEnd,
    /// Angle right after the spin's last step.
    pub angle: Angle,
}

/// Worker progress, published after every state change.
#[derive(Debug, Clone, Default)]
pub struct SpinReport {
    /// Requests fully handled so far, completed or cancelled.
    pub finished: u64,
    /// Spin currently stepping, if any.
    pub active: Option<Uuid>,
    pub last: Option<SpinOutcome>,
}

// =============================================================================
// ANIMATOR
// =============================================================================

/// Handle to the spin worker.
pub struct SpinAnimator {
    tx: mpsc::UnboundedSender<SpinRequest>,
    submitted: AtomicU64,
    report: watch::Receiver<SpinReport>,
    worker: JoinHandle<()>,
}

impl SpinAnimator {
    /// Spawn the worker on the current tokio runtime.
    #[must_use]
    pub fn spawn(angle: SharedAngle, policy: SpinPolicy) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (report_tx, report_rx) = watch::channel(SpinReport::default());

        info!(%policy, "spin worker configured");

        let inbox = Inbox { rx, pending: VecDeque::new(), policy, closed: false };
        let worker = tokio::spawn(run_worker(angle, inbox, report_tx));

        Self { tx, submitted: AtomicU64::new(0), report: report_rx, worker }
    }

    /// Submit a spin. Returns immediately; the worker picks it up on its next poll.
    pub fn start(&self, request: SpinRequest) -> Uuid {
        let id = request.id;
        match self.tx.send(request) {
            Ok(()) => {
                self.submitted.fetch_add(1, Ordering::SeqCst);
            }
            Err(_) => {
                warn!(spin_id = %id, "spin worker gone; dropping request");
            }
        }
        id
    }

    /// Latest worker report.
    #[must_use]
    pub fn report(&self) -> SpinReport {
        self.report.borrow().clone()
    }

    /// Whether a spin is stepping right now.
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.report.borrow().active.is_some()
    }

    /// Wait until every request submitted so far has finished. Returns the last outcome.
    pub async fn wait_idle(&self) -> Option<SpinOutcome> {
        let target = self.submitted.load(Ordering::SeqCst);
        let mut report = self.report.clone();
        match report.wait_for(|r| r.finished >= target).await {
            Ok(r) => r.last.clone(),
            Err(e) => {
                warn!(error = %e, "spin worker stopped before going idle");
                None
            }
        }
    }

    /// Close the request channel and wait for the worker to exit.
    pub async fn shutdown(self) {
        let Self { tx, worker, .. } = self;
        drop(tx);
        if let Err(e) = worker.await {
            warn!(error = %e, "spin worker ended abnormally");
        }
    }
}

// =============================================================================
// WORKER
// =============================================================================

struct Inbox {
    rx: mpsc::UnboundedReceiver<SpinRequest>,
    pending: VecDeque<SpinRequest>,
    policy: SpinPolicy,
    closed: bool,
}

impl Inbox {
    async fn next(&mut self) -> Option<SpinRequest> {
        if let Some(request) = self.pending.pop_front() {
            return Some(request);
        }
        if self.closed {
            return None;
        }
        let request = self.rx.recv().await;
        if request.is_none() {
            self.closed = true;
        }
        request
    }

    /// Take a message that arrived mid-spin. Returns true when the running spin must stop.
    fn accept(&mut self, incoming: Option<SpinRequest>) -> bool {
        match incoming {
            Some(request) => {
                self.pending.push_back(request);
                self.policy == SpinPolicy::Replace
            }
            None => {
                self.closed = true;
                true
            }
        }
    }

    /// Under `Replace`, swap `request` for the newest one already submitted.
    /// Returns the superseded requests.
    fn supersede(&mut self, mut request: SpinRequest) -> (SpinRequest, Vec<SpinRequest>) {
        let mut stale = Vec::new();
        if self.policy != SpinPolicy::Replace {
            return (request, stale);
        }
        while let Some(newer) = self.pending.pop_front() {
            stale.push(std::mem::replace(&mut request, newer));
        }
        while let Ok(newer) = self.rx.try_recv() {
            stale.push(std::mem::replace(&mut request, newer));
        }
        (request, stale)
    }
}

async fn run_worker(angle: SharedAngle, mut inbox: Inbox, report: watch::Sender<SpinReport>) {
    while let Some(request) = inbox.next().await {
        let (request, stale) = inbox.supersede(request);
        for skipped in stale {
            debug!(spin_id = %skipped.id, "spin superseded before starting");
            let outcome = SpinOutcome {
                id: skipped.id,
                direction: skipped.direction,
                steps_taken: 0,
                end: SpinEnd::Cancelled,
                angle: angle.snapshot(),
            };
            publish(&report, outcome);
        }

        info!(
            spin_id = %request.id,
            direction = %request.direction,
            step_count = request.step_count,
            "spin started"
        );
        report.send_modify(|r| r.active = Some(request.id));

        let outcome = drive(&angle, &request, &mut inbox).await;
        info!(
            spin_id = %outcome.id,
            steps = outcome.steps_taken,
            end = ?outcome.end,
            angle = outcome.angle.whole_degrees(),
            "spin finished"
        );
        publish(&report, outcome);

        if inbox.closed {
            break;
        }
    }
    debug!("spin worker exiting");
}

/// Step through one spin, listening for new requests during each delay.
async fn drive(angle: &SharedAngle, request: &SpinRequest, inbox: &mut Inbox) -> SpinOutcome {
    let mut steps_taken = 0;
    let mut current = angle.snapshot();

    for delay in request.schedule() {
        current = angle.step(request.direction);
        steps_taken += 1;

        let sleep = tokio::time::sleep(delay);
        tokio::pin!(sleep);
        loop {
            tokio::select! {
                biased;
                incoming = inbox.rx.recv(), if !inbox.closed => {
                    if inbox.accept(incoming) {
                        return SpinOutcome {
                            id: request.id,
                            direction: request.direction,
                            steps_taken,
                            end: SpinEnd::Cancelled,
                            angle: current,
                        };
                    }
                }
                () = &mut sleep => break,
            }
        }
    }

    SpinOutcome { id: request.id, direction: request.direction, steps_taken, end: SpinEnd::Completed, angle: current }
}

fn publish(report: &watch::Sender<SpinReport>, outcome: SpinOutcome) {
    report.send_modify(|r| {
        if r.active == Some(outcome.id) {
            r.active = None;
        }
        r.finished += 1;
        r.last = Some(outcome);
    });
}

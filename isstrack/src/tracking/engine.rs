//! Tracking engine - poll loop and state machine.
//!
//! The [`TrackingEngine`] owns one tracking session: it polls a
//! [`PositionSource`] on a fixed interval, decodes each record, appends valid
//! positions to the path and reports every outcome to a [`TrackingConsumer`].
//!
//! # Design
//!
//! - `new()` + `start()` spawns the poll loop as a tokio task
//! - `tokio::time::interval_at` drives cycles; the next tick is only awaited
//!   after the previous fetch has been processed, so at most one fetch is in
//!   flight and the path is never mutated concurrently
//! - `stop()` cancels the pending tick through a `CancellationToken`; an
//!   in-flight fetch finishes but its result is discarded
//! - Any fetch or decode failure halts the session. There is no retry.
//!
//! State is published through a `watch` channel so handles can read it or
//! wait for the halt without polling.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::consumer::TrackingConsumer;
use super::decoder::decode;
use super::path::PathAccumulator;
use super::state::{HaltReason, Position, TrackingState};
use crate::source::PositionSource;

/// Errors returned by [`TrackingEngine::start`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StartError {
    /// The polling interval is zero, negative or not finite.
    #[error("Polling interval must be a positive number of seconds, got {0}")]
    InvalidInterval(f64),
}

/// Convert a polling interval in seconds into a timer period.
///
/// Rejects intervals that are not finite and positive, that round to a zero
/// `Duration`, or whose deadlines would overflow the monotonic clock.
pub fn interval_period(interval_secs: f64) -> Result<Duration, StartError> {
    let invalid = StartError::InvalidInterval(interval_secs);

    if !interval_secs.is_finite() || interval_secs <= 0.0 {
        return Err(invalid);
    }
    let period = Duration::try_from_secs_f64(interval_secs).map_err(|_| invalid)?;
    if period.is_zero() {
        return Err(invalid);
    }

    // The ticker adds the period to each deadline; leave room for more than one.
    let headroom = period.checked_mul(2).ok_or(invalid)?;
    std::time::Instant::now()
        .checked_add(headroom)
        .ok_or(invalid)?;

    Ok(period)
}

/// Session state shared between the engine, its handles and the poll task.
struct Shared {
    /// Current state; the sender keeps the latest value for readers.
    state_tx: watch::Sender<TrackingState>,

    /// Observed path, written only by the poll task.
    path: RwLock<PathAccumulator>,

    /// Cancels the pending tick on stop.
    cancellation: CancellationToken,
}

impl Shared {
    fn new() -> Self {
        let (state_tx, _) = watch::channel(TrackingState::Idle);
        Self {
            state_tx,
            path: RwLock::new(PathAccumulator::new()),
            cancellation: CancellationToken::new(),
        }
    }

    fn state(&self) -> TrackingState {
        self.state_tx.borrow().clone()
    }

    /// Idle → AwaitingFirst. Returns false if the engine was not Idle.
    fn begin(&self) -> bool {
        self.state_tx.send_if_modified(|state| {
            if *state == TrackingState::Idle {
                *state = TrackingState::AwaitingFirst;
                true
            } else {
                false
            }
        })
    }

    /// AwaitingFirst/Tracking → Halted. Returns false if not active.
    fn halt(&self, reason: HaltReason) -> bool {
        self.state_tx.send_if_modified(|state| {
            if state.is_active() {
                *state = TrackingState::Halted(reason);
                true
            } else {
                false
            }
        })
    }

    /// Append an observation if the session is still active.
    ///
    /// The state check, the append and the AwaitingFirst → Tracking transition
    /// happen under the state lock, so a concurrent `stop()` either lands
    /// before (observation discarded) or after (observation kept).
    ///
    /// Returns `(is_first, path snapshot)` or `None` if halted.
    fn record(&self, position: Position) -> Option<(bool, Vec<Position>)> {
        let mut recorded = None;

        self.state_tx.send_if_modified(|state| {
            let is_first = match state {
                TrackingState::AwaitingFirst => true,
                TrackingState::Tracking => false,
                TrackingState::Idle | TrackingState::Halted(_) => return false,
            };

            self.path
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .append(position);
            recorded = Some(is_first);

            if is_first {
                *state = TrackingState::Tracking;
            }
            is_first
        });

        // Only the poll task appends, so the snapshot can be taken after
        // the state lock is released.
        recorded.map(|is_first| (is_first, self.path()))
    }

    fn stop(&self) {
        if self.halt(HaltReason::UserStopped) {
            self.cancellation.cancel();
            tracing::info!("Position tracking stop requested");
        } else {
            tracing::debug!(state = %self.state(), "Stop ignored, engine not active");
        }
    }

    fn current(&self) -> Option<Position> {
        let path = self.path.read().unwrap_or_else(PoisonError::into_inner);
        path.current().copied()
    }

    fn path(&self) -> Vec<Position> {
        self.path
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .all()
    }

    async fn wait_until_halted(&self) -> HaltReason {
        let mut state_rx = self.state_tx.subscribe();
        let reason = match state_rx.wait_for(TrackingState::is_halted).await {
            Ok(state) => state
                .halt_reason()
                .cloned()
                .unwrap_or(HaltReason::UserStopped),
            // The sender lives in `self`, so the channel cannot close here.
            Err(_) => HaltReason::UserStopped,
        };
        reason
    }
}

/// Tracking engine - one polling session.
///
/// Dropping the engine stops the session.
pub struct TrackingEngine<S: PositionSource> {
    /// Source of raw position records.
    source: Arc<S>,

    /// Receiver of observation and error events.
    consumer: Arc<dyn TrackingConsumer>,

    /// Session state.
    shared: Arc<Shared>,
}

impl<S: PositionSource + 'static> TrackingEngine<S> {
    /// Create an idle engine.
    pub fn new(source: S, consumer: Arc<dyn TrackingConsumer>) -> Self {
        Self {
            source: Arc::new(source),
            consumer,
            shared: Arc::new(Shared::new()),
        }
    }

    /// Get a cloneable control handle for this session.
    pub fn handle(&self) -> TrackingHandle {
        TrackingHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Start polling every `interval_secs` seconds.
    ///
    /// The first fetch happens one interval after this call. Calling `start`
    /// on an engine that is not Idle does nothing. Must be called from within
    /// a tokio runtime.
    pub fn start(&self, interval_secs: f64) -> Result<(), StartError> {
        let period = interval_period(interval_secs)?;
        let first_tick = Instant::now()
            .checked_add(period)
            .ok_or(StartError::InvalidInterval(interval_secs))?;

        if !self.shared.begin() {
            tracing::debug!(state = %self.shared.state(), "Start ignored, engine not idle");
            return Ok(());
        }

        let source = Arc::clone(&self.source);
        let consumer = Arc::clone(&self.consumer);
        let shared = Arc::clone(&self.shared);

        tokio::spawn(async move {
            run(source, consumer, shared, first_tick, period).await;
        });

        Ok(())
    }

    /// Stop polling. Safe to call at any time, any number of times.
    pub fn stop(&self) {
        self.shared.stop();
    }

    /// Current state of the session.
    pub fn current_state(&self) -> TrackingState {
        self.shared.state()
    }

    /// Most recent observation.
    pub fn current(&self) -> Option<Position> {
        self.shared.current()
    }

    /// Snapshot of the path in observation order.
    pub fn path(&self) -> Vec<Position> {
        self.shared.path()
    }

    /// Wait for the session to halt and return the reason.
    ///
    /// Never resolves for an engine that is never started.
    pub async fn wait_until_halted(&self) -> HaltReason {
        self.shared.wait_until_halted().await
    }
}

impl<S: PositionSource> Drop for TrackingEngine<S> {
    fn drop(&mut self) {
        self.shared.stop();
    }
}

/// Cloneable control handle for a tracking session.
///
/// Unlike the engine it is not generic over the source, so consumers can hold
/// one to stop the session from inside a callback.
#[derive(Clone)]
pub struct TrackingHandle {
    shared: Arc<Shared>,
}

impl TrackingHandle {
    /// Stop polling. See [`TrackingEngine::stop`].
    pub fn stop(&self) {
        self.shared.stop();
    }

    /// Current state of the session.
    pub fn current_state(&self) -> TrackingState {
        self.shared.state()
    }

    /// Most recent observation.
    pub fn current(&self) -> Option<Position> {
        self.shared.current()
    }

    /// Snapshot of the path in observation order.
    pub fn path(&self) -> Vec<Position> {
        self.shared.path()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<TrackingState> {
        self.shared.state_tx.subscribe()
    }

    /// Wait for the session to halt and return the reason.
    pub async fn wait_until_halted(&self) -> HaltReason {
        self.shared.wait_until_halted().await
    }
}

impl std::fmt::Debug for TrackingHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackingHandle")
            .field("state", &self.shared.state())
            .finish()
    }
}

/// Run the poll loop until the session halts.
async fn run<S: PositionSource>(
    source: Arc<S>,
    consumer: Arc<dyn TrackingConsumer>,
    shared: Arc<Shared>,
    first_tick: Instant,
    period: Duration,
) {
    tracing::info!(
        interval_secs = period.as_secs_f64(),
        "Position tracking started"
    );

    let mut ticker = tokio::time::interval_at(first_tick, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut cycle: u64 = 0;

    loop {
        tokio::select! {
            biased;
            _ = shared.cancellation.cancelled() => break,
            _ = ticker.tick() => {}
        }

        cycle += 1;
        tracing::debug!(cycle, "Fetching position");

        let outcome = match source.fetch().await {
            Ok(raw) => decode(&raw).map_err(|e| {
                tracing::debug!(
                    latitude = %raw.latitude,
                    longitude = %raw.longitude,
                    message = %raw.message,
                    "Rejected position record"
                );
                HaltReason::Decode(e)
            }),
            Err(e) => Err(HaltReason::Fetch(e)),
        };

        match outcome {
            Ok(position) => {
                let Some((is_first, path)) = shared.record(position) else {
                    tracing::debug!(cycle, "Session halted during fetch, discarding observation");
                    break;
                };

                tracing::debug!(
                    cycle,
                    lat = position.latitude(),
                    lon = position.longitude(),
                    timestamp = position.observed_at_unix_seconds(),
                    path_len = path.len(),
                    is_first,
                    "Position observed"
                );
                consumer.on_observation(&position, is_first, &path);
            }
            Err(reason) => {
                if shared.halt(reason.clone()) {
                    tracing::warn!(cycle, error = %reason, "Position tracking halted");
                    consumer.on_error(&reason);
                } else {
                    tracing::debug!(cycle, error = %reason, "Session halted during fetch, discarding failure");
                }
                break;
            }
        }
    }

    tracing::info!(cycles = cycle, "Position tracking stopped");
}

//! Consumer interface for tracking events.
//!
//! - [`TrackingConsumer`] - Callback trait the engine drives (push API)
//! - [`TrackingEvent`] - Owned form of the callbacks, for channel delivery
//! - [`ChannelConsumer`] - Forwards events into a tokio mpsc channel

use tokio::sync::mpsc;

use super::state::{HaltReason, Position};

/// Receiver of tracking events.
///
/// Callbacks run on the engine's poll task with no engine lock held, so an
/// implementation may call [`TrackingHandle::stop`](super::TrackingHandle::stop)
/// from inside either method. Callbacks should return quickly; the next cycle
/// is not scheduled until they do.
pub trait TrackingConsumer: Send + Sync {
    /// A position was fetched, decoded and appended to the path.
    ///
    /// `is_first` is true exactly once per session, on the first observation.
    /// `path` is the full path including `position` as its last element.
    fn on_observation(&self, position: &Position, is_first: bool, path: &[Position]);

    /// The session halted because of a fetch or decode failure.
    fn on_error(&self, reason: &HaltReason);
}

/// Owned tracking event.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackingEvent {
    Observation {
        position: Position,
        is_first: bool,
        path: Vec<Position>,
    },
    Error(HaltReason),
}

/// Consumer that forwards every event into an unbounded mpsc channel.
///
/// Events are dropped silently once the receiver is gone.
#[derive(Debug, Clone)]
pub struct ChannelConsumer {
    event_tx: mpsc::UnboundedSender<TrackingEvent>,
}

impl ChannelConsumer {
    /// Create a consumer and the receiving end of its channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TrackingEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        (Self { event_tx }, event_rx)
    }

    fn forward(&self, event: TrackingEvent) {
        if self.event_tx.send(event).is_err() {
            tracing::trace!("Tracking event receiver dropped, discarding event");
        }
    }
}

impl TrackingConsumer for ChannelConsumer {
    fn on_observation(&self, position: &Position, is_first: bool, path: &[Position]) {
        self.forward(TrackingEvent::Observation {
            position: *position,
            is_first,
            path: path.to_vec(),
        });
    }

    fn on_error(&self, reason: &HaltReason) {
        self.forward(TrackingEvent::Error(reason.clone()));
    }
}

//! Event system for wheel state changes
//!
//! Provides:
//! - Event types for spin lifecycle and segment changes
//! - Event dispatcher for publishing events to subscribers
//!
//! Subscription is explicit: every subscriber receives each stop event
//! exactly once per spin, and a wheel with no subscribers is valid.

use tokio::sync::broadcast;

/// Wheel event types
#[derive(Debug, Clone)]
pub enum WheelEvent {
    /// A spin started (actuator engaged)
    SpinStarted,
    /// The wheel rotated past a divider
    DividerStep {
        /// Actuator angle at the crossing, in degrees.
        angle_deg: f64,
    },
    /// The wheel settled on a segment
    Stopped {
        /// Id of the winning segment.
        segment_id: u64,
        /// Label of the winning segment.
        label: String,
    },
    /// The segment list changed (add, remove, rename, clear)
    SegmentsChanged {
        /// New segment count.
        count: usize,
    },
    /// The wheel layout was regenerated
    Rebuilt {
        /// Number of parts in the new layout.
        parts: usize,
    },
}

impl std::fmt::Display for WheelEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WheelEvent::SpinStarted => write!(f, "Spin started"),
            WheelEvent::DividerStep { angle_deg } => {
                write!(f, "Divider step at {:.1} deg", angle_deg)
            }
            WheelEvent::Stopped { segment_id, label } => {
                write!(f, "Stopped on segment {} ({})", segment_id, label)
            }
            WheelEvent::SegmentsChanged { count } => {
                write!(f, "Segments changed: {} total", count)
            }
            WheelEvent::Rebuilt { parts } => write!(f, "Layout rebuilt with {} parts", parts),
        }
    }
}

/// Event dispatcher for publishing wheel events to subscribers
#[derive(Clone)]
pub struct EventDispatcher {
    /// Broadcast sender channel for wheel events.
    tx: broadcast::Sender<WheelEvent>,
}

impl EventDispatcher {
    /// Create a new event dispatcher
    ///
    /// # Arguments
    /// * `buffer_size` - Size of the broadcast buffer (default 100)
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size);
        Self { tx }
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<WheelEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to all subscribers
    ///
    /// Returns the number of subscribers the event reached. A wheel with
    /// no observers is valid, so a send with no receivers is not an error.
    pub fn publish(&self, event: WheelEvent) -> usize {
        tracing::trace!(%event, "publishing wheel event");
        self.tx.send(event).unwrap_or(0)
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new(100)
    }
}

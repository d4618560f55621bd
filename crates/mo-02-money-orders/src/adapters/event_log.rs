//! Event Log Adapter
//!
//! Implements `EventPublisher` by recording events and logging them as JSON.

use crate::domain::MoneyOrderEvent;
use crate::ports::outbound::EventPublisher;
use parking_lot::RwLock;
use tracing::{info, warn};

/// Recording event publisher.
#[derive(Default)]
pub struct InMemoryEventLog {
    events: RwLock<Vec<MoneyOrderEvent>>,
}

impl InMemoryEventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all published events, oldest first.
    pub fn events(&self) -> Vec<MoneyOrderEvent> {
        self.events.read().clone()
    }

    /// Number of published events.
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Whether nothing was published.
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

impl EventPublisher for InMemoryEventLog {
    fn publish(&self, event: MoneyOrderEvent) {
        match serde_json::to_string(&event) {
            Ok(json) => info!(event = event.name(), payload = %json, "Order event"),
            Err(e) => warn!(event = event.name(), error = %e, "Order event not serializable"),
        }
        self.events.write().push(event);
    }
}

//! Append-only event log collaborator.

use crate::engine::PoolEvent;

/// Receives the facts the engine emits after each committed operation.
///
/// The log is write-only from the engine's perspective: nothing in the
/// pricing or accounting path ever reads it back, so implementations are
/// free to buffer, forward, or drop events without affecting pool state.
pub trait EventSink {
    /// Appends one event to the log.
    fn record(&mut self, event: PoolEvent);
}

/// A sink that discards every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: PoolEvent) {}
}

/// A sink that retains every event in memory, in emission order.
///
/// Handy for hosts that surface an audit trail and for asserting on
/// emitted facts in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    events: Vec<PoolEvent>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in emission order.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for MemorySink {
    fn record(&mut self, event: PoolEvent) {
        self.events.push(event);
    }
}

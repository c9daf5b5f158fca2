use std::collections::VecDeque;

use super::event::TelemetryEvent;
use super::metrics::{compute_snapshot, TelemetrySnapshot};

/// Events kept by a default recorder. Older ones fall off the front.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Bounded, append-only journal of the session's telemetry.
#[derive(Debug)]
pub struct TelemetryRecorder {
    events: VecDeque<TelemetryEvent>,
    capacity: usize,
}

impl Default for TelemetryRecorder {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl TelemetryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero capacity is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    pub fn record(&mut self, event: TelemetryEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Oldest first.
    pub fn events(&self) -> impl Iterator<Item = &TelemetryEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        compute_snapshot(&self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

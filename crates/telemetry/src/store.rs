//! Thread-safe, bounded in-memory store of finished traces.

use crate::TelemetryError;
use crate::model::{ExecutionTrace, TraceSummary};
use std::sync::RwLock;

/// Default number of traces kept before pruning.
pub const DEFAULT_MAX_TRACES: usize = 1_000;

/// Bounded trace store.
///
/// Thread-safe via `RwLock`. When full, the oldest tenth of the stored
/// traces is dropped before the next insert.
pub struct TraceStore {
    max_traces: usize,
    /// Stored traces, most recent last.
    traces: RwLock<Vec<ExecutionTrace>>,
}

impl TraceStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_TRACES)
    }

    /// Create a store holding at most `max_traces` traces (minimum 1).
    pub fn with_capacity(max_traces: usize) -> Self {
        Self {
            max_traces: max_traces.max(1),
            traces: RwLock::new(Vec::new()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.max_traces
    }

    /// Store a trace and return its id.
    pub fn record(&self, trace: ExecutionTrace) -> String {
        let id = trace.id.clone();
        let mut traces = self.traces.write().unwrap();

        if traces.len() >= self.max_traces {
            let drain_count = (self.max_traces / 10).max(1).min(traces.len());
            traces.drain(..drain_count);
            tracing::debug!(pruned = drain_count, "Pruned oldest traces");
        }

        traces.push(trace);
        id
    }

    /// Fetch a trace by id.
    pub fn get(&self, id: &str) -> Result<ExecutionTrace, TelemetryError> {
        self.traces
            .read()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| TelemetryError::UnknownTrace(id.to_string()))
    }

    /// Summary of a stored trace.
    pub fn summary(&self, id: &str) -> Result<TraceSummary, TelemetryError> {
        self.get(id).map(|t| t.summary())
    }

    /// The `n` most recent traces, newest first.
    pub fn recent(&self, n: usize) -> Vec<ExecutionTrace> {
        self.traces
            .read()
            .unwrap()
            .iter()
            .rev()
            .take(n)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.traces.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TraceStore {
    fn default() -> Self {
        Self::new()
    }
}

//! Execution tracing for Propuestas.
//!
//! Every `generate` call records an ordered list of pipeline steps and
//! errors with timestamps. Finished traces can be kept in a bounded
//! [`TraceStore`] so the gateway can serve them back by id.

pub mod model;
pub mod store;

pub use model::{ExecutionState, ExecutionTrace, TraceError, TraceStep, TraceSummary};
pub use store::{DEFAULT_MAX_TRACES, TraceStore};

/// Errors from the telemetry subsystem.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("unknown trace id: {0}")]
    UnknownTrace(String),
}

//! Post-hoc correlation of execution responses with host telemetry
//!
//! The execution core measures time and memory around the strategy call,
//! which is an approximation. The hosting platform later writes an
//! authoritative REPORT line for each invocation into the retained log
//! stream. This crate scans that stream for the line matching a prior
//! execution's request id and backfills the response's `time` and `memory`
//! fields with the extracted figures.
//!
//! The log store itself is an external collaborator: only its read
//! interface is defined here, alongside an in-memory implementation for
//! tests and local runs.

mod correlate;
mod store;

pub use correlate::correlate;
pub use store::{LogEvent, LogStore, MemoryLogStore};

/// Result type for correlation operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Correlation failures. Absent or not-yet-written REPORT lines are not
/// errors (the response keeps zeroed metrics); only store faults surface.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The log store query itself failed
    #[error("log store query failed: {0}")]
    Store(String),
}

//! Error types for the execution core

/// Result type for execution-core operations
pub type Result<T> = std::result::Result<T, JudgeError>;

/// Infrastructure faults.
///
/// Graded submission failures (compile errors, guest exceptions, invalid
/// requests) are carried as data inside [`crate::Verdict`] and never surface
/// here; these variants propagate past the executor boundary to the caller.
#[derive(Debug, thiserror::Error)]
pub enum JudgeError {
    /// Scratch workspace could not be created or written
    #[error("workspace I/O failure: {0}")]
    Workspace(#[from] std::io::Error),

    /// A guest toolchain process could not be started or awaited
    #[error("failed to run '{tool}': {source}")]
    Spawn {
        /// Program the strategy tried to execute
        tool: String,
        #[source]
        source: std::io::Error,
    },
}

//! Execution core of the code-judging service
//!
//! Accepts a submission (source text plus a declared guest language), runs it
//! in an isolated scratch workspace and returns a structured verdict with
//! captured output and locally measured resource usage. The core assumes it
//! already runs inside a single-tenant, ephemeral host: OS-level isolation
//! belongs to the hosting platform, this crate only adds subprocess-level
//! execution and in-process measurement.

mod error;
mod executor;
mod profiler;
mod strategy;
mod types;
mod workspace;

pub use error::{JudgeError, Result};
pub use executor::Executor;
pub use profiler::{profile, Profiled};
pub use strategy::{for_language, CppStrategy, PythonStrategy, Strategy};
pub use types::{
    description, ExecutionContext, ExecutionId, Language, RunReport, RunRequest, Verdict,
};
pub use workspace::Workspace;

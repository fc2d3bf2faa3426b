//! Core wire types for submission execution

use serde::{Deserialize, Serialize};

/// Classification labels used in the response `description` field.
///
/// Callers match on these strings, so they are part of the wire contract.
pub mod description {
    pub const SUCCESS: &str = "Success";
    pub const IMPORT_ERROR: &str = "Import Error";
    pub const RUNTIME_ERROR: &str = "Runtime Error";
    pub const COMPILE_OR_RUNTIME_ERROR: &str = "Compilation or Runtime Error";
    pub const NO_LANGUAGE: &str = "No Code Language Specified";
    pub const INVALID_LANGUAGE: &str = "Invalid Code Language Specified";
    pub const NO_CODE: &str = "No Code Specified";
}

/// Guest languages accepted by the executor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Interpreted strategy: load and call the `Solution.main` entry point
    Python,
    /// Compiled strategy: compile with an external toolchain, run the binary
    Cpp,
}

impl Language {
    /// Parse a client-supplied language tag. Trimmed and case-insensitive.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "python" => Some(Language::Python),
            "cpp" => Some(Language::Cpp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Cpp => "cpp",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inbound submission.
///
/// Both fields are optional on the wire so that missing ones reach the
/// executor's validation checks instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunRequest {
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub code: Option<String>,
}

impl RunRequest {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            code: Some(code.into()),
        }
    }
}

/// Result of one execution attempt, prior to the resource-metric merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// 200 success, 400 graded failure, 403 rejected before execution
    pub status_code: u16,

    /// One of the [`description`] labels
    pub description: String,

    /// Produced values: a single return value or captured stdout blob
    pub results: Vec<serde_json::Value>,

    /// Captured textual output, preserved up to the point of failure
    pub prints: Vec<String>,

    /// Error strings; empty exactly when the execution succeeded
    pub errors: Vec<String>,
}

impl Verdict {
    pub fn new(status_code: u16, description: impl Into<String>) -> Self {
        Self {
            status_code,
            description: description.into(),
            results: Vec::new(),
            prints: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_results(mut self, results: Vec<serde_json::Value>) -> Self {
        self.results = results;
        self
    }

    pub fn with_prints(mut self, prints: Vec<String>) -> Self {
        self.prints = prints;
        self
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    /// Check if the execution is considered successful
    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}

/// Final response: the verdict plus locally measured resource usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    #[serde(flatten)]
    pub verdict: Verdict,

    /// Wall-clock duration in milliseconds. 0 when rejected before execution.
    pub time: f64,

    /// Host RSS delta in MB. May be negative, not clamped.
    pub memory: f64,
}

impl RunReport {
    /// Short-circuit rejection: no workspace write, no strategy invocation.
    pub fn rejected(label: &str, reason: &str) -> Self {
        Self {
            verdict: Verdict::new(403, label).with_errors(vec![reason.to_string()]),
            time: 0.0,
            memory: 0.0,
        }
    }
}

/// Unique execution identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutionId(pub uuid::Uuid);

impl ExecutionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ExecutionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ExecutionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle correlating one execution to its entry in the external
/// log store. Supplied by the invocation context, consumed only by the
/// post-hoc correlator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionContext {
    pub request_id: String,
    pub log_group_name: String,
    pub log_stream_name: String,
}

//! Submission dispatch: validation, strategy selection, profiling

use crate::error::Result;
use crate::profiler;
use crate::strategy;
use crate::types::{description, ExecutionId, Language, RunReport, RunRequest};
use crate::workspace::Workspace;

/// Validates and executes submissions.
///
/// Stateless: one instance serves any number of sequential invocations, and
/// every accepted submission gets its own scratch workspace, so instances
/// may also be shared across concurrent invocations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Executor;

impl Executor {
    pub fn new() -> Self {
        Self
    }

    /// Run one submission to completion.
    ///
    /// Three checks happen in strict order before anything touches disk:
    /// language present, language in the allow-list, code present. Each
    /// failure short-circuits to a 403 report with zeroed metrics. Only
    /// infrastructure faults escape as `Err`; every graded outcome is `Ok`.
    pub async fn run(&self, request: RunRequest) -> Result<RunReport> {
        let Some(raw_language) = request.language.as_deref() else {
            return Ok(RunReport::rejected(
                description::NO_LANGUAGE,
                "Missing langauge parameter",
            ));
        };
        let Some(language) = Language::parse(raw_language) else {
            return Ok(RunReport::rejected(
                description::INVALID_LANGUAGE,
                "Invalid langauge parameter",
            ));
        };
        let Some(code) = request.code.as_deref() else {
            return Ok(RunReport::rejected(
                description::NO_CODE,
                "Missing code parameter",
            ));
        };

        let id = ExecutionId::new();
        let workspace = Workspace::create()?;
        let strategy = strategy::for_language(language);

        tracing::info!(
            execution_id = %id,
            language = %language,
            code_len = code.len(),
            "executing submission"
        );

        let profiled = profiler::profile(strategy.run(&workspace, code)).await;
        let verdict = profiled.value?;

        tracing::info!(
            execution_id = %id,
            status = verdict.status_code,
            duration_ms = profiled.duration_ms,
            memory_mb = profiled.memory_mb,
            "submission complete"
        );

        Ok(RunReport {
            verdict,
            time: profiled.duration_ms,
            memory: profiled.memory_mb,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(language: Option<&str>, code: Option<&str>) -> RunRequest {
        RunRequest {
            language: language.map(String::from),
            code: code.map(String::from),
        }
    }

    #[tokio::test]
    async fn missing_language_is_rejected_first() {
        // code also missing, but the language check runs first
        let report = Executor::new().run(request(None, None)).await.unwrap();
        assert_eq!(report.verdict.status_code, 403);
        assert_eq!(report.verdict.description, description::NO_LANGUAGE);
        assert_eq!(report.verdict.errors, vec!["Missing langauge parameter"]);
        assert_eq!(report.time, 0.0);
        assert_eq!(report.memory, 0.0);
    }

    #[tokio::test]
    async fn unknown_language_is_rejected() {
        let report = Executor::new()
            .run(request(Some("java"), Some("class A {}")))
            .await
            .unwrap();
        assert_eq!(report.verdict.status_code, 403);
        assert_eq!(report.verdict.description, description::INVALID_LANGUAGE);
        assert_eq!(report.verdict.errors, vec!["Invalid langauge parameter"]);
        assert_eq!(report.time, 0.0);
    }

    #[tokio::test]
    async fn language_matching_ignores_case_and_whitespace() {
        let report = Executor::new()
            .run(request(Some("  PyThOn  "), None))
            .await
            .unwrap();
        // language accepted, so the failure is the missing code
        assert_eq!(report.verdict.description, description::NO_CODE);
        assert_eq!(report.verdict.errors, vec!["Missing code parameter"]);
    }

    #[tokio::test]
    async fn python_submission_round_trip() {
        let code = "class Solution:\n    def main(self):\n        print('hi')\n        return 41 + 1\n";
        let report = Executor::new()
            .run(request(Some("python"), Some(code)))
            .await
            .unwrap();
        assert_eq!(report.verdict.status_code, 200);
        assert_eq!(report.verdict.results, vec![serde_json::json!(42)]);
        assert_eq!(report.verdict.prints, vec!["hi\n"]);
        assert!(report.time >= 0.0);
    }

    #[tokio::test]
    async fn cpp_submission_round_trip() {
        let code = "#include <iostream>\nint main() { std::cout << \"42\"; return 0; }\n";
        let report = Executor::new()
            .run(request(Some("cpp"), Some(code)))
            .await
            .unwrap();
        assert_eq!(report.verdict.status_code, 200);
        assert_eq!(report.verdict.results, vec![serde_json::json!("42")]);
        assert_eq!(report.verdict.errors, vec![""]);
    }

    #[tokio::test]
    async fn repeated_runs_yield_identical_verdicts() {
        let code = "class Solution:\n    def main(self):\n        return [1, 2, 3]\n";
        let executor = Executor::new();
        let first = executor
            .run(request(Some("python"), Some(code)))
            .await
            .unwrap();
        let second = executor
            .run(request(Some("python"), Some(code)))
            .await
            .unwrap();
        // timing and memory may differ between runs, the verdict must not
        assert_eq!(first.verdict, second.verdict);
    }
}

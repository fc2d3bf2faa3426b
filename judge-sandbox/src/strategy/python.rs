//! Interpreted strategy: run the `Solution.main` entry point under a
//! Python interpreter

use super::Strategy;
use crate::error::{JudgeError, Result};
use crate::types::{description, Language, Verdict};
use crate::workspace::Workspace;
use async_trait::async_trait;
use serde::Deserialize;
use std::process::Stdio;
use tokio::process::Command;

const SOURCE_FILE: &str = "script.py";
const DRIVER_FILE: &str = "_driver.py";

/// Driver run next to the submitted source. It performs the load phase
/// (import `Solution` from `script`, resolve its `main` attribute) and the
/// call phase (`Solution().main()`) with stdout redirected into a buffer,
/// then reports exactly one JSON line on its real stdout. Guest prints are
/// preserved in the buffer up to the point of failure.
const DRIVER: &str = r#"import io
import json
import sys
from contextlib import redirect_stdout

_buffer = io.StringIO()


def _emit(payload):
    sys.stdout.write(json.dumps(payload))
    sys.stdout.write("\n")
    sys.stdout.flush()
    sys.exit(0)


try:
    with redirect_stdout(_buffer):
        from script import Solution
        Solution.main
except Exception as exc:
    _emit({"phase": "import", "error": str(exc), "prints": _buffer.getvalue()})

try:
    with redirect_stdout(_buffer):
        _value = Solution().main()
except Exception as exc:
    _emit({"phase": "call", "error": str(exc), "prints": _buffer.getvalue()})

try:
    json.dumps(_value)
except (TypeError, ValueError):
    _value = repr(_value)

_emit({"phase": "ok", "result": _value, "prints": _buffer.getvalue()})
"#;

/// One protocol line from the driver
#[derive(Debug, Deserialize)]
struct DriverReport {
    phase: String,
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    prints: String,
    #[serde(default)]
    error: String,
}

/// Interpreted-language strategy backed by an external Python interpreter
pub struct PythonStrategy {
    interpreter: String,
}

impl PythonStrategy {
    pub fn new() -> Self {
        Self {
            interpreter: "python3".to_string(),
        }
    }

    pub fn with_interpreter(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }
}

impl Default for PythonStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Strategy for PythonStrategy {
    async fn run(&self, workspace: &Workspace, code: &str) -> Result<Verdict> {
        workspace.write(code, SOURCE_FILE)?;
        let driver = workspace.write(DRIVER, DRIVER_FILE)?;

        let output = Command::new(&self.interpreter)
            .arg(&driver)
            .current_dir(workspace.path())
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| JudgeError::Spawn {
                tool: self.interpreter.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let report = stdout
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .and_then(|line| serde_json::from_str::<DriverReport>(line).ok());

        let Some(report) = report else {
            // Interpreter died without a protocol line (killed, internal
            // crash). Still a graded outcome, not an infrastructure fault.
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            tracing::warn!(exit = ?output.status.code(), "interpreter exited without a report line");
            return Ok(Verdict::new(400, description::RUNTIME_ERROR).with_errors(vec![stderr]));
        };

        let prints = if report.prints.is_empty() {
            Vec::new()
        } else {
            vec![report.prints]
        };

        let verdict = match report.phase.as_str() {
            "ok" => Verdict::new(200, description::SUCCESS)
                .with_results(vec![report.result.unwrap_or(serde_json::Value::Null)])
                .with_prints(prints),
            "import" => Verdict::new(400, description::IMPORT_ERROR)
                .with_prints(prints)
                .with_errors(vec![report.error]),
            _ => Verdict::new(400, description::RUNTIME_ERROR)
                .with_prints(prints)
                .with_errors(vec![report.error]),
        };
        Ok(verdict)
    }

    fn language(&self) -> Language {
        Language::Python
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run(code: &str) -> Verdict {
        let workspace = Workspace::create().unwrap();
        PythonStrategy::new().run(&workspace, code).await.unwrap()
    }

    #[tokio::test]
    async fn returns_value_and_captures_prints() {
        let verdict = run(
            "class Solution:\n    def main(self):\n        print('hi')\n        return 42\n",
        )
        .await;
        assert_eq!(verdict.status_code, 200);
        assert_eq!(verdict.description, description::SUCCESS);
        assert_eq!(verdict.results, vec![serde_json::json!(42)]);
        assert_eq!(verdict.prints, vec!["hi\n"]);
        assert!(verdict.errors.is_empty());
    }

    #[tokio::test]
    async fn omits_prints_when_nothing_was_printed() {
        let verdict =
            run("class Solution:\n    def main(self):\n        return 'done'\n").await;
        assert_eq!(verdict.status_code, 200);
        assert_eq!(verdict.results, vec![serde_json::json!("done")]);
        assert!(verdict.prints.is_empty());
    }

    #[tokio::test]
    async fn missing_entry_point_is_an_import_error() {
        let verdict = run("def main():\n    return 1\n").await;
        assert_eq!(verdict.status_code, 400);
        assert_eq!(verdict.description, description::IMPORT_ERROR);
        assert!(verdict.results.is_empty());
        assert_eq!(verdict.errors.len(), 1);
        assert!(!verdict.errors[0].is_empty());
    }

    #[tokio::test]
    async fn syntax_error_is_an_import_error() {
        let verdict = run("class Solution\n    def main(self):\n        return 1\n").await;
        assert_eq!(verdict.status_code, 400);
        assert_eq!(verdict.description, description::IMPORT_ERROR);
    }

    #[tokio::test]
    async fn guest_exception_is_a_runtime_error_with_prints_preserved() {
        let verdict = run(
            "class Solution:\n    def main(self):\n        print('before')\n        raise ValueError('boom')\n",
        )
        .await;
        assert_eq!(verdict.status_code, 400);
        assert_eq!(verdict.description, description::RUNTIME_ERROR);
        assert_eq!(verdict.prints, vec!["before\n"]);
        assert_eq!(verdict.errors, vec!["boom"]);
    }

    #[tokio::test]
    async fn non_json_return_value_falls_back_to_repr() {
        let verdict =
            run("class Solution:\n    def main(self):\n        return {1, 2}\n").await;
        assert_eq!(verdict.status_code, 200);
        let rendered = verdict.results[0].as_str().unwrap();
        assert!(rendered.starts_with('{'));
    }

    #[tokio::test]
    async fn missing_interpreter_is_an_infrastructure_fault() {
        let workspace = Workspace::create().unwrap();
        let strategy = PythonStrategy::with_interpreter("definitely-not-a-python");
        let err = strategy
            .run(&workspace, "class Solution:\n    def main(self):\n        return 1\n")
            .await
            .unwrap_err();
        assert!(matches!(err, JudgeError::Spawn { .. }));
    }
}

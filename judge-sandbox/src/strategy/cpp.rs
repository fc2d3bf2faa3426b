//! Compiled strategy: ahead-of-time compile with an external toolchain,
//! then run the produced binary

use super::Strategy;
use crate::error::{JudgeError, Result};
use crate::types::{description, Language, Verdict};
use crate::workspace::Workspace;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

const SOURCE_FILE: &str = "script.cpp";
const BINARY_FILE: &str = "a.out";

/// Compiled-language strategy backed by an external C++ compiler
pub struct CppStrategy {
    compiler: String,
}

impl CppStrategy {
    pub fn new() -> Self {
        Self {
            compiler: "g++".to_string(),
        }
    }

    pub fn with_compiler(compiler: impl Into<String>) -> Self {
        Self {
            compiler: compiler.into(),
        }
    }
}

impl Default for CppStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Strategy for CppStrategy {
    async fn run(&self, workspace: &Workspace, code: &str) -> Result<Verdict> {
        workspace.write(code, SOURCE_FILE)?;

        let compile = Command::new(&self.compiler)
            .arg(SOURCE_FILE)
            .current_dir(workspace.path())
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| JudgeError::Spawn {
                tool: self.compiler.clone(),
                source,
            })?;

        let compiler_stdout = String::from_utf8_lossy(&compile.stdout).to_string();
        let compiler_stderr = String::from_utf8_lossy(&compile.stderr).to_string();

        if !compile.status.success() {
            // Compiler stdout is surfaced both as a result and a print so
            // callers treat this path uniformly with successful execution.
            return Ok(Verdict::new(400, description::COMPILE_OR_RUNTIME_ERROR)
                .with_results(vec![compiler_stdout.clone().into()])
                .with_prints(vec![compiler_stdout])
                .with_errors(vec![compiler_stderr]));
        }

        let binary = workspace.path().join(BINARY_FILE);
        let run = Command::new(&binary)
            .current_dir(workspace.path())
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| JudgeError::Spawn {
                tool: binary.display().to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&run.stdout).to_string();
        let stderr = String::from_utf8_lossy(&run.stderr).to_string();

        // Success requires a zero exit AND an empty stderr: a binary that
        // exits cleanly but writes diagnostics is graded a runtime error.
        let succeeded = run.status.success() && stderr.is_empty();
        let verdict = if succeeded {
            Verdict::new(200, description::SUCCESS)
        } else {
            Verdict::new(400, description::RUNTIME_ERROR)
        };
        Ok(verdict
            .with_results(vec![stdout.clone().into()])
            .with_prints(vec![stdout])
            .with_errors(vec![stderr]))
    }

    fn language(&self) -> Language {
        Language::Cpp
    }
}

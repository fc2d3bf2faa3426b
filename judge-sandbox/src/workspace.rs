//! Per-invocation scratch workspace

use crate::error::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated scratch directory for one submission.
///
/// Every invocation gets a fresh temporary directory, so concurrent
/// invocations never share files. The directory and everything written into
/// it are removed on drop. The working directory of the host process is
/// never changed; subprocesses receive the workspace path explicitly.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("judge-").tempdir()?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write submitted source into the workspace under `filename`.
    ///
    /// Writes line by line with a newline appended after each line: mixed
    /// `\r\n` input is normalized and the file always ends with a trailing
    /// newline. An existing file of the same name is overwritten.
    pub fn write(&self, code: &str, filename: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(filename);
        let mut contents = String::with_capacity(code.len() + 1);
        for line in code.split('\n') {
            contents.push_str(line.strip_suffix('\r').unwrap_or(line));
            contents.push('\n');
        }
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_appends_trailing_newline() {
        let workspace = Workspace::create().unwrap();
        let path = workspace.write("print('hi')", "script.py").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "print('hi')\n");
    }

    #[test]
    fn write_normalizes_crlf() {
        let workspace = Workspace::create().unwrap();
        let path = workspace.write("a = 1\r\nb = 2", "script.py").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "a = 1\nb = 2\n");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let workspace = Workspace::create().unwrap();
        workspace.write("first", "script.py").unwrap();
        let path = workspace.write("second", "script.py").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "second\n");
    }

    #[test]
    fn workspaces_are_isolated() {
        let a = Workspace::create().unwrap();
        let b = Workspace::create().unwrap();
        assert_ne!(a.path(), b.path());
    }
}

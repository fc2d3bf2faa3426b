//! Per-language execution strategies

mod cpp;
mod python;

pub use cpp::CppStrategy;
pub use python::PythonStrategy;

use crate::error::Result;
use crate::types::{Language, Verdict};
use crate::workspace::Workspace;
use async_trait::async_trait;

/// Uniform execution contract, one implementation per guest language.
#[async_trait]
pub trait Strategy: Send + Sync {
    /// Execute submitted source inside `workspace`.
    ///
    /// Every submission-level failure (compile error, guest exception,
    /// missing entry point) is classified into an `Ok(Verdict)`; `Err` is
    /// reserved for infrastructure faults such as an unlaunchable toolchain.
    async fn run(&self, workspace: &Workspace, code: &str) -> Result<Verdict>;

    /// Guest language this strategy executes
    fn language(&self) -> Language;
}

/// Strategy instance for a validated language.
pub fn for_language(language: Language) -> Box<dyn Strategy> {
    match language {
        Language::Python => Box::new(PythonStrategy::new()),
        Language::Cpp => Box::new(CppStrategy::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_matches_language() {
        assert_eq!(for_language(Language::Python).language(), Language::Python);
        assert_eq!(for_language(Language::Cpp).language(), Language::Cpp);
    }
}

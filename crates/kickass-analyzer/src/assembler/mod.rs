//! The external assembler the analyzer delegates to.

mod error;
mod kickass;

use std::path::PathBuf;

pub use error::AssemblerError;
pub use kickass::KickAssembler;

/// One buffer to assemble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleRequest {
    /// Unsaved buffer content.
    pub text: String,
    /// On-disk location of the buffer, used to resolve relative imports.
    pub path: Option<PathBuf>,
}

/// Everything one assembler run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblerOutput {
    /// Contents of the `-asminfo` report, if the assembler wrote one.
    pub report_text: Option<String>,
    pub stdout: String,
    pub stderr: String,
    pub exit_status: Option<i32>,
}

impl AssemblerOutput {
    /// First non-blank stderr line, falling back to stdout.
    pub fn first_error_line(&self) -> Option<&str> {
        self.stderr
            .lines()
            .chain(self.stdout.lines())
            .map(str::trim)
            .find(|line| !line.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerConfig {
    pub java_path: String,
    pub jar_path: Option<PathBuf>,
    pub extra_args: Vec<String>,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            java_path: "java".to_string(),
            jar_path: None,
            extra_args: Vec::new(),
        }
    }
}

/// Blocking assembler invocation; callers run it on a blocking thread.
pub trait Assembler: Send + Sync {
    fn assemble(
        &self,
        request: &AssembleRequest,
    ) -> Result<AssemblerOutput, AssemblerError>;

    fn configure(
        &self,
        _config: AssemblerConfig,
    ) {
    }
}

#[cfg(test)]
#[path = "../../tests/src/assembler/assembler_tests.rs"]
mod tests;

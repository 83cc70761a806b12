use crate::error::ViewerError;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// Shown when the parser fails without writing to stderr
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// A single run of `<parser> <script> <file>`
#[derive(Debug, Clone)]
pub struct ParserInvocation {
    parser: PathBuf,
    script: PathBuf,
    file: PathBuf,
}

/// Everything the parser process left behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
}

impl ParserInvocation {
    pub fn new(parser: impl Into<PathBuf>, script: impl Into<PathBuf>, file: impl Into<PathBuf>) -> Self {
        Self {
            parser: parser.into(),
            script: script.into(),
            file: file.into(),
        }
    }

    /// Spawn the parser and wait for it to exit, collecting both streams.
    ///
    /// There is no timeout: a parser that never exits keeps this future
    /// pending. Only a failure to start the process is an `Err`; everything
    /// the process reports comes back in the `InvocationResult`.
    pub async fn run(&self) -> Result<InvocationResult, ViewerError> {
        tracing::debug!(
            parser = %self.parser.display(),
            script = %self.script.display(),
            file = %self.file.display(),
            "spawning parser"
        );

        let output = Command::new(&self.parser)
            .arg(&self.script)
            .arg(&self.file)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| ViewerError::Spawn {
                parser: self.parser.display().to_string(),
                source,
            })?;

        let result = InvocationResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        };

        tracing::debug!(
            exit_code = ?result.exit_code,
            stdout_bytes = result.stdout.len(),
            stderr_bytes = result.stderr.len(),
            "parser exited"
        );

        Ok(result)
    }
}

impl InvocationResult {
    /// A run failed if the exit code is not zero or anything reached stderr.
    ///
    /// Benign warnings on stderr therefore also count as failure, even with
    /// exit code zero.
    pub fn is_failure(&self) -> bool {
        self.exit_code != Some(0) || !self.stderr.is_empty()
    }

    /// Text for the error message: stderr, or a generic fallback when empty
    pub fn error_text(&self) -> &str {
        if self.stderr.is_empty() {
            UNKNOWN_ERROR
        } else {
            &self.stderr
        }
    }
}

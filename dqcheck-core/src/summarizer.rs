//! Summarizer collaborator boundary.
//!
//! A [`Summarizer`] turns the prompt into narrative text. It is injected into
//! the analyzer as a trait object, so tests and embedding services can swap
//! in their own implementation. Failures are returned as
//! [`SummarizerError`]; [`summarize_or_warn`] turns them into an in-band
//! warning string so the statistical part of a response is never lost.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::prompt::SYSTEM_PROMPT;

/// Prefix of every summary produced from a summarizer failure.
pub const FAILURE_MARKER: &str = "⚠️";

/// Environment variable carrying the system role to command summarizers.
pub const SYSTEM_PROMPT_ENV: &str = "DQCHECK_SYSTEM_PROMPT";

/// Errors raised at the summarizer boundary.
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// No summarizer backend was configured
    #[error("no summarizer configured")]
    NotConfigured,

    /// The summarizer command could not be started
    #[error("failed to start summarizer command '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Talking to the summarizer process failed
    #[error("summarizer I/O failed: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The summarizer command exited unsuccessfully
    #[error("summarizer command exited with {status}: {stderr}")]
    CommandFailed { status: String, stderr: String },

    /// The summarizer did not answer in time
    #[error("summarizer timed out after {0:?}")]
    Timeout(Duration),

    /// The summarizer answered with nothing
    #[error("summarizer returned an empty response")]
    EmptyResponse,

    /// The summarizer answered with bytes that are not UTF-8
    #[error("summarizer response is not valid UTF-8")]
    InvalidEncoding,

    /// Backend-specific failure (quota, malformed payload, ...)
    #[error("{message}")]
    Service { message: String },
}

impl SummarizerError {
    /// Creates a backend-specific error.
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
        }
    }
}

/// Text-completion capability used to narrate a report.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Produces a summary for the given prompt.
    async fn summarize(&self, prompt: &str) -> Result<String, SummarizerError>;
}

/// Formats the in-band replacement for a failed summary.
pub fn failure_summary(error: &SummarizerError) -> String {
    format!("{} LLM Error: {}", FAILURE_MARKER, error)
}

/// Calls the summarizer and maps any failure to a warning string.
///
/// A blank summary counts as [`SummarizerError::EmptyResponse`], so the
/// returned string is never empty.
pub async fn summarize_or_warn(summarizer: &dyn Summarizer, prompt: &str) -> String {
    let result = summarizer.summarize(prompt).await.and_then(|summary| {
        if summary.trim().is_empty() {
            Err(SummarizerError::EmptyResponse)
        } else {
            Ok(summary)
        }
    });

    match result {
        Ok(summary) => summary,
        Err(e) => {
            tracing::warn!("Summarizer '{}' failed: {}", summarizer.name(), e);
            failure_summary(&e)
        }
    }
}

/// Summarizer that always reports [`SummarizerError::NotConfigured`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSummarizer;

#[async_trait]
impl Summarizer for DisabledSummarizer {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn summarize(&self, _prompt: &str) -> Result<String, SummarizerError> {
        Err(SummarizerError::NotConfigured)
    }
}

/// Summarizer backed by an external program.
///
/// The prompt is written to the program's stdin and its stdout is the
/// summary. The system role is exported as [`SYSTEM_PROMPT_ENV`].
#[derive(Debug, Clone)]
pub struct CommandSummarizer {
    program: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl CommandSummarizer {
    /// Creates a summarizer running `program` without arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    /// Builder method to set program arguments.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to bound how long the program may run.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    async fn run(&self, prompt: &str) -> Result<String, SummarizerError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env(SYSTEM_PROMPT_ENV, SYSTEM_PROMPT)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| SummarizerError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        let stdin = child.stdin.take();
        let feed = async move {
            let Some(mut stdin) = stdin else {
                return Ok(());
            };
            stdin.write_all(prompt.as_bytes()).await?;
            stdin.shutdown().await
        };

        let (fed, output) = tokio::join!(feed, child.wait_with_output());

        let output = output.map_err(|e| SummarizerError::Io {
            context: "waiting for summarizer output".to_string(),
            source: e,
        })?;

        // A program that ignores stdin may close it before the prompt is written.
        if let Err(e) = fed
            && e.kind() != std::io::ErrorKind::BrokenPipe
        {
            return Err(SummarizerError::Io {
                context: "writing prompt to summarizer".to_string(),
                source: e,
            });
        }

        if !output.status.success() {
            return Err(SummarizerError::CommandFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8(output.stdout).map_err(|_| SummarizerError::InvalidEncoding)?;
        let text = text.trim_end();
        if text.trim().is_empty() {
            return Err(SummarizerError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}

#[async_trait]
impl Summarizer for CommandSummarizer {
    fn name(&self) -> &str {
        &self.program
    }

    async fn summarize(&self, prompt: &str) -> Result<String, SummarizerError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.run(prompt))
                .await
                .map_err(|_| SummarizerError::Timeout(limit))?,
            None => self.run(prompt).await,
        }
    }
}

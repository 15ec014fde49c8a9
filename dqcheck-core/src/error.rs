//! Error types for the dqcheck pipeline.
//!
//! Only the loader and the configuration layer can fail. Once a table has been
//! loaded, sampling, profiling, scoring and rendering are total. Failures of
//! the external summarizer live in [`crate::summarizer::SummarizerError`] and
//! never surface through [`DqCheckError`].

use thiserror::Error;

/// Main error type for dqcheck operations.
#[derive(Debug, Error)]
pub enum DqCheckError {
    /// Input is not CSV (wrong extension, empty or header-less content)
    #[error("Input format error: {context}")]
    InputFormat { context: String },

    /// CSV content could not be parsed (ragged records, invalid UTF-8)
    #[error("CSV parse failed: {context}")]
    Parse {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration or validation error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O operation failed: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization or deserialization failed
    #[error("Serialization failed: {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results with DqCheckError
pub type Result<T> = std::result::Result<T, DqCheckError>;

impl DqCheckError {
    /// Creates an input format error
    pub fn input_format(context: impl Into<String>) -> Self {
        Self::InputFormat {
            context: context.into(),
        }
    }

    /// Creates a parse error wrapping the underlying reader error
    pub fn parse_failed<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Parse {
            context: context.into(),
            source: Box::new(error),
        }
    }

    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Returns true when the error means the caller supplied unusable input.
    ///
    /// These are the errors a service front-end reports as a client-side
    /// rejection (HTTP 400) rather than an internal failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InputFormat { .. } | Self::Parse { .. })
    }
}

/// Plain-message error used as the source of a [`DqCheckError::Parse`] when
/// the problem is structural rather than coming from the CSV reader.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StructureError(pub String);

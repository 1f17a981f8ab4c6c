//! Failure categories for a single page analysis.
//!
//! Every variant is terminal for the request. The orchestrator turns them into
//! report fields instead of returning them to the caller.

use serde::Serialize;
use thiserror::Error;

/// Why an analysis stopped before producing any facets.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// DNS, connect, TLS or timeout failure; no HTTP response was received.
    #[error("Failed to fetch URL: {0}")]
    Transport(String),

    /// The server answered outside the 2xx/3xx range.
    #[error("HTTP {status}: {reason}")]
    Http { status: u16, reason: String },

    /// The connection broke while streaming the body.
    #[error("Failed to read response: {message}")]
    Read { status: u16, message: String },

    /// The HTML parser gave up on the document.
    #[error("Failed to parse HTML: {0}")]
    Parse(String),
}

/// Discriminant of an [`AnalysisError`], carried in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    Transport,
    Http,
    Read,
    Parse,
}

impl AnalysisError {
    pub fn kind(&self) -> FailureKind {
        match self {
            AnalysisError::Transport(_) => FailureKind::Transport,
            AnalysisError::Http { .. } => FailureKind::Http,
            AnalysisError::Read { .. } => FailureKind::Read,
            AnalysisError::Parse(_) => FailureKind::Parse,
        }
    }

    /// Status code to report alongside this error, when the error knows it.
    ///
    /// Transport failures never saw a response, so they report 0. Parse
    /// failures happen after the fetch and leave the status to the caller.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AnalysisError::Transport(_) => Some(0),
            AnalysisError::Http { status, .. } | AnalysisError::Read { status, .. } => {
                Some(*status)
            }
            AnalysisError::Parse(_) => None,
        }
    }
}

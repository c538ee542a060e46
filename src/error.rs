//! Error taxonomy for a stub invocation.

use crate::infra::FsError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the two copies failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStep {
    /// target -> capture path
    Capture,
    /// injection path -> target
    Inject,
}

impl fmt::Display for CopyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyStep::Capture => f.write_str("capture"),
            CopyStep::Inject => f.write_str("inject"),
        }
    }
}

/// Errors that abort a stub run.
#[derive(Debug, Error)]
pub enum StubError {
    #[error("environment variable {var} not set, aborting")]
    MissingConfiguration { var: &'static str },

    #[error("expected exactly one argument, got {count}, aborting")]
    InvalidArguments { count: usize },

    #[error("failed to {step} {from} into {to}")]
    Io {
        step: CopyStep,
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: FsError,
    },
}

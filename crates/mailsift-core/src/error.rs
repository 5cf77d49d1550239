//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// `classify` was called with an empty candidate folder list.
    #[error("no candidate folders provided")]
    NoFolders,

    /// A rule set could not be parsed from JSON.
    #[error("Rule parse error: {0}")]
    RuleParse(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types shared by the desktop-entry core and the generation
//! flows.
//!
//! Every kind is fatal to the invocation that hit it; nothing is
//! retried. The command layer wraps these with `anyhow` context before
//! they reach the user.

use std::path::PathBuf;

/// Errors produced while loading, transforming, or writing artifacts.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// Input is not well-formed `[Section]` / `Key=Value` text.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Output file already present and `--force` was not given.
    #[error("output file already exists: {} (re-run with --force to overwrite)", .0.display())]
    OutputExists(PathBuf),

    /// A key the generators deliberately refuse to handle.
    #[error("support for '{0}' isn't implemented yet")]
    Unsupported(String),

    /// The requested distribution has no entry in the mapping table.
    #[error("distribution {0} is not supported")]
    UnknownDistribution(String),

    /// An upstream application id has no distribution-specific
    /// replacement.
    #[error("no distribution mapping for application {0}")]
    UnmappedApplication(String),

    /// The mapping table is not valid JSON.
    #[error("invalid mapping table: {0}")]
    MappingFormat(#[from] serde_json::Error),

    #[error(transparent)]
    Git(#[from] git2::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the library half of the crate.
pub type Result<T> = std::result::Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parse() {
        let err = GenError::Parse {
            line: 3,
            message: "expected 'Key=Value': garbage".into(),
        };
        assert_eq!(
            err.to_string(),
            "parse error at line 3: expected 'Key=Value': garbage"
        );
    }

    #[test]
    fn display_unsupported() {
        let err = GenError::Unsupported("NotShowIn".into());
        assert_eq!(err.to_string(), "support for 'NotShowIn' isn't implemented yet");
    }

    #[test]
    fn display_unknown_distribution() {
        let err = GenError::UnknownDistribution("Slackware".into());
        assert_eq!(err.to_string(), "distribution Slackware is not supported");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GenError>();
    }
}

//! Crate Error Types
//!
//! User-facing error taxonomy for the showreel CLI. Most of the
//! application is infallible by construction (the catalog is static);
//! errors surface only at the boundaries: script files, the persisted
//! intro marker, and clipboard access.

use thiserror::Error;

/// Errors produced by showreel operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A showcase id that is not in the catalog and was not loaded from a script.
    #[error("unknown showcase '{0}' (run `showreel list` for available ids)")]
    UnknownShowcase(String),

    /// A showcase script failed validation.
    #[error("invalid showcase script: {0}")]
    InvalidScript(String),

    /// No supported clipboard command was found on this system.
    #[error("no clipboard command available (tried pbcopy, wl-copy, xclip, xsel)")]
    ClipboardUnavailable,

    /// A capability that is stubbed out rather than implemented.
    #[error("{0} is not available yet")]
    NotAvailable(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse showcase script: {0}")]
    Script(#[from] serde_yaml::Error),

    #[error("failed to read saved state: {0}")]
    State(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_showcase_message_names_id() {
        let err = Error::UnknownShowcase("nope".to_string());
        assert!(err.to_string().contains("'nope'"));
        assert!(err.to_string().contains("showreel list"));
    }

    #[test]
    fn test_not_available_message() {
        let err = Error::NotAvailable("ROI report download");
        assert_eq!(err.to_string(), "ROI report download is not available yet");
    }

    #[test]
    fn test_io_error_wraps() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}

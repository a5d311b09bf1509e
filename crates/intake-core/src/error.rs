//! Error types module
//!
//! All failures surfaced by the intake client are unified under
//! [`IntakeError`]. Validation errors are recovered locally (marker or
//! alert, the form stays usable); upload/submission/transport errors abort
//! the in-progress submit and surface one human-readable message.

use crate::models::RejectReason;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like the batch ceiling
    Warn,
    /// Error level - for failed network operations
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Invalid field input: {0}")]
    InvalidField(String),

    #[error("File '{filename}' was rejected: {reason}")]
    FileRejected {
        filename: String,
        reason: RejectReason,
    },

    #[error("Upload failed for '{filename}': {message}")]
    Upload { filename: String, message: String },

    #[error("Final data submission failed: {0}")]
    Submission(String),

    #[error("Network error: {0}")]
    Transport(String),
}

/// Static metadata per variant: (error_code, recoverable, log_level).
/// The user message stays per-variant for dynamic content.
fn static_metadata(err: &IntakeError) -> (&'static str, bool, LogLevel) {
    match err {
        IntakeError::InvalidField(_) => ("INVALID_FIELD", false, LogLevel::Debug),
        IntakeError::FileRejected { reason, .. } => match reason {
            RejectReason::BatchTooLarge { .. } => ("BATCH_TOO_LARGE", false, LogLevel::Warn),
            RejectReason::BadExtension { .. } => ("BAD_EXTENSION", false, LogLevel::Debug),
            RejectReason::TooLarge { .. } => ("FILE_TOO_LARGE", false, LogLevel::Debug),
        },
        IntakeError::Upload { .. } => ("UPLOAD_FAILED", true, LogLevel::Error),
        IntakeError::Submission(_) => ("SUBMISSION_FAILED", true, LogLevel::Error),
        IntakeError::Transport(_) => ("TRANSPORT_FAILURE", true, LogLevel::Error),
    }
}

impl IntakeError {
    /// Machine-readable error code (e.g., "UPLOAD_FAILED").
    pub fn error_code(&self) -> &'static str {
        static_metadata(self).0
    }

    /// Whether retrying the same action can succeed. Network failures are
    /// retryable by re-submitting; the staged files survive the failure.
    pub fn is_recoverable(&self) -> bool {
        static_metadata(self).1
    }

    pub fn log_level(&self) -> LogLevel {
        static_metadata(self).2
    }

    /// Single user-facing message, in the alert wording of the form.
    pub fn user_message(&self) -> String {
        match self {
            IntakeError::InvalidField(message) => message.clone(),
            IntakeError::FileRejected { reason, .. } => reason.to_string(),
            IntakeError::Upload { .. } | IntakeError::Submission(_) | IntakeError::Transport(_) => {
                format!("An error occurred: {}", self)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_error_metadata() {
        let err = IntakeError::Upload {
            filename: "scan.pdf".to_string(),
            message: "status 500".to_string(),
        };
        assert_eq!(err.error_code(), "UPLOAD_FAILED");
        assert!(err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Error);
        assert!(err.user_message().contains("scan.pdf"));
    }

    #[test]
    fn batch_rejection_metadata() {
        let err = IntakeError::FileRejected {
            filename: "f.csv".to_string(),
            reason: RejectReason::BatchTooLarge {
                current: 3,
                incoming: 4,
                max: 5,
            },
        };
        assert_eq!(err.error_code(), "BATCH_TOO_LARGE");
        assert!(!err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Warn);
    }

    #[test]
    fn submission_error_names_the_phase() {
        let err = IntakeError::Submission("status 422".to_string());
        assert!(err.to_string().contains("Final data submission failed"));
        assert!(err.user_message().starts_with("An error occurred"));
    }

    #[test]
    fn validation_error_is_local() {
        let err = IntakeError::FileRejected {
            filename: "tool.exe".to_string(),
            reason: RejectReason::BadExtension {
                extension: "exe".to_string(),
                allowed: vec!["csv".to_string()],
            },
        };
        assert_eq!(err.log_level(), LogLevel::Debug);
        assert!(err.user_message().contains("exe"));
    }
}

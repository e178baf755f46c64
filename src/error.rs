//! Unified error hierarchy for swimplan
//!
//! The parser itself never fails - malformed shorthand degrades silently to
//! zero-distance steps. Errors here cover everything around it: payload
//! export, submission collaborators, configuration, and I/O. User-visible
//! failure text lives with the caller via [`SwimPlanError::user_message`].

use thiserror::Error;

/// Top-level error type for all swimplan operations
#[derive(Debug, Error)]
pub enum SwimPlanError {
    /// Workout submission errors (token, network outcome)
    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    /// Payload/preview export errors
    #[error("Export error: {0}")]
    Export(#[from] crate::export::ExportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Failures reported by the external submission collaborators
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The token provider had no credential for the current context
    #[error("Authentication token not available")]
    MissingToken,

    /// The sink reached the service but the outcome was not a success
    #[error("Update rejected with HTTP status {status}")]
    Http { status: u16 },

    /// The sink could not reach the service at all
    #[error("Network failure: {0}")]
    Network(String),

    /// The payload could not be assembled for submission
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

/// Result type alias for swimplan operations
pub type Result<T> = std::result::Result<T, SwimPlanError>;

impl SwimPlanError {
    /// Check if the operation is worth retrying
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SwimPlanError::Submission(SubmissionError::Network(_)) | SwimPlanError::Io(_)
        )
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            SwimPlanError::Submission(SubmissionError::MissingToken) => {
                "Authentication token not found. Please ensure you are on a workout page and refresh."
                    .to_string()
            }
            SwimPlanError::Submission(SubmissionError::Network(_)) => {
                "Could not connect to the service. Please check your connection and try again."
                    .to_string()
            }
            SwimPlanError::Submission(SubmissionError::Http { status }) => {
                format!("The service rejected the update (HTTP {}).", status)
            }
            SwimPlanError::Submission(SubmissionError::InvalidPayload(_)) => {
                "The workout could not be converted for upload.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let err = SwimPlanError::Submission(SubmissionError::Network("timeout".to_string()));
        assert!(err.is_retryable());

        let err = SwimPlanError::Submission(SubmissionError::MissingToken);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_user_messages() {
        let err = SwimPlanError::Submission(SubmissionError::MissingToken);
        assert!(err.user_message().contains("Authentication token"));

        let err = SwimPlanError::Submission(SubmissionError::Http { status: 403 });
        assert!(err.user_message().contains("403"));
    }

    #[test]
    fn test_submission_error_conversion() {
        let err: SwimPlanError = SubmissionError::MissingToken.into();
        assert!(matches!(
            err,
            SwimPlanError::Submission(SubmissionError::MissingToken)
        ));
    }
}

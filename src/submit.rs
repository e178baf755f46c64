//! Collaborator interfaces for workout submission
//!
//! The parser is pure; everything that touches the outside world sits behind
//! these traits. A token provider hands out the page's credential (or
//! nothing), a submission sink performs the actual update. Transport is out
//! of scope here - callers bring their own implementations, tests bring
//! doubles.

use serde_json::Value;

use crate::error::SubmissionError;
use crate::export::{self, ExportError};
use crate::models::TrainingPlan;

/// Supplies the opaque authentication credential for the current context
pub trait TokenProvider {
    /// The credential, or `None` when the context has none to offer
    fn csrf_token(&self) -> Option<String>;
}

/// Outcome of a successful workout update
///
/// The service answers "no content" for an accepted update, in which case
/// there is no body to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionResponse {
    /// Parsed response body, `None` for a no-content outcome
    pub body: Option<Value>,
}

/// Performs the workout update against the service
pub trait SubmissionSink {
    /// Update the identified workout with the given payload
    fn update_workout(
        &self,
        token: &str,
        workout_id: u64,
        payload: &Value,
    ) -> Result<SubmissionResponse, SubmissionError>;
}

/// Submit a parsed plan: token check, payload assembly, sink call
///
/// Fails with `MissingToken` before any payload work when the provider has
/// no credential, and refuses plans without steps - a degenerate parse must
/// not overwrite a workout with nothing.
pub fn submit_workout<T, S>(
    token_provider: &T,
    sink: &S,
    workout_id: u64,
    plan: &TrainingPlan,
    base_template: &Value,
) -> Result<SubmissionResponse, SubmissionError>
where
    T: TokenProvider,
    S: SubmissionSink,
{
    let token = token_provider
        .csrf_token()
        .ok_or(SubmissionError::MissingToken)?;

    if plan.is_empty() {
        return Err(SubmissionError::InvalidPayload(
            "training plan has no steps".to_string(),
        ));
    }

    let payload = export::submission_payload(workout_id, plan, base_template)
        .map_err(|e: ExportError| SubmissionError::InvalidPayload(e.to_string()))?;

    sink.update_workout(&token, workout_id, &payload)
}

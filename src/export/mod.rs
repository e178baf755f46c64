//! Export of parsed training plans
//!
//! Covers the service wire shape (`garmin`), the human-readable preview
//! (`text`), and submission payload assembly - the parsed plan serialized
//! over a base template with the workout id set.

use serde_json::Value;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::models::TrainingPlan;

pub mod garmin;
pub mod text;

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid base template: {0}")]
    InvalidTemplate(String),
}

/// Build the JSON payload for a workout update
///
/// Starts from the base template, sets `workoutId`, then overlays every
/// field of the serialized plan - the same precedence the service expects:
/// parsed data wins over the template, the template supplies everything the
/// parser does not produce.
pub fn submission_payload(
    workout_id: u64,
    plan: &TrainingPlan,
    base_template: &Value,
) -> Result<Value, ExportError> {
    let mut payload = match base_template {
        Value::Object(fields) => fields.clone(),
        Value::Null => serde_json::Map::new(),
        other => {
            return Err(ExportError::InvalidTemplate(format!(
                "expected a JSON object, got {}",
                json_type_name(other)
            )))
        }
    };

    payload.insert("workoutId".to_string(), Value::from(workout_id));

    let plan_json = serde_json::to_value(garmin::TrainingPlanDto::from(plan))
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;
    if let Value::Object(fields) = plan_json {
        for (key, value) in fields {
            payload.insert(key, value);
        }
    }

    Ok(Value::Object(payload))
}

/// Export a submission payload to a JSON file
pub fn export_payload<P: AsRef<Path>>(
    workout_id: u64,
    plan: &TrainingPlan,
    base_template: &Value,
    output_path: P,
) -> Result<(), ExportError> {
    let payload = submission_payload(workout_id, plan, base_template)?;
    export_json(&payload, output_path)
}

/// Export any serializable data structure to JSON
pub fn export_json<T, P>(data: &T, output_path: P) -> Result<(), ExportError>
where
    T: serde::Serialize,
    P: AsRef<Path>,
{
    let json_data = serde_json::to_string_pretty(data)
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;

    let mut file = std::fs::File::create(output_path)?;
    file.write_all(json_data.as_bytes())?;

    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

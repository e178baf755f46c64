// Library interface for swimplan modules
// This allows integration tests to access the core functionality

pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod parser;
pub mod submit;

// Re-export commonly used types for convenience
pub use error::{Result, SubmissionError, SwimPlanError};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{Segment, Sport, Step, StrokeKind, TrainingPlan};
pub use parser::{parse_training_text, recognize_line, LinePattern};
pub use submit::{SubmissionResponse, SubmissionSink, TokenProvider};

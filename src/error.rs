//! Error types for the coaching engine

use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CoachError {
  #[error("max_hr is required to derive zones")]
  MissingMaxHeartRate,

  #[error("Invalid configuration value for {key}: {value:?}")]
  InvalidConfig { key: String, value: String },
}

pub type CoachResult<T> = Result<T, CoachError>;

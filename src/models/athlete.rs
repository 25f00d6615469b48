use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingLevel {
  Novice,
  #[default]
  Intermediate,
  Advanced,
}

/// Athlete profile supplied by the caller for each plan request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
  pub user_id: String,
  pub age: u32,
  pub sex: Option<String>,
  pub weight_kg: f64,
  #[serde(default)]
  pub height_cm: Option<f64>,
  /// Zones fall back to a default max when absent
  #[serde(default)]
  pub max_hr: Option<u32>,
  /// Baseline resting HR, compared against the morning reading
  #[serde(default)]
  pub resting_hr: Option<u32>,
  #[serde(default)]
  pub training_level: TrainingLevel,
  #[serde(default)]
  pub injury_flag: bool,
  #[serde(default)]
  pub goal_event: Option<String>,
  #[serde(default)]
  pub goal_time_minutes: Option<u32>,
}

use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Macrocycle
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingPhase {
  Base,
  Build,
  Peak,
  Taper,
  Recovery,
}

impl std::fmt::Display for TrainingPhase {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Base => write!(f, "base"),
      Self::Build => write!(f, "build"),
      Self::Peak => write!(f, "peak"),
      Self::Taper => write!(f, "taper"),
      Self::Recovery => write!(f, "recovery"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacrocycleContext {
  pub phase: TrainingPhase,
  pub weeks_to_event: u32,
  pub goal_event: String,
  #[serde(default)]
  pub target_weekly_distance_km: Option<f64>,
  #[serde(default)]
  pub surface_focus: Option<String>,
}

/// ---------------------------------------------------------------------------
/// Session Templates
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Template {
  Rest,
  Recovery,
  #[serde(rename = "Long Run")]
  LongRun,
  Threshold,
  #[serde(rename = "VO2_Intervals")]
  Vo2Intervals,
  #[serde(rename = "Double_Threshold")]
  DoubleThreshold,
}

impl Template {
  pub fn label(&self) -> &'static str {
    match self {
      Template::Rest => "Rest",
      Template::Recovery => "Recovery",
      Template::LongRun => "Long Run",
      Template::Threshold => "Threshold",
      Template::Vo2Intervals => "VO2_Intervals",
      Template::DoubleThreshold => "Double_Threshold",
    }
  }

  /// Rest and Recovery are never adapted further
  pub fn is_easy(&self) -> bool {
    matches!(self, Template::Rest | Template::Recovery)
  }

  /// Templates that warrant a full pre-run carb load
  pub fn is_long_or_hard(&self) -> bool {
    !self.is_easy()
  }

  /// Templates that get downgraded when ACWR is elevated
  pub fn is_very_hard(&self) -> bool {
    matches!(self, Template::Vo2Intervals | Template::DoubleThreshold)
  }
}

impl std::fmt::Display for Template {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}

impl std::str::FromStr for Template {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Rest" => Ok(Self::Rest),
      "Recovery" => Ok(Self::Recovery),
      "Long Run" => Ok(Self::LongRun),
      "Threshold" => Ok(Self::Threshold),
      "VO2_Intervals" => Ok(Self::Vo2Intervals),
      "Double_Threshold" => Ok(Self::DoubleThreshold),
      _ => Err(format!("Unknown session template: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Daily Inputs
/// ---------------------------------------------------------------------------

/// Morning check-in. Subjective scales run 1-10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReadinessInputs {
  pub sleep_hours: f64,
  pub sleep_quality: u8,
  pub soreness: u8,
  pub stress: u8,
  pub mental_energy: u8,
  #[serde(default)]
  pub resting_hr: Option<u32>,
  #[serde(default)]
  pub hrv_change_ms: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicrocycleDayContext {
  pub day_index: u32,
  pub day_name: String,
  /// Requested template label, kept verbatim for the plan echo
  pub template: String,
  /// Zero means no cap
  pub availability_minutes: u32,
  pub readiness_inputs: DailyReadinessInputs,
  #[serde(default)]
  pub planned_distance_km: Option<f64>,
  /// Daily load units, oldest first
  #[serde(default)]
  pub load_history: Vec<f64>,
  #[serde(default)]
  pub environment: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_template_labels_match_wire_format() {
    for template in [
      Template::Rest,
      Template::Recovery,
      Template::LongRun,
      Template::Threshold,
      Template::Vo2Intervals,
      Template::DoubleThreshold,
    ] {
      assert_eq!(template.label().parse::<Template>(), Ok(template));
      let json = serde_json::to_string(&template).unwrap();
      assert_eq!(json, format!("\"{}\"", template.label()));
    }
  }

  #[test]
  fn test_unknown_template_rejected() {
    assert!("Fartlek".parse::<Template>().is_err());
    assert!("threshold".parse::<Template>().is_err());
  }

  #[test]
  fn test_day_context_defaults() {
    let day: MicrocycleDayContext = serde_json::from_str(
      r#"{
        "day_index": 0,
        "day_name": "Monday",
        "template": "Recovery",
        "availability_minutes": 45,
        "readiness_inputs": {
          "sleep_hours": 8.0,
          "sleep_quality": 7,
          "soreness": 3,
          "stress": 3,
          "mental_energy": 5
        }
      }"#,
    )
    .unwrap();

    assert!(day.load_history.is_empty());
    assert_eq!(day.readiness_inputs.resting_hr, None);
    assert_eq!(day.environment, None);
  }
}

//! Acute:Chronic Workload Ratio calculator and risk classifier
//!
//! History is a day-indexed sequence of load units, oldest first. Only the
//! most recent 28 entries matter.

use serde::{Deserialize, Serialize};

use crate::constants::{
  ACUTE_WINDOW_DAYS, ACWR_ELEVATED_HIGH, ACWR_OPTIMAL_HIGH, ACWR_UNDERLOAD_BELOW,
  CHRONIC_WINDOW_DAYS,
};
use crate::rounding::round2;

/// ---------------------------------------------------------------------------
/// ACWR Zones
/// ---------------------------------------------------------------------------

/// Ordered from least to most risky
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcwrZone {
  Underload,
  Optimal,
  Elevated,
  High,
}

impl AcwrZone {
  pub fn as_str(&self) -> &'static str {
    match self {
      AcwrZone::Underload => "underload",
      AcwrZone::Optimal => "optimal",
      AcwrZone::Elevated => "elevated",
      AcwrZone::High => "high",
    }
  }

  pub fn recommendation(&self) -> &'static str {
    match self {
      AcwrZone::Underload => "Increase load gradually (5-10%) to avoid detraining.",
      AcwrZone::Optimal => "Maintain progressive overload.",
      AcwrZone::Elevated => "Hold or slightly reduce load; avoid stacking hard days.",
      AcwrZone::High => "Prioritize recovery; cap intensity until ACWR is back in range.",
    }
  }

  /// Elevated or high
  pub fn is_risky(&self) -> bool {
    *self >= AcwrZone::Elevated
  }
}

impl std::fmt::Display for AcwrZone {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// ---------------------------------------------------------------------------
/// Load Risk Report
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadRiskReport {
  pub acute_load: f64,
  pub chronic_load: f64,
  /// Infinite when there is acute load but no chronic base (serialized as null)
  #[serde(deserialize_with = "deserialize_acwr")]
  pub acwr: f64,
  pub zone: AcwrZone,
  pub recommendation: String,
}

fn deserialize_acwr<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
  D: serde::Deserializer<'de>,
{
  Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}

/// ---------------------------------------------------------------------------
/// Load Manager
/// ---------------------------------------------------------------------------

pub struct LoadManager;

impl LoadManager {
  /// Mean of the last 7 entries and of up to the last 28 entries
  pub fn acute_chronic(load_history: &[f64]) -> (f64, f64) {
    if load_history.is_empty() {
      return (0.0, 0.0);
    }
    let acute = mean(tail(load_history, ACUTE_WINDOW_DAYS));
    let chronic = mean(tail(load_history, CHRONIC_WINDOW_DAYS));
    (acute, chronic)
  }

  pub fn acwr(acute_load: f64, chronic_load: f64) -> f64 {
    if chronic_load <= 0.0 {
      return if acute_load > 0.0 { f64::INFINITY } else { 0.0 };
    }
    acute_load / chronic_load
  }

  pub fn classify(acwr: f64) -> AcwrZone {
    if acwr < ACWR_UNDERLOAD_BELOW {
      AcwrZone::Underload
    } else if acwr <= ACWR_OPTIMAL_HIGH {
      AcwrZone::Optimal
    } else if acwr <= ACWR_ELEVATED_HIGH {
      AcwrZone::Elevated
    } else {
      AcwrZone::High
    }
  }

  pub fn load_report(load_history: &[f64]) -> LoadRiskReport {
    let (acute, chronic) = Self::acute_chronic(load_history);
    let acwr = Self::acwr(acute, chronic);
    let zone = Self::classify(acwr);

    LoadRiskReport {
      acute_load: round2(acute),
      chronic_load: round2(chronic),
      acwr: if acwr.is_finite() { round2(acwr) } else { acwr },
      zone,
      recommendation: zone.recommendation().to_string(),
    }
  }
}

fn tail(values: &[f64], n: usize) -> &[f64] {
  &values[values.len().saturating_sub(n)..]
}

fn mean(values: &[f64]) -> f64 {
  if values.is_empty() {
    return 0.0;
  }
  values.iter().sum::<f64>() / values.len() as f64
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

//! Readiness scoring plus recovery actions
//!
//! The score is a transparent sum of penalties and bonuses on top of 100,
//! built from the morning check-in rather than any device score.

use serde::{Deserialize, Serialize};

use crate::constants::{MASTERS_AGE, READINESS_HIGH_MIN, READINESS_MODERATE_MIN};
use crate::load::AcwrZone;
use crate::models::{DailyReadinessInputs, TrainingLevel, UserProfile};

/// ---------------------------------------------------------------------------
/// Readiness
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadinessTier {
  Low,
  Moderate,
  High,
}

impl ReadinessTier {
  /// Inclusive lower bounds: 75 is high, 50 is moderate
  pub fn from_score(score: f64) -> Self {
    if score >= READINESS_HIGH_MIN {
      ReadinessTier::High
    } else if score >= READINESS_MODERATE_MIN {
      ReadinessTier::Moderate
    } else {
      ReadinessTier::Low
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      ReadinessTier::Low => "low",
      ReadinessTier::Moderate => "moderate",
      ReadinessTier::High => "high",
    }
  }
}

impl std::fmt::Display for ReadinessTier {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// ---------------------------------------------------------------------------
/// Recovery Protocol
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryProtocol {
  pub actions: Vec<String>,
  pub monitoring: Vec<String>,
}

/// Which action block applies, from the worse of readiness and load risk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecoveryEmphasis {
  Restore,
  Consolidate,
  Proceed,
}

impl RecoveryEmphasis {
  fn select(tier: ReadinessTier, acwr_zone: AcwrZone) -> Self {
    if tier == ReadinessTier::Low || acwr_zone == AcwrZone::High {
      RecoveryEmphasis::Restore
    } else if tier == ReadinessTier::Moderate || acwr_zone == AcwrZone::Elevated {
      RecoveryEmphasis::Consolidate
    } else {
      RecoveryEmphasis::Proceed
    }
  }
}

/// ---------------------------------------------------------------------------
/// Recovery Engine
/// ---------------------------------------------------------------------------

pub struct RecoveryEngine;

impl RecoveryEngine {
  /// Composite readiness in [0, 100] and its tier
  pub fn readiness_score(
    inputs: &DailyReadinessInputs,
    user: &UserProfile,
    load_zone: AcwrZone,
  ) -> (f64, ReadinessTier) {
    let mut score = 100.0;

    // Sleep debt only counts below 7.5h
    score -= ((7.5 - inputs.sleep_hours) * 5.0).max(0.0);
    score += (inputs.sleep_quality as f64 - 7.0) * 3.0;
    score -= (inputs.soreness as f64 - 3.0) * 4.0;
    score -= (inputs.stress as f64 - 3.0) * 3.0;
    score += (inputs.mental_energy as f64 - 5.0) * 2.5;

    // Morning HR above baseline
    if let (Some(today), Some(baseline)) = (
      inputs.resting_hr.filter(|hr| *hr > 0),
      user.resting_hr.filter(|hr| *hr > 0),
    ) {
      let delta = today as f64 - baseline as f64;
      if delta > 0.0 {
        score -= delta * 1.2;
      }
    }

    if let Some(hrv_change) = inputs.hrv_change_ms {
      if hrv_change < 0.0 {
        score += hrv_change * 0.6;
      }
    }

    if load_zone.is_risky() {
      score -= 8.0;
    }

    if user.injury_flag {
      score -= 10.0;
    }

    let score = f64::clamp(score, 0.0, 100.0);
    (score, ReadinessTier::from_score(score))
  }

  pub fn protocol(tier: ReadinessTier, acwr_zone: AcwrZone, user: &UserProfile) -> RecoveryProtocol {
    let mut actions = vec![
      "7-9h sleep, consistent bedtime".to_string(),
      "Protein with every meal; colorful carbs and healthy fats".to_string(),
    ];
    let mut monitoring = vec![
      "Subjective check-in (mood/soreness)".to_string(),
      "Resting HR on waking".to_string(),
    ];

    match RecoveryEmphasis::select(tier, acwr_zone) {
      RecoveryEmphasis::Restore => {
        actions.extend(strings(&[
          "Active recovery: 20-40 min easy walk/ride",
          "10-15 min mobility + light band work",
          "Early night; reduce stimulants",
        ]));
        monitoring.push("Delay intensity until readiness improves".to_string());
      }
      RecoveryEmphasis::Consolidate => {
        actions.extend(strings(&[
          "Keep intensity at or below Z2 today",
          "Add 5-10 min of post-run mobility",
          "Extra 20-30 g carbs in evening meal",
        ]));
      }
      RecoveryEmphasis::Proceed => {
        actions.extend(strings(&[
          "Proceed with planned intensity; keep warmup thorough",
          "Short strides to maintain neuromuscular readiness",
        ]));
      }
    }

    if user.age >= MASTERS_AGE {
      actions.push("Include extra calf/hip stability 2-3x/week; extend cooldown by 5 min".to_string());
    }
    if user.training_level == TrainingLevel::Novice {
      actions.push("Prefer soft surfaces; focus on relaxed form cues".to_string());
    }
    if user.injury_flag {
      actions.push("Prioritize pain-free movement; skip plyometrics and downhill stress".to_string());
    }

    RecoveryProtocol { actions, monitoring }
  }
}

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use crate::load::LoadRiskReport;
use crate::models::{MacrocycleContext, MicrocycleDayContext, Session, Template, UserProfile};
use crate::nutrition::NutritionPlan;
use crate::recovery::{ReadinessTier, RecoveryProtocol};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readiness {
  pub score: f64,
  pub tier: ReadinessTier,
}

/// Inputs echoed back with the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMeta {
  pub user_profile: UserProfile,
  pub macrocycle_context: MacrocycleContext,
}

/// One fully resolved day of the microcycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
  pub day_index: u32,
  pub day_name: String,
  pub template_requested: String,
  pub template_final: Template,
  pub training_session: Session,
  #[serde(rename = "nutrition_engine")]
  pub nutrition: NutritionPlan,
  pub recovery_protocol: RecoveryProtocol,
  pub load_risk: LoadRiskReport,
  pub readiness: Readiness,
  pub adaptations: Vec<String>,
  pub meta: PlanMeta,
}

impl DailyPlan {
  /// Serialize to pretty JSON
  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_default()
  }
}

/// The three inputs of a plan request, as read from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
  pub user_profile: UserProfile,
  pub macrocycle_context: MacrocycleContext,
  pub microcycle_day: MicrocycleDayContext,
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{TrainingLevel, TrainingPhase};

  #[test]
  fn test_plan_request_from_json() {
    let request: PlanRequest = serde_json::from_str(
      r#"{
        "user_profile": {
          "user_id": "runner-7",
          "age": 44,
          "sex": null,
          "weight_kg": 61.5,
          "max_hr": 178,
          "training_level": "novice",
          "injury_flag": true
        },
        "macrocycle_context": {
          "phase": "taper",
          "weeks_to_event": 1,
          "goal_event": "City Marathon"
        },
        "microcycle_day": {
          "day_index": 5,
          "day_name": "Saturday",
          "template": "Long Run",
          "availability_minutes": 90,
          "readiness_inputs": {
            "sleep_hours": 7.0,
            "sleep_quality": 6,
            "soreness": 4,
            "stress": 2,
            "mental_energy": 6,
            "hrv_change_ms": -3.5
          },
          "load_history": [40.0, 42.5, 0.0, 55.0]
        }
      }"#,
    )
    .unwrap();

    let user = &request.user_profile;
    assert_eq!(user.user_id, "runner-7");
    assert_eq!(user.max_hr, Some(178));
    assert_eq!(user.resting_hr, None);
    assert_eq!(user.training_level, TrainingLevel::Novice);
    assert!(user.injury_flag);

    assert_eq!(request.macrocycle_context.phase, TrainingPhase::Taper);
    assert_eq!(request.macrocycle_context.surface_focus, None);

    let day = &request.microcycle_day;
    assert_eq!(day.template, "Long Run");
    assert_eq!(day.load_history, vec![40.0, 42.5, 0.0, 55.0]);
    assert_eq!(day.readiness_inputs.hrv_change_ms, Some(-3.5));
    assert_eq!(day.planned_distance_km, None);
  }

  #[test]
  fn test_plan_request_requires_all_sections() {
    let missing_day = r#"{
      "user_profile": {"user_id": "a", "age": 30, "sex": "female", "weight_kg": 55.0},
      "macrocycle_context": {"phase": "base", "weeks_to_event": 12, "goal_event": "10K"}
    }"#;
    assert!(serde_json::from_str::<PlanRequest>(missing_day).is_err());
  }
}

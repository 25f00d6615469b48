//! Built-in sample athlete used by the demo binary and tests

use crate::models::{
  DailyReadinessInputs, MacrocycleContext, MicrocycleDayContext, PlanRequest, TrainingLevel,
  TrainingPhase, UserProfile,
};

/// Last 28 days of load units, oldest first
pub const SAMPLE_LOAD_HISTORY: [f64; 28] = [
  48.0, 52.0, 60.0, 62.0, 50.0, 40.0, 55.0, 70.0, 68.0, 64.0, 60.0, 58.0, 62.0, 65.0, 63.0, 60.0,
  58.0, 55.0, 50.0, 48.0, 52.0, 50.0, 45.0, 40.0, 42.0, 44.0, 46.0, 48.0,
];

pub fn sample_user() -> UserProfile {
  UserProfile {
    user_id: "athlete-123".to_string(),
    age: 35,
    sex: Some("male".to_string()),
    weight_kg: 68.0,
    height_cm: Some(175.0),
    max_hr: Some(190),
    resting_hr: Some(52),
    training_level: TrainingLevel::Intermediate,
    injury_flag: false,
    goal_event: Some("Spring Half Marathon".to_string()),
    goal_time_minutes: None,
  }
}

pub fn sample_macrocycle() -> MacrocycleContext {
  MacrocycleContext {
    phase: TrainingPhase::Build,
    weeks_to_event: 10,
    goal_event: "Spring Half Marathon".to_string(),
    target_weekly_distance_km: Some(55.0),
    surface_focus: Some("road".to_string()),
  }
}

pub fn sample_readiness() -> DailyReadinessInputs {
  DailyReadinessInputs {
    sleep_hours: 6.5,
    sleep_quality: 7,
    soreness: 4,
    stress: 5,
    mental_energy: 6,
    resting_hr: Some(56),
    hrv_change_ms: Some(-5.0),
  }
}

pub fn sample_day(day_index: u32, day_name: &str) -> MicrocycleDayContext {
  MicrocycleDayContext {
    day_index,
    day_name: day_name.to_string(),
    template: "Threshold".to_string(),
    availability_minutes: 75,
    readiness_inputs: sample_readiness(),
    planned_distance_km: Some(12.0),
    load_history: SAMPLE_LOAD_HISTORY.to_vec(),
    environment: Some("cool, dry".to_string()),
  }
}

pub fn sample_request(day_index: u32, day_name: &str) -> PlanRequest {
  PlanRequest {
    user_profile: sample_user(),
    macrocycle_context: sample_macrocycle(),
    microcycle_day: sample_day(day_index, day_name),
  }
}

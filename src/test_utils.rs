//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Mock data factories
//! - Test fixtures
//! - Helper assertions

use crate::models::{
  DailyPlan, DailyReadinessInputs, MacrocycleContext, MicrocycleDayContext, Segment, Session,
  Template, UserProfile,
};
use crate::physiology::{HeartRateZones, HrZone, PhysiologyEngine};
use crate::sample;

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// 35-year-old intermediate runner, 68 kg, max 190 / resting 52
pub fn create_test_user() -> UserProfile {
  sample::sample_user()
}

pub fn create_test_macrocycle() -> MacrocycleContext {
  sample::sample_macrocycle()
}

/// Check-in that scores 79.7 against the test user
pub fn create_test_readiness() -> DailyReadinessInputs {
  sample::sample_readiness()
}

/// Tuesday Threshold day, 75 min available, optimal ACWR history
pub fn create_test_day() -> MicrocycleDayContext {
  sample::sample_day(2, "Tuesday")
}

/// Check-in with every term at its neutral point (score 100 before load/injury)
pub fn create_neutral_readiness() -> DailyReadinessInputs {
  DailyReadinessInputs {
    sleep_hours: 8.0,
    sleep_quality: 7,
    soreness: 3,
    stress: 3,
    mental_energy: 5,
    resting_hr: None,
    hrv_change_ms: None,
  }
}

/// Flat load history with a final week scaled by `acute_factor`
pub fn create_load_history(base: f64, acute_factor: f64) -> Vec<f64> {
  let mut history = vec![base; 21];
  history.extend(vec![base * acute_factor; 7]);
  history
}

pub fn create_test_zones() -> HeartRateZones {
  PhysiologyEngine::heart_rate_zones(Some(190), Some(52)).expect("test zones")
}

/// Single-segment session for nutrition checks
pub fn create_test_session(template: Template, duration_minutes: u32, zone: HrZone) -> Session {
  let zones = create_test_zones();
  Session {
    session_type: template.label().to_string(),
    template,
    duration_minutes,
    segments: vec![Segment {
      label: "Main".to_string(),
      duration_minutes,
      target_zone: zone,
      hr_range_bpm: zones.get(zone),
      notes: None,
    }],
    primary_zone: zone,
    notes: String::new(),
    estimated_load: 0.0,
  }
}

/// ---------------------------------------------------------------------------
/// Helper Assertions
/// ---------------------------------------------------------------------------

/// Segments add up to the reported duration and fit the day
pub fn assert_session_consistent(plan: &DailyPlan, availability_minutes: u32) {
  let session = &plan.training_session;
  assert_eq!(
    session.segment_total(),
    session.duration_minutes,
    "segments do not sum to duration for {}",
    plan.template_final
  );
  if availability_minutes > 0 {
    assert!(
      session.duration_minutes <= availability_minutes,
      "{} min session exceeds {} min availability",
      session.duration_minutes,
      availability_minutes
    );
  }
  assert!((0.0..=100.0).contains(&plan.readiness.score));
}

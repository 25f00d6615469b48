use serde::{Deserialize, Serialize};

use crate::models::Template;
use crate::physiology::{HrRange, HrZone};

/// A labeled block of a session at one target zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
  pub label: String,
  pub duration_minutes: u32,
  pub target_zone: HrZone,
  pub hr_range_bpm: HrRange,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
}

/// Structured training session built from a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
  #[serde(rename = "type")]
  pub session_type: String,
  pub template: Template,
  /// Always the sum of segment durations
  pub duration_minutes: u32,
  pub segments: Vec<Segment>,
  pub primary_zone: HrZone,
  pub notes: String,
  pub estimated_load: f64,
}

impl Session {
  pub fn segment_total(&self) -> u32 {
    self.segments.iter().map(|s| s.duration_minutes).sum()
  }
}

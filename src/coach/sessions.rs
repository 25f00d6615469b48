//! Session builders, one per template
//!
//! Builders lay out segments at their ideal durations and shrink interval
//! work when the ideal does not fit the day's availability. Totals are
//! always recomputed from the segments.

use crate::models::{Segment, Session, Template, TrainingPhase};
use crate::physiology::{HeartRateZones, HrZone};

const WARMUP_MIN: u32 = 15;
const COOLDOWN_MIN: u32 = 10;

pub fn build_session(
  template: Template,
  availability_minutes: u32,
  phase: TrainingPhase,
  zones: &HeartRateZones,
) -> Session {
  match template {
    Template::Rest => rest_day(),
    Template::Recovery => recovery_run(availability_minutes, zones),
    Template::LongRun => long_run(availability_minutes, phase, zones),
    Template::Threshold => threshold_run(availability_minutes, phase, zones),
    Template::Vo2Intervals => vo2_intervals(availability_minutes, phase, zones),
    Template::DoubleThreshold => double_threshold(availability_minutes, phase, zones),
  }
}

fn segment(label: impl Into<String>, minutes: u32, zone: HrZone, zones: &HeartRateZones) -> Segment {
  Segment {
    label: label.into(),
    duration_minutes: minutes,
    target_zone: zone,
    hr_range_bpm: zones.get(zone),
    notes: None,
  }
}

fn session(
  session_type: &str,
  template: Template,
  segments: Vec<Segment>,
  primary_zone: HrZone,
  notes: String,
) -> Session {
  Session {
    session_type: session_type.to_string(),
    template,
    duration_minutes: segments.iter().map(|s| s.duration_minutes).sum(),
    segments,
    primary_zone,
    notes,
    estimated_load: 0.0,
  }
}

fn rest_day() -> Session {
  session(
    "Rest",
    Template::Rest,
    Vec::new(),
    HrZone::Z1,
    "Full rest or light 20-30 min walk if desired.".to_string(),
  )
}

fn recovery_run(availability_minutes: u32, zones: &HeartRateZones) -> Session {
  let duration = availability_minutes.clamp(20, 40);
  session(
    "Recovery",
    Template::Recovery,
    vec![segment("Easy", duration, HrZone::Z1, zones)],
    HrZone::Z1,
    "Keep cadence relaxed; nasal breathing. Optional 3-4x10s strides if feeling fresh.".to_string(),
  )
}

fn long_run(availability_minutes: u32, phase: TrainingPhase, zones: &HeartRateZones) -> Session {
  let target = availability_minutes.clamp(75, 120);
  let warmup = 10;
  let cooldown = 10;
  let surges = 8;

  // Steady block absorbs the difference but never drops below 40 min
  let steady = target.saturating_sub(warmup + cooldown + surges).max(40);

  let mut surge_segment = segment("Optional Surges", surges, HrZone::Z3, zones);
  surge_segment.notes = Some("4x2 min uptempo with 3 min easy jogs".to_string());

  session(
    "Endurance",
    Template::LongRun,
    vec![
      segment("Warm-up", warmup, HrZone::Z1, zones),
      segment("Steady", steady, HrZone::Z2, zones),
      surge_segment,
      segment("Cool-down", cooldown, HrZone::Z1, zones),
    ],
    HrZone::Z2,
    format!("Macrocycle phase: {}. Keep fueling steady; avoid racing the long run.", phase),
  )
}

fn threshold_run(availability_minutes: u32, phase: TrainingPhase, zones: &HeartRateZones) -> Session {
  let mut reps = 3;
  let mut rep_duration = 10;
  let recovery = 3;

  let ideal = interval_total(reps, rep_duration, recovery);
  if ideal > availability_minutes {
    let factor = availability_minutes as f64 / ideal as f64;
    rep_duration = ((rep_duration as f64 * factor).round_ties_even() as u32).max(8);
    reps = (reps - 1).max(2);
  }

  session(
    "Lactate Threshold",
    Template::Threshold,
    interval_segments("Threshold rep", reps, rep_duration, HrZone::Z3, recovery, zones),
    HrZone::Z3,
    format!("Stay controlled; avoid drifting into VO2. Phase: {}.", phase),
  )
}

fn vo2_intervals(availability_minutes: u32, phase: TrainingPhase, zones: &HeartRateZones) -> Session {
  let mut reps = 5;
  let rep_duration = 3;
  let recovery = 2;

  if interval_total(reps, rep_duration, recovery) > availability_minutes {
    reps = (reps - 1).max(4);
  }

  session(
    "VO2 Max Intervals",
    Template::Vo2Intervals,
    interval_segments("VO2 rep", reps, rep_duration, HrZone::Z4, recovery, zones),
    HrZone::Z4,
    format!("Target fast-but-controlled reps; stop early if form breaks. Phase: {}.", phase),
  )
}

fn double_threshold(availability_minutes: u32, phase: TrainingPhase, zones: &HeartRateZones) -> Session {
  let warmup = 10;
  let cooldown = 10;
  let mut am_block = 25;
  let mut pm_block = 30;
  let mut easy_between = 10;

  let planned = warmup + am_block + easy_between + pm_block + cooldown;
  let target = availability_minutes.min(90);
  if planned > target {
    let factor = target as f64 / planned as f64;
    let scale = |minutes: u32, floor: u32| ((minutes as f64 * factor).round_ties_even() as u32).max(floor);
    am_block = scale(am_block, 15);
    pm_block = scale(pm_block, 20);
    easy_between = scale(easy_between, 5);
  }

  session(
    "Double Threshold (conservative)",
    Template::DoubleThreshold,
    vec![
      segment("Warm-up", warmup, HrZone::Z1, zones),
      segment("AM Tempo", am_block, HrZone::Z3, zones),
      segment("Recovery jog", easy_between, HrZone::Z1, zones),
      segment("PM Steady", pm_block, HrZone::Z2, zones),
      segment("Cool-down", cooldown, HrZone::Z1, zones),
    ],
    HrZone::Z3,
    format!("Keep conservative intensity; cut second block if fatigue rises. Phase: {}.", phase),
  )
}

/// Warm-up + reps with jogs between + cool-down
fn interval_total(reps: u32, rep_duration: u32, recovery: u32) -> u32 {
  WARMUP_MIN + reps * rep_duration + reps.saturating_sub(1) * recovery + COOLDOWN_MIN
}

fn interval_segments(
  rep_label: &str,
  reps: u32,
  rep_duration: u32,
  rep_zone: HrZone,
  recovery: u32,
  zones: &HeartRateZones,
) -> Vec<Segment> {
  let mut segments = vec![segment("Warm-up", WARMUP_MIN, HrZone::Z1, zones)];
  for i in 1..=reps {
    segments.push(segment(format!("{} {}", rep_label, i), rep_duration, rep_zone, zones));
    if i < reps {
      segments.push(segment(format!("Recovery jog {}", i), recovery, HrZone::Z1, zones));
    }
  }
  segments.push(segment("Cool-down", COOLDOWN_MIN, HrZone::Z1, zones));
  segments
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

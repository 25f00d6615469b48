//! Heart-rate zone derivation
//!
//! Zones are bands of heart-rate reserve (Karvonen) added on top of the
//! resting rate.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_RESTING_HR, ZONE_RESERVE_FRACTIONS};
use crate::error::{CoachError, CoachResult};

/// ---------------------------------------------------------------------------
/// HR Zones
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HrZone {
  Z1, // Recovery: 55-72% HRR
  Z2, // Aerobic: 72-82% HRR
  Z3, // Threshold: 82-89% HRR
  Z4, // VO2: 89-95% HRR
  Z5, // Anaerobic: 95%+ HRR
}

impl HrZone {
  pub fn as_str(&self) -> &'static str {
    match self {
      HrZone::Z1 => "Z1",
      HrZone::Z2 => "Z2",
      HrZone::Z3 => "Z3",
      HrZone::Z4 => "Z4",
      HrZone::Z5 => "Z5",
    }
  }

  /// Perceived exertion cue for the zone
  pub fn rpe(&self) -> &'static str {
    match self {
      HrZone::Z1 => "RPE 2-3",
      HrZone::Z2 => "RPE 3-4",
      HrZone::Z3 => "RPE 5-6",
      HrZone::Z4 => "RPE 7-8",
      HrZone::Z5 => "RPE 9+",
    }
  }

  /// Top two zones
  pub fn is_very_hard(&self) -> bool {
    matches!(self, HrZone::Z4 | HrZone::Z5)
  }

  /// Top three zones
  pub fn is_hard(&self) -> bool {
    matches!(self, HrZone::Z3 | HrZone::Z4 | HrZone::Z5)
  }
}

impl std::fmt::Display for HrZone {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Inclusive heart-rate band in bpm, serialized as `[low, high]`
pub type HrRange = (u32, u32);

/// Heart-rate bands for all five zones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateZones {
  #[serde(rename = "Z1")]
  pub z1: HrRange,
  #[serde(rename = "Z2")]
  pub z2: HrRange,
  #[serde(rename = "Z3")]
  pub z3: HrRange,
  #[serde(rename = "Z4")]
  pub z4: HrRange,
  #[serde(rename = "Z5")]
  pub z5: HrRange,
}

impl HeartRateZones {
  pub fn get(&self, zone: HrZone) -> HrRange {
    match zone {
      HrZone::Z1 => self.z1,
      HrZone::Z2 => self.z2,
      HrZone::Z3 => self.z3,
      HrZone::Z4 => self.z4,
      HrZone::Z5 => self.z5,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Zone Calculator
/// ---------------------------------------------------------------------------

pub struct PhysiologyEngine;

impl PhysiologyEngine {
  /// Derive zone bands from max and resting heart rate.
  ///
  /// A missing or zero max HR is an error; a missing or zero resting HR
  /// falls back to 60 bpm.
  pub fn heart_rate_zones(max_hr: Option<u32>, resting_hr: Option<u32>) -> CoachResult<HeartRateZones> {
    let max_hr = max_hr
      .and_then(NonZeroU32::new)
      .ok_or(CoachError::MissingMaxHeartRate)?;
    Ok(Self::zones_for(max_hr, resting_hr))
  }

  /// Zone bands for a known max HR. Reserve is floored at 1 bpm so a resting
  /// rate at or above max still yields ordered bands.
  pub fn zones_for(max_hr: NonZeroU32, resting_hr: Option<u32>) -> HeartRateZones {
    let rhr = resting_hr.filter(|hr| *hr > 0).unwrap_or(DEFAULT_RESTING_HR);
    let reserve = (max_hr.get() as i64 - rhr as i64).max(1) as f64;

    let band = |zone: HrZone| -> HrRange {
      let (_, low, high) = ZONE_RESERVE_FRACTIONS
        .iter()
        .copied()
        .find(|(z, _, _)| *z == zone)
        .unwrap_or(ZONE_RESERVE_FRACTIONS[0]);
      (
        (rhr as f64 + reserve * low).round() as u32,
        (rhr as f64 + reserve * high).round() as u32,
      )
    };

    HeartRateZones {
      z1: band(HrZone::Z1),
      z2: band(HrZone::Z2),
      z3: band(HrZone::Z3),
      z4: band(HrZone::Z4),
      z5: band(HrZone::Z5),
    }
  }

  pub fn zone_rpe(zone: HrZone) -> &'static str {
    zone.rpe()
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_zones_from_max_and_resting() {
    // reserve = 190 - 52 = 138
    let zones = PhysiologyEngine::heart_rate_zones(Some(190), Some(52)).unwrap();
    assert_eq!(zones.z1, (128, 151)); // 52 + 75.9, 52 + 99.36
    assert_eq!(zones.z2, (151, 165));
    assert_eq!(zones.z3, (165, 175));
    assert_eq!(zones.z4, (175, 183));
    assert_eq!(zones.z5, (183, 190));
  }

  #[test]
  fn test_resting_defaults_to_60() {
    let explicit = PhysiologyEngine::heart_rate_zones(Some(180), Some(60)).unwrap();
    assert_eq!(PhysiologyEngine::heart_rate_zones(Some(180), None).unwrap(), explicit);
    assert_eq!(PhysiologyEngine::heart_rate_zones(Some(180), Some(0)).unwrap(), explicit);
  }

  #[test]
  fn test_missing_max_hr_fails() {
    assert_eq!(
      PhysiologyEngine::heart_rate_zones(None, Some(50)),
      Err(CoachError::MissingMaxHeartRate)
    );
    assert_eq!(
      PhysiologyEngine::heart_rate_zones(Some(0), Some(50)),
      Err(CoachError::MissingMaxHeartRate)
    );
  }

  #[test]
  fn test_reserve_floored_at_one() {
    // Resting above max: reserve clamps to 1 bpm
    let zones = PhysiologyEngine::heart_rate_zones(Some(100), Some(120)).unwrap();
    assert_eq!(zones.z1, (121, 121));
    assert_eq!(zones.z5, (121, 121));
  }

  #[test]
  fn test_zones_serialize_as_named_pairs() {
    let zones = PhysiologyEngine::heart_rate_zones(Some(190), Some(52)).unwrap();
    let json = serde_json::to_value(zones).unwrap();
    assert_eq!(json["Z3"], serde_json::json!([165, 175]));
  }

  #[test]
  fn test_zone_rpe_mapping() {
    assert_eq!(HrZone::Z1.rpe(), "RPE 2-3");
    assert_eq!(HrZone::Z5.rpe(), "RPE 9+");
    assert_eq!(PhysiologyEngine::zone_rpe(HrZone::Z3), "RPE 5-6");
    assert!(HrZone::Z4.is_very_hard());
    assert!(!HrZone::Z3.is_very_hard());
    assert!(HrZone::Z3.is_hard());
  }
}

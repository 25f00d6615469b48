//! Tunable lookup tables shared by the engines
//!
//! Every threshold the planner uses lives here so the rule tables can be
//! read in one place.

use crate::physiology::HrZone;

/// ---------------------------------------------------------------------------
/// Physiology
/// ---------------------------------------------------------------------------

pub const DEFAULT_MAX_HR: u32 = 190;
pub const DEFAULT_RESTING_HR: u32 = 60;

/// Heart-rate reserve fractions (low, high) per zone
pub const ZONE_RESERVE_FRACTIONS: [(HrZone, f64, f64); 5] = [
  (HrZone::Z1, 0.55, 0.72),
  (HrZone::Z2, 0.72, 0.82),
  (HrZone::Z3, 0.82, 0.89),
  (HrZone::Z4, 0.89, 0.95),
  (HrZone::Z5, 0.95, 1.00),
];

/// ---------------------------------------------------------------------------
/// Load
/// ---------------------------------------------------------------------------

pub const ACUTE_WINDOW_DAYS: usize = 7;
pub const CHRONIC_WINDOW_DAYS: usize = 28;

pub const ACWR_UNDERLOAD_BELOW: f64 = 0.8;
pub const ACWR_OPTIMAL_HIGH: f64 = 1.3;
pub const ACWR_ELEVATED_HIGH: f64 = 1.5;

/// Load units per minute spent in each zone
pub fn intensity_factor(zone: HrZone) -> f64 {
  match zone {
    HrZone::Z1 => 1.0,
    HrZone::Z2 => 1.3,
    HrZone::Z3 => 1.6,
    HrZone::Z4 => 1.9,
    HrZone::Z5 => 2.3,
  }
}

/// ---------------------------------------------------------------------------
/// Nutrition
/// ---------------------------------------------------------------------------

pub const PRE_RUN_CARBS_EASY_G_PER_KG: f64 = 0.5;
pub const PRE_RUN_CARBS_LONG_OR_HARD_G_PER_KG: f64 = 1.0;

/// Intra-session fueling band, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntraCarbRule {
  pub min_minutes: u32,
  pub max_minutes: u32,
  pub carbs_g_per_hour: u32,
  pub fluids: &'static str,
  pub electrolytes_mg_per_l: u32,
}

pub const INTRA_CARB_RULES: [IntraCarbRule; 4] = [
  IntraCarbRule {
    min_minutes: 0,
    max_minutes: 59,
    carbs_g_per_hour: 0,
    fluids: "Water",
    electrolytes_mg_per_l: 300,
  },
  IntraCarbRule {
    min_minutes: 60,
    max_minutes: 89,
    carbs_g_per_hour: 30,
    fluids: "Water + electrolytes",
    electrolytes_mg_per_l: 400,
  },
  IntraCarbRule {
    min_minutes: 90,
    max_minutes: 180,
    carbs_g_per_hour: 60,
    fluids: "Carb mix (glucose/fructose) + electrolytes",
    electrolytes_mg_per_l: 500,
  },
  IntraCarbRule {
    min_minutes: 181,
    max_minutes: 300,
    carbs_g_per_hour: 90,
    fluids: "High-carb mix + electrolytes",
    electrolytes_mg_per_l: 600,
  },
];

/// Floor applied to hard sessions of 90+ minutes
pub const HARD_LONG_SESSION_MIN_CARBS_G_PER_HOUR: u32 = 70;

pub const POST_RUN_PROTEIN_G_PER_KG: f64 = 0.27; // within 0.25-0.30 g/kg guidance
pub const POST_RUN_CARB_SHORT_G_PER_KG: f64 = 0.6; // <= 45 min
pub const POST_RUN_CARB_MEDIUM_G_PER_KG: f64 = 0.8; // 46-89 min
pub const POST_RUN_CARB_LONG_G_PER_KG: f64 = 1.0; // >= 90 min

pub const HYDRATION_ML_PER_HR_RANGE: (u32, u32) = (500, 750);
pub const HYDRATION_SODIUM_MG_PER_L_RANGE: (u32, u32) = (400, 800);

/// ---------------------------------------------------------------------------
/// Recovery
/// ---------------------------------------------------------------------------

pub const READINESS_HIGH_MIN: f64 = 75.0;
pub const READINESS_MODERATE_MIN: f64 = 50.0;
pub const MASTERS_AGE: u32 = 40;

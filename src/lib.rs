//! Rule-based daily planning for endurance runners
//!
//! Turns an athlete profile, the current macrocycle phase and one day of the
//! microcycle into a [`DailyPlan`]: adapted session, fueling, recovery
//! actions, load risk and readiness.

pub mod coach;
pub mod config;
pub mod constants;
pub mod error;
pub mod load;
pub mod models;
pub mod nutrition;
pub mod physiology;
pub mod recovery;
mod rounding;
pub mod sample;

#[cfg(test)]
mod test_utils;

pub use coach::AiCoach;
pub use config::CoachConfig;
pub use error::{CoachError, CoachResult};
pub use load::{AcwrZone, LoadManager, LoadRiskReport};
pub use models::{
  DailyPlan, DailyReadinessInputs, MacrocycleContext, MicrocycleDayContext, PlanRequest, Template,
  TrainingPhase, UserProfile,
};
pub use nutrition::{NutritionEngine, NutritionPlan};
pub use physiology::{HeartRateZones, HrZone, PhysiologyEngine};
pub use recovery::{ReadinessTier, RecoveryEngine, RecoveryProtocol};

/// Plan a day with the built-in defaults
pub fn generate_daily_plan(
  user: &UserProfile,
  macrocycle: &MacrocycleContext,
  day: &MicrocycleDayContext,
) -> DailyPlan {
  AiCoach::new().generate_daily_plan(user, macrocycle, day)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

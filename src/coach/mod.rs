//! Daily plan orchestration
//!
//! Pulls zones, load risk and readiness together, adapts the requested
//! template, builds and trims the session, then attaches fueling and
//! recovery guidance. Every adjustment leaves a human-readable note.

pub mod sessions;
pub mod trim;

use crate::config::CoachConfig;
use crate::load::{AcwrZone, LoadManager};
use crate::models::{
  DailyPlan, MacrocycleContext, MicrocycleDayContext, PlanMeta, Readiness, Session, Template,
  UserProfile,
};
use crate::nutrition::NutritionEngine;
use crate::physiology::{HeartRateZones, PhysiologyEngine};
use crate::recovery::{ReadinessTier, RecoveryEngine};
use crate::rounding::round1;

const MODERATE_READINESS_TRIM: f64 = 0.85;

/// ---------------------------------------------------------------------------
/// Adaptation Notes
/// ---------------------------------------------------------------------------

/// Notes collected while a plan is assembled, in the order they fired
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adaptations(Vec<String>);

impl Adaptations {
  pub fn push(&mut self, note: impl Into<String>) {
    let note = note.into();
    tracing::debug!(%note, "Plan adaptation");
    self.0.push(note);
  }

  pub fn notes(&self) -> &[String] {
    &self.0
  }

  pub fn into_notes(self) -> Vec<String> {
    self.0
  }
}

/// ---------------------------------------------------------------------------
/// Coach
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct AiCoach {
  config: CoachConfig,
}

impl AiCoach {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: CoachConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &CoachConfig {
    &self.config
  }

  pub fn generate_daily_plan(
    &self,
    user: &UserProfile,
    macrocycle: &MacrocycleContext,
    day: &MicrocycleDayContext,
  ) -> DailyPlan {
    let mut adaptations = Adaptations::default();

    let zones = self.safe_zones(user, &mut adaptations);
    let load_risk = LoadManager::load_report(&day.load_history);
    let (score, tier) = RecoveryEngine::readiness_score(&day.readiness_inputs, user, load_risk.zone);

    let template = adapt_template(&day.template, tier, load_risk.zone, user, &mut adaptations);
    let session = build_training_session(template, day, macrocycle, &zones, tier, &mut adaptations);

    let nutrition = NutritionEngine::build_plan(&session, user);
    let recovery_protocol = RecoveryEngine::protocol(tier, load_risk.zone, user);

    tracing::info!(
      day = %day.day_name,
      requested = %day.template,
      template = %template,
      readiness = %tier,
      acwr_zone = %load_risk.zone,
      duration_minutes = session.duration_minutes,
      "Generated daily plan"
    );

    DailyPlan {
      day_index: day.day_index,
      day_name: day.day_name.clone(),
      template_requested: day.template.clone(),
      template_final: template,
      training_session: session,
      nutrition,
      recovery_protocol,
      load_risk,
      readiness: Readiness {
        score: round1(score),
        tier,
      },
      adaptations: adaptations.into_notes(),
      meta: PlanMeta {
        user_profile: user.clone(),
        macrocycle_context: macrocycle.clone(),
      },
    }
  }

  /// Zones from the profile, substituting the configured max HR when absent
  fn safe_zones(&self, user: &UserProfile, adaptations: &mut Adaptations) -> HeartRateZones {
    let resting = user
      .resting_hr
      .filter(|hr| *hr > 0)
      .or(Some(self.config.default_resting_hr));
    match PhysiologyEngine::heart_rate_zones(user.max_hr, resting) {
      Ok(zones) => zones,
      Err(_) => {
        let fallback = self.config.default_max_hr;
        tracing::warn!(user_id = %user.user_id, fallback = fallback.get(), "No max HR on profile");
        adaptations.push(format!(
          "Missing max_hr; defaulting to {} bpm for zone calc.",
          fallback
        ));
        PhysiologyEngine::zones_for(fallback, resting)
      }
    }
  }
}

/// ---------------------------------------------------------------------------
/// Template Adaptation
/// ---------------------------------------------------------------------------

/// Decide the final template from injury, readiness and load risk.
///
/// Rules run in order. The low-readiness rule looks at the requested
/// template; the load rules see the template left by earlier rules.
pub fn adapt_template(
  requested: &str,
  tier: ReadinessTier,
  acwr_zone: AcwrZone,
  user: &UserProfile,
  adaptations: &mut Adaptations,
) -> Template {
  let parsed = match requested.parse::<Template>() {
    Ok(template) => template,
    Err(_) => {
      adaptations.push(format!("Unknown template '{}'; defaulting to Recovery.", requested));
      Template::Recovery
    }
  };
  let mut adjusted = parsed;

  if user.injury_flag && !adjusted.is_easy() {
    adjusted = Template::Recovery;
    adaptations.push("Injury flag set; downgrading to Recovery.");
  }

  // Low readiness is judged against the requested template, so it still
  // reports alongside an injury downgrade
  if tier == ReadinessTier::Low {
    if !parsed.is_easy() {
      adjusted = Template::Recovery;
      adaptations.push("Low readiness detected; replaced hard session with Recovery.");
    }
    if acwr_zone == AcwrZone::High {
      adjusted = Template::Rest;
      adaptations.push("High ACWR + low readiness; prescribing Rest.");
    }
  } else if acwr_zone == AcwrZone::High {
    if adjusted.is_very_hard() {
      adjusted = Template::Threshold;
      adaptations.push("High ACWR; downgrading from very hard to Threshold.");
    }
  } else if acwr_zone == AcwrZone::Elevated && adjusted.is_very_hard() {
    adjusted = Template::Threshold;
    adaptations.push("Elevated ACWR; shifting to Threshold focus.");
  }

  adjusted
}

/// ---------------------------------------------------------------------------
/// Session Construction
/// ---------------------------------------------------------------------------

pub fn build_training_session(
  template: Template,
  day: &MicrocycleDayContext,
  macrocycle: &MacrocycleContext,
  zones: &HeartRateZones,
  tier: ReadinessTier,
  adaptations: &mut Adaptations,
) -> Session {
  let mut session = sessions::build_session(template, day.availability_minutes, macrocycle.phase, zones);

  if tier == ReadinessTier::Moderate && !template.is_easy() {
    session = trim::trim_volume(&session, MODERATE_READINESS_TRIM);
    adaptations.push("Moderate readiness; trimmed volume by 15%.");
  }

  let available = day.availability_minutes;
  if available > 0 && session.duration_minutes > available {
    session = trim::trim_to_total(&session, available);
    adaptations.push(format!("Duration capped to availability ({} min).", available));
  }

  session.estimated_load = trim::estimate_load(&session);
  session
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

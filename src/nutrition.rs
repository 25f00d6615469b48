//! Pre, intra, and post session fueling
//!
//! Everything is keyed off session duration, the session's primary zone and
//! body weight. Gram targets are rounded to one decimal.

use serde::{Deserialize, Serialize};

use crate::constants::{
  IntraCarbRule, HARD_LONG_SESSION_MIN_CARBS_G_PER_HOUR, HYDRATION_ML_PER_HR_RANGE,
  HYDRATION_SODIUM_MG_PER_L_RANGE, INTRA_CARB_RULES, POST_RUN_CARB_LONG_G_PER_KG,
  POST_RUN_CARB_MEDIUM_G_PER_KG, POST_RUN_CARB_SHORT_G_PER_KG, POST_RUN_PROTEIN_G_PER_KG,
  PRE_RUN_CARBS_EASY_G_PER_KG, PRE_RUN_CARBS_LONG_OR_HARD_G_PER_KG,
};
use crate::models::{Session, UserProfile};
use crate::physiology::HrZone;
use crate::rounding::round1;

/// ---------------------------------------------------------------------------
/// Nutrition Plan
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreRunFueling {
  pub carbs_g: f64,
  pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntraRunFueling {
  pub carbs_g_per_hour: u32,
  pub fluids: String,
  pub electrolytes_mg_per_l: u32,
  pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRunFueling {
  pub protein_g: f64,
  pub carbs_g: f64,
  pub notes: String,
}

/// Either a concrete sodium range or a qualitative note for short easy days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SodiumGuidance {
  Range(u32, u32),
  Note(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationGuidance {
  pub fluids_ml_per_hour: (u32, u32),
  pub sodium_mg_per_l: SodiumGuidance,
  pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
  pub pre_run: PreRunFueling,
  pub intra_run: IntraRunFueling,
  pub post_run: PostRunFueling,
  pub hydration: HydrationGuidance,
}

/// ---------------------------------------------------------------------------
/// Nutrition Engine
/// ---------------------------------------------------------------------------

pub struct NutritionEngine;

impl NutritionEngine {
  pub fn build_plan(session: &Session, user: &UserProfile) -> NutritionPlan {
    let duration = session.duration_minutes;
    let zone = session.primary_zone;
    let long_or_hard = session.template.is_long_or_hard();

    NutritionPlan {
      pre_run: Self::pre_fueling(long_or_hard, user.weight_kg),
      intra_run: Self::intra_fueling(duration, zone),
      post_run: Self::post_fueling(duration, user.weight_kg),
      hydration: Self::hydration_guidance(duration, zone),
    }
  }

  pub fn pre_fueling(long_or_hard: bool, weight_kg: f64) -> PreRunFueling {
    let (rate, notes) = if long_or_hard {
      (
        PRE_RUN_CARBS_LONG_OR_HARD_G_PER_KG,
        "Aim for low-fiber carbs 2-3h pre-run; add 500 ml fluids.",
      )
    } else {
      (PRE_RUN_CARBS_EASY_G_PER_KG, "Small carb snack 30-60 min pre-run.")
    };

    PreRunFueling {
      carbs_g: round1(weight_kg * rate),
      notes: notes.to_string(),
    }
  }

  pub fn intra_fueling(duration_minutes: u32, zone: HrZone) -> IntraRunFueling {
    let rule = Self::intra_rule(duration_minutes);

    let mut carbs = rule.carbs_g_per_hour;
    if zone.is_very_hard() && duration_minutes >= 90 {
      carbs = carbs.max(HARD_LONG_SESSION_MIN_CARBS_G_PER_HOUR);
    }

    let notes = if carbs > 0 {
      "Use glucose+fructose mix for >60 g/h; sip steadily every 10-15 min."
    } else {
      "Water as thirst dictates; add electrolytes in heat."
    };

    IntraRunFueling {
      carbs_g_per_hour: carbs,
      fluids: rule.fluids.to_string(),
      electrolytes_mg_per_l: rule.electrolytes_mg_per_l,
      notes: notes.to_string(),
    }
  }

  /// Band containing the duration; anything off the table gets the first band
  fn intra_rule(duration_minutes: u32) -> IntraCarbRule {
    INTRA_CARB_RULES
      .iter()
      .copied()
      .find(|r| r.min_minutes <= duration_minutes && duration_minutes <= r.max_minutes)
      .unwrap_or(INTRA_CARB_RULES[0])
  }

  pub fn post_fueling(duration_minutes: u32, weight_kg: f64) -> PostRunFueling {
    let carb_rate = match duration_minutes {
      d if d >= 90 => POST_RUN_CARB_LONG_G_PER_KG,
      d if d >= 46 => POST_RUN_CARB_MEDIUM_G_PER_KG,
      _ => POST_RUN_CARB_SHORT_G_PER_KG,
    };

    PostRunFueling {
      protein_g: round1(weight_kg * POST_RUN_PROTEIN_G_PER_KG),
      carbs_g: round1(weight_kg * carb_rate),
      notes: "Refuel within 60 min with carbs + 20-30 g protein; add a second carb meal if double day."
        .to_string(),
    }
  }

  pub fn hydration_guidance(duration_minutes: u32, zone: HrZone) -> HydrationGuidance {
    let needs_electrolytes = duration_minutes >= 60 || zone.is_hard();
    let sodium_mg_per_l = if needs_electrolytes {
      let (low, high) = HYDRATION_SODIUM_MG_PER_L_RANGE;
      SodiumGuidance::Range(low, high)
    } else {
      SodiumGuidance::Note("Lightly salted foods suffice for short easy days.".to_string())
    };

    HydrationGuidance {
      fluids_ml_per_hour: HYDRATION_ML_PER_HR_RANGE,
      sodium_mg_per_l,
      notes: "Use thirst as a guide; adjust upward in heat or humidity.".to_string(),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::Template;
  use crate::test_utils::{create_test_session, create_test_user};

  #[test]
  fn test_pre_run_carbs_by_template() {
    let user = create_test_user(); // 68 kg

    let hard = create_test_session(Template::Threshold, 75, HrZone::Z3);
    assert_eq!(NutritionEngine::build_plan(&hard, &user).pre_run.carbs_g, 68.0);

    let easy = create_test_session(Template::Recovery, 40, HrZone::Z1);
    assert_eq!(NutritionEngine::build_plan(&easy, &user).pre_run.carbs_g, 34.0);
  }

  #[test]
  fn test_intra_bands() {
    assert_eq!(NutritionEngine::intra_fueling(45, HrZone::Z1).carbs_g_per_hour, 0);
    assert_eq!(NutritionEngine::intra_fueling(59, HrZone::Z1).carbs_g_per_hour, 0);
    assert_eq!(NutritionEngine::intra_fueling(60, HrZone::Z1).carbs_g_per_hour, 30);
    assert_eq!(NutritionEngine::intra_fueling(75, HrZone::Z3).carbs_g_per_hour, 30);
    assert_eq!(NutritionEngine::intra_fueling(90, HrZone::Z2).carbs_g_per_hour, 60);
    assert_eq!(NutritionEngine::intra_fueling(181, HrZone::Z2).carbs_g_per_hour, 90);

    let band = NutritionEngine::intra_fueling(120, HrZone::Z2);
    assert_eq!(band.fluids, "Carb mix (glucose/fructose) + electrolytes");
    assert_eq!(band.electrolytes_mg_per_l, 500);
  }

  #[test]
  fn test_intra_hard_override_needs_90_minutes() {
    // 75 min in Z4: no override
    assert_eq!(NutritionEngine::intra_fueling(75, HrZone::Z4).carbs_g_per_hour, 30);
    // 90 min in Z4: raised to 70
    assert_eq!(NutritionEngine::intra_fueling(90, HrZone::Z4).carbs_g_per_hour, 70);
    // Already above the floor
    assert_eq!(NutritionEngine::intra_fueling(200, HrZone::Z5).carbs_g_per_hour, 90);
    // Z3 does not qualify
    assert_eq!(NutritionEngine::intra_fueling(120, HrZone::Z3).carbs_g_per_hour, 60);
  }

  #[test]
  fn test_intra_off_table_falls_back_to_first_band() {
    let fueling = NutritionEngine::intra_fueling(320, HrZone::Z2);
    assert_eq!(fueling.carbs_g_per_hour, 0);
    assert_eq!(fueling.fluids, "Water");
    assert_eq!(fueling.notes, "Water as thirst dictates; add electrolytes in heat.");
  }

  #[test]
  fn test_post_run_tiers() {
    let medium = NutritionEngine::post_fueling(75, 68.0);
    assert_eq!(medium.protein_g, 18.4);
    assert_eq!(medium.carbs_g, 54.4);

    assert_eq!(NutritionEngine::post_fueling(45, 68.0).carbs_g, 40.8);
    assert_eq!(NutritionEngine::post_fueling(46, 68.0).carbs_g, 54.4);
    assert_eq!(NutritionEngine::post_fueling(90, 68.0).carbs_g, 68.0);
  }

  #[test]
  fn test_hydration_sodium_rules() {
    let short_easy = NutritionEngine::hydration_guidance(40, HrZone::Z1);
    assert!(matches!(short_easy.sodium_mg_per_l, SodiumGuidance::Note(_)));
    assert_eq!(short_easy.fluids_ml_per_hour, (500, 750));

    let short_hard = NutritionEngine::hydration_guidance(40, HrZone::Z3);
    assert_eq!(short_hard.sodium_mg_per_l, SodiumGuidance::Range(400, 800));

    let long_easy = NutritionEngine::hydration_guidance(60, HrZone::Z2);
    assert_eq!(long_easy.sodium_mg_per_l, SodiumGuidance::Range(400, 800));
  }

  #[test]
  fn test_sodium_guidance_json_shape() {
    let range = serde_json::to_value(SodiumGuidance::Range(400, 800)).unwrap();
    assert_eq!(range, serde_json::json!([400, 800]));

    let note = serde_json::to_value(SodiumGuidance::Note("salty snack".into())).unwrap();
    assert_eq!(note, serde_json::json!("salty snack"));
  }
}

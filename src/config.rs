//! Coach defaults, overridable from the environment
//!
//! Reads `COACH_DEFAULT_MAX_HR` and `COACH_DEFAULT_RESTING_HR`. Unset
//! variables keep the built-in defaults; set-but-invalid ones are errors.

use std::env;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_HR, DEFAULT_RESTING_HR};
use crate::error::{CoachError, CoachResult};

pub const MAX_HR_ENV: &str = "COACH_DEFAULT_MAX_HR";
pub const RESTING_HR_ENV: &str = "COACH_DEFAULT_RESTING_HR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachConfig {
  /// Substituted when the athlete has no max HR on file
  pub default_max_hr: NonZeroU32,
  /// Substituted when the athlete has no resting HR on file
  pub default_resting_hr: u32,
}

impl Default for CoachConfig {
  fn default() -> Self {
    Self {
      default_max_hr: NonZeroU32::new(DEFAULT_MAX_HR).unwrap_or(NonZeroU32::MIN),
      default_resting_hr: DEFAULT_RESTING_HR,
    }
  }
}

impl CoachConfig {
  pub fn from_env() -> CoachResult<Self> {
    let mut config = Self::default();

    if let Some(raw) = read_var(MAX_HR_ENV) {
      config.default_max_hr = raw
        .trim()
        .parse::<NonZeroU32>()
        .map_err(|_| invalid(MAX_HR_ENV, &raw))?;
    }

    if let Some(raw) = read_var(RESTING_HR_ENV) {
      config.default_resting_hr = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| invalid(RESTING_HR_ENV, &raw))?;
    }

    if config.default_resting_hr >= config.default_max_hr.get() {
      return Err(invalid(RESTING_HR_ENV, &config.default_resting_hr.to_string()));
    }

    Ok(config)
  }
}

fn read_var(key: &str) -> Option<String> {
  env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn invalid(key: &str, value: &str) -> CoachError {
  CoachError::InvalidConfig {
    key: key.to_string(),
    value: value.to_string(),
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn test_defaults_when_unset() {
    temp_env::with_vars_unset([MAX_HR_ENV, RESTING_HR_ENV], || {
      let config = CoachConfig::from_env().unwrap();
      assert_eq!(config, CoachConfig::default());
      assert_eq!(config.default_max_hr.get(), 190);
      assert_eq!(config.default_resting_hr, 60);
    });
  }

  #[test]
  #[serial]
  fn test_env_overrides() {
    temp_env::with_vars(
      [(MAX_HR_ENV, Some("182")), (RESTING_HR_ENV, Some(" 48 "))],
      || {
        let config = CoachConfig::from_env().unwrap();
        assert_eq!(config.default_max_hr.get(), 182);
        assert_eq!(config.default_resting_hr, 48);
      },
    );
  }

  #[test]
  #[serial]
  fn test_blank_value_keeps_default() {
    temp_env::with_vars([(MAX_HR_ENV, Some("  ")), (RESTING_HR_ENV, None::<&str>)], || {
      let config = CoachConfig::from_env().unwrap();
      assert_eq!(config.default_max_hr.get(), 190);
    });
  }

  #[test]
  #[serial]
  fn test_zero_max_hr_rejected() {
    temp_env::with_vars([(MAX_HR_ENV, Some("0")), (RESTING_HR_ENV, None::<&str>)], || {
      let err = CoachConfig::from_env().unwrap_err();
      assert_eq!(
        err,
        CoachError::InvalidConfig {
          key: MAX_HR_ENV.to_string(),
          value: "0".to_string(),
        }
      );
    });
  }

  #[test]
  #[serial]
  fn test_garbage_and_inverted_values_rejected() {
    temp_env::with_vars([(MAX_HR_ENV, None::<&str>), (RESTING_HR_ENV, Some("fast"))], || {
      assert!(matches!(
        CoachConfig::from_env(),
        Err(CoachError::InvalidConfig { ref key, .. }) if key == RESTING_HR_ENV
      ));
    });

    temp_env::with_vars([(MAX_HR_ENV, Some("150")), (RESTING_HR_ENV, Some("160"))], || {
      assert!(CoachConfig::from_env().is_err());
    });
  }
}

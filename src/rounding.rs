//! Fixed-precision rounding for reported figures

/// One decimal place, half away from zero
pub(crate) fn round1(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}

/// Two decimal places, half away from zero
pub(crate) fn round2(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

//! Volume trimming and load estimation
//!
//! Trimming rescales every segment so the segments still add up to the new
//! total. Rounding leftovers go to the segments with the largest fractional
//! parts.

use crate::constants::intensity_factor;
use crate::models::Session;
use crate::rounding::round1;

/// Scale the session by `factor`, rounding the new total half-to-even
pub fn trim_volume(session: &Session, factor: f64) -> Session {
  let target = (session.duration_minutes as f64 * factor.max(0.0)).round_ties_even() as u32;
  trim_to_total(session, target)
}

/// Rescale the session so it lasts exactly `target` minutes
pub fn trim_to_total(session: &Session, target: u32) -> Session {
  let current: Vec<u32> = session.segments.iter().map(|s| s.duration_minutes).collect();
  let scaled = apportion(&current, target);

  let mut trimmed = session.clone();
  for (segment, minutes) in trimmed.segments.iter_mut().zip(scaled) {
    segment.duration_minutes = minutes;
  }
  trimmed.duration_minutes = trimmed.segment_total();
  trimmed
}

/// Largest-remainder split of `target` proportional to `parts`
fn apportion(parts: &[u32], target: u32) -> Vec<u32> {
  let total: u64 = parts.iter().map(|p| *p as u64).sum();
  if total == 0 {
    return parts.to_vec();
  }

  let exact: Vec<f64> = parts
    .iter()
    .map(|p| (*p as f64 * target as f64) / total as f64)
    .collect();
  let mut shares: Vec<u32> = exact.iter().map(|e| e.floor() as u32).collect();

  let assigned: u32 = shares.iter().sum();
  let leftover = target.saturating_sub(assigned) as usize;

  let mut order: Vec<usize> = (0..parts.len()).collect();
  order.sort_by(|a, b| {
    let frac_a = exact[*a] - exact[*a].floor();
    let frac_b = exact[*b] - exact[*b].floor();
    frac_b.total_cmp(&frac_a)
  });
  for idx in order.into_iter().take(leftover) {
    shares[idx] += 1;
  }

  shares
}

/// Sum of minutes weighted by zone intensity, one decimal
pub fn estimate_load(session: &Session) -> f64 {
  let load: f64 = session
    .segments
    .iter()
    .map(|s| s.duration_minutes as f64 * intensity_factor(s.target_zone))
    .sum();
  round1(load)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

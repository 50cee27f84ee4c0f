//! Leitner box scheduling with SM-2 ease tracking.
//!
//! Box transitions are a bounded counter with two rules: two qualifying
//! reviews in a row promote one tier, a single failure demotes one tier.
//! The SM-2 ease factor is carried alongside so an extended policy can
//! scale intervals by it; under this policy the interval is a pure
//! function of the box.
//!
//! Every operation takes `now` as a parameter and performs no I/O, so
//! scoring is deterministic and testable without touching the clock.

use chrono::{DateTime, Duration, Utc};

use crate::config;
use crate::domain::{is_qualifying, CardReviewState};
use crate::error::SchedulerError;

/// Initial review state for a card: box 1, default ease, due again after
/// the box-1 interval. Pure construction, no error conditions.
pub fn create_initial_state(card_id: String, now: DateTime<Utc>) -> CardReviewState {
  CardReviewState::new(card_id, now)
}

/// Score one review and compute the replacement state.
///
/// `performance` runs 0 (total failure) to 5 (perfect recall); scores of
/// 3 and above qualify as correct. Out-of-range scores and states that
/// violate the scheduling invariants are rejected, never clamped.
pub fn score_review(
  current: &CardReviewState,
  performance: u8,
  now: DateTime<Utc>,
) -> Result<CardReviewState, SchedulerError> {
  if performance > config::MAX_PERFORMANCE {
    return Err(SchedulerError::InvalidPerformanceScore(performance));
  }
  current.check_invariants()?;

  // EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02))
  let q = performance as f64;
  let ease_delta = 0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02);
  let new_ease = (current.ease_factor + ease_delta).max(config::MIN_EASE_FACTOR);

  let (new_box, new_streak) = if is_qualifying(performance) {
    let streak = current.consecutive_correct + 1;
    let box_tier = if streak >= config::PROMOTION_STREAK {
      (current.box_tier + 1).min(config::MAX_BOX)
    } else {
      // A single correct answer is not enough to promote
      current.box_tier
    };
    (box_tier, streak)
  } else {
    // Failed review: demote one tier, restart the streak
    ((current.box_tier - 1).max(config::MIN_BOX), 0)
  };

  if new_box != current.box_tier {
    tracing::debug!(
      "card {} moved from box {} to box {}",
      current.card_id,
      current.box_tier,
      new_box
    );
  }

  Ok(CardReviewState {
    card_id: current.card_id.clone(),
    box_tier: new_box,
    ease_factor: new_ease,
    consecutive_correct: new_streak,
    last_reviewed_at: now,
    next_review_at: now + Duration::days(config::interval_days(new_box)),
  })
}

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::SchedulerError;

/// Persisted scheduling record for one card.
///
/// Scoring replaces the record wholesale; no caller ever observes a
/// partially updated state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardReviewState {
  /// Opaque identifier, stable for the card's lifetime
  pub card_id: String,
  /// Mastery tier in 1..=MAX_BOX; higher tier = longer interval
  pub box_tier: u8,
  /// SM-2 ease factor, floored at MIN_EASE_FACTOR
  pub ease_factor: f64,
  /// Qualifying reviews in a row since the last failure
  pub consecutive_correct: u32,
  pub last_reviewed_at: DateTime<Utc>,
  pub next_review_at: DateTime<Utc>,
}

impl CardReviewState {
  /// Fresh state for a card initialized at `now`: box 1, default ease,
  /// due again after the box-1 interval.
  pub fn new(card_id: String, now: DateTime<Utc>) -> Self {
    Self {
      card_id,
      box_tier: config::MIN_BOX,
      ease_factor: config::INITIAL_EASE_FACTOR,
      consecutive_correct: 0,
      last_reviewed_at: now,
      next_review_at: now + Duration::days(config::interval_days(config::MIN_BOX)),
    }
  }

  /// Defensive check on caller-supplied state.
  ///
  /// A misbehaving caller can hand back a record it corrupted in storage;
  /// scoring rejects such records instead of propagating bad arithmetic.
  pub fn check_invariants(&self) -> Result<(), SchedulerError> {
    if self.box_tier < config::MIN_BOX || self.box_tier > config::MAX_BOX {
      return Err(SchedulerError::InvalidStateInvariant(format!(
        "box {} outside {}..={} for card {}",
        self.box_tier,
        config::MIN_BOX,
        config::MAX_BOX,
        self.card_id
      )));
    }
    if self.ease_factor < config::MIN_EASE_FACTOR {
      return Err(SchedulerError::InvalidStateInvariant(format!(
        "ease factor {} below minimum {} for card {}",
        self.ease_factor,
        config::MIN_EASE_FACTOR,
        self.card_id
      )));
    }
    Ok(())
  }
}

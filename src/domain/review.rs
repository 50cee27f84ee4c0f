use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config;

/// Append-only log record for a single review.
///
/// Write-once: produced when a review is scored and never mutated
/// afterwards. Purely informational, kept for history and statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewEvent {
  pub card_id: String,
  /// Performance score on the 0-5 scale
  pub performance: u8,
  pub reviewed_at: DateTime<Utc>,
}

impl ReviewEvent {
  pub fn new(card_id: String, performance: u8, reviewed_at: DateTime<Utc>) -> Self {
    Self {
      card_id,
      performance,
      reviewed_at,
    }
  }

  /// Returns true if this review counted as correct
  pub fn is_qualifying(&self) -> bool {
    is_qualifying(self.performance)
  }
}

/// A review qualifies as correct when the score meets the threshold
pub fn is_qualifying(performance: u8) -> bool {
  performance >= config::QUALIFYING_THRESHOLD
}

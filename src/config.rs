//! Scheduling policy constants.
//!
//! This module centralizes the box interval table and ease bounds so the
//! rest of the crate never hardcodes them.

// ==================== Ease Configuration ====================

/// Ease factor assigned to a freshly initialized card
pub const INITIAL_EASE_FACTOR: f64 = 2.5;

/// Floor for the ease factor; intervals never compress below this pace
pub const MIN_EASE_FACTOR: f64 = 1.3;

// ==================== Box Configuration ====================

/// Lowest mastery tier
pub const MIN_BOX: u8 = 1;

/// Highest mastery tier; boxes are numbered 1..=MAX_BOX
pub const MAX_BOX: u8 = 5;

/// Days until the next review, indexed by box tier (box 1 at index 0).
/// Tiers past the end of the table reuse the last entry, capping spacing.
pub const BOX_INTERVAL_DAYS: [i64; 5] = [1, 6, 15, 30, 90];

/// Get the review interval in days for a box tier
pub fn interval_days(box_tier: u8) -> i64 {
  let idx = (box_tier.max(MIN_BOX) - 1) as usize;
  BOX_INTERVAL_DAYS[idx.min(BOX_INTERVAL_DAYS.len() - 1)]
}

// ==================== Scoring Configuration ====================

/// Performance scores run 0 (total failure) to 5 (perfect recall)
pub const MAX_PERFORMANCE: u8 = 5;

/// Scores at or above this threshold count as a qualifying review
pub const QUALIFYING_THRESHOLD: u8 = 3;

/// Consecutive qualifying reviews required before a card is promoted
pub const PROMOTION_STREAK: u32 = 2;

//! Summary statistics over the review history.

use std::collections::HashMap;

use crate::domain::ReviewEvent;

/// Aggregate accuracy figures computed from the append-only review log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewStats {
  pub total_reviews: u64,
  pub correct_reviews: u64,
  per_card: HashMap<String, CardTally>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct CardTally {
  total: u64,
  correct: u64,
}

impl ReviewStats {
  pub fn from_events(events: &[ReviewEvent]) -> Self {
    let mut stats = Self::default();
    for event in events {
      stats.total_reviews += 1;
      let tally = stats.per_card.entry(event.card_id.clone()).or_default();
      tally.total += 1;
      if event.is_qualifying() {
        stats.correct_reviews += 1;
        tally.correct += 1;
      }
    }
    stats
  }

  /// Lifetime share of qualifying reviews, 0.0 before any review
  pub fn accuracy(&self) -> f64 {
    if self.total_reviews > 0 {
      self.correct_reviews as f64 / self.total_reviews as f64
    } else {
      0.0
    }
  }

  pub fn card_reviews(&self, card_id: &str) -> u64 {
    self.per_card.get(card_id).map(|t| t.total).unwrap_or(0)
  }

  pub fn card_accuracy(&self, card_id: &str) -> f64 {
    match self.per_card.get(card_id) {
      Some(tally) if tally.total > 0 => tally.correct as f64 / tally.total as f64,
      _ => 0.0,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{DateTime, TimeZone, Utc};

  fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
  }

  fn event(card_id: &str, performance: u8) -> ReviewEvent {
    ReviewEvent::new(card_id.to_string(), performance, now())
  }

  #[test]
  fn test_empty_log() {
    let stats = ReviewStats::from_events(&[]);
    assert_eq!(stats.total_reviews, 0);
    assert_eq!(stats.correct_reviews, 0);
    assert_eq!(stats.accuracy(), 0.0);
  }

  #[test]
  fn test_totals_and_accuracy() {
    let events = vec![
      event("c1", 5),
      event("c1", 2),
      event("c2", 4),
      event("c2", 3),
    ];
    let stats = ReviewStats::from_events(&events);
    assert_eq!(stats.total_reviews, 4);
    assert_eq!(stats.correct_reviews, 3);
    assert!((stats.accuracy() - 0.75).abs() < f64::EPSILON);
  }

  #[test]
  fn test_per_card_figures() {
    let events = vec![event("c1", 5), event("c1", 0), event("c2", 4)];
    let stats = ReviewStats::from_events(&events);

    assert_eq!(stats.card_reviews("c1"), 2);
    assert!((stats.card_accuracy("c1") - 0.5).abs() < f64::EPSILON);
    assert_eq!(stats.card_reviews("c2"), 1);
    assert!((stats.card_accuracy("c2") - 1.0).abs() < f64::EPSILON);
  }

  #[test]
  fn test_unknown_card() {
    let stats = ReviewStats::from_events(&[event("c1", 4)]);
    assert_eq!(stats.card_reviews("nope"), 0);
    assert_eq!(stats.card_accuracy("nope"), 0.0);
  }

  #[test]
  fn test_threshold_boundary() {
    // Performance 3 is the lowest qualifying score
    let stats = ReviewStats::from_events(&[event("c1", 3), event("c1", 2)]);
    assert_eq!(stats.correct_reviews, 1);
  }
}

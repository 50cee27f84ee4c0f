//! In-memory deck session.
//!
//! Holds the per-card review states and the append-only review history
//! for one deck between the study UI and whatever persists them. The
//! session never reads the clock; callers supply `now` to every
//! time-dependent operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{CardReviewState, ReviewEvent};
use crate::error::SchedulerError;
use crate::srs;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckSession {
  /// Review states in card insertion order
  states: Vec<CardReviewState>,
  /// Append-only history of scored reviews
  events: Vec<ReviewEvent>,
}

impl DeckSession {
  pub fn new() -> Self {
    Self::default()
  }

  /// Initialize a card's review state if it has none yet.
  ///
  /// Repeat calls for the same card leave existing progress untouched.
  pub fn init_card(&mut self, card_id: &str, now: DateTime<Utc>) -> &CardReviewState {
    let idx = match self.position(card_id) {
      Some(idx) => idx,
      None => {
        tracing::debug!("initialized review state for card {}", card_id);
        self.states.push(srs::create_initial_state(card_id.to_string(), now));
        self.states.len() - 1
      }
    };
    &self.states[idx]
  }

  /// Score a review for an initialized card.
  ///
  /// Replaces the stored state wholesale and appends a `ReviewEvent` to
  /// the session history. Fails with `CardNotInitialized` for unknown
  /// cards; the session never initializes implicitly.
  pub fn record_review(
    &mut self,
    card_id: &str,
    performance: u8,
    now: DateTime<Utc>,
  ) -> Result<&CardReviewState, SchedulerError> {
    let idx = self
      .position(card_id)
      .ok_or_else(|| SchedulerError::CardNotInitialized(card_id.to_string()))?;
    let next = srs::score_review(&self.states[idx], performance, now)?;
    self.states[idx] = next;
    self.events.push(ReviewEvent::new(card_id.to_string(), performance, now));
    Ok(&self.states[idx])
  }

  pub fn state_of(&self, card_id: &str) -> Option<&CardReviewState> {
    self.states.iter().find(|s| s.card_id == card_id)
  }

  /// Due states in insertion order
  pub fn due_cards(&self, as_of: DateTime<Utc>) -> Vec<(String, CardReviewState)> {
    srs::select_due_cards(&self.states, as_of)
  }

  /// Number of cards due on the calendar day of `as_of`
  pub fn due_today(&self, as_of: DateTime<Utc>) -> usize {
    srs::count_due_today(&self.states, as_of)
  }

  pub fn states(&self) -> &[CardReviewState] {
    &self.states
  }

  pub fn events(&self) -> &[ReviewEvent] {
    &self.events
  }

  pub fn len(&self) -> usize {
    self.states.len()
  }

  pub fn is_empty(&self) -> bool {
    self.states.is_empty()
  }

  fn position(&self, card_id: &str) -> Option<usize> {
    self.states.iter().position(|s| s.card_id == card_id)
  }
}

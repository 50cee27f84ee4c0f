//! Due-card predicates and queries.
//!
//! Pure counterparts of the `next_review <= now` lookups the surrounding
//! application performs against its card store.

use chrono::{DateTime, Utc};

use crate::domain::CardReviewState;

/// A card is due once its scheduled review time has arrived or passed.
pub fn is_due(state: &CardReviewState, as_of: DateTime<Utc>) -> bool {
  state.next_review_at <= as_of
}

/// Count the cards due on the calendar day of `as_of`.
///
/// Day granularity: the time-of-day component is ignored on both sides,
/// so a card scheduled for later today still counts as due.
pub fn count_due_today(states: &[CardReviewState], as_of: DateTime<Utc>) -> usize {
  let today = as_of.date_naive();
  states
    .iter()
    .filter(|s| s.next_review_at.date_naive() <= today)
    .count()
}

/// All due states with their card ids, preserving input order.
///
/// No sort is applied, matching the reference behavior; callers that need
/// a storage-independent order should sort by `next_review_at` themselves.
pub fn select_due_cards(
  states: &[CardReviewState],
  as_of: DateTime<Utc>,
) -> Vec<(String, CardReviewState)> {
  states
    .iter()
    .filter(|s| is_due(s, as_of))
    .map(|s| (s.card_id.clone(), s.clone()))
    .collect()
}

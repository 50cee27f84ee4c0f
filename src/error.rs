//! Scheduler error types.

/// Errors surfaced by the scheduler.
///
/// Every variant indicates a caller bug rather than a transient condition;
/// none are retryable and none corrupt scheduler state.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerError {
  /// Performance score outside the 0-5 scale
  InvalidPerformanceScore(u8),
  /// Caller-supplied state violates a scheduling invariant
  InvalidStateInvariant(String),
  /// Review recorded for a card with no existing state
  CardNotInitialized(String),
}

impl std::fmt::Display for SchedulerError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SchedulerError::InvalidPerformanceScore(score) => {
        write!(f, "performance score {} is outside the 0-5 scale", score)
      }
      SchedulerError::InvalidStateInvariant(detail) => {
        write!(f, "card state violates a scheduling invariant: {}", detail)
      }
      SchedulerError::CardNotInitialized(card_id) => {
        write!(f, "card {} has no review state; initialize it first", card_id)
      }
    }
  }
}

impl std::error::Error for SchedulerError {}

pub mod due;
pub mod scheduler;

pub use due::{count_due_today, is_due, select_due_cards};
pub use scheduler::{create_initial_state, score_review};

pub mod card;
pub mod review;

pub use card::CardReviewState;
pub use review::{is_qualifying, ReviewEvent};

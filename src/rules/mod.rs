//! Game rules for five-in-a-row
//!
//! Only one rule set is implemented: five or more consecutive stones of one
//! color win, and a full board with no such run is a tie.

pub mod win;

// Re-exports for convenient access
pub use win::{evaluate, find_five, is_over, Outcome};

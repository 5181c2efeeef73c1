//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Nothing here knows about
//! history or cursors; the store derives everything it shows from these.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{calculate_turns, is_full};
pub use status::{Status, calculate_status};
pub use win::{LINES, calculate_winner, winning_line};

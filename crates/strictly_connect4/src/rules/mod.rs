//! Game rules for connect four.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the turn loop and renderers can share them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{Direction, RUN_LENGTH, WinningLine, find_four_in_a_row, has_four_in_a_row};

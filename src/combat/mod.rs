//! Turn-based combat: one player against one enemy.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;

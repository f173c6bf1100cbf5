//! Kernel - the turn loop and stalemate breaking.

mod match_loop;
pub mod stalemate;

pub use match_loop::{MatchLoop, TurnReport, TurnStatus};

//! Match state - positions, grid ownership and outcome tracking.

mod match_state;
mod setup;

pub use match_state::{MatchState, Outcome};
pub use setup::{build_grid, nearest_open, resolve};

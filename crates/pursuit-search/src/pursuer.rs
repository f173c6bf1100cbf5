use pursuit_core::{pursuer_score, Grid, Position};

use crate::AdversarialSearch;

/// Lookahead used by the presets.
pub const DEFAULT_DEPTH: u32 = 3;

/// Next cell for the pursuer, or `pursuer` itself if it cannot or need not move.
pub fn choose_pursuer_move(grid: &Grid, pursuer: Position, evader: Position, depth: u32) -> Position {
    let search = AdversarialSearch::new(pursuer_score, |pos| grid.is_open(pos));
    let next = search.best_move(pursuer, evader, depth).unwrap_or(pursuer);
    tracing::debug!(%pursuer, %evader, depth, %next, "pursuer decision");
    next
}

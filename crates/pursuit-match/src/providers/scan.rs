use pursuit_core::{Grid, Position};

use super::BlockProvider;
use crate::kernel::stalemate;

/// Picks the first blockable cell in row-major order. Deterministic; used for AI-only matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanBlockProvider;

impl BlockProvider for ScanBlockProvider {
    fn block_cell(&mut self, grid: &Grid, forbidden: &[Position]) -> Option<Position> {
        grid.open_cells()
            .find(|cell| stalemate::can_block(grid, *cell, forbidden))
    }
}

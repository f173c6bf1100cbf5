use std::collections::VecDeque;

use pursuit_core::{AgentKind, Grid, Position};

use super::{BlockProvider, MoveProvider};
use crate::error::{BlockError, MatchError};
use crate::state::MatchState;

/// Replays a fixed queue of moves, regardless of which agent asks. Quits when empty.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    moves: VecDeque<Position>,
    rejected: Vec<MatchError>,
}

impl ScriptedMoves {
    pub fn new<I: IntoIterator<Item = Position>>(moves: I) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            rejected: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }

    /// Errors reported back through [`MoveProvider::rejected`], oldest first.
    pub fn rejections(&self) -> &[MatchError] {
        &self.rejected
    }
}

impl MoveProvider for ScriptedMoves {
    fn next_move(&mut self, _agent: AgentKind, _state: &MatchState) -> Option<Position> {
        self.moves.pop_front()
    }

    fn rejected(&mut self, error: &MatchError) {
        self.rejected.push(error.clone());
    }
}

/// Replays a fixed queue of block cells. Quits when empty.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBlocks {
    cells: VecDeque<Position>,
    rejected: Vec<BlockError>,
}

impl ScriptedBlocks {
    pub fn new<I: IntoIterator<Item = Position>>(cells: I) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            rejected: Vec::new(),
        }
    }

    pub fn rejections(&self) -> &[BlockError] {
        &self.rejected
    }
}

impl BlockProvider for ScriptedBlocks {
    fn block_cell(&mut self, _grid: &Grid, _forbidden: &[Position]) -> Option<Position> {
        self.cells.pop_front()
    }

    fn rejected(&mut self, error: &BlockError) {
        self.rejected.push(*error);
    }
}

/// Move provider for matches without a human player; any request quits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHuman;

impl MoveProvider for NoHuman {
    fn next_move(&mut self, agent: AgentKind, _state: &MatchState) -> Option<Position> {
        tracing::warn!(%agent, "move requested but no human is attached");
        None
    }
}

//! Providers - the pull-based boundary to human input and display.
//!
//! The match loop calls these synchronously whenever it needs a decision it cannot make
//! itself. Returning `None` means the other side gave up, which aborts the match.

mod scan;
mod scripted;

use pursuit_core::{AgentKind, Grid, Position};

use crate::error::{BlockError, MatchError};
use crate::state::MatchState;

pub use scan::ScanBlockProvider;
pub use scripted::{NoHuman, ScriptedBlocks, ScriptedMoves};

/// Who decides an agent's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Controller {
    /// The built-in search for that agent
    #[default]
    Ai,
    /// An external [`MoveProvider`]
    Human,
}

/// Source of moves for human-controlled agents.
pub trait MoveProvider {
    /// Next cell for `agent`; `None` quits the match.
    fn next_move(&mut self, agent: AgentKind, state: &MatchState) -> Option<Position>;

    /// Called when the previous answer was refused; the provider will be asked again.
    fn rejected(&mut self, _error: &MatchError) {}
}

/// Source of stalemate-breaking wall cells.
pub trait BlockProvider {
    /// Cell to turn into a wall; must be open and not in `forbidden`. `None` quits the match.
    fn block_cell(&mut self, grid: &Grid, forbidden: &[Position]) -> Option<Position>;

    /// Called when the previous answer was refused; the provider will be asked again.
    fn rejected(&mut self, _error: &BlockError) {}
}

/// Output sink, driven by the caller once per completed turn.
pub trait Renderer {
    fn render(&mut self, state: &MatchState);
}

impl<T: MoveProvider + ?Sized> MoveProvider for &mut T {
    fn next_move(&mut self, agent: AgentKind, state: &MatchState) -> Option<Position> {
        (**self).next_move(agent, state)
    }

    fn rejected(&mut self, error: &MatchError) {
        (**self).rejected(error)
    }
}

impl<T: BlockProvider + ?Sized> BlockProvider for &mut T {
    fn block_cell(&mut self, grid: &Grid, forbidden: &[Position]) -> Option<Position> {
        (**self).block_cell(grid, forbidden)
    }

    fn rejected(&mut self, error: &BlockError) {
        (**self).rejected(error)
    }
}

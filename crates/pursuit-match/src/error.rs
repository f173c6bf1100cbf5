//! Error taxonomy for move validation, stalemate blocks and setup.

use pursuit_core::{AgentKind, GridError, GridParseError, Position};
use thiserror::Error;

/// Why a requested move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{0} is off the board")]
    OutOfBounds(Position),
    #[error("{0} is a wall")]
    Blocked(Position),
    #[error("{to} is not one step from {from}")]
    NotAdjacent { from: Position, to: Position },
}

impl From<GridError> for MoveError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::OutOfBounds { pos, .. } => MoveError::OutOfBounds(pos),
        }
    }
}

/// Why a stalemate block request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("{0} is off the board")]
    OutOfBounds(Position),
    #[error("{0} is already a wall")]
    NotOpen(Position),
    #[error("{0} is occupied by an agent or the goal")]
    Forbidden(Position),
}

/// Fatal setup problems; a match with one of these never starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("invalid board: {0}")]
    Board(#[from] GridParseError),
    #[error("board has {rows} rows but size is {size}")]
    SizeMismatch { rows: usize, size: usize },
    #[error("wall {0} is outside the grid")]
    WallOutOfBounds(Position),
    #[error("{what} position {pos} is outside the {size}x{size} grid")]
    PositionOutOfBounds {
        what: &'static str,
        pos: Position,
        size: usize,
    },
    #[error("no open cell left to place the {0}")]
    NoOpenCell(&'static str),
    #[error("max_turns must be at least 1")]
    ZeroBound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("invalid {agent} move: {source}")]
    InvalidMove { agent: AgentKind, source: MoveError },
    #[error("invalid block request: {0}")]
    InvalidBlock(#[from] BlockError),
    #[error(transparent)]
    Configuration(#[from] ConfigError),
    #[error("match is already over")]
    MatchOver,
}

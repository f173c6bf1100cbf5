//! Setup - turns a [`MatchConfig`] into a valid initial [`MatchState`].

use pursuit_core::{Grid, GridError, Position};

use super::MatchState;
use crate::config::MatchConfig;
use crate::error::ConfigError;

/// Build the grid from `board` (if any) plus `walls`.
pub fn build_grid(config: &MatchConfig) -> Result<Grid, ConfigError> {
    if config.size == 0 {
        return Err(ConfigError::EmptyGrid);
    }

    let mut grid = if config.board.is_empty() {
        Grid::new(config.size)
    } else {
        if config.board.len() != config.size {
            return Err(ConfigError::SizeMismatch {
                rows: config.board.len(),
                size: config.size,
            });
        }
        Grid::parse(config.board.as_slice())?
    };

    for &wall in &config.walls {
        grid.set_wall(wall).map_err(|err| match err {
            GridError::OutOfBounds { pos, .. } => ConfigError::WallOutOfBounds(pos),
        })?;
    }

    Ok(grid)
}

/// Nearest open cell to `from` by Manhattan distance, ties broken in row-major order,
/// skipping anything in `taken`.
pub fn nearest_open(grid: &Grid, from: Position, taken: &[Position]) -> Option<Position> {
    grid.open_cells()
        .filter(|cell| !taken.contains(cell))
        .min_by_key(|cell| cell.manhattan(from))
}

fn place(
    grid: &Grid,
    what: &'static str,
    pos: Position,
    taken: &[Position],
) -> Result<Position, ConfigError> {
    if !grid.is_in_bounds(pos) {
        return Err(ConfigError::PositionOutOfBounds {
            what,
            pos,
            size: grid.size(),
        });
    }
    if grid.is_open(pos) {
        return Ok(pos);
    }

    let moved = nearest_open(grid, pos, taken)
        .or_else(|| nearest_open(grid, pos, &[]))
        .ok_or(ConfigError::NoOpenCell(what))?;
    tracing::warn!(what, from = %pos, to = %moved, "relocated onto an open cell");
    Ok(moved)
}

/// Validate `config` and place the goal and both agents on open cells.
///
/// Only entities configured on a wall move. Placement order is goal, pursuer, evader, and a
/// relocated entity avoids cells already placed when it has any other choice. Agents that
/// start on a shared cell or on the goal leave the match already decided.
pub fn resolve(config: &MatchConfig) -> Result<MatchState, ConfigError> {
    let grid = build_grid(config)?;
    if config.max_turns == 0 {
        return Err(ConfigError::ZeroBound);
    }

    let goal = place(&grid, "goal", config.goal, &[])?;
    let pursuer = place(&grid, "pursuer", config.pursuer, &[goal])?;
    let evader = place(&grid, "evader", config.evader, &[goal, pursuer])?;

    let mut state = MatchState::new(grid, pursuer, evader, goal);
    let outcome = state.settle();
    if outcome.is_terminal() {
        tracing::info!(?outcome, "match decided at setup");
    }
    Ok(state)
}

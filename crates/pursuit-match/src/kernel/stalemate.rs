//! Stalemate breaking.
//!
//! When the gap between the agents has not shrunk for `threshold` turns, one open cell
//! becomes a wall. The cell comes from a [`BlockProvider`]; it must be open and must not
//! hold an agent or the goal.

use pursuit_core::{Grid, Position};

use crate::error::BlockError;
use crate::providers::BlockProvider;
use crate::state::MatchState;

/// True once `turns_since_progress` has reached `threshold`.
pub fn should_break(turns_since_progress: u32, threshold: u32) -> bool {
    turns_since_progress >= threshold
}

/// Checks that `pos` may become a wall.
pub fn check_block(grid: &Grid, pos: Position, forbidden: &[Position]) -> Result<(), BlockError> {
    if !grid.is_in_bounds(pos) {
        return Err(BlockError::OutOfBounds(pos));
    }
    if !grid.is_open(pos) {
        return Err(BlockError::NotOpen(pos));
    }
    if forbidden.contains(&pos) {
        return Err(BlockError::Forbidden(pos));
    }
    Ok(())
}

pub fn can_block(grid: &Grid, pos: Position, forbidden: &[Position]) -> bool {
    check_block(grid, pos, forbidden).is_ok()
}

/// Walls off `pos` and resets the stalemate counter.
pub(crate) fn apply_block(state: &mut MatchState, pos: Position) -> Result<(), BlockError> {
    check_block(state.grid(), pos, &state.forbidden())?;
    state
        .grid_mut()
        .set_wall(pos)
        .map_err(|_| BlockError::OutOfBounds(pos))?;
    state.reset_progress();
    tracing::info!(cell = %pos, turn = state.turn(), "stalemate broken");
    Ok(())
}

/// Asks `provider` for a cell until one is accepted.
///
/// Returns `None` when the provider quits or `attempts` requests were refused; the caller
/// aborts the match in that case.
pub(crate) fn apply_break(
    state: &mut MatchState,
    provider: &mut dyn BlockProvider,
    attempts: u32,
) -> Option<Position> {
    for attempt in 1..=attempts {
        let forbidden = state.forbidden();
        let pos = match provider.block_cell(state.grid(), &forbidden) {
            Some(pos) => pos,
            None => {
                tracing::info!("block provider quit");
                return None;
            }
        };
        match apply_block(state, pos) {
            Ok(()) => return Some(pos),
            Err(err) => {
                tracing::warn!(attempt, %err, "block request refused");
                provider.rejected(&err);
            }
        }
    }
    tracing::warn!(attempts, "block provider exhausted its attempts");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ScriptedBlocks;

    #[test]
    fn threshold_is_inclusive() {
        assert!(!should_break(2, 3));
        assert!(should_break(3, 3));
        assert!(should_break(0, 0));
    }

    #[test]
    fn check_block_classifies_refusals() {
        let grid = Grid::with_walls(3, [Position::new(1, 1)]).unwrap();
        let forbidden = [Position::new(0, 0)];

        assert_eq!(
            check_block(&grid, Position::new(3, 0), &forbidden),
            Err(BlockError::OutOfBounds(Position::new(3, 0)))
        );
        assert_eq!(
            check_block(&grid, Position::new(1, 1), &forbidden),
            Err(BlockError::NotOpen(Position::new(1, 1)))
        );
        assert_eq!(
            check_block(&grid, Position::new(0, 0), &forbidden),
            Err(BlockError::Forbidden(Position::new(0, 0)))
        );
        assert!(can_block(&grid, Position::new(2, 2), &forbidden));
    }

    #[test]
    fn apply_break_retries_after_refusal() {
        let mut state = MatchState::new(
            Grid::new(3),
            Position::new(0, 0),
            Position::new(2, 2),
            Position::new(0, 2),
        );
        let mut provider = ScriptedBlocks::new([Position::new(0, 0), Position::new(1, 1)]);

        let placed = apply_break(&mut state, &mut provider, 3);

        assert_eq!(placed, Some(Position::new(1, 1)));
        assert!(!state.grid().is_open(Position::new(1, 1)));
        assert_eq!(
            provider.rejections(),
            &[BlockError::Forbidden(Position::new(0, 0))]
        );
    }

    #[test]
    fn apply_break_gives_up_after_attempts() {
        let mut state = MatchState::new(
            Grid::new(3),
            Position::new(0, 0),
            Position::new(2, 2),
            Position::new(0, 2),
        );
        let mut provider = ScriptedBlocks::new([Position::new(9, 9); 4]);

        assert_eq!(apply_break(&mut state, &mut provider, 2), None);
        assert_eq!(provider.rejections().len(), 2);
        assert_eq!(state.grid().wall_count(), 0);
    }
}

use pursuit_core::{Direction, Position, CAPTURE_SCORE};

/// Depth-limited minimax over the 4-connected move graph.
///
/// The maximizing agent moves first. Plies alternate between the maximizer repositioning and
/// a worst-case reply from the minimizer; the minimizer's reply is scored with the same
/// evaluator, it is not modeled with its own objective.
///
/// Recursion stops at `depth == 0` or when both agents share a cell. Scores are bounded by
/// [`CAPTURE_SCORE`]: a maximizer without a legal move is worth `-CAPTURE_SCORE` and a
/// minimizer without one is worth `CAPTURE_SCORE`. Moves are tried in [`Direction::ALL`]
/// order and the first strictly better one wins ties.
pub struct AdversarialSearch<E, L> {
    evaluate: E,
    legal: L,
}

impl<E, L> AdversarialSearch<E, L>
where
    E: Fn(Position, Position) -> i32,
    L: Fn(Position) -> bool,
{
    pub fn new(evaluate: E, legal: L) -> Self {
        Self { evaluate, legal }
    }

    /// Best next cell for the maximizer, or `None` if there is nothing to decide: no depth,
    /// already on the minimizer, or no move scoring above `-CAPTURE_SCORE`.
    pub fn best_move(&self, maximizer: Position, minimizer: Position, depth: u32) -> Option<Position> {
        if depth == 0 || maximizer == minimizer {
            return None;
        }

        let mut best_value = -CAPTURE_SCORE;
        let mut best = None;
        for next in self.moves(maximizer) {
            let value = self.value(next, minimizer, depth - 1, false);
            if value > best_value {
                best_value = value;
                best = Some(next);
            }
        }
        best
    }

    /// Minimax value of the position with `maximizing` to move.
    pub fn value(&self, maximizer: Position, minimizer: Position, depth: u32, maximizing: bool) -> i32 {
        if depth == 0 || maximizer == minimizer {
            return (self.evaluate)(maximizer, minimizer);
        }

        if maximizing {
            self.moves(maximizer)
                .map(|next| self.value(next, minimizer, depth - 1, false))
                .fold(-CAPTURE_SCORE, i32::max)
        } else {
            self.moves(minimizer)
                .map(|next| self.value(maximizer, next, depth - 1, true))
                .fold(CAPTURE_SCORE, i32::min)
        }
    }

    fn moves(&self, from: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |dir| from.step(dir))
            .filter(move |next| (self.legal)(*next))
    }
}

//! Static evaluation for both agents.
//!
//! Both functions are pure and deterministic; the searches rely on that for repeatable results.

use crate::Position;

/// Score returned by [`pursuer_score`] when the pursuer stands on the evader.
pub const CAPTURE_SCORE: i32 = 999;

/// Higher is better for the pursuer: [`CAPTURE_SCORE`] on capture, otherwise the negated
/// Manhattan distance to the evader.
pub fn pursuer_score(pursuer: Position, evader: Position) -> i32 {
    if pursuer == evader {
        return CAPTURE_SCORE;
    }
    -(pursuer.manhattan(evader) as i32)
}

/// Manhattan distance to the goal. Admissible for unit-cost 4-connected movement.
pub fn evader_heuristic(pos: Position, goal: Position) -> u32 {
    pos.manhattan(goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closer_is_better_for_the_pursuer() {
        let evader = Position::new(4, 4);
        let far = pursuer_score(Position::new(0, 0), evader);
        let near = pursuer_score(Position::new(3, 4), evader);
        assert_eq!(far, -8);
        assert_eq!(near, -1);
        assert!(near > far);
        assert_eq!(pursuer_score(evader, evader), CAPTURE_SCORE);
    }

    #[test]
    fn heuristic_is_zero_at_goal() {
        let goal = Position::new(1, 1);
        assert_eq!(evader_heuristic(goal, goal), 0);
        assert_eq!(evader_heuristic(Position::new(3, 0), goal), 3);
    }
}

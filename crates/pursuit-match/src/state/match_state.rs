//! Mutable per-match state, owned by the match loop.

use pursuit_core::{AgentKind, Grid, Position};

/// How a match ended (or that it has not yet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    /// The pursuer reached the evader's cell.
    Captured,
    /// The evader reached the goal.
    Escaped,
    /// A provider quit or kept sending invalid input.
    Aborted,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Positions, grid and counters for one match.
///
/// Only the crate mutates it; providers and renderers see it through `&MatchState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    grid: Grid,
    pursuer: Position,
    evader: Position,
    goal: Position,
    turn: u32,
    turns_since_progress: u32,
    outcome: Outcome,
}

impl MatchState {
    pub(crate) fn new(grid: Grid, pursuer: Position, evader: Position, goal: Position) -> Self {
        Self {
            grid,
            pursuer,
            evader,
            goal,
            turn: 0,
            turns_since_progress: 0,
            outcome: Outcome::InProgress,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pursuer(&self) -> Position {
        self.pursuer
    }

    pub fn evader(&self) -> Position {
        self.evader
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn position(&self, agent: AgentKind) -> Position {
        match agent {
            AgentKind::Pursuer => self.pursuer,
            AgentKind::Evader => self.evader,
        }
    }

    /// Completed turns.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn turns_since_progress(&self) -> u32 {
        self.turns_since_progress
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Manhattan distance between the two agents.
    pub fn gap(&self) -> u32 {
        self.pursuer.manhattan(self.evader)
    }

    /// Cells that may never be walled off: both agents and the goal.
    pub fn forbidden(&self) -> [Position; 3] {
        [self.pursuer, self.evader, self.goal]
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub(crate) fn set_position(&mut self, agent: AgentKind, pos: Position) {
        match agent {
            AgentKind::Pursuer => self.pursuer = pos,
            AgentKind::Evader => self.evader = pos,
        }
    }

    /// Sets `Captured` or `Escaped` if either predicate holds, capture first.
    pub(crate) fn settle(&mut self) -> Outcome {
        if self.pursuer == self.evader {
            self.outcome = Outcome::Captured;
        } else if self.evader == self.goal {
            self.outcome = Outcome::Escaped;
        }
        self.outcome
    }

    /// Closes a turn: bumps the turn counter and resets or increments the stalemate counter
    /// depending on whether the gap shrank compared to `gap_before`.
    pub(crate) fn finish_turn(&mut self, gap_before: u32) {
        self.turn += 1;
        if self.gap() < gap_before {
            self.turns_since_progress = 0;
        } else {
            self.turns_since_progress += 1;
        }
    }

    pub(crate) fn reset_progress(&mut self) {
        self.turns_since_progress = 0;
    }

    pub(crate) fn abort(&mut self) {
        self.outcome = Outcome::Aborted;
    }
}

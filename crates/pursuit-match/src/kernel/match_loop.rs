use pursuit_core::{AgentKind, Position};
use pursuit_search::{choose_evader_move_within, choose_pursuer_move};

use super::stalemate;
use crate::config::MatchConfig;
use crate::error::{MatchError, MoveError};
use crate::providers::{BlockProvider, Controller, MoveProvider};
use crate::state::{self, MatchState, Outcome};

/// Where a match stands after a call to [`MatchLoop::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    Ongoing,
    Captured,
    Escaped,
    Aborted,
    /// `max_turns` turns were played without a capture or an escape.
    BoundReached,
}

impl TurnStatus {
    pub fn is_final(self) -> bool {
        !matches!(self, TurnStatus::Ongoing)
    }
}

/// Summary of one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Completed turns after this step. Not incremented by a ply that ends the match.
    pub turn: u32,
    pub pursuer: Position,
    pub evader: Position,
    pub status: TurnStatus,
    /// Wall placed to break a stalemate at the end of this turn.
    pub wall: Option<Position>,
}

/// Drives one match: one ply per agent per turn, outcome checks after every ply,
/// and stalemate breaking at the end of each turn.
#[derive(Debug, Clone)]
pub struct MatchLoop {
    state: MatchState,
    pursuer: Controller,
    evader: Controller,
    first_mover: AgentKind,
    search_depth: u32,
    danger_radius: u32,
    stalemate_threshold: u32,
    max_turns: u32,
    max_provider_attempts: u32,
}

impl MatchLoop {
    /// Resolves `config` into an AI-vs-AI match.
    pub fn new(config: &MatchConfig) -> Result<Self, MatchError> {
        let state = state::resolve(config)?;
        tracing::info!(
            size = state.grid().size(),
            pursuer = %state.pursuer(),
            evader = %state.evader(),
            goal = %state.goal(),
            max_turns = config.max_turns,
            "match ready"
        );
        Ok(Self {
            state,
            pursuer: Controller::Ai,
            evader: Controller::Ai,
            first_mover: config.first_mover,
            search_depth: config.search_depth,
            danger_radius: config.danger_radius,
            stalemate_threshold: config.stalemate_threshold,
            max_turns: config.max_turns,
            max_provider_attempts: config.max_provider_attempts.max(1),
        })
    }

    pub fn with_controllers(mut self, pursuer: Controller, evader: Controller) -> Self {
        self.pursuer = pursuer;
        self.evader = evader;
        self
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn controller(&self, agent: AgentKind) -> Controller {
        match agent {
            AgentKind::Pursuer => self.pursuer,
            AgentKind::Evader => self.evader,
        }
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    /// Status the match is in right now.
    pub fn status(&self) -> TurnStatus {
        match self.state.outcome() {
            Outcome::Captured => TurnStatus::Captured,
            Outcome::Escaped => TurnStatus::Escaped,
            Outcome::Aborted => TurnStatus::Aborted,
            Outcome::InProgress if self.state.turn() >= self.max_turns => TurnStatus::BoundReached,
            Outcome::InProgress => TurnStatus::Ongoing,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status().is_final()
    }

    /// Checks a requested move for `agent`: on the board, open, and one step away.
    pub fn validate_move(&self, agent: AgentKind, to: Position) -> Result<Position, MatchError> {
        let grid = self.state.grid();
        let from = self.state.position(agent);
        let invalid = |source: MoveError| MatchError::InvalidMove { agent, source };

        grid.kind(to).map_err(|err| invalid(err.into()))?;
        if !grid.is_open(to) {
            return Err(invalid(MoveError::Blocked(to)));
        }
        if !from.is_adjacent(to) {
            return Err(invalid(MoveError::NotAdjacent { from, to }));
        }
        Ok(to)
    }

    /// Walls off `pos` immediately and resets the stalemate counter.
    pub fn place_block(&mut self, pos: Position) -> Result<(), MatchError> {
        if self.is_over() {
            return Err(MatchError::MatchOver);
        }
        stalemate::apply_block(&mut self.state, pos)?;
        Ok(())
    }

    /// Plays one turn.
    ///
    /// `moves` is only consulted for human-controlled agents and `blocks` only when a
    /// stalemate has to be broken.
    pub fn step(
        &mut self,
        moves: &mut dyn MoveProvider,
        blocks: &mut dyn BlockProvider,
    ) -> Result<TurnReport, MatchError> {
        if self.is_over() {
            return Err(MatchError::MatchOver);
        }

        let gap_before = self.state.gap();
        let order = [self.first_mover, self.first_mover.opponent()];
        for agent in order {
            let Some(to) = self.decide(agent, moves) else {
                tracing::info!(%agent, turn = self.state.turn(), "match aborted");
                self.state.abort();
                return Ok(self.report(None));
            };
            self.state.set_position(agent, to);
            if self.state.settle().is_terminal() {
                tracing::info!(
                    outcome = ?self.state.outcome(),
                    turn = self.state.turn() + 1,
                    "match decided"
                );
                return Ok(self.report(None));
            }
        }

        self.state.finish_turn(gap_before);
        tracing::debug!(
            turn = self.state.turn(),
            pursuer = %self.state.pursuer(),
            evader = %self.state.evader(),
            stalemate = self.state.turns_since_progress(),
            "turn complete"
        );

        let mut wall = None;
        if stalemate::should_break(self.state.turns_since_progress(), self.stalemate_threshold) {
            match stalemate::apply_break(&mut self.state, blocks, self.max_provider_attempts) {
                Some(pos) => wall = Some(pos),
                None => {
                    self.state.abort();
                    return Ok(self.report(None));
                }
            }
        }

        if self.state.turn() >= self.max_turns {
            tracing::info!(max_turns = self.max_turns, "turn bound reached");
        }
        Ok(self.report(wall))
    }

    /// Steps until the match is over, calling `on_turn` after every turn. Returns the final report.
    pub fn run<F>(
        &mut self,
        moves: &mut dyn MoveProvider,
        blocks: &mut dyn BlockProvider,
        mut on_turn: F,
    ) -> Result<TurnReport, MatchError>
    where
        F: FnMut(&MatchState, &TurnReport),
    {
        loop {
            let report = self.step(moves, blocks)?;
            on_turn(&self.state, &report);
            if report.status.is_final() {
                return Ok(report);
            }
        }
    }

    fn decide(&self, agent: AgentKind, moves: &mut dyn MoveProvider) -> Option<Position> {
        let state = &self.state;
        match self.controller(agent) {
            Controller::Ai => Some(match agent {
                AgentKind::Pursuer => choose_pursuer_move(
                    state.grid(),
                    state.pursuer(),
                    state.evader(),
                    self.search_depth,
                ),
                AgentKind::Evader => choose_evader_move_within(
                    state.grid(),
                    state.evader(),
                    state.goal(),
                    state.pursuer(),
                    self.danger_radius,
                ),
            }),
            Controller::Human => self.ask_human(agent, moves),
        }
    }

    fn ask_human(&self, agent: AgentKind, moves: &mut dyn MoveProvider) -> Option<Position> {
        let from = self.state.position(agent);
        if self.state.grid().legal_moves(from).next().is_none() {
            tracing::info!(%agent, %from, "no legal moves, staying put");
            return Some(from);
        }

        for attempt in 1..=self.max_provider_attempts {
            let to = moves.next_move(agent, &self.state)?;
            match self.validate_move(agent, to) {
                Ok(to) => return Some(to),
                Err(err) => {
                    tracing::warn!(%agent, attempt, %err, "move refused");
                    moves.rejected(&err);
                }
            }
        }
        tracing::warn!(%agent, attempts = self.max_provider_attempts, "move provider exhausted its attempts");
        None
    }

    fn report(&self, wall: Option<Position>) -> TurnReport {
        TurnReport {
            turn: self.state.turn(),
            pursuer: self.state.pursuer(),
            evader: self.state.evader(),
            status: self.status(),
            wall,
        }
    }
}

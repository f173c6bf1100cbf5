//! Plain-text board rendering.

use std::io::Write;

use pursuit_core::Position;
use pursuit_match::{MatchState, Outcome, Renderer};

/// Draws the board: `#` wall, `.` open, `P` pursuer, `E` evader, `G` goal, `X` capture.
pub fn board(state: &MatchState) -> String {
    let grid = state.grid();
    let size = grid.size() as i32;
    let mut out = String::with_capacity((grid.size() + 1) * grid.size());

    for row in 0..size {
        for col in 0..size {
            let pos = Position::new(row, col);
            let glyph = if pos == state.pursuer() && pos == state.evader() {
                'X'
            } else if pos == state.pursuer() {
                'P'
            } else if pos == state.evader() {
                'E'
            } else if pos == state.goal() {
                'G'
            } else {
                grid.kind(pos).map(|kind| kind.glyph()).unwrap_or('?')
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

pub fn outcome_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::InProgress => "Out of turns, nobody wins.",
        Outcome::Captured => "The pursuer caught the evader.",
        Outcome::Escaped => "The evader reached the goal.",
        Outcome::Aborted => "Match aborted.",
    }
}

/// Writes the board and a status line after every turn.
pub struct TextRenderer<W> {
    out: W,
    max_turns: u32,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, max_turns: u32) -> Self {
        Self { out, max_turns }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, state: &MatchState) {
        let written = write!(
            self.out,
            "\n{}turn {}/{}  gap {}\n",
            board(state),
            state.turn(),
            self.max_turns,
            state.gap()
        )
        .and_then(|()| self.out.flush());
        if let Err(err) = written {
            tracing::warn!(%err, "failed to draw board");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pursuit_match::{MatchConfig, MatchLoop};

    #[test]
    fn board_marks_agents_goal_and_walls() {
        let config = MatchConfig {
            size: 3,
            walls: vec![Position::new(1, 1)],
            pursuer: Position::new(0, 0),
            evader: Position::new(2, 2),
            goal: Position::new(0, 2),
            ..MatchConfig::default()
        };
        let game = MatchLoop::new(&config).unwrap();

        assert_eq!(board(game.state()), "P.G\n.#.\n..E\n");
    }

    #[test]
    fn renderer_writes_status_line() {
        let game = MatchLoop::new(&MatchConfig::default()).unwrap();
        let mut out = Vec::new();
        TextRenderer::new(&mut out, 40).render(game.state());

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("turn 0/40  gap 12\n"));
        assert!(text.contains("P......\n"));
    }
}

//! Line-based providers reading from a terminal.

use std::io::{self, BufRead, Cursor, Write};

use pursuit_core::{AgentKind, Direction, Grid, Position};
use pursuit_match::{BlockError, BlockProvider, MatchError, MatchState, MoveProvider};

/// Line-oriented input shared by both prompts.
pub trait LineSource {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Reads one line; `None` on end of input or a read error.
fn read_line<R: LineSource>(input: &mut R) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(err) => {
            tracing::warn!(%err, "failed to read input");
            None
        }
    }
}

fn say<W: Write>(out: &mut W, text: &str) {
    if let Err(err) = write!(out, "{text}").and_then(|()| out.flush()) {
        tracing::warn!(%err, "failed to write prompt");
    }
}

/// `w`/`a`/`s`/`d` moves, `q` quits.
pub struct KeyMoves<R, W> {
    input: R,
    out: W,
}

impl<R: LineSource, W: Write> KeyMoves<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }
}

impl<R: LineSource, W: Write> MoveProvider for KeyMoves<R, W> {
    fn next_move(&mut self, agent: AgentKind, state: &MatchState) -> Option<Position> {
        let from = state.position(agent);
        loop {
            say(&mut self.out, &format!("{agent} at {from}, move [w/a/s/d, q quits]: "));
            let line = read_line(&mut self.input)?;
            let Some(key) = line.chars().next() else {
                continue;
            };
            if key.eq_ignore_ascii_case(&'q') {
                return None;
            }
            match Direction::from_key(key) {
                Some(dir) => return Some(from.step(dir)),
                None => say(&mut self.out, &format!("unknown key '{key}'\n")),
            }
        }
    }

    fn rejected(&mut self, error: &MatchError) {
        say(&mut self.out, &format!("{error}\n"));
    }
}

/// Reads `row col` for stalemate blocks, `q` quits.
pub struct PromptBlocks<R, W> {
    input: R,
    out: W,
}

impl<R: LineSource, W: Write> PromptBlocks<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }
}

fn parse_cell(line: &str) -> Option<Position> {
    let mut parts = line.split(|c: char| c.is_whitespace() || c == ',').filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Position::new(row, col))
}

impl<R: LineSource, W: Write> BlockProvider for PromptBlocks<R, W> {
    fn block_cell(&mut self, _grid: &Grid, _forbidden: &[Position]) -> Option<Position> {
        loop {
            say(&mut self.out, "Stalemate! Wall off a cell [row col, q quits]: ");
            let line = read_line(&mut self.input)?;
            if line.eq_ignore_ascii_case("q") {
                return None;
            }
            match parse_cell(&line) {
                Some(pos) => return Some(pos),
                None => say(&mut self.out, "expected two numbers\n"),
            }
        }
    }

    fn rejected(&mut self, error: &BlockError) {
        say(&mut self.out, &format!("{error}\n"));
    }
}

//! Match configuration loading and presets.

use std::path::Path;

use anyhow::{Context, Result};
use pursuit_core::{AgentKind, Position};
use serde::{Deserialize, Serialize};

/// Everything needed to set up one match, loaded from YAML or built from a [`Level`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Grid dimension `N` (the board is `N x N`)
    #[serde(default = "default_size")]
    pub size: usize,

    /// Optional board drawn as rows of `#` and `.`; must have `size` rows when set
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub board: Vec<String>,

    /// Extra wall cells applied on top of `board`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub walls: Vec<Position>,

    /// Initial pursuer position
    pub pursuer: Position,

    /// Initial evader position
    pub evader: Position,

    /// Cell the evader must reach
    pub goal: Position,

    /// Minimax depth for the pursuer
    #[serde(default = "default_search_depth")]
    pub search_depth: u32,

    /// Exclusion radius around the pursuer for the evader's path search
    #[serde(default = "default_danger_radius")]
    pub danger_radius: u32,

    /// Turns without the gap closing before a wall is placed
    #[serde(default = "default_stalemate_threshold")]
    pub stalemate_threshold: u32,

    /// Match-length bound in turns
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,

    /// Which agent moves first within a turn
    pub first_mover: AgentKind,

    /// Requests to a provider per decision before the match is aborted
    #[serde(default = "default_max_provider_attempts")]
    pub max_provider_attempts: u32,
}

fn default_size() -> usize {
    7
}
fn default_search_depth() -> u32 {
    pursuit_search::DEFAULT_DEPTH
}
fn default_danger_radius() -> u32 {
    pursuit_search::DANGER_RADIUS
}
fn default_stalemate_threshold() -> u32 {
    20
}
fn default_max_turns() -> u32 {
    40
}
fn default_max_provider_attempts() -> u32 {
    8
}

impl Default for MatchConfig {
    fn default() -> Self {
        let size = default_size();
        let far = size as i32 - 1;
        Self {
            size,
            board: Vec::new(),
            walls: Vec::new(),
            pursuer: Position::new(0, 0),
            evader: Position::new(far, far),
            goal: Position::new(far / 2, far / 2),
            search_depth: default_search_depth(),
            danger_radius: default_danger_radius(),
            stalemate_threshold: default_stalemate_threshold(),
            max_turns: default_max_turns(),
            first_mover: AgentKind::Pursuer,
            max_provider_attempts: default_max_provider_attempts(),
        }
    }
}

impl MatchConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read match config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse match config from {}", path.display()))?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Render as YAML (used to write a starter config)
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize match config")
    }
}

/// Built-in fixed boards.
///
/// The pursuer starts in the top-left corner and the evader in the bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Easy,
    Medium,
    Hard,
}

const EASY_BOARD: &[&str] = &[
    ".#...#.",
    ".###.#.",
    "...#...",
    "#....#.",
    "..##.#.",
    "...#.##",
    ".#.....",
];

const MEDIUM_BOARD: &[&str] = &[
    ".#..#....",
    ".#.##.##.",
    "....#.##.",
    "#.#.#.#..",
    "..#...#.#",
    ".######.#",
    "...#.##.#",
    "..##....#",
    "#....##..",
];

// The goal cell (1, 1) is a wall here; setup moves it to the nearest open cell.
const HARD_BOARD: &[&str] = &[
    ".#.#...#....",
    ".#.#.#.#.##.",
    "....##.#..#.",
    "#.#.#...#.#.",
    "..#...#...##",
    ".###.#.##...",
    "..#..#....#.",
    "#.#.##.####.",
    ".....#....##",
    ".#.#.####...",
    "...#.#....#.",
    ".#.#...####.",
];

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Level::Easy => "easy",
            Level::Medium => "medium",
            Level::Hard => "hard",
        }
    }

    pub fn board(self) -> &'static [&'static str] {
        match self {
            Level::Easy => EASY_BOARD,
            Level::Medium => MEDIUM_BOARD,
            Level::Hard => HARD_BOARD,
        }
    }

    pub fn goal(self) -> Position {
        match self {
            Level::Easy => Position::new(3, 3),
            Level::Medium => Position::new(4, 4),
            Level::Hard => Position::new(1, 1),
        }
    }

    pub fn max_turns(self) -> u32 {
        match self {
            Level::Easy => 40,
            Level::Medium => 50,
            Level::Hard => 60,
        }
    }

    pub fn config(self) -> MatchConfig {
        let board = self.board();
        let far = board.len() as i32 - 1;
        MatchConfig {
            size: board.len(),
            board: board.iter().map(|row| row.to_string()).collect(),
            pursuer: Position::new(0, 0),
            evader: Position::new(far, far),
            goal: self.goal(),
            max_turns: self.max_turns(),
            ..MatchConfig::default()
        }
    }
}

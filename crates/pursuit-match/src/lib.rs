//! Pursuit Match - turn-based match kernel
//!
//! This crate owns a match from setup to its terminal outcome: it resolves a
//! [`MatchConfig`] into a validated [`MatchState`], asks the searches (or an
//! external [`MoveProvider`]) for each agent's move, detects capture and
//! escape, and breaks stalemates by walling off a cell.
//!
//! Nothing here performs I/O. Human input, block requests and rendering are
//! pulled through the traits in [`providers`].

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod kernel;
pub mod providers;
pub mod state;

pub use config::{Level, MatchConfig};
pub use error::{BlockError, ConfigError, MatchError, MoveError};
pub use kernel::{stalemate, MatchLoop, TurnReport, TurnStatus};
pub use providers::{
    BlockProvider, Controller, MoveProvider, NoHuman, Renderer, ScanBlockProvider, ScriptedBlocks,
    ScriptedMoves,
};
pub use state::{MatchState, Outcome};

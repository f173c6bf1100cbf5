//! Deterministic, engine-agnostic primitives for a two-agent grid pursuit.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod error;
pub mod eval;
pub mod grid;
pub mod position;

pub use agent::AgentKind;
pub use error::{GridError, GridParseError};
pub use eval::{evader_heuristic, pursuer_score, CAPTURE_SCORE};
pub use grid::{CellKind, Grid};
pub use position::{Direction, Position};

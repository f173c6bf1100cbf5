//! Decision procedures for the two non-human agents.
//!
//! - [`AdversarialSearch`]: depth-limited minimax parametrized by an evaluator and a legality
//!   predicate. [`choose_pursuer_move`] is the pursuer's instantiation of it.
//! - [`choose_evader_move`]: A* towards the goal that refuses to step next to the pursuer.
//!
//! Every entry point borrows the [`pursuit_core::Grid`] immutably and keeps no state between
//! calls.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod adversarial;
pub mod evader;
pub mod pursuer;

pub use adversarial::AdversarialSearch;
pub use evader::{choose_evader_move, choose_evader_move_within, plan_evader_path, DANGER_RADIUS};
pub use pursuer::{choose_pursuer_move, DEFAULT_DEPTH};

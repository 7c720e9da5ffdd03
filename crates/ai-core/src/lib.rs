//! Deterministic, engine-agnostic search primitives.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod frontier;
pub mod turn;

pub use action::GameAction;
pub use frontier::{Frontier, PriorityQueue, Queue, Stack};
pub use turn::{AgentIndex, Turn, MAXIMIZER};

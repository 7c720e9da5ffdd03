//! Multi-agent adversarial and stochastic tree search.
//!
//! Agent `0` always maximizes. Every other agent either minimizes
//! ([`Minimax`], [`AlphaBeta`]) or picks uniformly at random ([`Expectimax`]).
//! Depth is counted in plies: one ply is a full round in which every agent has
//! moved once. Each decision is a fresh, self-contained recursive walk with no
//! state kept between calls.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod alpha_beta;
pub mod config;
pub mod error;
pub mod expectimax;
pub mod game;
pub mod minimax;
mod tree;

pub use agent::SearchAgent;
pub use alpha_beta::AlphaBeta;
pub use config::{AgentConfig, DeadEndPolicy, Strategy, TreeSearchConfig};
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub use error::ConfigError;
pub use error::{Result, TreeSearchError};
pub use expectimax::Expectimax;
pub use game::{Evaluator, GameState, ScoreEvaluator, Scored};
pub use minimax::Minimax;
pub use tree::{Decision, MultiAgentSearch};

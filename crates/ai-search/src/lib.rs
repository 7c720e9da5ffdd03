//! Uninformed and informed graph search over an abstract [`SearchProblem`].
//!
//! All four algorithms share one skeleton and differ only in the frontier:
//! a stack (depth-first), a FIFO queue (breadth-first), or a priority queue keyed
//! by path cost (uniform-cost) or by path cost plus a heuristic estimate (A*).
//!
//! States are marked visited when they are first pushed, not when they are
//! expanded, so no state ever enters the frontier twice.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod problem;

pub use engine::{
    a_star_search, breadth_first_search, depth_first_search, uniform_cost_search, GraphSearch,
    GraphSearchConfig, Solution,
};
pub use error::{Result, SearchError};
pub use problem::{Heuristic, NullHeuristic, SearchProblem, Successor};

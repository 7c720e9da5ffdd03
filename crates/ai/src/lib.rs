//! Umbrella crate that re-exports the `ai-*` building blocks.
//!
//! - [`search`]: DFS, BFS, uniform-cost, and A* over any [`search::SearchProblem`].
//! - [`adversarial`]: minimax, alpha-beta, and expectimax over any
//!   [`adversarial::GameState`].
//! - [`grid`]: maze layouts and ready-made search problems to try both on.
//!
//! ```
//! use ai::grid::{Layout, ManhattanHeuristic, PositionSearchProblem, Position};
//! use ai::search::GraphSearch;
//!
//! let layout: Layout = "%%%%%\n%P  %\n%%%%%".parse()?;
//! let problem = PositionSearchProblem::new(&layout.maze, layout.start, Position::new(3, 1));
//! let solution = GraphSearch::new().a_star(&problem, &ManhattanHeuristic)?;
//! assert_eq!(solution.actions.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use ai_core as core;

#[cfg(feature = "search")]
#[cfg_attr(docsrs, doc(cfg(feature = "search")))]
pub use ai_search as search;

#[cfg(feature = "adversarial")]
#[cfg_attr(docsrs, doc(cfg(feature = "adversarial")))]
pub use ai_adversarial as adversarial;

#[cfg(feature = "grid")]
#[cfg_attr(docsrs, doc(cfg(feature = "grid")))]
pub use ai_grid as grid;

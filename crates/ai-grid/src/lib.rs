//! Grid-world search problems, admissible heuristics, and planners.
//!
//! Layouts use `%` for walls, `P` for the start, and `.` for food. Positions are
//! `(x, y)` with `y` growing downwards from the first layout row.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod closest_dot;
pub mod direction;
pub mod error;
pub mod heuristics;
pub mod maze;
pub mod problems;

pub use closest_dot::ClosestDotPlanner;
pub use direction::Direction;
pub use error::{GridError, Result};
pub use heuristics::{
    euclidean_distance, manhattan_distance, CornersHeuristic, EuclideanHeuristic, FoodHeuristic,
    ManhattanHeuristic,
};
pub use maze::{FoodGrid, Layout, Maze, Position};
pub use problems::{
    AnyFoodSearchProblem, CornersProblem, CornersState, FoodSearchProblem, FoodState,
    PositionSearchProblem, ILLEGAL_ACTIONS_COST,
};

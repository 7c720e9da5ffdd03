//! Admissible estimates for the grid problems.

use ai_search::Heuristic;

use crate::{
    CornersProblem, CornersState, FoodSearchProblem, FoodState, Position, PositionSearchProblem,
};

pub fn manhattan_distance(a: Position, b: Position) -> f64 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as f64
}

pub fn euclidean_distance(a: Position, b: Position) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    dx.hypot(dy)
}

/// Manhattan distance to the goal. Admissible only for unit step costs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanHeuristic;

impl<'a> Heuristic<PositionSearchProblem<'a>> for ManhattanHeuristic {
    fn estimate(&self, state: &Position, problem: &PositionSearchProblem<'a>) -> f64 {
        manhattan_distance(*state, problem.goal())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanHeuristic;

impl<'a> Heuristic<PositionSearchProblem<'a>> for EuclideanHeuristic {
    fn estimate(&self, state: &Position, problem: &PositionSearchProblem<'a>) -> f64 {
        euclidean_distance(*state, problem.goal())
    }
}

/// Largest Manhattan distance to a corner not yet visited.
///
/// Every remaining corner has to be reached, so the farthest one bounds the rest
/// of the walk from below.
#[derive(Debug, Clone, Copy, Default)]
pub struct CornersHeuristic;

impl<'a> Heuristic<CornersProblem<'a>> for CornersHeuristic {
    fn estimate(&self, state: &CornersState, problem: &CornersProblem<'a>) -> f64 {
        problem
            .corners()
            .iter()
            .zip(state.visited)
            .filter(|&(_, seen)| !seen)
            .map(|(&corner, _)| manhattan_distance(state.position, corner))
            .fold(0.0, f64::max)
    }
}

/// Largest Manhattan distance to a remaining piece of food.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoodHeuristic;

impl<'a> Heuristic<FoodSearchProblem<'a>> for FoodHeuristic {
    fn estimate(&self, state: &FoodState, _problem: &FoodSearchProblem<'a>) -> f64 {
        state
            .food
            .positions()
            .map(|food| manhattan_distance(state.position, food))
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Position::new(1, 1);
        let b = Position::new(4, 5);
        assert_eq!(manhattan_distance(a, b), 7.0);
        assert_eq!(euclidean_distance(a, b), 5.0);
        assert_eq!(manhattan_distance(a, a), 0.0);
    }
}

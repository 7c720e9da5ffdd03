use ai_search::GraphSearch;

use crate::{AnyFoodSearchProblem, Direction, FoodGrid, GridError, Maze, Position, Result};

/// Greedy food collector: repeatedly walks a shortest path to the nearest food.
///
/// Fast, but the total path is generally longer than a [`FoodSearchProblem`]
/// optimum.
///
/// [`FoodSearchProblem`]: crate::FoodSearchProblem
#[derive(Debug, Clone)]
pub struct ClosestDotPlanner<'a> {
    maze: &'a Maze,
    search: GraphSearch,
}

impl<'a> ClosestDotPlanner<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        Self {
            maze,
            search: GraphSearch::new(),
        }
    }

    pub fn with_search(mut self, search: GraphSearch) -> Self {
        self.search = search;
        self
    }

    /// Breadth-first path from `start` to the nearest cell holding food.
    pub fn path_to_closest_dot(&self, start: Position, food: &FoodGrid) -> Result<Vec<Direction>> {
        let problem = AnyFoodSearchProblem::new(self.maze, start, food);
        Ok(self.search.breadth_first(&problem)?.actions)
    }

    /// Concatenated closest-dot segments until no food is left.
    ///
    /// Food on the start cell counts as eaten. Every segment is replayed against
    /// the maze, so an illegal step is reported instead of silently accepted.
    pub fn plan(&self, start: Position, food: &FoodGrid) -> Result<Vec<Direction>> {
        let mut food = food.clone();
        let mut position = start;
        let mut actions = Vec::new();
        food.eat(position);

        while !food.is_empty() {
            let segment = self.path_to_closest_dot(position, &food)?;
            tracing::trace!(
                x = position.x,
                y = position.y,
                steps = segment.len(),
                "closest dot segment"
            );
            for direction in segment {
                position = self
                    .maze
                    .step(position, direction)
                    .ok_or(GridError::IllegalMove {
                        position,
                        direction,
                    })?;
                food.eat(position);
                actions.push(direction);
            }
        }

        tracing::info!(steps = actions.len(), "closest dot plan complete");
        Ok(actions)
    }
}

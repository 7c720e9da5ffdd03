use core::fmt;

use ai_search::{SearchProblem, Successor};

use crate::{Direction, FoodGrid, Layout, Maze, Position};

/// Reported by `actions_cost` for any action sequence that walks into a wall.
pub const ILLEGAL_ACTIONS_COST: f64 = 999_999.0;

/// Walk from a start position to a single goal cell.
///
/// Each step costs `cost_fn(next_position)`, which defaults to `1.0`.
pub struct PositionSearchProblem<'a> {
    maze: &'a Maze,
    start: Position,
    goal: Position,
    cost_fn: Box<dyn Fn(Position) -> f64 + 'a>,
}

impl fmt::Debug for PositionSearchProblem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionSearchProblem")
            .field("start", &self.start)
            .field("goal", &self.goal)
            .finish_non_exhaustive()
    }
}

fn unit_cost(_: Position) -> f64 {
    1.0
}

impl<'a> PositionSearchProblem<'a> {
    pub fn new(maze: &'a Maze, start: Position, goal: Position) -> Self {
        Self {
            maze,
            start,
            goal,
            cost_fn: Box::new(unit_cost),
        }
    }

    /// Prices each step by the cell it enters. The closure may borrow game
    /// state, such as ghost or food positions.
    pub fn with_cost_fn(mut self, cost_fn: impl Fn(Position) -> f64 + 'a) -> Self {
        self.cost_fn = Box::new(cost_fn);
        self
    }

    pub fn maze(&self) -> &Maze {
        self.maze
    }

    pub fn goal(&self) -> Position {
        self.goal
    }
}

impl SearchProblem for PositionSearchProblem<'_> {
    type State = Position;
    type Action = Direction;

    fn starting_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn successor_states(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        self.maze
            .moves(*state)
            .map(|(direction, next)| Successor::new(next, direction, (self.cost_fn)(next)))
            .collect()
    }

    fn actions_cost(&self, actions: &[Direction]) -> f64 {
        walk(self.maze, self.start, actions, &*self.cost_fn)
    }
}

/// Replays `actions` from `start`, summing `cost_fn` of every cell entered.
fn walk(
    maze: &Maze,
    start: Position,
    actions: &[Direction],
    cost_fn: &dyn Fn(Position) -> f64,
) -> f64 {
    let mut at = start;
    let mut total = 0.0;
    for &direction in actions {
        match maze.step(at, direction) {
            Some(next) => at = next,
            None => return ILLEGAL_ACTIONS_COST,
        }
        total += cost_fn(at);
    }
    total
}

/// Position plus which of the four corners have been touched, in [`Maze::corners`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornersState {
    pub position: Position,
    pub visited: [bool; 4],
}

impl CornersState {
    pub fn remaining(&self) -> usize {
        self.visited.iter().filter(|&&seen| !seen).count()
    }
}

/// Find a shortest walk that touches all four inner corners of the maze.
#[derive(Debug, Clone)]
pub struct CornersProblem<'a> {
    maze: &'a Maze,
    start: Position,
    corners: [Position; 4],
}

impl<'a> CornersProblem<'a> {
    pub fn new(maze: &'a Maze, start: Position) -> Self {
        Self {
            maze,
            start,
            corners: maze.corners(),
        }
    }

    /// Builds the problem from a layout, warning about corners that hold no food.
    pub fn from_layout(layout: &'a Layout) -> Self {
        let problem = Self::new(&layout.maze, layout.start);
        for corner in problem.corners {
            if !layout.food.has(corner) {
                tracing::warn!(x = corner.x, y = corner.y, "no food in corner");
            }
        }
        problem
    }

    pub fn corners(&self) -> &[Position; 4] {
        &self.corners
    }
}

impl SearchProblem for CornersProblem<'_> {
    type State = CornersState;
    type Action = Direction;

    fn starting_state(&self) -> CornersState {
        CornersState {
            position: self.start,
            visited: [false; 4],
        }
    }

    fn is_goal(&self, state: &CornersState) -> bool {
        state.visited.iter().all(|&seen| seen)
    }

    fn successor_states(&self, state: &CornersState) -> Vec<Successor<CornersState, Direction>> {
        self.maze
            .moves(state.position)
            .map(|(direction, next)| {
                let mut visited = state.visited;
                for (seen, corner) in visited.iter_mut().zip(self.corners) {
                    *seen |= corner == next;
                }
                let next_state = CornersState {
                    position: next,
                    visited,
                };
                Successor::new(next_state, direction, 1.0)
            })
            .collect()
    }

    fn actions_cost(&self, actions: &[Direction]) -> f64 {
        walk(self.maze, self.start, actions, &unit_cost)
    }
}

/// Position plus the food still on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoodState {
    pub position: Position,
    pub food: FoodGrid,
}

/// Eat every piece of food. Each step costs `1.0`.
#[derive(Debug, Clone)]
pub struct FoodSearchProblem<'a> {
    maze: &'a Maze,
    start: FoodState,
}

impl<'a> FoodSearchProblem<'a> {
    pub fn new(maze: &'a Maze, start: Position, food: FoodGrid) -> Self {
        Self {
            maze,
            start: FoodState {
                position: start,
                food,
            },
        }
    }

    pub fn from_layout(layout: &'a Layout) -> Self {
        Self::new(&layout.maze, layout.start, layout.food.clone())
    }

    pub fn maze(&self) -> &Maze {
        self.maze
    }
}

impl SearchProblem for FoodSearchProblem<'_> {
    type State = FoodState;
    type Action = Direction;

    fn starting_state(&self) -> FoodState {
        self.start.clone()
    }

    fn is_goal(&self, state: &FoodState) -> bool {
        state.food.is_empty()
    }

    fn successor_states(&self, state: &FoodState) -> Vec<Successor<FoodState, Direction>> {
        self.maze
            .moves(state.position)
            .map(|(direction, next)| {
                let mut food = state.food.clone();
                food.eat(next);
                Successor::new(
                    FoodState {
                        position: next,
                        food,
                    },
                    direction,
                    1.0,
                )
            })
            .collect()
    }

    fn actions_cost(&self, actions: &[Direction]) -> f64 {
        walk(self.maze, self.start.position, actions, &unit_cost)
    }
}

/// Reach any cell that holds food. Used by the closest-dot planner.
#[derive(Debug, Clone)]
pub struct AnyFoodSearchProblem<'a> {
    maze: &'a Maze,
    start: Position,
    food: &'a FoodGrid,
}

impl<'a> AnyFoodSearchProblem<'a> {
    pub fn new(maze: &'a Maze, start: Position, food: &'a FoodGrid) -> Self {
        Self { maze, start, food }
    }
}

impl SearchProblem for AnyFoodSearchProblem<'_> {
    type State = Position;
    type Action = Direction;

    fn starting_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        self.food.has(*state)
    }

    fn successor_states(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        self.maze
            .moves(*state)
            .map(|(direction, next)| Successor::new(next, direction, 1.0))
            .collect()
    }

    fn actions_cost(&self, actions: &[Direction]) -> f64 {
        walk(self.maze, self.start, actions, &unit_cost)
    }
}

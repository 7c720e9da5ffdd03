use std::collections::HashSet;

use ai_grid::{
    ClosestDotPlanner, CornersHeuristic, CornersProblem, Direction, FoodHeuristic,
    FoodSearchProblem, GridError, Layout, ManhattanHeuristic, Maze, Position,
    PositionSearchProblem,
};
use ai_search::{GraphSearch, NullHeuristic, SearchError, SearchProblem};

const TINY_CORNERS: &str = "
%%%%%%%%
%.    .%
%   P  %
% %%%% %
% %    %
% % %%%%
%.%   .%
%%%%%%%%
";

fn tiny_corners() -> Layout {
    Layout::parse(TINY_CORNERS).expect("layout")
}

/// Replays `actions`, returning every cell entered, or `None` on an illegal step.
fn replay(maze: &Maze, start: Position, actions: &[Direction]) -> Option<Vec<Position>> {
    let mut at = start;
    let mut cells = vec![start];
    for &direction in actions {
        at = maze.step(at, direction)?;
        cells.push(at);
    }
    Some(cells)
}

#[test]
fn breadth_first_position_search_is_shortest() {
    let layout = tiny_corners();
    let goal = Position::new(1, 6);
    let problem = PositionSearchProblem::new(&layout.maze, layout.start, goal);

    let bfs = GraphSearch::new().breadth_first(&problem).expect("path");
    assert_eq!(bfs.actions.len(), 7);
    assert_eq!(bfs.cost, 7.0);

    let cells = replay(&layout.maze, layout.start, &bfs.actions).expect("legal");
    assert_eq!(cells.last(), Some(&goal));
}

#[test]
fn every_algorithm_reaches_the_goal_with_a_legal_path() {
    let layout = tiny_corners();
    let goal = Position::new(6, 6);
    let problem = PositionSearchProblem::new(&layout.maze, layout.start, goal);
    let search = GraphSearch::new();

    let solutions = [
        search.depth_first(&problem).expect("dfs"),
        search.breadth_first(&problem).expect("bfs"),
        search.uniform_cost(&problem).expect("ucs"),
        search.a_star(&problem, &ManhattanHeuristic).expect("astar"),
    ];
    for solution in &solutions {
        let cells = replay(&layout.maze, layout.start, &solution.actions).expect("legal");
        assert_eq!(cells.last(), Some(&goal));
        assert_eq!(problem.actions_cost(&solution.actions), solution.cost);
    }
}

#[test]
fn manhattan_a_star_expands_fewer_states_than_uniform_cost() {
    let layout = tiny_corners();
    let problem = PositionSearchProblem::new(&layout.maze, layout.start, Position::new(1, 6));

    let ucs = GraphSearch::new().uniform_cost(&problem).expect("ucs");
    let astar = GraphSearch::new()
        .a_star(&problem, &ManhattanHeuristic)
        .expect("astar");

    assert_eq!(astar.cost, ucs.cost);
    assert!(astar.expanded < ucs.expanded);
}

#[test]
fn corners_problem_visits_all_four_corners() {
    let layout = tiny_corners();
    let problem = CornersProblem::from_layout(&layout);

    let bfs = GraphSearch::new().breadth_first(&problem).expect("bfs");
    assert_eq!(bfs.actions.len(), 28);

    let cells: HashSet<Position> = replay(&layout.maze, layout.start, &bfs.actions)
        .expect("legal")
        .into_iter()
        .collect();
    for corner in problem.corners() {
        assert!(cells.contains(corner), "{corner:?} not visited");
    }
}

#[test]
fn corners_heuristic_keeps_the_optimum_and_prunes() {
    let layout = tiny_corners();
    let problem = CornersProblem::from_layout(&layout);

    let bfs = GraphSearch::new().breadth_first(&problem).expect("bfs");
    let astar = GraphSearch::new()
        .a_star(&problem, &CornersHeuristic)
        .expect("astar");
    let null = GraphSearch::new()
        .a_star(&problem, &NullHeuristic)
        .expect("null");

    assert_eq!(astar.cost, 28.0);
    assert!(astar.expanded < null.expanded);
    assert_eq!(null.expanded, bfs.expanded);
}

#[test]
fn food_search_eats_everything() {
    let layout = tiny_corners();
    let problem = FoodSearchProblem::from_layout(&layout);

    let astar = GraphSearch::new()
        .a_star(&problem, &FoodHeuristic)
        .expect("astar");
    assert_eq!(astar.cost, 28.0);

    let cells: HashSet<Position> = replay(&layout.maze, layout.start, &astar.actions)
        .expect("legal")
        .into_iter()
        .collect();
    assert!(layout.food.positions().all(|food| cells.contains(&food)));
}

#[test]
fn closest_dot_planner_is_greedy_but_complete() {
    let layout = tiny_corners();
    let planner = ClosestDotPlanner::new(&layout.maze);

    let first = planner
        .path_to_closest_dot(layout.start, &layout.food)
        .expect("segment");
    assert_eq!(
        first,
        vec![Direction::North, Direction::East, Direction::East]
    );

    let plan = planner.plan(layout.start, &layout.food).expect("plan");
    assert_eq!(plan.len(), 32);

    let cells: HashSet<Position> = replay(&layout.maze, layout.start, &plan)
        .expect("legal")
        .into_iter()
        .collect();
    assert!(layout.food.positions().all(|food| cells.contains(&food)));
}

#[test]
fn closest_dot_planner_reports_unreachable_food() {
    let layout = Layout::parse("%%%%%%\n%P%%.%\n%%%%%%").expect("layout");
    let planner = ClosestDotPlanner::new(&layout.maze);

    let err = planner.plan(layout.start, &layout.food).unwrap_err();
    assert!(matches!(
        err,
        GridError::Search(SearchError::NoSolution { .. })
    ));
}

#[test]
fn closest_dot_planner_with_no_food_does_nothing() {
    let layout = Layout::parse("%%%%\n%P %\n%%%%").expect("layout");
    let planner = ClosestDotPlanner::new(&layout.maze);

    assert_eq!(planner.plan(layout.start, &layout.food), Ok(Vec::new()));
}

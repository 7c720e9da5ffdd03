//! Pac-Man style demo for the search crates.
//!
//! - `pacman search` runs a graph search over a maze problem.
//! - `pacman play` pits a tree-search Pac-Man against greedy ghosts.
//!
//! Logging follows `RUST_LOG` (for example `RUST_LOG=ai_search=debug`).

use std::path::PathBuf;

use ai::adversarial::{GameState, MultiAgentSearch, SearchAgent, Strategy, TreeSearchConfig};
use ai::core::AgentIndex;
use ai::grid::{
    manhattan_distance, ClosestDotPlanner, CornersHeuristic, CornersProblem, Direction, FoodGrid,
    FoodHeuristic, FoodSearchProblem, Layout, ManhattanHeuristic, Maze, Position,
    PositionSearchProblem,
};
use ai::search::{GraphSearch, GraphSearchConfig, Heuristic, SearchProblem, Solution};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LAYOUT: &str = "
%%%%%%%%%%%%%%%%%%%%
%.     . %      . .%
% %%%% % % %%%%% % %
% %  .       .   % %
% % %%%% %%%% %% % %
%.     .  P  .    .%
%%%%%%%%%%%%%%%%%%%%
";

#[derive(Parser)]
#[command(name = "pacman")]
#[command(about = "Graph and adversarial search on Pac-Man mazes")]
struct Cli {
    /// Layout file (`%` wall, `P` start, `.` food). Defaults to a built-in maze.
    #[arg(short, long, global = true)]
    layout: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single-agent search problem
    Search {
        #[arg(long, value_enum, default_value = "position")]
        problem: ProblemKind,

        #[arg(long, value_enum, default_value = "astar")]
        algorithm: Algorithm,

        /// Goal cell for the position problem, as `x,y`. Defaults to the first food.
        #[arg(long)]
        goal: Option<String>,

        #[arg(long)]
        max_expansions: Option<usize>,
    },

    /// Play against ghosts with a tree-search agent
    Play {
        #[arg(long, value_enum, default_value = "alpha-beta")]
        strategy: StrategyArg,

        #[arg(long, default_value_t = 2)]
        depth: u32,

        /// Ghosts start here, as `x,y`. Repeat for more ghosts.
        #[arg(long = "ghost")]
        ghosts: Vec<String>,

        #[arg(long, default_value_t = 200)]
        max_turns: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ProblemKind {
    Position,
    Corners,
    Food,
    ClosestDot,
}

#[derive(Clone, Copy, ValueEnum)]
enum Algorithm {
    Dfs,
    Bfs,
    Ucs,
    Astar,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Minimax,
    AlphaBeta,
    Expectimax,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Minimax => Strategy::Minimax,
            StrategyArg::AlphaBeta => Strategy::AlphaBeta,
            StrategyArg::Expectimax => Strategy::Expectimax,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    fmt().with_env_filter(filter).with_target(false).init();

    let layout = match &cli.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read layout {}", path.display()))?;
            Layout::parse(&text)?
        }
        None => Layout::parse(DEFAULT_LAYOUT)?,
    };

    match cli.command {
        Commands::Search {
            problem,
            algorithm,
            goal,
            max_expansions,
        } => {
            let mut config = GraphSearchConfig::default();
            if let Some(limit) = max_expansions {
                config = config.with_max_expansions(limit);
            }
            run_search(&layout, problem, algorithm, goal.as_deref(), config)
        }
        Commands::Play {
            strategy,
            depth,
            ghosts,
            max_turns,
        } => {
            let ghosts = ghosts
                .iter()
                .map(|g| parse_position(g))
                .collect::<Result<Vec<_>>>()?;
            run_play(&layout, strategy.into(), depth, ghosts, max_turns)
        }
    }
}

fn parse_position(text: &str) -> Result<Position> {
    let Some((x, y)) = text.split_once(',') else {
        bail!("expected `x,y`, got {text:?}");
    };
    Ok(Position::new(x.trim().parse()?, y.trim().parse()?))
}

fn solve<P, H>(
    search: &GraphSearch,
    problem: &P,
    algorithm: Algorithm,
    heuristic: &H,
) -> Result<Solution<P::Action>>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    let solution = match algorithm {
        Algorithm::Dfs => search.depth_first(problem)?,
        Algorithm::Bfs => search.breadth_first(problem)?,
        Algorithm::Ucs => search.uniform_cost(problem)?,
        Algorithm::Astar => search.a_star(problem, heuristic)?,
    };
    Ok(solution)
}

fn report(solution: &Solution<Direction>) {
    tracing::info!(
        steps = solution.actions.len(),
        cost = solution.cost,
        expanded = solution.expanded,
        generated = solution.generated,
        "path found"
    );
    println!("{}", render(&solution.actions));
}

fn render(actions: &[Direction]) -> String {
    actions
        .iter()
        .map(|direction| match direction {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
            Direction::Stop => '.',
        })
        .collect()
}

fn run_search(
    layout: &Layout,
    problem: ProblemKind,
    algorithm: Algorithm,
    goal: Option<&str>,
    config: GraphSearchConfig,
) -> Result<()> {
    let search = GraphSearch::new().with_config(config);
    match problem {
        ProblemKind::Position => {
            let goal = match goal {
                Some(text) => parse_position(text)?,
                None => layout
                    .food
                    .positions()
                    .next()
                    .context("layout has no food to use as a goal")?,
            };
            let problem = PositionSearchProblem::new(&layout.maze, layout.start, goal);
            report(&solve(&search, &problem, algorithm, &ManhattanHeuristic)?);
        }
        ProblemKind::Corners => {
            let problem = CornersProblem::from_layout(layout);
            report(&solve(&search, &problem, algorithm, &CornersHeuristic)?);
        }
        ProblemKind::Food => {
            let problem = FoodSearchProblem::from_layout(layout);
            report(&solve(&search, &problem, algorithm, &FoodHeuristic)?);
        }
        ProblemKind::ClosestDot => {
            if !matches!(algorithm, Algorithm::Bfs) {
                tracing::warn!("closest-dot planning always uses breadth-first segments");
            }
            let actions = ClosestDotPlanner::new(&layout.maze)
                .with_search(search)
                .plan(layout.start, &layout.food)?;
            tracing::info!(steps = actions.len(), "plan found");
            println!("{}", render(&actions));
        }
    }
    Ok(())
}

/// Pac-Man (agent 0) and ghosts (agents 1..) on a maze.
#[derive(Debug, Clone)]
struct Chase<'a> {
    maze: &'a Maze,
    pacman: Position,
    ghosts: Vec<Position>,
    /// Last move of each ghost.
    headings: Vec<Direction>,
    food: FoodGrid,
    score: f64,
    caught: bool,
}

impl Chase<'_> {
    fn position(&self, agent: AgentIndex) -> Position {
        if agent == 0 {
            self.pacman
        } else {
            self.ghosts[agent - 1]
        }
    }

    /// The ghost move that closes the most distance, first in cardinal order on ties.
    ///
    /// Ghosts only turn back when the corridor leaves them no other move.
    fn greedy_ghost_move(&self, agent: AgentIndex) -> Direction {
        let at = self.position(agent);
        let back = self.headings[agent - 1].reverse();
        let mut moves: Vec<(Direction, Position)> = self.maze.moves(at).collect();
        if moves.len() > 1 {
            moves.retain(|&(direction, _)| direction != back);
        }
        moves
            .into_iter()
            .min_by(|(_, a), (_, b)| {
                manhattan_distance(*a, self.pacman).total_cmp(&manhattan_distance(*b, self.pacman))
            })
            .map(|(direction, _)| direction)
            .unwrap_or(Direction::Stop)
    }
}

impl GameState for Chase<'_> {
    type Action = Direction;

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Direction> {
        let mut actions: Vec<Direction> = self
            .maze
            .moves(self.position(agent))
            .map(|(direction, _)| direction)
            .collect();
        if agent == 0 || actions.is_empty() {
            actions.push(Direction::Stop);
        }
        actions
    }

    fn generate_successor(&self, agent: AgentIndex, action: &Direction) -> Self {
        let mut next = self.clone();
        let at = self.position(agent);
        let to = self.maze.step(at, *action).unwrap_or(at);
        if agent == 0 {
            next.pacman = to;
            next.score -= 1.0;
            if next.food.eat(to) {
                next.score += 10.0;
                if next.food.is_empty() {
                    next.score += 500.0;
                }
            }
        } else {
            next.ghosts[agent - 1] = to;
            next.headings[agent - 1] = *action;
        }
        if !next.caught && next.ghosts.contains(&next.pacman) {
            next.caught = true;
            next.score -= 500.0;
        }
        next
    }

    fn is_win(&self) -> bool {
        self.food.is_empty() && !self.caught
    }

    fn is_lose(&self) -> bool {
        self.caught
    }

    fn num_agents(&self) -> usize {
        1 + self.ghosts.len()
    }
}

fn evaluate(state: &Chase<'_>) -> f64 {
    let nearest_food = state
        .food
        .positions()
        .map(|food| manhattan_distance(state.pacman, food))
        .fold(f64::INFINITY, f64::min);
    let food_term = if nearest_food.is_finite() {
        10.0 / (1.0 + nearest_food)
    } else {
        0.0
    };
    let danger = state
        .ghosts
        .iter()
        .filter(|&&ghost| manhattan_distance(state.pacman, ghost) <= 1.0)
        .count() as f64;
    state.score + food_term - 200.0 * danger
}

fn run_play(
    layout: &Layout,
    strategy: Strategy,
    depth: u32,
    ghosts: Vec<Position>,
    max_turns: usize,
) -> Result<()> {
    let ghosts = if ghosts.is_empty() {
        vec![layout.maze.corners()[2]]
    } else {
        ghosts
    };
    for ghost in &ghosts {
        if layout.maze.is_wall(*ghost) {
            bail!("ghost start {ghost:?} is inside a wall");
        }
    }

    let agent = SearchAgent::new(strategy, evaluate)
        .with_config(TreeSearchConfig::default().with_depth(depth));
    let mut game = Chase {
        maze: &layout.maze,
        pacman: layout.start,
        headings: vec![Direction::Stop; ghosts.len()],
        ghosts,
        food: layout.food.clone(),
        score: 0.0,
        caught: false,
    };

    let mut turn = 0;
    while turn < max_turns && !game.is_terminal() {
        let decision = agent.decide(&game)?;
        tracing::debug!(
            turn,
            action = ?decision.action,
            value = decision.value,
            nodes = decision.nodes,
            "pacman moves"
        );
        game = game.generate_successor(0, &decision.action);
        for ghost in 1..game.num_agents() {
            if game.is_terminal() {
                break;
            }
            let action = game.greedy_ghost_move(ghost);
            game = game.generate_successor(ghost, &action);
        }
        turn += 1;
    }

    let outcome = if game.is_win() {
        "win"
    } else if game.is_lose() {
        "lose"
    } else {
        "timeout"
    };
    tracing::info!(
        strategy = strategy.name(),
        depth,
        turns = turn,
        score = game.score,
        food_left = game.food.count(),
        outcome,
        "game over"
    );
    Ok(())
}

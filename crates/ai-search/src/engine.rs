use std::collections::HashSet;

use ai_core::{Frontier, PriorityQueue, Queue, Stack};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Heuristic, Result, SearchError, SearchProblem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GraphSearchConfig {
    /// Give up after this many expansions. `None` searches until the frontier is empty.
    pub max_expansions: Option<usize>,
}

impl GraphSearchConfig {
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}

/// A successful search: the action path plus bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<A> {
    pub actions: Vec<A>,
    /// `actions_cost` of `actions`, as reported by the problem.
    pub cost: f64,
    /// Number of states whose successors were enumerated.
    pub expanded: usize,
    /// Number of entries pushed onto the frontier, including the start.
    pub generated: usize,
}

/// Frontier entry. Each entry owns its own copy of the path so far.
#[derive(Debug)]
struct Node<S, A> {
    state: S,
    path: Vec<A>,
    cost: f64,
}

#[derive(Debug, Clone, Default)]
pub struct GraphSearch {
    config: GraphSearchConfig,
}

impl GraphSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: GraphSearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GraphSearchConfig {
        &self.config
    }

    /// Expand the most recently discovered state first. Finds *a* path, not the best one.
    pub fn depth_first<P: SearchProblem>(&self, problem: &P) -> Result<Solution<P::Action>> {
        self.search(problem, Stack::new(), "depth_first", |_| 0.0)
    }

    /// Fewest actions when all step costs are equal.
    pub fn breadth_first<P: SearchProblem>(&self, problem: &P) -> Result<Solution<P::Action>> {
        self.search(problem, Queue::new(), "breadth_first", |_| 0.0)
    }

    /// Expand the entry with the lowest cumulative path cost first.
    ///
    /// The priority of every pushed entry is recomputed with
    /// [`SearchProblem::actions_cost`] over its full path.
    pub fn uniform_cost<P: SearchProblem>(&self, problem: &P) -> Result<Solution<P::Action>> {
        self.search(problem, PriorityQueue::new(), "uniform_cost", |node| {
            problem.actions_cost(&node.path)
        })
    }

    /// Expand the entry with the lowest `g + h` first, where `g` accumulates step costs.
    pub fn a_star<P, H>(&self, problem: &P, heuristic: &H) -> Result<Solution<P::Action>>
    where
        P: SearchProblem,
        H: Heuristic<P> + ?Sized,
    {
        self.search(problem, PriorityQueue::new(), "a_star", |node| {
            node.cost + heuristic.estimate(&node.state, problem)
        })
    }

    fn search<P, F>(
        &self,
        problem: &P,
        mut frontier: F,
        algorithm: &'static str,
        priority: impl Fn(&Node<P::State, P::Action>) -> f64,
    ) -> Result<Solution<P::Action>>
    where
        P: SearchProblem,
        F: Frontier<Node<P::State, P::Action>>,
    {
        let start = problem.starting_state();
        let mut visited: HashSet<P::State> = HashSet::new();
        visited.insert(start.clone());

        let root = Node {
            state: start,
            path: Vec::new(),
            cost: 0.0,
        };
        let root_priority = priority(&root);
        frontier.insert(root, root_priority);

        let mut expanded: usize = 0;
        let mut generated: usize = 1;

        while let Some(node) = frontier.remove() {
            if problem.is_goal(&node.state) {
                let cost = problem.actions_cost(&node.path);
                tracing::debug!(
                    algorithm,
                    expanded,
                    generated,
                    path_len = node.path.len(),
                    cost,
                    "graph search reached goal"
                );
                return Ok(Solution {
                    actions: node.path,
                    cost,
                    expanded,
                    generated,
                });
            }

            if let Some(limit) = self.config.max_expansions {
                if expanded >= limit {
                    tracing::debug!(algorithm, limit, "graph search hit expansion limit");
                    return Err(SearchError::ExpansionLimit { limit });
                }
            }
            expanded += 1;

            for successor in problem.successor_states(&node.state) {
                if visited.contains(&successor.state) {
                    continue;
                }
                visited.insert(successor.state.clone());

                let mut path = Vec::with_capacity(node.path.len() + 1);
                path.extend(node.path.iter().cloned());
                path.push(successor.action);

                let child = Node {
                    state: successor.state,
                    path,
                    cost: node.cost + successor.cost,
                };
                let child_priority = priority(&child);
                frontier.insert(child, child_priority);
                generated += 1;
            }
        }

        tracing::debug!(algorithm, expanded, generated, "graph search found no solution");
        Err(SearchError::NoSolution { expanded })
    }
}

pub fn depth_first_search<P: SearchProblem>(problem: &P) -> Result<Vec<P::Action>> {
    GraphSearch::new().depth_first(problem).map(|s| s.actions)
}

pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> Result<Vec<P::Action>> {
    GraphSearch::new().breadth_first(problem).map(|s| s.actions)
}

pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> Result<Vec<P::Action>> {
    GraphSearch::new().uniform_cost(problem).map(|s| s.actions)
}

pub fn a_star_search<P, H>(problem: &P, heuristic: &H) -> Result<Vec<P::Action>>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    GraphSearch::new().a_star(problem, heuristic).map(|s| s.actions)
}

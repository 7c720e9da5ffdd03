use core::hash::Hash;

/// One outgoing transition from a state.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    /// Non-negative step cost.
    pub cost: f64,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, cost: f64) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

/// Capability contract consumed by the graph-search engine.
///
/// States are immutable values: every successor is a freshly produced state,
/// and equality plus hashing are used to deduplicate them.
pub trait SearchProblem {
    type State: Clone + Eq + Hash;
    type Action: Clone;

    fn starting_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Successors in a fixed, deterministic order.
    fn successor_states(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of applying `actions` from the starting state.
    fn actions_cost(&self, actions: &[Self::Action]) -> f64;
}

/// Estimate of the remaining cost from a state to the nearest goal.
///
/// A* only returns minimum-cost paths when the estimate is admissible (never
/// larger than the true remaining cost). Nothing checks this at runtime: an
/// inadmissible heuristic silently yields a valid but possibly costlier path.
pub trait Heuristic<P: SearchProblem> {
    fn estimate(&self, state: &P::State, problem: &P) -> f64;
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem,
    F: Fn(&P::State, &P) -> f64,
{
    fn estimate(&self, state: &P::State, problem: &P) -> f64 {
        self(state, problem)
    }
}

/// Always estimates zero; A* with it behaves exactly like uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl<P: SearchProblem> Heuristic<P> for NullHeuristic {
    fn estimate(&self, _state: &P::State, _problem: &P) -> f64 {
        0.0
    }
}

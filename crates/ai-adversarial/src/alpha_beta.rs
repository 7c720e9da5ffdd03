use ai_core::Turn;

use crate::tree::{decide_root, Expansion, Walk};
use crate::{
    Decision, Evaluator, GameState, MultiAgentSearch, Result, Strategy, TreeSearchConfig,
};

/// Minimax with alpha-beta pruning.
///
/// Returns the same root value and action as [`Minimax`](crate::Minimax) (first
/// maximal action in enumeration order) while visiting fewer states.
#[derive(Debug, Clone)]
pub struct AlphaBeta<E> {
    evaluator: E,
    config: TreeSearchConfig,
}

impl<E> AlphaBeta<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            config: TreeSearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TreeSearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.config.depth = depth;
        self
    }

    pub fn config(&self) -> &TreeSearchConfig {
        &self.config
    }
}

impl<G, E> MultiAgentSearch<G> for AlphaBeta<E>
where
    G: GameState,
    E: Evaluator<G>,
{
    fn decide(&self, state: &G) -> Result<Decision<G::Action>> {
        decide(state, &self.evaluator, &self.config)
    }
}

pub(crate) fn decide<G, E>(
    state: &G,
    evaluator: &E,
    config: &TreeSearchConfig,
) -> Result<Decision<G::Action>>
where
    G: GameState,
    E: Evaluator<G>,
{
    // At the root, alpha is always the best value found so far.
    decide_root(Strategy::AlphaBeta, state, evaluator, config, |walk, child, turn, best| {
        value(walk, child, turn, best, f64::INFINITY)
    })
}

fn value<G, E>(
    walk: &mut Walk<'_, E>,
    state: &G,
    turn: Turn,
    mut alpha: f64,
    mut beta: f64,
) -> Result<f64>
where
    G: GameState,
    E: Evaluator<G>,
{
    let actions = match walk.expand(state, turn)? {
        Expansion::Leaf(v) => return Ok(v),
        Expansion::Children(actions) => actions,
    };

    let next = turn.next(walk.num_agents);

    if turn.is_maximizer() {
        let mut best = f64::NEG_INFINITY;
        for action in &actions {
            let child = state.generate_successor(turn.agent, action);
            best = best.max(value(walk, &child, next, alpha, beta)?);
            if best > beta {
                return Ok(best);
            }
            alpha = alpha.max(best);
        }
        Ok(best)
    } else {
        let mut best = f64::INFINITY;
        for action in &actions {
            let child = state.generate_successor(turn.agent, action);
            best = best.min(value(walk, &child, next, alpha, beta)?);
            if best < alpha {
                return Ok(best);
            }
            beta = beta.min(best);
        }
        Ok(best)
    }
}

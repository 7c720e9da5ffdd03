use ai_core::Turn;

use crate::tree::{decide_root, Expansion, Walk};
use crate::{
    Decision, Evaluator, GameState, MultiAgentSearch, Result, Strategy, TreeSearchConfig,
};

/// Agent 0 maximizes, every other agent minimizes.
#[derive(Debug, Clone)]
pub struct Minimax<E> {
    evaluator: E,
    config: TreeSearchConfig,
}

impl<E> Minimax<E> {
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

impl<G, E> MultiAgentSearch<G> for Minimax<E>
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
    decide_root(Strategy::Minimax, state, evaluator, config, |walk, child, turn, _best| {
        value(walk, child, turn)
    })
}

fn value<G, E>(walk: &mut Walk<'_, E>, state: &G, turn: Turn) -> Result<f64>
where
    G: GameState,
    E: Evaluator<G>,
{
    let actions = match walk.expand(state, turn)? {
        Expansion::Leaf(v) => return Ok(v),
        Expansion::Children(actions) => actions,
    };

    let next = turn.next(walk.num_agents);
    let maximizing = turn.is_maximizer();
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for action in &actions {
        let child = state.generate_successor(turn.agent, action);
        let v = value(walk, &child, next)?;
        best = if maximizing { best.max(v) } else { best.min(v) };
    }
    Ok(best)
}

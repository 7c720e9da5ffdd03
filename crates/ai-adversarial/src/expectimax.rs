use ai_core::Turn;

use crate::tree::{decide_root, Expansion, Walk};
use crate::{
    Decision, Evaluator, GameState, MultiAgentSearch, Result, Strategy, TreeSearchConfig,
};

/// Agent 0 maximizes; every other agent picks uniformly at random among its
/// legal actions, so its node value is the mean of its children.
///
/// No pruning: any unexamined child can move the mean.
#[derive(Debug, Clone)]
pub struct Expectimax<E> {
    evaluator: E,
    config: TreeSearchConfig,
}

impl<E> Expectimax<E> {
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

impl<G, E> MultiAgentSearch<G> for Expectimax<E>
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
    decide_root(Strategy::Expectimax, state, evaluator, config, |walk, child, turn, _best| {
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

    if turn.is_maximizer() {
        let mut best = f64::NEG_INFINITY;
        for action in &actions {
            let child = state.generate_successor(turn.agent, action);
            best = best.max(value(walk, &child, next)?);
        }
        return Ok(best);
    }

    let probability = 1.0 / actions.len() as f64;
    let mut expected = 0.0;
    for action in &actions {
        let child = state.generate_successor(turn.agent, action);
        expected += probability * value(walk, &child, next)?;
    }
    Ok(expected)
}

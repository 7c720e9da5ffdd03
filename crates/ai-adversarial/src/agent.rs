use crate::{
    alpha_beta, expectimax, minimax, AgentConfig, Decision, Evaluator, GameState,
    MultiAgentSearch, Result, Strategy, TreeSearchConfig,
};

/// A tree-search agent whose strategy is picked at runtime, typically from an
/// [`AgentConfig`].
#[derive(Debug, Clone)]
pub struct SearchAgent<E> {
    strategy: Strategy,
    evaluator: E,
    config: TreeSearchConfig,
}

impl<E> SearchAgent<E> {
    pub fn new(strategy: Strategy, evaluator: E) -> Self {
        Self {
            strategy,
            evaluator,
            config: TreeSearchConfig::default(),
        }
    }

    pub fn from_config(config: AgentConfig, evaluator: E) -> Self {
        Self {
            strategy: config.strategy,
            evaluator,
            config: config.search,
        }
    }

    pub fn with_config(mut self, config: TreeSearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn config(&self) -> &TreeSearchConfig {
        &self.config
    }
}

impl<G, E> MultiAgentSearch<G> for SearchAgent<E>
where
    G: GameState,
    E: Evaluator<G>,
{
    fn decide(&self, state: &G) -> Result<Decision<G::Action>> {
        match self.strategy {
            Strategy::Minimax => minimax::decide(state, &self.evaluator, &self.config),
            Strategy::AlphaBeta => alpha_beta::decide(state, &self.evaluator, &self.config),
            Strategy::Expectimax => expectimax::decide(state, &self.evaluator, &self.config),
        }
    }
}

use ai_core::{GameAction, Turn, MAXIMIZER};

use crate::{
    DeadEndPolicy, Evaluator, GameState, Result, Strategy, TreeSearchConfig, TreeSearchError,
};

/// The action chosen at the root, with its backed-up value.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<A> {
    /// STOP when no root action beats the initial `-inf` sentinel.
    pub action: A,
    pub value: f64,
    /// States visited during the decision, root included.
    pub nodes: u64,
}

pub trait MultiAgentSearch<G: GameState> {
    fn decide(&self, state: &G) -> Result<Decision<G::Action>>;

    fn get_action(&self, state: &G) -> Result<G::Action> {
        self.decide(state).map(|decision| decision.action)
    }
}

pub(crate) enum Expansion<A> {
    Leaf(f64),
    Children(Vec<A>),
}

/// Per-decision walk state, threaded through the recursion by `&mut`.
pub(crate) struct Walk<'a, E> {
    pub(crate) evaluator: &'a E,
    pub(crate) config: &'a TreeSearchConfig,
    pub(crate) num_agents: usize,
    pub(crate) nodes: u64,
}

impl<'a, E> Walk<'a, E> {
    /// Leaf test first, then legal-action enumeration.
    pub(crate) fn expand<G>(&mut self, state: &G, turn: Turn) -> Result<Expansion<G::Action>>
    where
        G: GameState,
        E: Evaluator<G>,
    {
        self.nodes += 1;
        if state.is_terminal() || turn.depth >= self.config.depth {
            return Ok(Expansion::Leaf(self.evaluator.evaluate(state)));
        }

        let actions = state.legal_actions(turn.agent);
        if actions.is_empty() {
            return match self.config.dead_end {
                DeadEndPolicy::Evaluate => Ok(Expansion::Leaf(self.evaluator.evaluate(state))),
                DeadEndPolicy::Error => Err(TreeSearchError::NoLegalActions {
                    agent: turn.agent,
                    depth: turn.depth,
                }),
            };
        }
        Ok(Expansion::Children(actions))
    }
}

/// Shared root loop: agent 0 picks the first action with the strictly highest value.
///
/// `child_value` receives the successor of each candidate, the turn that follows
/// agent 0, and the best value found so far.
pub(crate) fn decide_root<G, E, F>(
    strategy: Strategy,
    state: &G,
    evaluator: &E,
    config: &TreeSearchConfig,
    mut child_value: F,
) -> Result<Decision<G::Action>>
where
    G: GameState,
    E: Evaluator<G>,
    F: FnMut(&mut Walk<'_, E>, &G, Turn, f64) -> Result<f64>,
{
    let exclude_stop = config.excludes_stop(strategy);
    let strategy = strategy.name();
    let num_agents = state.num_agents();
    if num_agents == 0 {
        return Err(TreeSearchError::InvalidAgentCount);
    }

    let mut walk = Walk {
        evaluator,
        config,
        num_agents,
        nodes: 1,
    };

    let mut actions = if state.is_terminal() {
        Vec::new()
    } else {
        state.legal_actions(MAXIMIZER)
    };
    if exclude_stop {
        actions.retain(|action| !action.is_stop());
    }
    if actions.is_empty() {
        let value = evaluator.evaluate(state);
        tracing::debug!(strategy, value, "no root candidates; returning stop");
        return Ok(Decision {
            action: G::Action::stop(),
            value,
            nodes: walk.nodes,
        });
    }

    let child_turn = Turn::ROOT.next(num_agents);
    let mut best_action = G::Action::stop();
    let mut best_value = f64::NEG_INFINITY;

    for action in actions {
        let successor = state.generate_successor(MAXIMIZER, &action);
        let value = child_value(&mut walk, &successor, child_turn, best_value)?;
        tracing::trace!(strategy, ?action, value, "root action");
        if value > best_value {
            best_value = value;
            best_action = action;
        }
    }

    tracing::debug!(
        strategy,
        action = ?best_action,
        value = best_value,
        nodes = walk.nodes,
        depth = config.depth,
        "tree search decided"
    );
    Ok(Decision {
        action: best_action,
        value: best_value,
        nodes: walk.nodes,
    })
}

use ai_core::{AgentIndex, GameAction};

/// Capability contract for a turn-based multi-agent world.
///
/// States are immutable: `generate_successor` always returns a new value.
pub trait GameState: Sized {
    type Action: GameAction;

    /// Legal actions for `agent`, in a fixed order. Empty only at terminal states.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    fn generate_successor(&self, agent: AgentIndex, action: &Self::Action) -> Self;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }

    /// Number of agents taking turns, at least 1.
    fn num_agents(&self) -> usize;
}

/// Scores a state from agent 0's point of view. Higher is better.
///
/// Values are used as-is: very large magnitudes for near-certain wins or losses
/// are never clamped.
pub trait Evaluator<G> {
    fn evaluate(&self, state: &G) -> f64;
}

impl<G, F> Evaluator<G> for F
where
    F: Fn(&G) -> f64,
{
    fn evaluate(&self, state: &G) -> f64 {
        self(state)
    }
}

/// States that carry a running game score.
pub trait Scored {
    fn score(&self) -> f64;
}

/// Evaluates a state by its current score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEvaluator;

impl<G: Scored> Evaluator<G> for ScoreEvaluator {
    fn evaluate(&self, state: &G) -> f64 {
        state.score()
    }
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::ConfigError;

/// What to do with a non-terminal state whose acting agent has no legal actions.
///
/// Such a state means the game's terminality test is incomplete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeadEndPolicy {
    /// Fail the decision with [`TreeSearchError::NoLegalActions`](crate::TreeSearchError).
    #[default]
    Error,
    /// Score the state with the evaluation function, like a leaf.
    Evaluate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    Minimax,
    AlphaBeta,
    Expectimax,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alpha_beta",
            Strategy::Expectimax => "expectimax",
        }
    }

    /// Whether STOP leaves the root's candidates when the config does not say.
    ///
    /// The adversarial strategies drop it; expectimax keeps it, since staying
    /// put can be the best reply to random opponents.
    pub fn excludes_stop_by_default(self) -> bool {
        match self {
            Strategy::Minimax | Strategy::AlphaBeta => true,
            Strategy::Expectimax => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TreeSearchConfig {
    /// Ply bound. At `0` every root action is scored by evaluating its immediate successor.
    pub depth: u32,
    /// Drop the STOP action from the root's candidates. `None` defers to
    /// [`Strategy::excludes_stop_by_default`].
    pub exclude_stop: Option<bool>,
    pub dead_end: DeadEndPolicy,
}

impl Default for TreeSearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            exclude_stop: None,
            dead_end: DeadEndPolicy::Error,
        }
    }
}

impl TreeSearchConfig {
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_exclude_stop(mut self, exclude_stop: bool) -> Self {
        self.exclude_stop = Some(exclude_stop);
        self
    }

    pub fn excludes_stop(&self, strategy: Strategy) -> bool {
        self.exclude_stop.unwrap_or_else(|| strategy.excludes_stop_by_default())
    }

    pub fn with_dead_end(mut self, dead_end: DeadEndPolicy) -> Self {
        self.dead_end = dead_end;
        self
    }
}

/// Strategy plus search knobs for a [`SearchAgent`](crate::SearchAgent).
///
/// ```yaml
/// strategy: alpha_beta
/// search:
///   depth: 3
///   exclude_stop: true
///   dead_end: evaluate
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentConfig {
    pub strategy: Strategy,
    #[cfg_attr(feature = "serde", serde(default))]
    pub search: TreeSearchConfig,
}

impl AgentConfig {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            search: TreeSearchConfig::default(),
        }
    }

    pub fn with_search(mut self, search: TreeSearchConfig) -> Self {
        self.search = search;
        self
    }

    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

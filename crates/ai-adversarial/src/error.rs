use ai_core::AgentIndex;
use thiserror::Error;

/// Errors during tree search.
///
/// These indicate a broken [`GameState`](crate::GameState) implementation, not
/// a search outcome, and are never replaced by a numeric default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeSearchError {
    #[error("non-terminal state has no legal actions for agent {agent} at ply {depth}")]
    NoLegalActions { agent: AgentIndex, depth: u32 },

    #[error("game state reports zero agents")]
    InvalidAgentCount,
}

pub type Result<T> = std::result::Result<T, TreeSearchError>;

/// Errors while loading an [`AgentConfig`](crate::AgentConfig).
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid agent config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

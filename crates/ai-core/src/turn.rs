#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of an agent in turn order. Agent `0` is the controllable agent.
pub type AgentIndex = usize;

/// The maximizing agent.
pub const MAXIMIZER: AgentIndex = 0;

/// Position in the agent/ply state machine of a multi-agent game tree.
///
/// A ply is one full round in which every agent moves once. `depth` counts
/// completed plies and only advances after the last agent in a round acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Turn {
    pub agent: AgentIndex,
    pub depth: u32,
}

impl Turn {
    /// Agent 0 at the start of the first ply.
    pub const ROOT: Turn = Turn {
        agent: MAXIMIZER,
        depth: 0,
    };

    pub fn new(agent: AgentIndex, depth: u32) -> Self {
        Self { agent, depth }
    }

    pub fn is_maximizer(self) -> bool {
        self.agent == MAXIMIZER
    }

    /// The turn after `self.agent` has moved in a game of `num_agents` agents.
    pub fn next(self, num_agents: usize) -> Self {
        let next_agent = self.agent + 1;
        if next_agent >= num_agents {
            Self {
                agent: MAXIMIZER,
                depth: self.depth.saturating_add(1),
            }
        } else {
            Self {
                agent: next_agent,
                depth: self.depth,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_advances_only_after_last_agent() {
        let t = Turn::ROOT;
        let t = t.next(3);
        assert_eq!(t, Turn::new(1, 0));
        let t = t.next(3);
        assert_eq!(t, Turn::new(2, 0));
        let t = t.next(3);
        assert_eq!(t, Turn::new(0, 1));
        assert!(t.is_maximizer());
    }

    #[test]
    fn single_agent_game_advances_every_move() {
        assert_eq!(Turn::ROOT.next(1), Turn::new(0, 1));
        assert_eq!(Turn::new(0, 1).next(1), Turn::new(0, 2));
    }
}

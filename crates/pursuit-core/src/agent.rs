use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the two opposing agents on the board.
///
/// The ordering is stable and used for deterministic turn ordering and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AgentKind {
    Pursuer,
    Evader,
}

impl AgentKind {
    pub const ALL: [AgentKind; 2] = [AgentKind::Pursuer, AgentKind::Evader];

    pub fn opponent(self) -> Self {
        match self {
            AgentKind::Pursuer => AgentKind::Evader,
            AgentKind::Evader => AgentKind::Pursuer,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Pursuer => "pursuer",
            AgentKind::Evader => "evader",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

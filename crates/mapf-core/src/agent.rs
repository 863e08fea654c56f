//! The `Agent` plan descriptor.

use std::fmt;

use crate::{AgentId, GridPos};

/// One mobile unit: an opaque identity plus its start and goal cells.
///
/// Immutable once constructed.  The `id` — not the `(start, goal)` pair — is
/// the key under which constraint records are filed, so agents with
/// identical endpoints remain distinguishable.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:    AgentId,
    pub start: GridPos,
    pub goal:  GridPos,
}

impl Agent {
    #[inline]
    pub fn new(id: AgentId, start: GridPos, goal: GridPos) -> Self {
        Self { id, start, goal }
    }

    /// Squared straight-line distance from start to goal — the cost this
    /// agent contributes to an assignment's total.
    #[inline]
    pub fn sq_travel_dist(&self) -> u64 {
        self.start.sq_dist(self.goal)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} → {}", self.id, self.start, self.goal)
    }
}

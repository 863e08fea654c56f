//! The `ConstraintStore` — a persistent, forkable restriction snapshot.
//!
//! # Why fork instead of mutate
//!
//! The consuming search tree distinguishes its nodes *only* by their
//! constraint sets.  Expanding a node produces children that each add one
//! restriction to the parent's set; the parent and all siblings must keep
//! reporting their own sets unchanged.  In-place mutation of a shared store
//! is therefore disallowed by contract — `fork` is the only way forward,
//! and every store is immutable from the moment it is constructed.
//!
//! # Sharing discipline
//!
//! Per-agent tables live behind `Arc`.  A fork clones the outer id-keyed
//! map — N reference-count bumps, no table data copied — then deep-copies
//! only the single table it is about to extend.  Siblings share every table
//! they have in common, and concurrent forks from one shared parent need no
//! synchronization beyond the reference counts.

use std::sync::Arc;

use mapf_core::{AgentId, GridPos, Timestep};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{AgentConstraints, ConstraintError, ConstraintResult};

/// Per-agent, per-timestep blocked-cell snapshot.
///
/// One empty store is created at the root of the search; every other store
/// is the result of a [`fork`][ConstraintStore::fork].  Restrictions only
/// accumulate: a child's set is always a superset of its parent's.
#[derive(Debug, Clone, Default)]
pub struct ConstraintStore {
    tables: FxHashMap<AgentId, Arc<AgentConstraints>>,
}

impl ConstraintStore {
    /// The empty store — no agent is restricted anywhere.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Forking ───────────────────────────────────────────────────────────

    /// Derive a new store: this store's restrictions plus "`agent` may not
    /// occupy `obstacle` at any `t` in `[start, end)`".
    ///
    /// `self` is not touched; previously forked siblings are not touched.
    /// A zero-length interval (`start == end`) yields a store
    /// restriction-equivalent to `self`, as a distinct instance.
    ///
    /// # Errors
    ///
    /// [`ConstraintError::InvalidInterval`] if `start > end`; no state is
    /// created.
    pub fn fork(
        &self,
        agent:    AgentId,
        obstacle: GridPos,
        start:    Timestep,
        end:      Timestep,
    ) -> ConstraintResult<ConstraintStore> {
        if start > end {
            return Err(ConstraintError::InvalidInterval { start, end });
        }

        // Arc bumps only — no table contents are copied here.
        let mut tables = self.tables.clone();

        if start < end {
            // Copy-on-write: deep-copy the one affected table (or start a
            // fresh one), extend it, and swap it in.
            let mut table = tables
                .get(&agent)
                .map(|shared| shared.as_ref().clone())
                .unwrap_or_default();
            table.block(obstacle, start, end);
            tables.insert(agent, Arc::new(table));
        }

        Ok(ConstraintStore { tables })
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// The timestep → blocked-cell table for `agent`, or `None` if the
    /// agent has no restrictions recorded (the empty mapping).
    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&AgentConstraints> {
        self.tables.get(&agent).map(Arc::as_ref)
    }

    /// The cells forbidden to `agent` at `time`, or `None` if none are.
    #[inline]
    pub fn blocked_cells(
        &self,
        agent: AgentId,
        time:  Timestep,
    ) -> Option<&FxHashSet<GridPos>> {
        self.tables.get(&agent).and_then(|table| table.blocked_at(time))
    }

    /// `true` if `agent` may not occupy `cell` at `time`.
    ///
    /// The query the low-level search issues once per candidate move — kept
    /// allocation-free and two hash probes deep.
    #[inline]
    pub fn is_blocked(&self, agent: AgentId, time: Timestep, cell: GridPos) -> bool {
        self.tables
            .get(&agent)
            .is_some_and(|table| table.is_blocked(time, cell))
    }

    // ── Iteration & counts ────────────────────────────────────────────────

    /// Every agent with at least one restriction, with its table, in
    /// unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &AgentConstraints)> {
        self.tables.iter().map(|(&agent, table)| (agent, table.as_ref()))
    }

    /// Number of agents with at least one restriction recorded.
    #[inline]
    pub fn agent_count(&self) -> usize {
        self.tables.len()
    }

    /// Total `(agent, timestep, cell)` restrictions across all agents.
    pub fn restriction_count(&self) -> usize {
        self.tables.values().map(|t| t.restriction_count()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

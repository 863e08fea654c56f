//! Assignment trait and the greedy nearest-available strategy.
//!
//! # Pluggability
//!
//! Planning pipelines call assignment via the [`GoalAssigner`] trait, so
//! applications can swap strategies (or supply their own, e.g. one with
//! priority classes) without touching the pipeline. [`HungarianAssigner`]
//! gives the global optimum; [`GreedyAssigner`] trades optimality for an
//! O(N²) upper bound.
//!
//! [`HungarianAssigner`]: crate::HungarianAssigner

use mapf_core::{Agent, AgentId, GridPos};

use crate::{AssignError, AssignResult};

// ── GoalAssigner trait ────────────────────────────────────────────────────────

/// Pluggable start→goal assignment strategy.
///
/// # Contract
///
/// For equal-length inputs, implementations return one [`Agent`] per start,
/// in start order, with `agents[i].start == starts[i]`,
/// `agents[i].id == AgentId(i)`, and every goal used exactly once.
/// Mismatched input lengths fail with [`AssignError::InputSizeMismatch`]
/// before any matching work.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a shared assigner can be handed
/// to worker threads.
pub trait GoalAssigner: Send + Sync {
    /// Pair each start with exactly one goal.
    fn assign(&self, starts: &[GridPos], goals: &[GridPos]) -> AssignResult<Vec<Agent>>;
}

/// Shared length precondition for every strategy.
pub(crate) fn check_input_sizes(starts: &[GridPos], goals: &[GridPos]) -> AssignResult<()> {
    if starts.len() != goals.len() {
        return Err(AssignError::InputSizeMismatch {
            starts: starts.len(),
            goals:  goals.len(),
        });
    }
    Ok(())
}

// ── GreedyAssigner ────────────────────────────────────────────────────────────

/// Nearest-available assignment: each start, in input order, takes the
/// closest goal not yet claimed.
///
/// No optimality guarantee — an early start can claim a goal that a later
/// start needed far more.  Useful when N is large and the O(N³) exact solve
/// is not worth it.
///
/// # Tie-break
///
/// Equidistant candidate goals are resolved to the lexicographically
/// smallest `(x, y)`, making the result deterministic regardless of input
/// goal order.
pub struct GreedyAssigner;

impl GoalAssigner for GreedyAssigner {
    fn assign(&self, starts: &[GridPos], goals: &[GridPos]) -> AssignResult<Vec<Agent>> {
        check_input_sizes(starts, goals)?;

        let mut remaining: Vec<GridPos> = goals.to_vec();
        let mut agents = Vec::with_capacity(starts.len());

        for (i, &start) in starts.iter().enumerate() {
            // Min by (distance, goal) — the GridPos tiebreaker keeps the
            // choice deterministic among equidistant goals.
            let best = remaining
                .iter()
                .enumerate()
                .min_by_key(|&(_, &goal)| (start.sq_dist(goal), goal))
                .map(|(idx, _)| idx)
                .expect("remaining goals are non-empty while starts remain");

            let goal = remaining.swap_remove(best);
            agents.push(Agent::new(AgentId(i as u32), start, goal));
        }

        Ok(agents)
    }
}

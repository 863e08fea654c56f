//! Exact minimum-cost perfect matching via the Hungarian method.
//!
//! # Algorithm
//!
//! Potentials + shortest augmenting path (the Jonker–Volgenant flavour of
//! the Hungarian algorithm): rows are matched one at a time by a
//! Dijkstra-like search over reduced costs, maintaining dual potentials `u`
//! (rows) and `v` (columns) so that every reduced cost stays non-negative.
//! After all N rows are processed the matching is a global minimum —
//! standard LP-duality argument, O(N³) total.
//!
//! # Cost range
//!
//! Internal arithmetic is `i64`.  Squared grid distances fit with a wide
//! margin for coordinates up to ±2³⁰; potentials never exceed the largest
//! matrix entry in magnitude, so no overflow headroom beyond that is needed.

use mapf_core::{Agent, AgentId, GridPos};

use crate::assigner::check_input_sizes;
use crate::{AssignResult, CostMatrix, GoalAssigner};

// ── HungarianAssigner ─────────────────────────────────────────────────────────

/// Exact assignment: minimizes the total squared start→goal distance over
/// all N! pairings.
///
/// Ties between equal-cost optima are broken arbitrarily (the contract is
/// *a* global optimum, not a canonical one).
pub struct HungarianAssigner;

impl GoalAssigner for HungarianAssigner {
    fn assign(&self, starts: &[GridPos], goals: &[GridPos]) -> AssignResult<Vec<Agent>> {
        check_input_sizes(starts, goals)?;

        let cost = CostMatrix::build(starts, goals);
        let goal_of = solve(&cost);

        Ok(starts
            .iter()
            .enumerate()
            .map(|(i, &start)| Agent::new(AgentId(i as u32), start, goals[goal_of[i]]))
            .collect())
    }
}

// ── Hungarian internals ───────────────────────────────────────────────────────

/// Solve the assignment problem on `cost`, returning `goal_of` where row `i`
/// is matched to column `goal_of[i]`.
///
/// Rows and columns are 1-based internally; index 0 is the virtual
/// source/sentinel of the augmenting-path search.  Invariants per array:
///
/// - `u[i] + v[j] <= cost(i-1, j-1)` for all real `(i, j)` (dual feasibility)
/// - `row_for[j]` = row currently matched to column `j`; 0 = unmatched
/// - `min_slack[j]` = smallest reduced cost from any visited row to
///   unvisited column `j`
/// - `prev_col[j]` = column preceding `j` on the best known path to `j`
pub(crate) fn solve(cost: &CostMatrix) -> Vec<usize> {
    let n = cost.dim();

    let mut u = vec![0i64; n + 1];
    let mut v = vec![0i64; n + 1];
    let mut row_for = vec![0usize; n + 1];
    let mut prev_col = vec![0usize; n + 1];

    for row in 1..=n {
        // Start a new augmenting-path search from `row`, parked on the
        // virtual column 0.
        row_for[0] = row;
        let mut j0 = 0usize;
        let mut min_slack = vec![i64::MAX; n + 1];
        let mut visited = vec![false; n + 1];

        // Dijkstra over reduced costs until an unmatched column is reached.
        loop {
            visited[j0] = true;
            let i0 = row_for[j0];
            let mut delta = i64::MAX;
            let mut j1 = 0usize;

            for j in 1..=n {
                if visited[j] {
                    continue;
                }
                let reduced = cost.get(i0 - 1, j - 1) as i64 - u[i0] - v[j];
                if reduced < min_slack[j] {
                    min_slack[j] = reduced;
                    prev_col[j] = j0;
                }
                if min_slack[j] < delta {
                    delta = min_slack[j];
                    j1 = j;
                }
            }

            // Shift potentials by delta: visited rows/columns absorb it,
            // unvisited columns get their slack reduced.  Dual feasibility
            // is preserved and at least one new slack reaches zero.
            for j in 0..=n {
                if visited[j] {
                    u[row_for[j]] += delta;
                    v[j] -= delta;
                } else {
                    min_slack[j] -= delta;
                }
            }

            j0 = j1;
            if row_for[j0] == 0 {
                break; // reached an unmatched column — augmenting path found
            }
        }

        // Augment: flip the matching along the path back to column 0.
        while j0 != 0 {
            let j1 = prev_col[j0];
            row_for[j0] = row_for[j1];
            j0 = j1;
        }
    }

    // Invert column→row into row→column (rows/columns back to 0-based).
    let mut goal_of = vec![0usize; n];
    for j in 1..=n {
        if row_for[j] != 0 {
            goal_of[row_for[j] - 1] = j - 1;
        }
    }
    goal_of
}

//! The N×N squared-distance cost matrix.
//!
//! Entry `(i, j)` is the squared Euclidean distance from `starts[i]` to
//! `goals[j]`.  Stored row-major in a single `Vec<u64>` so the solver's
//! inner loops scan contiguous memory.
//!
//! With the `parallel` Cargo feature, rows are built on Rayon's thread pool.
//! Each row depends only on one start and the shared goal slice, so the
//! parallel build produces byte-identical output to the sequential one.

use mapf_core::GridPos;

/// Row-major N×N matrix of squared start→goal distances.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    n:     usize,
    costs: Vec<u64>,
}

impl CostMatrix {
    /// Build the matrix for the given starts and goals.
    ///
    /// Callers must have verified `starts.len() == goals.len()`; the matrix
    /// is square by construction.
    pub fn build(starts: &[GridPos], goals: &[GridPos]) -> Self {
        debug_assert_eq!(starts.len(), goals.len());
        let n = starts.len();

        #[cfg(not(feature = "parallel"))]
        let costs = {
            let mut costs = Vec::with_capacity(n * n);
            for &start in starts {
                costs.extend(goals.iter().map(|&goal| start.sq_dist(goal)));
            }
            costs
        };

        #[cfg(feature = "parallel")]
        let costs = {
            use rayon::prelude::*;

            starts
                .par_iter()
                .flat_map_iter(|&start| goals.iter().map(move |&goal| start.sq_dist(goal)))
                .collect()
        };

        Self { n, costs }
    }

    /// Matrix dimension N (number of starts == number of goals).
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Cost of pairing `starts[row]` with `goals[col]`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.costs[row * self.n + col]
    }

    /// All costs for one start, indexed by goal.
    #[inline]
    pub fn row(&self, row: usize) -> &[u64] {
        &self.costs[row * self.n..(row + 1) * self.n]
    }
}

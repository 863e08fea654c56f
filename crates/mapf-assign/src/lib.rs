//! `mapf-assign` — start-to-goal assignment for the `rust_mapf` planning core.
//!
//! Pairs each start cell with exactly one goal cell (a perfect matching on
//! the bipartite start/goal graph), minimizing or approximating the total
//! squared travel distance.  Runs once, upfront; the resulting [`Agent`]
//! list is what the rest of a planning pipeline consumes.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`assigner`]  | `GoalAssigner` trait, `GreedyAssigner`                  |
//! | [`hungarian`] | `HungarianAssigner` — exact minimum-cost matching       |
//! | [`cost`]      | `CostMatrix` — N×N squared-distance table               |
//! | [`error`]     | `AssignError`, `AssignResult<T>`                        |
//!
//! # Choosing a strategy
//!
//! | Strategy             | Guarantee                       | Complexity |
//! |----------------------|---------------------------------|------------|
//! | [`HungarianAssigner`]| global minimum total cost       | O(N³)      |
//! | [`GreedyAssigner`]   | none (nearest-available)        | O(N²)      |
//!
//! Both reject mismatched input lengths identically, before any computation.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Builds cost-matrix rows on Rayon's thread pool.  Output is |
//! |            | byte-identical to the sequential build.                   |
//!
//! [`Agent`]: mapf_core::Agent

pub mod assigner;
pub mod cost;
pub mod error;
pub mod hungarian;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use assigner::{GoalAssigner, GreedyAssigner};
pub use cost::CostMatrix;
pub use error::{AssignError, AssignResult};
pub use hungarian::HungarianAssigner;

//! `mapf-constraint` — the forkable spacetime constraint store for the
//! `rust_mapf` planning core.
//!
//! Records which grid cells are forbidden to which agent at which timestep,
//! as a persistent `AgentId → (Timestep → blocked cells)` mapping.  A
//! branching search holds one store per tree node; expanding a node calls
//! [`ConstraintStore::fork`] to derive a child store with one additional
//! restriction interval, leaving the parent — and every sibling — untouched.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`store`]   | `ConstraintStore` — fork, lookup, iteration           |
//! | [`table`]   | `AgentConstraints` — one agent's timestep table       |
//! | [`error`]   | `ConstraintError`, `ConstraintResult<T>`              |
//!
//! # Branching model
//!
//! Stores are immutable after construction.  `fork` clones the outer
//! id-keyed map (reference-count bumps on shared per-agent tables) and
//! copies only the one table it extends, so siblings share everything they
//! have in common and a fork costs O(agents + affected agent's
//! restrictions) — not O(total restrictions).  Restrictions only ever
//! accumulate along a root-to-leaf fork chain.

pub mod error;
pub mod store;
pub mod table;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ConstraintError, ConstraintResult};
pub use store::ConstraintStore;
pub use table::AgentConstraints;

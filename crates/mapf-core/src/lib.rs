//! `mapf-core` — foundational types for the `rust_mapf` planning core.
//!
//! This crate is a dependency of every other `mapf-*` crate.  It
//! intentionally has no `mapf-*` dependencies and no required external ones
//! (only optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                       |
//! |-------------|------------------------------------------------|
//! | [`grid`]    | `GridPos`, squared-distance metric             |
//! | [`ids`]     | `AgentId`                                      |
//! | [`agent`]   | `Agent` (id + start + goal)                    |
//! | [`time`]    | `Timestep`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod agent;
pub mod grid;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::Agent;
pub use grid::GridPos;
pub use ids::AgentId;
pub use time::Timestep;

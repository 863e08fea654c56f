use mapf_core::Timestep;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstraintError {
    /// A fork was requested with `start > end`.  Reported before any state
    /// is created; intervals are half-open `[start, end)`.
    #[error("invalid constraint interval: [{start}, {end})")]
    InvalidInterval { start: Timestep, end: Timestep },
}

pub type ConstraintResult<T> = Result<T, ConstraintError>;

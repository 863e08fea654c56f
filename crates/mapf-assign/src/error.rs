use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignError {
    /// Start and goal counts differ — a precondition violation, reported
    /// before any matching work begins.
    #[error("input size mismatch: {starts} starts vs {goals} goals")]
    InputSizeMismatch { starts: usize, goals: usize },
}

pub type AssignResult<T> = Result<T, AssignError>;

//! Discretized planning time.
//!
//! Time is a monotonically increasing `Timestep` counter starting at zero.
//! Using an integer step as the canonical time unit means all interval
//! arithmetic is exact and comparisons are O(1).  Constraint intervals are
//! half-open `[start, end)` throughout the workspace.

use std::fmt;

/// An absolute planning timestep.
///
/// Stored as `u64`: even pathological search instances never exhaust it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestep(pub u64);

impl Timestep {
    pub const ZERO: Timestep = Timestep(0);

    /// Return the timestep `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Timestep {
        Timestep(self.0 + n)
    }

    /// Steps elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Timestep) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Timestep {
    type Output = Timestep;
    #[inline]
    fn add(self, rhs: u64) -> Timestep {
        Timestep(self.0 + rhs)
    }
}

impl std::ops::Sub for Timestep {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Timestep) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Timestep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

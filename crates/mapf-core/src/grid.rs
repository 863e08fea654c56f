//! Grid cell coordinate type and the squared-distance metric.
//!
//! `GridPos` uses `i32` coordinates.  Any realistic planning grid fits with
//! room to spare while halving memory consumption vs. `i64`, which matters
//! when cells are stored in per-timestep blocked sets by the thousands.

/// A grid cell identified by integer `(x, y)` coordinates.
///
/// Equality, ordering, and hashing are by value, so `GridPos` can be used
/// directly as a hash-set element or sorted-collection key.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`: `dx*dx + dy*dy`.
    ///
    /// Computed in `i64`, returned as `u64`; no floating point involved.
    /// Exact for coordinates up to ±2³⁰ — far beyond any planning grid.
    /// The square root is never taken: assignment only compares distances,
    /// and squaring preserves order.
    #[inline]
    pub fn sq_dist(self, other: GridPos) -> u64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        (dx * dx + dy * dy) as u64
    }
}

impl From<(i32, i32)> for GridPos {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

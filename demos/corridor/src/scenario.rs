//! Hand-crafted and generated demo scenarios.

use mapf_core::GridPos;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A start/goal instance ready for assignment.
pub struct Scenario {
    pub starts: Vec<GridPos>,
    pub goals:  Vec<GridPos>,
}

/// Four agents lined up on the left wall of a corridor, goals on the right
/// wall in scrambled vertical order.  Small enough to eyeball, interesting
/// enough that the naive in-order pairing crosses twice.
pub fn corridor() -> Scenario {
    Scenario {
        starts: vec![
            GridPos::new(0, 0),
            GridPos::new(0, 2),
            GridPos::new(0, 4),
            GridPos::new(0, 6),
        ],
        goals: vec![
            GridPos::new(9, 6),
            GridPos::new(9, 0),
            GridPos::new(9, 4),
            GridPos::new(9, 2),
        ],
    }
}

/// `n` agents with starts and goals scattered uniformly over a
/// `size` × `size` grid.  Deterministic for a given seed.
pub fn random(n: usize, size: i32, seed: u64) -> Scenario {
    let mut rng = SmallRng::seed_from_u64(seed);
    let cell = |rng: &mut SmallRng| {
        GridPos::new(rng.gen_range(0..size), rng.gen_range(0..size))
    };

    Scenario {
        starts: (0..n).map(|_| cell(&mut rng)).collect(),
        goals:  (0..n).map(|_| cell(&mut rng)).collect(),
    }
}

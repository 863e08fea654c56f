//! Unit tests for mapf-core primitives.

#[cfg(test)]
mod grid {
    use crate::GridPos;

    #[test]
    fn zero_distance() {
        let p = GridPos::new(3, -7);
        assert_eq!(p.sq_dist(p), 0);
    }

    #[test]
    fn pythagorean_example() {
        // 3-4-5 triangle: squared distance is 25.
        let a = GridPos::new(0, 0);
        let b = GridPos::new(3, 4);
        assert_eq!(a.sq_dist(b), 25);
    }

    #[test]
    fn symmetric() {
        let a = GridPos::new(-2, 9);
        let b = GridPos::new(5, -1);
        assert_eq!(a.sq_dist(b), b.sq_dist(a));
    }

    #[test]
    fn negative_coordinates() {
        let a = GridPos::new(-3, -3);
        let b = GridPos::new(-3, 2);
        assert_eq!(a.sq_dist(b), 25);
    }

    #[test]
    fn tuple_conversion_and_display() {
        let p: GridPos = (1, 2).into();
        assert_eq!(p, GridPos::new(1, 2));
        assert_eq!(p.to_string(), "(1, 2)");
    }

    #[test]
    fn ordering_is_lexicographic() {
        // Derived Ord on (x, y) field order — the greedy tie-break relies on it.
        assert!(GridPos::new(0, 9) < GridPos::new(1, 0));
        assert!(GridPos::new(1, 0) < GridPos::new(1, 1));
    }
}

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod agent {
    use crate::{Agent, AgentId, GridPos};

    #[test]
    fn travel_distance() {
        let a = Agent::new(AgentId(0), GridPos::new(0, 0), GridPos::new(0, 4));
        assert_eq!(a.sq_travel_dist(), 16);
    }

    #[test]
    fn identity_is_part_of_equality() {
        let a = Agent::new(AgentId(0), GridPos::new(1, 1), GridPos::new(2, 2));
        let b = Agent::new(AgentId(1), GridPos::new(1, 1), GridPos::new(2, 2));
        // Same endpoints, different agents.
        assert_ne!(a, b);
    }
}

#[cfg(test)]
mod time {
    use crate::Timestep;

    #[test]
    fn step_arithmetic() {
        let t = Timestep(10);
        assert_eq!(t + 5, Timestep(15));
        assert_eq!(t.offset(3), Timestep(13));
        assert_eq!(Timestep(15) - Timestep(10), 5u64);
        assert_eq!(Timestep(15).since(Timestep(10)), 5u64);
    }

    #[test]
    fn ordering_and_display() {
        assert!(Timestep::ZERO < Timestep(1));
        assert_eq!(Timestep(4).to_string(), "t4");
    }
}

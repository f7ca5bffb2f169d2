// src/map/agent.rs

use rand::Rng;

/// Movement direction of the drunk agent, as a `(dx, dy)` offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heading {
    /// `(-1, 0)`: one row up.
    North,
    /// `(1, 0)`: one row down.
    South,
    /// `(0, -1)`: one column left.
    West,
    /// `(0, 1)`: one column right.
    #[default]
    East,
}

impl Heading {
    pub const CARDINALS: [Heading; 4] = [
        Heading::North,
        Heading::South,
        Heading::West,
        Heading::East,
    ];

    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::North => (-1, 0),
            Heading::South => (1, 0),
            Heading::West => (0, -1),
            Heading::East => (0, 1),
        }
    }

    /// Uniformly random cardinal heading.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::CARDINALS[rng.random_range(0..Self::CARDINALS.len())]
    }
}

/// Position of the drunk agent. Owned by the driver and threaded through
/// every walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentState {
    /// Row index.
    pub x: i32,
    /// Column index.
    pub y: i32,
}

impl AgentState {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Agent placed at the centre of a `width x height` grid.
    pub fn centered(width: usize, height: usize) -> Self {
        Self::new((height / 2) as i32, (width / 2) as i32)
    }

    /// Position one step along `heading`.
    pub fn advanced(self, heading: Heading) -> Self {
        let (dx, dy) = heading.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_heading_moves_along_columns() {
        let start = AgentState::new(2, 2);
        assert_eq!(start.advanced(Heading::default()), AgentState::new(2, 3));
    }

    #[test]
    fn test_centered() {
        // 20 columns, 10 rows.
        assert_eq!(AgentState::centered(20, 10), AgentState::new(5, 10));
    }

    #[test]
    fn test_random_heading_covers_all_cardinals() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let heading = Heading::random(&mut rng);
            let idx = Heading::CARDINALS.iter().position(|h| *h == heading).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}

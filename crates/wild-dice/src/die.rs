//! Polyhedral die types.
//!
//! A [`Die`] fixes the roll space `1..=sides` of a roll table.

use serde::{Deserialize, Serialize};

use crate::roller::DiceRoller;

/// The die a roll table is rolled on.
///
/// Wilderness tables use d8 for terrain, d12 for most sub-tables, and d4, d6
/// or d10 for the rest. Anything else is [`Die::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// d4
    D4,
    /// d6
    D6,
    /// d8
    D8,
    /// d10
    D10,
    /// d12
    D12,
    /// Any other number of faces.
    Other(u32),
}

impl Die {
    /// The die with `sides` faces, using the named variant when there is one.
    pub fn of(sides: u32) -> Self {
        match sides {
            4 => Self::D4,
            6 => Self::D6,
            8 => Self::D8,
            10 => Self::D10,
            12 => Self::D12,
            n => Self::Other(n),
        }
    }

    /// Number of faces.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::Other(n) => n,
        }
    }

    /// Roll this die once.
    pub fn roll<R: DiceRoller + ?Sized>(self, roller: &mut R) -> u32 {
        roller.roll_die(self.sides())
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn table_dice() {
        let sides: Vec<u32> = [Die::D4, Die::D6, Die::D8, Die::D10, Die::D12]
            .into_iter()
            .map(Die::sides)
            .collect();
        assert_eq!(sides, vec![4, 6, 8, 10, 12]);
        assert_eq!(Die::Other(2).sides(), 2);
    }

    #[test]
    fn of_prefers_named_dice() {
        assert_eq!(Die::of(8), Die::D8);
        assert_eq!(Die::of(12), Die::D12);
        assert_eq!(Die::of(20), Die::Other(20));
        for sides in 1..=30 {
            assert_eq!(Die::of(sides).sides(), sides);
        }
    }

    #[test]
    fn display() {
        assert_eq!(Die::D8.to_string(), "d8");
        assert_eq!(Die::Other(30).to_string(), "d30");
    }

    #[test]
    fn roll_stays_on_the_die() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            assert!((1..=12).contains(&Die::D12.roll(&mut rng)));
        }
    }

    #[test]
    fn die_serde_roundtrip() {
        let json = serde_json::to_string(&Die::Other(7)).unwrap();
        let die: Die = serde_json::from_str(&json).unwrap();
        assert_eq!(die, Die::Other(7));
    }
}

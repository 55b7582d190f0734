//! Encounter sampling.
//!
//! A [`Sampler`] owns the roll source for a run and turns a terrain into a
//! stream of independent encounters: primary roll, sub-table roll when
//! needed, number appearing, then the group's total EHD.

use std::iter::FusedIterator;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::trace;
use wild_dice::DiceRoller;

use crate::config::SamplerConfig;
use crate::error::WildResult;
use crate::tables::EncounterTables;
use crate::terrain::Terrain;

/// The outcome of one simulated encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterResult {
    /// Terrain the encounter was rolled for.
    pub terrain: Terrain,
    /// The specific monster encountered.
    pub monster: String,
    /// Number of individuals, leader included.
    pub quantity: u32,
    /// Total Equivalent Hit Dice of the group.
    pub total_ehd: u32,
}

/// Rolls encounters against a set of tables.
#[derive(Debug)]
pub struct Sampler<'t, R> {
    tables: &'t EncounterTables,
    roller: R,
}

impl<'t> Sampler<'t, StdRng> {
    /// A sampler seeded as the configuration asks.
    pub fn from_config(tables: &'t EncounterTables, config: &SamplerConfig) -> Self {
        Self::new(tables, config.rng())
    }
}

impl<'t, R: DiceRoller> Sampler<'t, R> {
    /// Create a sampler that takes ownership of `roller`.
    pub fn new(tables: &'t EncounterTables, roller: R) -> Self {
        Self { tables, roller }
    }

    /// Roll a single encounter.
    pub fn encounter(&mut self, terrain: Terrain) -> WildResult<EncounterResult> {
        let tables = self.tables;
        let (roll, entry) = tables.primary_table(terrain)?.roll(&mut self.roller)?;
        let monster = tables.resolve_entry(entry, &mut self.roller)?;
        let group = monster.roll_group(&mut self.roller);
        trace!(
            %terrain,
            roll,
            %entry,
            monster = %monster.name,
            quantity = group.quantity,
            ehd = group.total_ehd,
            "encounter"
        );
        Ok(EncounterResult {
            terrain,
            monster: monster.name.clone(),
            quantity: group.quantity,
            total_ehd: group.total_ehd,
        })
    }

    /// Lazily roll `repetitions` independent encounters.
    ///
    /// The sequence stops early after the first error.
    pub fn run(&mut self, terrain: Terrain, repetitions: usize) -> Encounters<'_, 't, R> {
        Encounters {
            sampler: self,
            terrain,
            remaining: repetitions,
        }
    }

    /// Give back the roll source.
    pub fn into_roller(self) -> R {
        self.roller
    }
}

/// Iterator returned by [`Sampler::run`].
#[derive(Debug)]
pub struct Encounters<'s, 't, R> {
    sampler: &'s mut Sampler<'t, R>,
    terrain: Terrain,
    remaining: usize,
}

impl<R: DiceRoller> Iterator for Encounters<'_, '_, R> {
    type Item = WildResult<EncounterResult>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let result = self.sampler.encounter(self.terrain);
        if result.is_err() {
            self.remaining = 0;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl<R: DiceRoller> FusedIterator for Encounters<'_, '_, R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use wild_dice::{Die, FixedRolls};

    use crate::error::WildError;
    use crate::monster::{Monster, MonsterCatalog};
    use crate::table::{RollTable, TableEntry};

    const CLEAR_SCRIPT: [u32; 22] = [
        5, 5, 3, // Animals, Lion, 3 lions
        8, 1, 4, 2, // Dragons, Dragon, Blue, 2 dragons
        1, 6, 1, 2, 4, 1, 3, // Men, Wizard, 3 retainers
        3, 3, 1, 2, 3, // Giants, Orc, 60 orcs
        2, 2, 7, // Flyers, Roc, 7 rocs
    ];

    fn standard() -> EncounterTables {
        EncounterTables::standard().unwrap()
    }

    #[test]
    fn clear_scenario_is_pinned() {
        let tables = standard();
        let mut sampler = Sampler::new(&tables, FixedRolls::new(CLEAR_SCRIPT));
        let results: Vec<EncounterResult> = sampler
            .run(Terrain::Clear, 5)
            .collect::<WildResult<_>>()
            .unwrap();

        let totals: Vec<String> = results.iter().map(|r| r.total_ehd.to_string()).collect();
        insta::assert_snapshot!(totals.join(","), @"18,28,19,15,42");

        let groups: Vec<String> = results
            .iter()
            .map(|r| format!("{} x{}", r.monster, r.quantity))
            .collect();
        insta::assert_snapshot!(
            groups.join("; "),
            @"Lion x3; Dragon, Blue x2; Wizard x4; Orc x60; Roc, Small x7"
        );

        assert_eq!(sampler.into_roller().consumed(), CLEAR_SCRIPT.len());
    }

    #[test]
    fn thousand_encounters_per_terrain() {
        let tables = standard();
        for terrain in Terrain::ALL {
            let mut sampler = Sampler::new(&tables, StdRng::seed_from_u64(11));
            let results: Vec<EncounterResult> = sampler
                .run(terrain, 1000)
                .collect::<WildResult<_>>()
                .unwrap();
            assert_eq!(results.len(), 1000, "{terrain}");
            assert!(results.iter().all(|r| r.terrain == terrain));
            assert!(results.iter().all(|r| r.quantity >= 1));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let tables = standard();
        let totals = |seed| {
            let mut sampler = Sampler::new(&tables, StdRng::seed_from_u64(seed));
            sampler
                .run(Terrain::Swamp, 200)
                .map(|r| r.unwrap().total_ehd)
                .collect::<Vec<_>>()
        };
        assert_eq!(totals(2024), totals(2024));
        assert_ne!(totals(2024), totals(2025));
    }

    #[test]
    fn from_config_uses_seed() {
        let tables = standard();
        let config = SamplerConfig::default().with_seed(5);
        let first: Vec<_> = Sampler::from_config(&tables, &config)
            .run(Terrain::Desert, 50)
            .map(|r| r.unwrap())
            .collect();
        let second: Vec<_> = Sampler::from_config(&tables, &config)
            .run(Terrain::Desert, 50)
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_repetitions_is_empty() {
        let tables = standard();
        let mut sampler = Sampler::new(&tables, FixedRolls::new([1]));
        assert_eq!(sampler.run(Terrain::City, 0).count(), 0);
        assert_eq!(sampler.into_roller().consumed(), 0);
    }

    #[test]
    fn run_stops_after_first_error() {
        let mut catalog = MonsterCatalog::new();
        catalog.insert(Monster::standard("Orc", "1d6", 1.0, 1).unwrap());
        let primary = Terrain::ALL.into_iter().map(|t| {
            (
                t,
                RollTable::new(t.name(), Die::of(2), [(1..=2, TableEntry::monster("Orc"))]).unwrap(),
            )
        });
        let tables = EncounterTables::new(primary, Vec::new(), catalog).unwrap();

        // Always rolls one past the die.
        struct Broken;
        impl DiceRoller for Broken {
            fn roll_die(&mut self, sides: u32) -> u32 {
                sides + 1
            }
        }

        let mut sampler = Sampler::new(&tables, Broken);
        let results: Vec<_> = sampler.run(Terrain::Woods, 10).collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(
            results[0],
            Err(WildError::RollOutOfRange { roll: 3, .. })
        ));
    }

    #[test]
    fn result_serializes_to_json() {
        let result = EncounterResult {
            terrain: Terrain::Clear,
            monster: "Lion".to_string(),
            quantity: 3,
            total_ehd: 18,
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"terrain":"Clear","monster":"Lion","quantity":3,"total_ehd":18}"#
        );
    }

    proptest! {
        #[test]
        fn any_seed_yields_full_runs(seed in any::<u64>(), terrain in 0usize..7) {
            let tables = standard();
            let terrain = Terrain::ALL[terrain];
            let mut sampler = Sampler::new(&tables, StdRng::seed_from_u64(seed));
            let results: Vec<_> = sampler.run(terrain, 25).collect();
            prop_assert_eq!(results.len(), 25);
            prop_assert!(results.iter().all(|r| r.as_ref().is_ok_and(|r| r.quantity >= 1)));
        }
    }
}

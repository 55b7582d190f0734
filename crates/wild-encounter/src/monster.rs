//! Monster statistics and the monster catalog.
//!
//! Each monster carries its number-appearing dice and an [`EhdRule`] telling
//! how a rolled group converts into Equivalent Hit Dice. Some names in the
//! encounter tables are families ("Giant", "Dragon") that need their own roll
//! to pick a specific variant.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wild_dice::{DiceExpr, DiceRoller};

use crate::error::{WildError, WildResult};
use crate::table::RollTable;

/// Groups of creatures at or below this many hit dice are cut down by sweep
/// attacks, and count for a quarter of their EHD.
pub const SWEEP_HIT_DICE: f64 = 1.0;

/// Number of retainers accompanying a named NPC.
pub const ENTOURAGE: &str = "2d6";

/// EHD of a single retainer.
pub const RETAINER_EHD: &str = "1d4";

/// How a rolled group converts into total EHD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EhdRule {
    /// Each individual is worth this much; total = number × EHD.
    PerIndividual(u32),
    /// A named NPC with an entourage; total = level + Σ retainer EHD.
    Leader {
        /// The NPC's level.
        level: u32,
        /// Number of retainers.
        entourage: DiceExpr,
        /// EHD of each retainer.
        retainer: DiceExpr,
    },
}

/// Statistics for a single monster type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    /// Display name, e.g. "Giant, Hill".
    pub name: String,
    /// Number appearing.
    pub number: DiceExpr,
    /// Hit dice as a number: tenths stand for pips, so "1+1" is 1.1 and
    /// "4+1" is 4.1. Below one die, "1/2" is 0.5 and "1-1" is 0.75.
    pub hit_dice: f64,
    /// EHD rule for a group.
    pub ehd: EhdRule,
}

/// The outcome of rolling a group of one monster type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    /// Individuals in the group, leader included.
    pub quantity: u32,
    /// Total EHD of the group.
    pub total_ehd: u32,
}

fn to_count(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

impl Monster {
    /// A monster worth `ehd` per individual.
    pub fn standard(
        name: impl Into<String>,
        number: &str,
        hit_dice: f64,
        ehd: u32,
    ) -> WildResult<Self> {
        Ok(Self {
            name: name.into(),
            number: number.parse()?,
            hit_dice,
            ehd: EhdRule::PerIndividual(ehd),
        })
    }

    /// A named NPC of the given level, travelling with an entourage.
    pub fn leader(name: impl Into<String>, level: u32) -> WildResult<Self> {
        Ok(Self {
            name: name.into(),
            number: DiceExpr::constant(1),
            hit_dice: f64::from(level),
            ehd: EhdRule::Leader {
                level,
                entourage: ENTOURAGE.parse()?,
                retainer: RETAINER_EHD.parse()?,
            },
        })
    }

    /// Hit dice in table notation: "4", "4+1", "1-1" or "1/2".
    pub fn hit_dice_label(&self) -> String {
        let whole = self.hit_dice.trunc();
        let hundredths = ((self.hit_dice - whole) * 100.0).round() as u32;
        match (whole as u32, hundredths) {
            (dice, 0) => dice.to_string(),
            (0, 50) => "1/2".to_string(),
            (0, 75) => "1-1".to_string(),
            (dice, pips) if dice > 0 && pips % 10 == 0 => format!("{dice}+{}", pips / 10),
            _ => self.hit_dice.to_string(),
        }
    }

    /// Returns true if sweep attacks reduce this monster's group EHD.
    pub fn is_swept(&self) -> bool {
        matches!(self.ehd, EhdRule::PerIndividual(_)) && self.hit_dice <= SWEEP_HIT_DICE
    }

    /// Roll the number appearing and total the group's EHD.
    pub fn roll_group<R: DiceRoller + ?Sized>(&self, roller: &mut R) -> Group {
        match &self.ehd {
            EhdRule::PerIndividual(ehd) => {
                let quantity = to_count(self.number.roll_at_least(roller, 1));
                let mut total_ehd = quantity.saturating_mul(*ehd);
                if self.is_swept() {
                    total_ehd /= 4;
                }
                Group {
                    quantity,
                    total_ehd,
                }
            }
            EhdRule::Leader {
                level,
                entourage,
                retainer,
            } => {
                let retainers = to_count(entourage.roll_at_least(roller, 0));
                let entourage_ehd = (0..retainers)
                    .map(|_| to_count(retainer.roll_at_least(roller, 0)))
                    .fold(0u32, u32::saturating_add);
                Group {
                    quantity: retainers.saturating_add(1),
                    total_ehd: level.saturating_add(entourage_ehd),
                }
            }
        }
    }
}

/// A catalog entry: one monster, or a family resolved by a further roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MonsterEntry {
    /// A specific monster.
    Single(Monster),
    /// A family whose table names the specific variant.
    Family(RollTable<String>),
}

/// All monsters known to the encounter tables, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MonsterCatalog {
    entries: BTreeMap<String, MonsterEntry>,
}

impl MonsterCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a specific monster under its own name.
    pub fn insert(&mut self, monster: Monster) {
        self.entries
            .insert(monster.name.clone(), MonsterEntry::Single(monster));
    }

    /// Add a family; its table's name is the family name.
    pub fn insert_family(&mut self, variants: RollTable<String>) {
        self.entries
            .insert(variants.name().to_string(), MonsterEntry::Family(variants));
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&MonsterEntry> {
        self.entries.get(name)
    }

    /// Returns true if `name` is catalogued.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries, families counted once.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MonsterEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Resolve `name` to a specific monster, rolling a variant for families.
    pub fn identify<R: DiceRoller + ?Sized>(
        &self,
        name: &str,
        roller: &mut R,
    ) -> WildResult<&Monster> {
        match self.get(name) {
            Some(MonsterEntry::Single(monster)) => Ok(monster),
            Some(MonsterEntry::Family(variants)) => {
                let (_, variant) = variants.roll(roller)?;
                match self.get(variant) {
                    Some(MonsterEntry::Single(monster)) => Ok(monster),
                    Some(MonsterEntry::Family(_)) => Err(WildError::integrity(
                        name,
                        format!("variant '{variant}' is itself a family"),
                    )),
                    None => Err(WildError::UnknownMonster(variant.clone())),
                }
            }
            None => Err(WildError::UnknownMonster(name.to_string())),
        }
    }

    /// Check that every family variant is a catalogued single monster and
    /// that hit dice are sane.
    pub fn validate(&self) -> WildResult<()> {
        for (name, entry) in &self.entries {
            match entry {
                MonsterEntry::Single(monster) => {
                    if !monster.hit_dice.is_finite() || monster.hit_dice < 0.0 {
                        return Err(WildError::integrity(
                            name.as_str(),
                            format!("invalid hit dice {}", monster.hit_dice),
                        ));
                    }
                }
                MonsterEntry::Family(variants) => {
                    for variant in variants.values() {
                        match self.get(variant) {
                            Some(MonsterEntry::Single(_)) => {}
                            Some(MonsterEntry::Family(_)) => {
                                return Err(WildError::integrity(
                                    name.as_str(),
                                    format!("variant '{variant}' is itself a family"),
                                ));
                            }
                            None => {
                                return Err(WildError::integrity(
                                    name.as_str(),
                                    format!("variant '{variant}' is not catalogued"),
                                ));
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use wild_dice::{Die, FixedRolls};

    fn giants() -> MonsterCatalog {
        let mut catalog = MonsterCatalog::new();
        catalog.insert(Monster::standard("Giant, Hill", "1d8", 8.0, 9).unwrap());
        catalog.insert(Monster::standard("Giant, Cloud", "1d8", 12.0, 15).unwrap());
        catalog.insert_family(
            RollTable::new(
                "Giant",
                Die::D10,
                [
                    (1..=9, "Giant, Hill".to_string()),
                    (10..=10, "Giant, Cloud".to_string()),
                ],
            )
            .unwrap(),
        );
        catalog
    }

    #[test]
    fn per_individual_multiplies() {
        let ogre = Monster::standard("Ogre", "3d6", 4.1, 5).unwrap();
        let mut rolls = FixedRolls::new([2, 3, 4]);
        let group = ogre.roll_group(&mut rolls);
        assert_eq!(
            group,
            Group {
                quantity: 9,
                total_ehd: 45
            }
        );
    }

    #[test]
    fn weak_groups_are_swept() {
        let orc = Monster::standard("Orc", "3d10x10", 1.0, 1).unwrap();
        assert!(orc.is_swept());
        let mut rolls = FixedRolls::new([1, 2, 3]);
        let group = orc.roll_group(&mut rolls);
        assert_eq!(group.quantity, 60);
        assert_eq!(group.total_ehd, 15);
    }

    #[test]
    fn one_plus_one_hit_dice_are_not_swept() {
        let berserker = Monster::standard("Berserker", "3d10x10", 1.1, 1).unwrap();
        assert!(!berserker.is_swept());
    }

    #[test]
    fn quantity_is_at_least_one() {
        let imp = Monster::standard("Imp", "1d4-3", 2.0, 2).unwrap();
        let mut rolls = FixedRolls::new([1]);
        let group = imp.roll_group(&mut rolls);
        assert_eq!(group.quantity, 1);
        assert_eq!(group.total_ehd, 2);
    }

    #[test]
    fn leader_adds_entourage() {
        let wizard = Monster::leader("Wizard", 11).unwrap();
        assert!(!wizard.is_swept());
        // 2d6 entourage: 1 + 2 = 3 retainers, each 1d4: 4 + 1 + 3.
        let mut rolls = FixedRolls::new([1, 2, 4, 1, 3]);
        let group = wizard.roll_group(&mut rolls);
        assert_eq!(
            group,
            Group {
                quantity: 4,
                total_ehd: 19
            }
        );
        assert_eq!(rolls.consumed(), 5);
    }

    #[test]
    fn leader_ehd_bounds() {
        let lord = Monster::leader("Lord", 9).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let group = lord.roll_group(&mut rng);
            assert!((2 + 1..=12 + 1).contains(&group.quantity));
            assert!((9 + 2..=9 + 48).contains(&group.total_ehd));
        }
    }

    #[test]
    fn identify_single_and_family() {
        let catalog = giants();
        let mut rolls = FixedRolls::new([10]);
        assert_eq!(
            catalog.identify("Giant, Hill", &mut rolls).unwrap().name,
            "Giant, Hill"
        );
        assert_eq!(rolls.consumed(), 0);
        assert_eq!(
            catalog.identify("Giant", &mut rolls).unwrap().name,
            "Giant, Cloud"
        );
        assert_eq!(rolls.consumed(), 1);
    }

    #[test]
    fn identify_unknown() {
        let catalog = giants();
        let mut rolls = FixedRolls::new([1]);
        assert!(matches!(
            catalog.identify("Tarrasque", &mut rolls),
            Err(WildError::UnknownMonster(name)) if name == "Tarrasque"
        ));
    }

    #[test]
    fn validate_catches_missing_variant() {
        let mut catalog = giants();
        assert!(catalog.validate().is_ok());
        catalog.insert_family(
            RollTable::new(
                "Dragon",
                Die::of(2),
                [
                    (1..=1, "Dragon, Red".to_string()),
                    (2..=2, "Giant, Hill".to_string()),
                ],
            )
            .unwrap(),
        );
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("'Dragon, Red' is not catalogued"));
    }

    #[test]
    fn validate_catches_nested_family() {
        let mut catalog = giants();
        catalog.insert_family(
            RollTable::new("Big Folk", Die::of(2), [(1..=2, "Giant".to_string())]).unwrap(),
        );
        assert!(matches!(
            catalog.validate(),
            Err(WildError::TableIntegrity { .. })
        ));
    }

    #[test]
    fn hit_dice_labels() {
        let label = |hit_dice| {
            Monster::standard("Test", "1", hit_dice, 1)
                .unwrap()
                .hit_dice_label()
        };
        assert_eq!(label(5.0), "5");
        assert_eq!(label(1.1), "1+1");
        assert_eq!(label(4.1), "4+1");
        assert_eq!(label(6.3), "6+3");
        assert_eq!(label(0.5), "1/2");
        assert_eq!(label(0.75), "1-1");
        assert_eq!(Monster::leader("Lord", 9).unwrap().hit_dice_label(), "9");
    }

    #[test]
    fn json_entries_are_checked() {
        let gappy_family = r#"{"Family":{"name":"Giant","die":"D10","rows":[
            {"low":1,"high":6,"value":"Giant, Hill"},
            {"low":8,"high":10,"value":"Giant, Cloud"}
        ]}}"#;
        let err = serde_json::from_str::<MonsterEntry>(gappy_family).unwrap_err();
        assert!(err.to_string().contains("no row covers roll 7"), "{err}");

        let horde = r#"{"name":"Horde","number":"4294967295d4294967295",
            "hit_dice":1.0,"ehd":{"PerIndividual":1}}"#;
        let err = serde_json::from_str::<Monster>(horde).unwrap_err();
        assert!(err.to_string().contains("too large"), "{err}");
    }

    #[test]
    fn validate_catches_bad_hit_dice() {
        let mut catalog = MonsterCatalog::new();
        catalog.insert(Monster::standard("Wisp", "1", f64::NAN, 1).unwrap());
        assert!(catalog.validate().is_err());
    }
}

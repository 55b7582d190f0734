//! The two-tier encounter tables.
//!
//! Each terrain has a primary table. Its entries either name a monster
//! directly or send the roll to a sub-table, whose entries are always
//! terminal. Everything is cross-checked once when the tables are built.

use std::collections::BTreeMap;

use tracing::debug;
use wild_dice::DiceRoller;

use crate::error::{WildError, WildResult};
use crate::monster::{Monster, MonsterCatalog};
use crate::table::{RollTable, TableEntry};
use crate::terrain::Terrain;

/// Primary tables, sub-tables and the monster catalog.
#[derive(Debug, Clone)]
pub struct EncounterTables {
    primary: BTreeMap<Terrain, RollTable<TableEntry>>,
    sub_tables: BTreeMap<String, RollTable<TableEntry>>,
    monsters: MonsterCatalog,
}

impl EncounterTables {
    /// Assemble and cross-check a set of tables.
    ///
    /// Fails with [`WildError::TableIntegrity`] if a terrain lacks a primary
    /// table, a sub-table reference dangles, a sub-table nests another
    /// sub-table, or a monster name is not catalogued.
    pub fn new(
        primary: impl IntoIterator<Item = (Terrain, RollTable<TableEntry>)>,
        sub_tables: impl IntoIterator<Item = RollTable<TableEntry>>,
        monsters: MonsterCatalog,
    ) -> WildResult<Self> {
        let tables = Self {
            primary: primary.into_iter().collect(),
            sub_tables: sub_tables
                .into_iter()
                .map(|table| (table.name().to_string(), table))
                .collect(),
            monsters,
        };
        tables.validate()?;
        debug!(
            primary = tables.primary.len(),
            sub_tables = tables.sub_tables.len(),
            monsters = tables.monsters.len(),
            "encounter tables ready"
        );
        Ok(tables)
    }

    fn validate(&self) -> WildResult<()> {
        self.monsters.validate()?;

        for terrain in Terrain::ALL {
            let table = self.primary.get(&terrain).ok_or_else(|| {
                WildError::integrity(terrain.name(), "terrain has no primary table")
            })?;
            for entry in table.values() {
                self.check_entry(table.name(), entry)?;
            }
        }

        for table in self.sub_tables.values() {
            for entry in table.values() {
                if !entry.is_terminal() {
                    return Err(WildError::integrity(
                        table.name(),
                        format!("sub-tables cannot nest, found {entry}"),
                    ));
                }
                self.check_entry(table.name(), entry)?;
            }
        }
        Ok(())
    }

    fn check_entry(&self, table: &str, entry: &TableEntry) -> WildResult<()> {
        match entry {
            TableEntry::Monster(name) if !self.monsters.contains(name) => Err(
                WildError::integrity(table, format!("monster '{name}' is not catalogued")),
            ),
            TableEntry::SubTable(name) if !self.sub_tables.contains_key(name) => Err(
                WildError::integrity(table, format!("sub-table '{name}' does not exist")),
            ),
            _ => Ok(()),
        }
    }

    /// The primary table for a terrain.
    pub fn primary_table(&self, terrain: Terrain) -> WildResult<&RollTable<TableEntry>> {
        self.primary
            .get(&terrain)
            .ok_or_else(|| WildError::integrity(terrain.name(), "terrain has no primary table"))
    }

    /// A sub-table by name.
    pub fn sub_table(&self, name: &str) -> WildResult<&RollTable<TableEntry>> {
        self.sub_tables
            .get(name)
            .ok_or_else(|| WildError::UnknownSubTable(name.to_string()))
    }

    /// All sub-tables in name order.
    pub fn sub_tables(&self) -> impl Iterator<Item = &RollTable<TableEntry>> {
        self.sub_tables.values()
    }

    /// The monster catalog.
    pub fn monsters(&self) -> &MonsterCatalog {
        &self.monsters
    }

    /// The primary-table entry selected by `roll` for `terrain`.
    pub fn lookup(&self, terrain: Terrain, roll: u32) -> WildResult<&TableEntry> {
        self.primary_table(terrain)?.lookup(roll)
    }

    /// Resolve an entry to a specific monster.
    ///
    /// Terminal entries resolve directly; sub-table entries take exactly one
    /// further roll. Families consume one more roll to pick their variant.
    pub fn resolve_entry<R: DiceRoller + ?Sized>(
        &self,
        entry: &TableEntry,
        roller: &mut R,
    ) -> WildResult<&Monster> {
        match entry {
            TableEntry::Monster(name) => self.monsters.identify(name, roller),
            TableEntry::SubTable(name) => {
                let table = self.sub_table(name)?;
                match table.roll(roller)? {
                    (_, TableEntry::Monster(monster)) => self.monsters.identify(monster, roller),
                    (roll, nested @ TableEntry::SubTable(_)) => Err(WildError::integrity(
                        table.name(),
                        format!("roll {roll} leads to nested {nested}"),
                    )),
                }
            }
        }
    }
}

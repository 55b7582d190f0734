//! Roll tables keyed by inclusive die ranges.
//!
//! A [`RollTable`] maps every face of its die to exactly one row. The
//! partition is checked when the table is built, so a lookup with an
//! in-range roll always lands on a row.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use wild_dice::{DiceRoller, Die};

use crate::error::{WildError, WildResult};

/// One row of a roll table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow<T> {
    /// Lowest roll (inclusive) that selects this row.
    pub low: u32,
    /// Highest roll (inclusive) that selects this row.
    pub high: u32,
    /// The row's value.
    pub value: T,
}

impl<T> TableRow<T> {
    /// Returns true if `roll` selects this row.
    pub fn contains(&self, roll: u32) -> bool {
        (self.low..=self.high).contains(&roll)
    }

    /// The range as printed on a table: `"4"` or `"5-8"`.
    pub fn range_label(&self) -> String {
        if self.low == self.high {
            self.low.to_string()
        } else {
            format!("{}-{}", self.low, self.high)
        }
    }
}

/// An entry of an encounter table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableEntry {
    /// Terminal: a named monster from the catalog.
    Monster(String),
    /// Roll once more on the named sub-table.
    SubTable(String),
}

impl TableEntry {
    /// A terminal entry for `name`.
    pub fn monster(name: impl Into<String>) -> Self {
        Self::Monster(name.into())
    }

    /// A sub-table reference to `name`.
    pub fn sub_table(name: impl Into<String>) -> Self {
        Self::SubTable(name.into())
    }

    /// Returns true for terminal entries.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Monster(_))
    }
}

impl std::fmt::Display for TableEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monster(name) => f.write_str(name),
            Self::SubTable(name) => write!(f, "{name} (sub-table)"),
        }
    }
}

/// A named table rolled on a single die.
///
/// Deserialized tables go through [`RollTable::new`] and are checked the same
/// way as tables built in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "UncheckedTable<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct RollTable<T> {
    name: String,
    die: Die,
    rows: Vec<TableRow<T>>,
}

#[derive(Deserialize)]
struct UncheckedTable<T> {
    name: String,
    die: Die,
    rows: Vec<TableRow<T>>,
}

impl<T> TryFrom<UncheckedTable<T>> for RollTable<T> {
    type Error = WildError;

    fn try_from(table: UncheckedTable<T>) -> WildResult<Self> {
        let rows = table
            .rows
            .into_iter()
            .map(|row| (row.low..=row.high, row.value));
        Self::new(table.name, table.die, rows)
    }
}

impl<T> RollTable<T> {
    /// Build a table, checking that the rows partition `1..=die.sides()`.
    ///
    /// Rows may be given in any order; they are stored sorted by range.
    pub fn new(
        name: impl Into<String>,
        die: Die,
        rows: impl IntoIterator<Item = (RangeInclusive<u32>, T)>,
    ) -> WildResult<Self> {
        let name = name.into();
        let mut rows: Vec<TableRow<T>> = rows
            .into_iter()
            .map(|(range, value)| TableRow {
                low: *range.start(),
                high: *range.end(),
                value,
            })
            .collect();
        rows.sort_by_key(|row| row.low);

        let sides = die.sides();
        if sides == 0 {
            return Err(WildError::integrity(name, "die has no sides"));
        }
        let mut expected = 1;
        for row in &rows {
            if row.low > row.high {
                return Err(WildError::integrity(
                    name,
                    format!("empty range {}-{}", row.low, row.high),
                ));
            }
            if row.low == 0 {
                return Err(WildError::integrity(name, "rolls start at 1"));
            }
            if row.low < expected {
                return Err(WildError::integrity(
                    name,
                    format!("range {} overlaps an earlier row", row.range_label()),
                ));
            }
            if row.low > expected {
                return Err(WildError::integrity(
                    name,
                    format!("no row covers roll {expected}"),
                ));
            }
            if row.high > sides {
                return Err(WildError::integrity(
                    name,
                    format!("range {} exceeds {die}", row.range_label()),
                ));
            }
            expected = row.high + 1;
        }
        if expected <= sides {
            return Err(WildError::integrity(
                name,
                format!("no row covers roll {expected}"),
            ));
        }

        Ok(Self { name, die, rows })
    }

    /// The table's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The die rolled on this table.
    pub fn die(&self) -> Die {
        self.die
    }

    /// Rows in roll order.
    pub fn rows(&self) -> &[TableRow<T>] {
        &self.rows
    }

    /// Iterate over every row value.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(|row| &row.value)
    }

    /// The value selected by `roll`.
    pub fn lookup(&self, roll: u32) -> WildResult<&T> {
        let idx = self.rows.partition_point(|row| row.high < roll);
        self.rows
            .get(idx)
            .filter(|row| row.contains(roll))
            .map(|row| &row.value)
            .ok_or_else(|| WildError::RollOutOfRange {
                table: self.name.clone(),
                roll,
            })
    }

    /// Roll the table's die and look up the result.
    pub fn roll<R: DiceRoller + ?Sized>(&self, roller: &mut R) -> WildResult<(u32, &T)> {
        let roll = self.die.roll(roller);
        self.lookup(roll).map(|value| (roll, value))
    }
}

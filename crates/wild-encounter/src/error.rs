//! Error types for encounter tables and sampling.

use thiserror::Error;

/// Result type for encounter operations.
pub type WildResult<T> = Result<T, WildError>;

/// Errors that can occur while building tables or rolling encounters.
#[derive(Debug, Error)]
pub enum WildError {
    /// The terrain name is not one of the known terrains.
    #[error("unknown terrain '{name}' (expected one of: {expected})")]
    UnknownTerrain {
        /// The name that was given.
        name: String,
        /// Comma-separated list of valid terrain names.
        expected: String,
    },

    /// Table data is malformed. This is a defect in the data, not user input.
    #[error("table '{table}' is malformed: {reason}")]
    TableIntegrity {
        /// Name of the offending table.
        table: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A roll fell outside every row of a table.
    #[error("roll {roll} is outside table '{table}'")]
    RollOutOfRange {
        /// Name of the table.
        table: String,
        /// The roll that missed.
        roll: u32,
    },

    /// A sub-table was referenced that does not exist.
    #[error("unknown sub-table: {0}")]
    UnknownSubTable(String),

    /// A monster was referenced that is not in the catalog.
    #[error("unknown monster: {0}")]
    UnknownMonster(String),

    /// A dice expression in the table data failed to parse.
    #[error("{0}")]
    Dice(#[from] wild_dice::DiceError),
}

impl WildError {
    pub(crate) fn integrity(table: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TableIntegrity {
            table: table.into(),
            reason: reason.into(),
        }
    }
}

//! OD&D wilderness encounter tables and an EHD sampler.
//!
//! A terrain selects a primary table; its roll either names a monster or
//! sends the roll to a sub-table. The monster's number appearing is rolled
//! and converted into Equivalent Hit Dice (EHD), a single difficulty figure
//! per encounter. [`Sampler::run`] repeats this as often as asked.

pub mod config;
pub mod data;
pub mod error;
pub mod monster;
pub mod sampler;
pub mod table;
pub mod tables;
pub mod terrain;

pub use config::{DEFAULT_REPETITIONS, SamplerConfig};
pub use error::{WildError, WildResult};
pub use monster::{EhdRule, Group, Monster, MonsterCatalog, MonsterEntry};
pub use sampler::{EncounterResult, Encounters, Sampler};
pub use table::{RollTable, TableEntry, TableRow};
pub use tables::EncounterTables;
pub use terrain::Terrain;

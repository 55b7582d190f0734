pub mod sample;
pub mod show;

use wild_encounter::{EncounterTables, Terrain};

/// Parse the terrain argument and build the standard tables.
pub fn load(terrain: &str) -> Result<(Terrain, EncounterTables), String> {
    let terrain = terrain.parse::<Terrain>().map_err(|e| e.to_string())?;
    let tables = EncounterTables::standard().map_err(|e| e.to_string())?;
    Ok((terrain, tables))
}

//! Wilderness terrain types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WildError;

/// The terrain a party is travelling through, selecting the encounter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Terrain {
    /// Open plains and farmland.
    Clear,
    /// Forest.
    Woods,
    /// Along a river or lake.
    River,
    /// Marsh and bog.
    Swamp,
    /// Hills and mountains.
    Mountain,
    /// Desert.
    Desert,
    /// Within or near a city.
    City,
}

impl Terrain {
    /// All terrains in table order.
    pub const ALL: [Terrain; 7] = [
        Self::Clear,
        Self::Woods,
        Self::River,
        Self::Swamp,
        Self::Mountain,
        Self::Desert,
        Self::City,
    ];

    /// The terrain's name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Woods => "Woods",
            Self::River => "River",
            Self::Swamp => "Swamp",
            Self::Mountain => "Mountain",
            Self::Desert => "Desert",
            Self::City => "City",
        }
    }

    /// Comma-separated list of every terrain name.
    pub fn expected_names() -> String {
        Self::ALL
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Terrain {
    type Err = WildError;

    /// Case-sensitive match against the terrain names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| WildError::UnknownTerrain {
                name: s.to_string(),
                expected: Self::expected_names(),
            })
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_every_terrain() {
        for terrain in Terrain::ALL {
            assert_eq!(terrain.name().parse::<Terrain>().unwrap(), terrain);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("clear".parse::<Terrain>().is_err());
        assert!("WOODS".parse::<Terrain>().is_err());
    }

    #[test]
    fn unknown_terrain_names_valid_set() {
        let err = "Ocean".parse::<Terrain>().unwrap_err();
        assert!(matches!(err, WildError::UnknownTerrain { ref name, .. } if name == "Ocean"));
        assert_eq!(
            err.to_string(),
            "unknown terrain 'Ocean' (expected one of: Clear, Woods, River, Swamp, Mountain, Desert, City)"
        );
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Terrain::Mountain.to_string(), "Mountain");
    }
}

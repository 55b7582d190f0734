//! Built-in OD&D wilderness encounter data.
//!
//! Primary tables are rolled on a d8 per terrain; most sub-tables on a d12.
//! Each terrain's primary table points straight at its own "Men" sub-table.
//! Monster statistics follow the OED monster database: number appearing,
//! hit dice (1+1 written as 1.1) and EHD per individual.

use wild_dice::Die;

use crate::error::WildResult;
use crate::monster::{Monster, MonsterCatalog};
use crate::table::{RollTable, TableEntry};
use crate::tables::EncounterTables;
use crate::terrain::Terrain;

type Rows = &'static [(u32, u32, &'static str)];

const MEN_TYPICAL: &str = "Men Typical";
const MEN_MOUNTAIN: &str = "Men Mountain";
const MEN_DESERT: &str = "Men Desert";
const MEN_WATER: &str = "Men Water";
const FLYERS: &str = "Flyers";
const GIANTS: &str = "Giants";
const LYCANTHROPES: &str = "Lycanthropes";
const ANIMALS: &str = "Animals";
const SWIMMERS: &str = "Swimmers";
const UNDEAD: &str = "Undead";
const DRAGONS: &str = "Dragons";

fn primary_rows(terrain: Terrain) -> Rows {
    match terrain {
        Terrain::Clear => &[
            (1, 1, MEN_TYPICAL),
            (2, 2, FLYERS),
            (3, 3, GIANTS),
            (4, 4, LYCANTHROPES),
            (5, 5, ANIMALS),
            (6, 6, MEN_TYPICAL),
            (7, 7, ANIMALS),
            (8, 8, DRAGONS),
        ],
        Terrain::Woods => &[
            (1, 1, MEN_TYPICAL),
            (2, 2, FLYERS),
            (3, 3, GIANTS),
            (4, 5, LYCANTHROPES),
            (6, 6, MEN_TYPICAL),
            (7, 7, ANIMALS),
            (8, 8, DRAGONS),
        ],
        Terrain::River => &[
            (1, 1, MEN_WATER),
            (2, 2, FLYERS),
            (3, 3, GIANTS),
            (4, 4, LYCANTHROPES),
            (5, 6, SWIMMERS),
            (7, 7, ANIMALS),
            (8, 8, DRAGONS),
        ],
        Terrain::Swamp => &[
            (1, 1, MEN_TYPICAL),
            (2, 2, FLYERS),
            (3, 3, GIANTS),
            (4, 4, LYCANTHROPES),
            (5, 5, SWIMMERS),
            (6, 7, UNDEAD),
            (8, 8, DRAGONS),
        ],
        Terrain::Mountain => &[
            (1, 1, MEN_MOUNTAIN),
            (2, 2, FLYERS),
            (3, 3, GIANTS),
            (4, 4, LYCANTHROPES),
            (5, 5, ANIMALS),
            (6, 6, GIANTS),
            (7, 8, DRAGONS),
        ],
        Terrain::Desert => &[
            (1, 1, MEN_DESERT),
            (2, 2, FLYERS),
            (3, 3, GIANTS),
            (4, 4, LYCANTHROPES),
            (5, 5, ANIMALS),
            (6, 6, MEN_DESERT),
            (7, 7, DRAGONS),
            (8, 8, UNDEAD),
        ],
        Terrain::City => &[
            (1, 1, MEN_TYPICAL),
            (2, 2, UNDEAD),
            (3, 3, GIANTS),
            (4, 4, LYCANTHROPES),
            (5, 7, MEN_TYPICAL),
            (8, 8, UNDEAD),
        ],
    }
}

const SUB_TABLES: &[(&str, Die, Rows)] = &[
    (
        MEN_TYPICAL,
        Die::D12,
        &[
            (1, 2, "Bandit"),
            (3, 4, "Brigand"),
            (5, 5, "Necromancer"),
            (6, 6, "Wizard"),
            (7, 8, "Berserker"),
            (9, 9, "Lord"),
            (10, 10, "Superhero"),
            (11, 11, "Evil High Priest"),
            (12, 12, "Patriarch"),
        ],
    ),
    (
        MEN_MOUNTAIN,
        Die::D12,
        &[
            (1, 2, "Bandit"),
            (3, 3, "Berserker"),
            (4, 4, "Brigand"),
            (5, 5, "Lord"),
            (6, 6, "Superhero"),
            (7, 7, "Necromancer"),
            (8, 8, "Wizard"),
            (9, 9, "Evil High Priest"),
            (10, 10, "Patriarch"),
            (11, 12, "Caveman"),
        ],
    ),
    (
        MEN_DESERT,
        Die::D12,
        &[
            (1, 4, "Nomad"),
            (5, 6, "Dervish"),
            (7, 7, "Lord"),
            (8, 8, "Superhero"),
            (9, 9, "Wizard"),
            (10, 10, "Necromancer"),
            (11, 11, "Evil High Priest"),
            (12, 12, "Patriarch"),
        ],
    ),
    (
        MEN_WATER,
        Die::D12,
        &[
            (1, 4, "Buccaneer"),
            (5, 8, "Pirate"),
            (9, 9, "Lord"),
            (10, 10, "Superhero"),
            (11, 11, "Wizard"),
            (12, 12, "Evil High Priest"),
        ],
    ),
    (
        FLYERS,
        Die::D12,
        &[
            (1, 1, "Pegasus"),
            (2, 2, "Roc, Small"),
            (3, 3, "Chimera"),
            (4, 4, "Hippogriff"),
            (5, 5, "Griffon"),
            (6, 6, "Manticore"),
            (7, 7, "Wyvern"),
            (8, 8, "Dragon"),
            (9, 9, "Gargoyle"),
            (10, 10, "Cockatrice"),
            (11, 11, "Harpy"),
            (12, 12, "Vampire"),
        ],
    ),
    (
        GIANTS,
        Die::D12,
        &[
            (1, 1, "Kobold"),
            (2, 2, "Goblin"),
            (3, 3, "Orc"),
            (4, 4, "Hobgoblin"),
            (5, 5, "Gnoll"),
            (6, 6, "Ogre"),
            (7, 7, "Troll"),
            (8, 8, "Giant"),
            (9, 9, "Dwarf"),
            (10, 10, "Elf"),
            (11, 11, "Gnome"),
            (12, 12, "Ent"),
        ],
    ),
    (
        LYCANTHROPES,
        Die::D4,
        &[
            (1, 1, "Werewolf"),
            (2, 2, "Wereboar"),
            (3, 3, "Weretiger"),
            (4, 4, "Werebear"),
        ],
    ),
    (
        ANIMALS,
        Die::D12,
        &[
            (1, 1, "Giant Ant, Worker"),
            (2, 2, "Giant Beetle, Bombardier"),
            (3, 3, "Giant Snake, Constrictor"),
            (4, 4, "Giant Spider"),
            (5, 5, "Lion"),
            (6, 6, "Giant Weasel"),
            (7, 7, "Giant Scorpion"),
            (8, 8, "Giant Lizard"),
            (9, 9, "Giant Centipede"),
            (10, 10, "Giant Hog"),
            (11, 11, "Giant Rat"),
            (12, 12, "Wolf"),
        ],
    ),
    (
        SWIMMERS,
        Die::D12,
        &[
            (1, 1, "Giant Crab"),
            (2, 2, "Giant Leech"),
            (3, 4, "Crocodile"),
            (5, 5, "Giant Fish"),
            (6, 6, "Sea Monster, Small"),
            (7, 7, "Dragon Turtle"),
            (8, 8, "Merman"),
            (9, 9, "Nixie"),
            (10, 10, "Hydra, 10 Heads"),
            (11, 11, "Giant Octopus"),
            (12, 12, "Giant Squid"),
        ],
    ),
    (
        UNDEAD,
        Die::D12,
        &[
            (1, 2, "Skeleton"),
            (3, 4, "Zombie"),
            (5, 6, "Ghoul"),
            (7, 8, "Wight"),
            (9, 9, "Wraith"),
            (10, 10, "Mummy"),
            (11, 11, "Spectre"),
            (12, 12, "Vampire"),
        ],
    ),
    (
        DRAGONS,
        Die::D12,
        &[
            (1, 6, "Dragon"),
            (7, 7, "Cockatrice"),
            (8, 8, "Basilisk"),
            (9, 9, "Wyvern"),
            (10, 10, "Chimera"),
            (11, 11, "Hydra, 10 Heads"),
            (12, 12, "Purple Worm"),
        ],
    ),
];

/// Families narrowed to a specific monster by their own roll.
const FAMILIES: &[(&str, Die, Rows)] = &[
    (
        "Giant",
        Die::D10,
        &[
            (1, 6, "Giant, Hill"),
            (7, 7, "Giant, Stone"),
            (8, 8, "Giant, Frost"),
            (9, 9, "Giant, Fire"),
            (10, 10, "Giant, Cloud"),
        ],
    ),
    (
        "Dragon",
        Die::D6,
        &[
            (1, 1, "Dragon, White"),
            (2, 2, "Dragon, Black"),
            (3, 3, "Dragon, Green"),
            (4, 4, "Dragon, Blue"),
            (5, 5, "Dragon, Red"),
            (6, 6, "Dragon, Gold"),
        ],
    ),
];

/// Named NPCs and their levels.
const LEADERS: &[(&str, u32)] = &[
    ("Wizard", 11),
    ("Necromancer", 10),
    ("Lord", 9),
    ("Superhero", 8),
    ("Patriarch", 8),
    ("Evil High Priest", 8),
];

/// Name, number appearing, hit dice, EHD per individual.
const MONSTERS: &[(&str, &str, f64, u32)] = &[
    // Men
    ("Bandit", "3d10x10", 1.0, 1),
    ("Brigand", "3d10x10", 1.0, 1),
    ("Berserker", "3d10x10", 1.1, 1),
    ("Nomad", "3d10x10", 1.0, 1),
    ("Dervish", "3d10x10", 1.0, 1),
    ("Caveman", "1d10x10", 2.0, 2),
    ("Buccaneer", "3d10x10", 1.0, 1),
    ("Pirate", "3d10x10", 1.0, 1),
    // Flyers
    ("Pegasus", "1d12", 2.0, 2),
    ("Roc, Small", "1d20", 6.0, 6),
    ("Chimera", "1d4", 9.0, 13),
    ("Hippogriff", "2d8", 3.1, 3),
    ("Griffon", "2d8", 7.0, 7),
    ("Manticore", "1d4", 6.1, 9),
    ("Wyvern", "1d6", 7.0, 10),
    ("Gargoyle", "2d10", 4.0, 6),
    ("Cockatrice", "1d8", 5.0, 9),
    ("Harpy", "2d6", 3.0, 4),
    ("Vampire", "1d6", 7.0, 14),
    // Giants and humanoids
    ("Kobold", "4d10x10", 0.5, 1),
    ("Goblin", "4d10x10", 0.75, 1),
    ("Orc", "3d10x10", 1.0, 1),
    ("Hobgoblin", "2d10x10", 1.1, 1),
    ("Gnoll", "2d10x10", 2.0, 2),
    ("Ogre", "3d6", 4.1, 5),
    ("Troll", "2d6", 6.3, 10),
    ("Dwarf", "4d10x10", 1.0, 1),
    ("Elf", "2d10x10", 1.1, 1),
    ("Gnome", "4d10x10", 1.0, 1),
    ("Ent", "2d10", 8.0, 10),
    ("Giant, Hill", "1d8", 8.0, 9),
    ("Giant, Stone", "1d8", 9.0, 10),
    ("Giant, Frost", "1d8", 10.0, 12),
    ("Giant, Fire", "1d8", 11.0, 13),
    ("Giant, Cloud", "1d8", 12.0, 15),
    // Lycanthropes
    ("Werewolf", "2d10", 5.0, 7),
    ("Wereboar", "2d8", 4.1, 6),
    ("Weretiger", "1d6", 6.0, 9),
    ("Werebear", "1d4", 6.0, 9),
    // Animals
    ("Giant Ant, Worker", "2d6", 2.0, 2),
    ("Giant Beetle, Bombardier", "2d6", 2.0, 3),
    ("Giant Snake, Constrictor", "1d3", 6.0, 6),
    ("Giant Spider", "1d4", 4.0, 5),
    ("Lion", "1d8", 5.0, 6),
    ("Giant Weasel", "1d6", 4.0, 5),
    ("Giant Scorpion", "1d6", 5.0, 7),
    ("Giant Lizard", "1d6", 3.0, 3),
    ("Giant Centipede", "2d4", 0.5, 1),
    ("Giant Hog", "1d8", 3.0, 3),
    ("Giant Rat", "3d6", 0.5, 1),
    ("Wolf", "2d6+2", 2.1, 2),
    // Swimmers
    ("Giant Crab", "1d6", 3.0, 3),
    ("Giant Leech", "1d10", 6.0, 6),
    ("Crocodile", "1d8", 3.0, 3),
    ("Giant Fish", "1d6", 4.0, 4),
    ("Sea Monster, Small", "1d6/3", 10.0, 10),
    ("Dragon Turtle", "1", 30.0, 40),
    ("Merman", "1d6x10", 1.0, 1),
    ("Nixie", "2d10x10", 1.0, 1),
    ("Hydra, 10 Heads", "1", 10.0, 11),
    ("Giant Octopus", "1d3", 4.0, 5),
    ("Giant Squid", "1", 6.0, 7),
    // Undead
    ("Skeleton", "3d10", 0.5, 1),
    ("Zombie", "3d10", 2.0, 2),
    ("Ghoul", "2d12", 2.0, 3),
    ("Wight", "2d12", 3.0, 5),
    ("Wraith", "2d8", 4.0, 7),
    ("Mummy", "1d12", 5.1, 8),
    ("Spectre", "1d8", 6.0, 10),
    // Dragons
    ("Dragon, White", "1d4", 6.0, 8),
    ("Dragon, Black", "1d4", 7.0, 10),
    ("Dragon, Green", "1d4", 8.0, 12),
    ("Dragon, Blue", "1d4", 9.0, 14),
    ("Dragon, Red", "1d4", 10.0, 17),
    // No EHD in the database; estimated.
    ("Dragon, Gold", "1d4", 11.0, 40),
    ("Basilisk", "1d6", 6.1, 12),
    ("Purple Worm", "1d2", 15.0, 20),
];

fn build_table<T>(
    name: &str,
    die: Die,
    rows: Rows,
    entry: impl Fn(&'static str) -> T,
) -> WildResult<RollTable<T>> {
    RollTable::new(
        name,
        die,
        rows.iter().map(|&(low, high, value)| (low..=high, entry(value))),
    )
}

/// The monster catalog behind the standard tables.
pub fn standard_monsters() -> WildResult<MonsterCatalog> {
    let mut catalog = MonsterCatalog::new();
    for &(name, number, hit_dice, ehd) in MONSTERS {
        catalog.insert(Monster::standard(name, number, hit_dice, ehd)?);
    }
    for &(name, level) in LEADERS {
        catalog.insert(Monster::leader(name, level)?);
    }
    for &(name, die, rows) in FAMILIES {
        catalog.insert_family(build_table(name, die, rows, str::to_string)?);
    }
    Ok(catalog)
}

impl EncounterTables {
    /// The standard OD&D wilderness encounter tables.
    pub fn standard() -> WildResult<Self> {
        let primary = Terrain::ALL
            .into_iter()
            .map(|terrain| {
                build_table(
                    terrain.name(),
                    Die::D8,
                    primary_rows(terrain),
                    TableEntry::sub_table,
                )
                .map(|table| (terrain, table))
            })
            .collect::<WildResult<Vec<_>>>()?;
        let sub_tables = SUB_TABLES
            .iter()
            .map(|&(name, die, rows)| build_table(name, die, rows, TableEntry::monster))
            .collect::<WildResult<Vec<_>>>()?;
        Self::new(primary, sub_tables, standard_monsters()?)
    }
}

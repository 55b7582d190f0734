use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use wild_encounter::{EhdRule, EncounterTables, MonsterEntry, RollTable, TableEntry};

pub fn run(terrain: &str) -> Result<(), String> {
    let (terrain, tables) = super::load(terrain)?;
    let primary = tables.primary_table(terrain).map_err(|e| e.to_string())?;

    print_heading(&format!("{terrain} encounters"), primary);
    let mut table = new_table(vec!["Roll", "Result"]);
    for row in primary.rows() {
        table.add_row(vec![row.range_label(), row.value.to_string()]);
    }
    println!("{table}");
    println!();

    let mut shown: Vec<&str> = Vec::new();
    for entry in primary.values() {
        if let TableEntry::SubTable(name) = entry
            && !shown.contains(&name.as_str())
        {
            shown.push(name);
            let sub = tables.sub_table(name).map_err(|e| e.to_string())?;
            print_sub_table(&tables, sub);
        }
    }

    tracing::debug!(%terrain, sub_tables = shown.len(), "showing tables");
    print_families(&tables, &shown)
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn print_heading<T>(title: &str, table: &RollTable<T>) {
    println!(
        "  {} {}",
        title.bold().underline(),
        format!("({})", table.die()).dimmed()
    );
    println!();
}

fn print_sub_table(tables: &EncounterTables, sub: &RollTable<TableEntry>) {
    print_heading(sub.name(), sub);
    let mut table = new_table(vec!["Roll", "Monster", "Number", "Hit Dice", "EHD"]);
    for row in sub.rows() {
        let name = row.value.to_string();
        let mut cells = vec![row.range_label(), name.clone()];
        cells.extend(describe_monster(tables, &name));
        table.add_row(cells);
    }
    println!("{table}");
    println!();
}

/// Number, hit dice and EHD columns for a catalog entry.
fn describe_monster(tables: &EncounterTables, name: &str) -> Vec<String> {
    match tables.monsters().get(name) {
        Some(MonsterEntry::Single(monster)) => {
            let ehd = match &monster.ehd {
                EhdRule::PerIndividual(ehd) if monster.is_swept() => format!("{ehd} each, /4"),
                EhdRule::PerIndividual(ehd) => format!("{ehd} each"),
                EhdRule::Leader {
                    level,
                    entourage,
                    retainer,
                } => format!("{level} + {entourage} x {retainer}"),
            };
            vec![
                monster.number.to_string(),
                monster.hit_dice_label(),
                ehd,
            ]
        }
        Some(MonsterEntry::Family(variants)) => {
            vec![format!("see {}", variants.name()), String::new(), String::new()]
        }
        None => vec![String::new(); 3],
    }
}

/// Variant tables for every family reachable from the shown sub-tables.
fn print_families(tables: &EncounterTables, sub_tables: &[&str]) -> Result<(), String> {
    let mut families: Vec<&RollTable<String>> = Vec::new();
    for name in sub_tables {
        let sub = tables.sub_table(name).map_err(|e| e.to_string())?;
        for entry in sub.values() {
            if let TableEntry::Monster(monster) = entry
                && let Some(MonsterEntry::Family(variants)) = tables.monsters().get(monster)
                && !families.iter().any(|f| f.name() == variants.name())
            {
                families.push(variants);
            }
        }
    }

    for variants in families {
        print_heading(variants.name(), variants);
        let mut table = new_table(vec!["Roll", "Monster", "Number", "Hit Dice", "EHD"]);
        for row in variants.rows() {
            let mut cells = vec![row.range_label(), row.value.clone()];
            cells.extend(describe_monster(tables, &row.value));
            table.add_row(cells);
        }
        println!("{table}");
        println!();
    }
    Ok(())
}

use std::io::{self, BufWriter, Write};

use clap::ValueEnum;
use tracing::info;

use wild_encounter::{EncounterResult, Sampler, SamplerConfig};

/// How each encounter is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Total EHD only, one number per line
    Plain,
    /// Total EHD, quantity and monster, tab-separated
    Detail,
    /// One JSON object per line
    Json,
}

pub fn run(terrain: &str, config: &SamplerConfig, format: Format) -> Result<(), String> {
    let (terrain, tables) = super::load(terrain)?;

    match config.seed {
        Some(seed) => info!(%terrain, repetitions = config.repetitions, seed, "rolling encounters"),
        None => info!(%terrain, repetitions = config.repetitions, "rolling encounters from OS entropy"),
    }

    let mut sampler = Sampler::from_config(&tables, config);
    let mut out = BufWriter::new(io::stdout().lock());
    for result in sampler.run(terrain, config.repetitions) {
        let encounter = result.map_err(|e| e.to_string())?;
        write_encounter(&mut out, &encounter, format)?;
    }
    out.flush().map_err(|e| format!("failed to write output: {e}"))
}

fn write_encounter(
    out: &mut impl Write,
    encounter: &EncounterResult,
    format: Format,
) -> Result<(), String> {
    let written = match format {
        Format::Plain => writeln!(out, "{}", encounter.total_ehd),
        Format::Detail => writeln!(
            out,
            "{}\t{}\t{}",
            encounter.total_ehd, encounter.quantity, encounter.monster
        ),
        Format::Json => {
            let line = serde_json::to_string(encounter)
                .map_err(|e| format!("failed to encode encounter: {e}"))?;
            writeln!(out, "{line}")
        }
    };
    written.map_err(|e| format!("failed to write output: {e}"))
}

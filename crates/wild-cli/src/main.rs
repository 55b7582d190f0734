//! CLI frontend for the wilderness encounter simulator.

mod commands;

use std::process;

use clap::{ArgAction, Parser};
use colored::Colorize;
use tracing::Level;

use commands::sample::Format;
use wild_encounter::{DEFAULT_REPETITIONS, SamplerConfig};

#[derive(Parser)]
#[command(
    name = "wild",
    about = "OD&D wilderness encounter simulator: prints the total EHD of each rolled encounter",
    version
)]
struct Cli {
    /// Terrain to roll for: Clear, Woods, River, Swamp, Mountain, Desert or City
    terrain: String,

    /// Number of encounters to roll
    #[arg(short = 'n', long, default_value_t = DEFAULT_REPETITIONS)]
    count: usize,

    /// RNG seed for a reproducible run (default: OS entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Plain)]
    format: Format,

    /// Print the terrain's encounter tables instead of rolling
    #[arg(long)]
    show_table: bool,

    /// Diagnostics on stderr (-v info, -vv debug, -vvv every roll)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = if cli.show_table {
        commands::show::run(&cli.terrain)
    } else {
        let mut config = SamplerConfig::default().with_repetitions(cli.count);
        if let Some(seed) = cli.seed {
            config = config.with_seed(seed);
        }
        commands::sample::run(&cli.terrain, &config, cli.format)
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

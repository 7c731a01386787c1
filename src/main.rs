use chordforge::geometry::{GridGeometry, GridKind, LayoutMode};
use chordforge::handprint::HandprintStore;
use clap::{Parser, Subcommand};
use std::path::Path;
use std::process;
use std::str::FromStr;
use tracing::{error, warn};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/handprints.json")]
    store: String,

    /// Device topology: hex | square
    #[arg(global = true, short, long, default_value = "hex")]
    grid: String,

    /// Hex pad numbering: chromatic | intervals
    #[arg(global = true, short, long, default_value = "chromatic")]
    layout: String,

    /// MIDI note of pad (0, 0).
    #[arg(global = true, short, long, default_value_t = 48)]
    base_midi: i32,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank fingerings for a chord (exact matches, then synthesis)
    Suggest(cmd::suggest::SuggestArgs),
    /// Exact captured matches only
    Exact(cmd::exact::ExactArgs),
    /// Pattern statistics for the captured library
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Generate a synthetic handprint library
    Sample(cmd::sample::SampleArgs),
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let kind = GridKind::from_str(&cli.grid).unwrap_or_else(|_| {
        error!("unknown grid kind '{}' (expected hex | square)", cli.grid);
        process::exit(1);
    });
    let mode = LayoutMode::from_str(&cli.layout).unwrap_or_else(|_| {
        error!(
            "unknown layout mode '{}' (expected chromatic | intervals)",
            cli.layout
        );
        process::exit(1);
    });
    let geom = GridGeometry::new(kind, mode, cli.base_midi);

    let result = match cli.command {
        Commands::Suggest(args) => {
            let store = load_store(&cli.store);
            cmd::suggest::run(args, &geom, &store)
        }
        Commands::Exact(args) => {
            let store = load_store(&cli.store);
            cmd::exact::run(args, &store)
        }
        Commands::Analyze(args) => {
            let store = load_store(&cli.store);
            cmd::analyze::run(args, &store)
        }
        Commands::Sample(args) => cmd::sample::run(args, &geom),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}

/// A missing store file is not fatal: commands report the empty-store
/// case themselves with capture guidance.
fn load_store(path: &str) -> HandprintStore {
    if !Path::new(path).exists() {
        warn!("store file '{}' not found, starting empty", path);
        return HandprintStore::new();
    }
    HandprintStore::load_from_file(path).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    })
}

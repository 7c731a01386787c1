use super::{parse_hand, TargetArgs};
use crate::reports;
use chordforge::api::{self, SuggestOutcome};
use chordforge::config::Config;
use chordforge::error::CfResult;
use chordforge::geometry::GridGeometry;
use chordforge::handprint::HandprintStore;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub target: TargetArgs,

    #[arg(long, default_value = "right")]
    pub hand: String,

    /// Comma-separated chord progression, e.g. "Dm7,G7,Cmaj7".
    /// Overrides the single-target flags.
    #[arg(long)]
    pub progression: Option<String>,

    /// Also write the ranked candidates to a CSV file.
    #[arg(long)]
    pub csv: Option<String>,
}

pub fn run(args: SuggestArgs, geom: &GridGeometry, store: &HandprintStore) -> CfResult<()> {
    let hand = parse_hand(&args.hand)?;

    if let Some(prog) = &args.progression {
        let chords: Vec<String> = prog
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let steps = api::suggest_progression(geom, store, &chords, hand, &args.config);
        for step in &steps {
            match (&step.target, &step.outcome) {
                (None, _) => println!("\n{}: could not parse chord notation", step.chord),
                // CSV export is single-target only; a progression would
                // overwrite the file per step.
                (Some(target), Some(outcome)) => {
                    print_outcome(&format!("{} {}", step.chord, target), outcome, &None)?
                }
                (Some(_), None) => {}
            }
        }
        return Ok(());
    }

    let spec = args.target.to_spec()?;
    let Some(target) = api::resolve_target(&spec)? else {
        println!("Could not parse that chord. Try notation like Cmaj7 or Ebm7b5.");
        return Ok(());
    };

    let outcome = api::suggest(geom, store, target, hand, &args.config);
    print_outcome(&target.to_string(), &outcome, &args.csv)
}

fn print_outcome(title: &str, outcome: &SuggestOutcome, csv: &Option<String>) -> CfResult<()> {
    match outcome {
        SuggestOutcome::EmptyStore => {
            println!("\n{}: no handprints captured yet, capture a few and retry.", title);
        }
        SuggestOutcome::NoCandidates => {
            println!(
                "\n{}: no playable fingering found, try a different chord or range.",
                title
            );
        }
        SuggestOutcome::Ranked(list) => {
            reports::print_fingerings(title, list);
            if let Some(path) = csv {
                reports::write_csv(path, list)?;
                println!("Wrote {} candidates to {}", list.len(), path);
            }
        }
    }
    Ok(())
}

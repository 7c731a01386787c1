use super::parse_hand;
use crate::reports;
use chordforge::api;
use chordforge::error::CfResult;
use chordforge::handprint::{Hand, HandprintStore};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Analyze one hand; both when omitted.
    #[arg(long)]
    pub hand: Option<String>,
}

pub fn run(args: AnalyzeArgs, store: &HandprintStore) -> CfResult<()> {
    if store.is_empty() {
        println!("No handprints captured yet, nothing to analyze.");
        return Ok(());
    }

    let hands: Vec<Hand> = match &args.hand {
        Some(h) => vec![parse_hand(h)?],
        None => vec![Hand::Left, Hand::Right],
    };

    for hand in hands {
        match api::analyze(store, Some(hand)) {
            Some(stats) => reports::print_pattern_stats(&stats),
            None => println!("\nNo {}-hand handprints captured.", hand),
        }
    }
    Ok(())
}

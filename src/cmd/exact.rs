use super::{parse_hand, TargetArgs};
use crate::reports;
use chordforge::api;
use chordforge::config::Config;
use chordforge::error::CfResult;
use chordforge::handprint::HandprintStore;
use chordforge::matcher;
use chordforge::scorer;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ExactArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Restrict to one hand; both when omitted.
    #[arg(long)]
    pub hand: Option<String>,
}

pub fn run(args: ExactArgs, store: &HandprintStore) -> CfResult<()> {
    let hand = args.hand.as_deref().map(parse_hand).transpose()?;

    let spec = args.target.to_spec()?;
    let Some(target) = api::resolve_target(&spec)? else {
        println!("Could not parse that chord. Try notation like Cmaj7 or Ebm7b5.");
        return Ok(());
    };

    if store.is_empty() {
        println!("No handprints captured yet, capture a few and retry.");
        return Ok(());
    }

    let mut matches = matcher::find_exact(store, target, hand, &args.config.weights);
    if matches.is_empty() {
        println!(
            "\n{}: no exact captured match, try `suggest` for synthesis.",
            target
        );
        return Ok(());
    }

    scorer::rank(&mut matches);
    reports::print_fingerings(&target.to_string(), &matches);
    Ok(())
}

use super::parse_hand;
use chordforge::error::CfResult;
use chordforge::geometry::GridGeometry;
use chordforge::handprint::{Hand, HandprintStore};
use chordforge::sample;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct SampleArgs {
    #[arg(long, default_value_t = 12)]
    pub count: usize,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Hand to generate for: left | right | both.
    #[arg(long, default_value = "both")]
    pub hand: String,

    #[arg(short, long, default_value = "data/handprints.json")]
    pub output: String,
}

pub fn run(args: SampleArgs, geom: &GridGeometry) -> CfResult<()> {
    let mut store = HandprintStore::new();
    if args.hand == "both" {
        let half = args.count / 2;
        let left = sample::generate_store(geom, Hand::Left, half, args.seed);
        let right = sample::generate_store(
            geom,
            Hand::Right,
            args.count - half,
            args.seed.map(|s| s + 1),
        );
        store.handprints.extend(left.handprints);
        store.handprints.extend(right.handprints);
    } else {
        let hand = parse_hand(&args.hand)?;
        store = sample::generate_store(geom, hand, args.count, args.seed);
    }

    store.save_to_file(&args.output)?;
    println!(
        "Wrote {} synthetic handprints to {}",
        store.len(),
        args.output
    );
    Ok(())
}

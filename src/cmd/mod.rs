pub mod analyze;
pub mod exact;
pub mod sample;
pub mod suggest;

use chordforge::api::TargetSpec;
use chordforge::error::{CfResult, ChordForgeError};
use chordforge::handprint::Hand;
use chordforge::theory;
use std::str::FromStr;

/// Shared target flags for the suggest/exact subcommands.
#[derive(clap::Args, Debug, Clone)]
pub struct TargetArgs {
    /// Chord notation, e.g. "Cmaj7" or "Ebm7b5"
    #[arg(long)]
    pub chord: Option<String>,

    /// Comma-separated pitch classes, e.g. "0,4,7"
    #[arg(long)]
    pub pitch_classes: Option<String>,

    /// Root note name, combined with --quality
    #[arg(long)]
    pub root: Option<String>,

    /// Dictionary quality key, e.g. "maj7", "m7b5", "9_rootless"
    #[arg(long)]
    pub quality: Option<String>,
}

impl TargetArgs {
    pub fn to_spec(&self) -> CfResult<TargetSpec> {
        if let Some(chord) = &self.chord {
            return Ok(TargetSpec::Notation(chord.clone()));
        }
        if let Some(pcs) = &self.pitch_classes {
            return Ok(TargetSpec::Custom(pcs.clone()));
        }
        if let (Some(root), Some(quality)) = (&self.root, &self.quality) {
            let root_pc = theory::parse_chord_notation(root)
                .map(|p| p.root_pc)
                .ok_or_else(|| {
                    ChordForgeError::Validation(format!("unrecognized root note '{}'", root))
                })?;
            return Ok(TargetSpec::RootQuality {
                root_pc,
                quality: quality.clone(),
            });
        }
        Err(ChordForgeError::Validation(
            "no target given: use --chord, --pitch-classes, or --root/--quality".into(),
        ))
    }
}

pub fn parse_hand(text: &str) -> CfResult<Hand> {
    Hand::from_str(text).map_err(|_| {
        ChordForgeError::Validation(format!("unknown hand '{}' (expected left | right)", text))
    })
}

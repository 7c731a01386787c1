use crate::config::Config;
use crate::error::CfResult;
use crate::geometry::GridGeometry;
use crate::handprint::{Hand, HandprintStore};
use crate::matcher;
use crate::patterns::{self, PatternStats};
use crate::scorer::{self, Fingering};
use crate::synth;
use crate::theory::{self, PitchClassSet};
use rayon::prelude::*;
use tracing::info;

/// How a caller names the chord it wants fingered.
#[derive(Debug, Clone)]
pub enum TargetSpec {
    /// Chord notation like "Cmaj7" or "Ebm7b5".
    Notation(String),
    /// Comma-separated pitch classes like "0, 4, 7".
    Custom(String),
    /// Pre-resolved root + dictionary quality key.
    RootQuality { root_pc: u8, quality: String },
}

/// Resolve a target spec to pitch classes. Unparseable notation
/// resolves to `Ok(None)` (malformed user text is routine) while an
/// unknown quality key is a loud dictionary error.
pub fn resolve_target(spec: &TargetSpec) -> CfResult<Option<PitchClassSet>> {
    match spec {
        TargetSpec::Notation(text) => match theory::parse_chord_notation(text) {
            Some(parsed) => Ok(Some(theory::chord_pitch_classes(
                parsed.root_pc,
                parsed.quality,
            )?)),
            None => Ok(None),
        },
        TargetSpec::Custom(text) => Ok(Some(theory::parse_custom_pitch_classes(text))),
        TargetSpec::RootQuality { root_pc, quality } => {
            Ok(Some(theory::chord_pitch_classes(*root_pc, quality)?))
        }
    }
}

/// Zero candidates is a valid outcome, but the two empty cases call
/// for different remediation: capture more handprints vs. try a
/// different chord or range.
#[derive(Debug, Clone)]
pub enum SuggestOutcome {
    EmptyStore,
    NoCandidates,
    Ranked(Vec<Fingering>),
}

/// Full suggestion pipeline: exact matches from captured handprints
/// first, synthesis fallback when nothing captured reproduces the
/// target precisely.
pub fn suggest(
    geom: &GridGeometry,
    store: &HandprintStore,
    target: PitchClassSet,
    hand: Hand,
    config: &Config,
) -> SuggestOutcome {
    if store.is_empty() {
        return SuggestOutcome::EmptyStore;
    }

    let mut exact = matcher::find_exact(store, target, Some(hand), &config.weights);
    if !exact.is_empty() {
        scorer::rank(&mut exact);
        exact.truncate(config.synth.max_suggestions);
        info!(count = exact.len(), "exact matches found");
        return SuggestOutcome::Ranked(exact);
    }

    let synthesized = synth::synthesize(geom, store, target, hand, config);
    if synthesized.is_empty() {
        SuggestOutcome::NoCandidates
    } else {
        info!(count = synthesized.len(), "synthesized candidates");
        SuggestOutcome::Ranked(synthesized)
    }
}

#[derive(Debug, Clone)]
pub struct ProgressionStep {
    pub chord: String,
    /// `None` when the chord text failed to parse.
    pub target: Option<PitchClassSet>,
    pub outcome: Option<SuggestOutcome>,
}

/// Suggest fingerings for every chord of a progression. Each chord is
/// an independent computation over the same immutable snapshot, so
/// they run in parallel.
pub fn suggest_progression(
    geom: &GridGeometry,
    store: &HandprintStore,
    chords: &[String],
    hand: Hand,
    config: &Config,
) -> Vec<ProgressionStep> {
    chords
        .par_iter()
        .map(|chord| {
            let target = theory::parse_chord_notation(chord)
                .and_then(|p| theory::chord_pitch_classes(p.root_pc, p.quality).ok());
            let outcome = target.map(|t| suggest(geom, store, t, hand, config));
            ProgressionStep {
                chord: chord.clone(),
                target,
                outcome,
            }
        })
        .collect()
}

/// Pattern statistics for a hand (or the whole store). `None` when
/// the filtered set is empty.
pub fn analyze(store: &HandprintStore, hand: Option<Hand>) -> Option<PatternStats> {
    patterns::extract(store, hand)
}

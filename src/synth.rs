use crate::config::{Config, ScoringWeights, SynthParams};
use crate::geometry::{GridGeometry, GridPosition};
use crate::handprint::{Hand, HandprintStore};
use crate::patterns::{self, PatternStats};
use crate::scorer::{self, CandidatePad, Fingering, FingeringSource};
use crate::theory::PitchClassSet;
use tracing::debug;

/// A pad that sounds one of the target pitch classes.
#[derive(Debug, Clone, Copy)]
struct PadCandidate {
    pos: GridPosition,
    pitch_class: u8,
}

/// Synthesize ranked fingerings for a target that may never have been
/// captured verbatim: bounded grid search for candidate pads, one pad
/// per pitch class, fingers assigned anatomically (or from learned
/// per-pad preferences), then scored and ranked.
///
/// Empty target, empty store, or an unreachable pitch class all yield
/// an empty result, never an error.
pub fn synthesize(
    geom: &GridGeometry,
    store: &HandprintStore,
    target: PitchClassSet,
    hand: Hand,
    config: &Config,
) -> Vec<Fingering> {
    if target.is_empty() || store.is_empty() || target.len() > 5 {
        return Vec::new();
    }

    let stats = patterns::extract(store, Some(hand));
    let per_class = collect_candidate_pads(geom, target, &config.synth);
    if per_class.iter().any(|pads| pads.is_empty()) {
        debug!("target pitch class unreachable within search rows");
        return Vec::new();
    }

    let mut candidates = Vec::new();
    let mut combo: Vec<PadCandidate> = Vec::with_capacity(per_class.len());
    build_combinations(&per_class, 0, &mut combo, &mut |combo| {
        let positions = assign_fingers(combo, hand, stats.as_ref());
        let comfort = match &stats {
            Some(s) => shape_similarity(s, &positions, &config.weights),
            None => config.weights.neutral_comfort,
        };
        candidates.push(scorer::build_fingering_with_comfort(
            &config.weights,
            hand,
            positions,
            target,
            FingeringSource::Synthesized,
            comfort,
        ));
    });

    debug!(
        combinations = candidates.len(),
        notes = target.len(),
        "synthesized candidates"
    );

    scorer::rank(&mut candidates);
    candidates.truncate(config.synth.max_suggestions);
    candidates
}

/// Scan the comfortable-reach region for pads sounding each target
/// pitch class, capped per class to keep the Cartesian product small.
fn collect_candidate_pads(
    geom: &GridGeometry,
    target: PitchClassSet,
    params: &SynthParams,
) -> Vec<Vec<PadCandidate>> {
    let top_row = params.max_search_row.min(geom.rows() - 1);
    target
        .iter()
        .map(|pc| {
            let mut pads = Vec::new();
            'rows: for row in 0..=top_row {
                for col in 0..geom.row_length(row) {
                    if geom.pitch_class(row, col).map_or(false, |found| found == pc) {
                        pads.push(PadCandidate {
                            pos: GridPosition::new(row, col),
                            pitch_class: pc,
                        });
                        if pads.len() >= params.pads_per_pitch_class {
                            break 'rows;
                        }
                    }
                }
            }
            pads
        })
        .collect()
}

/// Backtracking Cartesian product: one pad per pitch class, no pad
/// used twice. Worst case pads_per_class^5 full shapes.
fn build_combinations(
    per_class: &[Vec<PadCandidate>],
    depth: usize,
    combo: &mut Vec<PadCandidate>,
    emit: &mut impl FnMut(&[PadCandidate]),
) {
    if depth == per_class.len() {
        emit(combo);
        return;
    }
    for pad in &per_class[depth] {
        if combo.iter().any(|c| c.pos == pad.pos) {
            continue;
        }
        combo.push(*pad);
        build_combinations(per_class, depth + 1, combo, emit);
        combo.pop();
    }
}

/// Thumb-low, pinky-high: sort by row ascending, then column
/// ascending for the right hand and descending for the left, and
/// assign fingers in that order. Learned per-pad preferences override
/// the sequential number when the preferred finger is still free.
fn assign_fingers(
    combo: &[PadCandidate],
    hand: Hand,
    stats: Option<&PatternStats>,
) -> Vec<CandidatePad> {
    let mut sorted = combo.to_vec();
    sorted.sort_by(|a, b| {
        a.pos
            .row
            .cmp(&b.pos.row)
            .then_with(|| match hand {
                Hand::Right => a.pos.col.cmp(&b.pos.col),
                Hand::Left => b.pos.col.cmp(&a.pos.col),
            })
    });

    let mut used = [false; 6]; // index 1..=5
    let mut out = Vec::with_capacity(sorted.len());
    for (i, pad) in sorted.iter().enumerate() {
        let preferred = stats
            .and_then(|s| s.preferred_finger(pad.pos.row, pad.pos.col))
            .filter(|&f| !used[f as usize]);
        let finger = preferred.unwrap_or_else(|| next_free_finger(&used, i as u8 + 1));
        used[finger as usize] = true;
        out.push(CandidatePad {
            row: pad.pos.row,
            col: pad.pos.col,
            finger,
            pitch_class: pad.pitch_class,
        });
    }
    out
}

fn next_free_finger(used: &[bool; 6], start: u8) -> u8 {
    for f in start..=5 {
        if !used[f as usize] {
            return f;
        }
    }
    for f in 1..=5 {
        if !used[f as usize] {
            return f;
        }
    }
    5
}

/// Comfort estimate from learned shapes: anchor-relative offsets of
/// the candidate compared against each captured shape with the same
/// note count. The closest shape lends its comfort rating, scaled by
/// how near the geometry sits; no shape in range falls back to the
/// neutral baseline.
fn shape_similarity(
    stats: &PatternStats,
    positions: &[CandidatePad],
    weights: &ScoringWeights,
) -> f32 {
    let anchor = match positions.iter().min_by_key(|p| p.finger) {
        Some(a) => a,
        None => return weights.neutral_comfort,
    };
    let mut offsets: Vec<(f32, f32)> = positions
        .iter()
        .filter(|p| p.finger != anchor.finger)
        .map(|p| ((p.row - anchor.row) as f32, (p.col - anchor.col) as f32))
        .collect();
    offsets.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut best: Option<f32> = None;
    for shape in &stats.chord_shapes {
        if shape.offsets.len() != offsets.len() {
            continue;
        }
        let mut shape_offs: Vec<(f32, f32)> = shape
            .offsets
            .iter()
            .map(|o| (o.row_offset as f32, o.col_offset as f32))
            .collect();
        shape_offs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let deviation = offsets
            .iter()
            .zip(&shape_offs)
            .map(|(a, b)| {
                let dr = a.0 - b.0;
                let dc = a.1 - b.1;
                (dr * dr + dc * dc).sqrt()
            })
            .sum::<f32>()
            / offsets.len().max(1) as f32;

        let proximity = 1.0 - deviation / weights.shape_match_radius;
        if proximity <= 0.0 {
            continue;
        }
        let similarity = shape.comfort * proximity;
        best = Some(best.map_or(similarity, |b: f32| b.max(similarity)));
    }

    best.unwrap_or(weights.neutral_comfort)
}

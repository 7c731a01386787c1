use crate::config::ScoringWeights;
use crate::handprint::{Hand, HandprintStore};
use crate::scorer::{self, CandidatePad, Fingering, FingeringSource};
use crate::theory::PitchClassSet;

/// Exact-match search: subsets of captured handprints whose pitch
/// classes reproduce the target set precisely: no extra, no missing
/// tones. Proper supersets and subsets are rejected, not scored lower.
///
/// An empty result is a valid outcome ("nothing captured plays this
/// chord"), not an error.
pub fn find_exact(
    store: &HandprintStore,
    target: PitchClassSet,
    hand: Option<Hand>,
    weights: &ScoringWeights,
) -> Vec<Fingering> {
    let mut out = Vec::new();
    if target.is_empty() {
        return out;
    }

    for hp in store.for_hand(hand) {
        let n = hp.positions.len();
        // At most C(5,3)+C(5,4)+C(5,5) = 16 qualifying subsets per
        // handprint; brute-force bitmask enumeration is plenty.
        for mask in 1u32..(1 << n) {
            let size = mask.count_ones() as usize;
            if !(3..=5).contains(&size) {
                continue;
            }

            let mut pcs = PitchClassSet::empty();
            for (i, p) in hp.positions.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    pcs.insert(p.pitch_class());
                }
            }
            if pcs != target {
                continue;
            }

            let positions: Vec<CandidatePad> = hp
                .positions
                .iter()
                .enumerate()
                .filter(|&(i, _)| mask & (1 << i) != 0)
                .map(|(_, p)| CandidatePad {
                    row: p.row,
                    col: p.col,
                    finger: p.finger,
                    pitch_class: p.pitch_class(),
                })
                .collect();

            out.push(scorer::build_fingering(
                weights,
                hp.hand,
                positions,
                target,
                FingeringSource::Captured {
                    comfort_rating: hp.comfort_rating,
                },
            ));
        }
    }
    out
}

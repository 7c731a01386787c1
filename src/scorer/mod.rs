pub mod ergonomics;
pub mod geometry;

use crate::config::ScoringWeights;
use crate::handprint::Hand;
use crate::theory::PitchClassSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidatePad {
    pub row: i8,
    pub col: i8,
    pub finger: u8,
    pub pitch_class: u8,
}

/// Where a candidate came from; captured fingerings carry their own
/// comfort rating through scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FingeringSource {
    Captured { comfort_rating: f32 },
    Synthesized,
}

/// One scored proposal mapping chord tones to pads and fingers.
/// Ephemeral ranking output; callers may persist it as a named
/// pattern if they wish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fingering {
    pub hand: Hand,
    pub positions: Vec<CandidatePad>,
    pub target: PitchClassSet,
    pub source: FingeringSource,
    pub comfort_score: u8,
    pub geometric_score: u8,
    pub ergonomic_score: u8,
    pub score: u8,
}

impl Fingering {
    pub fn finger_sum(&self) -> u32 {
        self.positions.iter().map(|p| p.finger as u32).sum()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreBreakdown {
    pub comfort: f32,
    pub geometry: f32,
    pub ergonomics: f32,
    pub total: f32,
}

/// Weighted blend of the three sub-scores. Each lands in [0, 100];
/// callers report them rounded to the nearest integer.
pub fn score(weights: &ScoringWeights, comfort: f32, positions: &[CandidatePad]) -> ScoreBreakdown {
    let comfort = comfort.clamp(0.0, 100.0);
    let geometry = geometry::geometric_score(weights, positions);
    let ergonomics = ergonomics::ergonomic_score(weights, positions);
    let total = weights.weight_comfort * comfort
        + weights.weight_geometry * geometry
        + weights.weight_ergonomics * ergonomics;
    ScoreBreakdown {
        comfort,
        geometry,
        ergonomics,
        total: total.clamp(0.0, 100.0),
    }
}

/// Assemble a scored candidate from positions + provenance.
pub fn build_fingering(
    weights: &ScoringWeights,
    hand: Hand,
    positions: Vec<CandidatePad>,
    target: PitchClassSet,
    source: FingeringSource,
) -> Fingering {
    let comfort = match source {
        FingeringSource::Captured { comfort_rating } => comfort_rating,
        FingeringSource::Synthesized => weights.neutral_comfort,
    };
    build_fingering_with_comfort(weights, hand, positions, target, source, comfort)
}

/// Same, with an explicit comfort input (shape similarity, etc.).
pub fn build_fingering_with_comfort(
    weights: &ScoringWeights,
    hand: Hand,
    positions: Vec<CandidatePad>,
    target: PitchClassSet,
    source: FingeringSource,
    comfort: f32,
) -> Fingering {
    let breakdown = score(weights, comfort, &positions);
    Fingering {
        hand,
        positions,
        target,
        source,
        comfort_score: round_score(breakdown.comfort),
        geometric_score: round_score(breakdown.geometry),
        ergonomic_score: round_score(breakdown.ergonomics),
        score: round_score(breakdown.total),
    }
}

fn round_score(v: f32) -> u8 {
    v.round().clamp(0.0, 100.0) as u8
}

/// Stable descending sort by total score. Equal totals order by lower
/// finger-number sum (thumb-side grips first); remaining ties keep
/// input order.
pub fn rank(candidates: &mut [Fingering]) {
    candidates.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.finger_sum().cmp(&b.finger_sum()))
    });
}

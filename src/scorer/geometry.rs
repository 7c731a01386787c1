use super::CandidatePad;
use crate::config::ScoringWeights;
use crate::geometry::raw_distance;

/// Maximum pairwise row/col distance among a fingering's pads.
pub fn span(positions: &[CandidatePad]) -> f32 {
    let mut max = 0.0f32;
    for (i, a) in positions.iter().enumerate() {
        for b in &positions[i + 1..] {
            max = max.max(raw_distance(a.row, a.col, b.row, b.col));
        }
    }
    max
}

pub fn row_span(positions: &[CandidatePad]) -> f32 {
    let min = positions.iter().map(|p| p.row).min().unwrap_or(0);
    let max = positions.iter().map(|p| p.row).max().unwrap_or(0);
    (max - min) as f32
}

/// Piecewise span score averaged with a row-compactness term.
///
/// Span <= easy is a full 100; easy..moderate decays to 85;
/// moderate..hard decays to 40; past hard it falls off linearly to
/// the floor. Compactness is 100 at row-span 0 and gone at
/// `max_row_span`.
pub fn geometric_score(weights: &ScoringWeights, positions: &[CandidatePad]) -> f32 {
    if positions.is_empty() {
        return 0.0;
    }

    let s = span(positions);
    let span_score = if s <= weights.span_easy {
        100.0
    } else if s <= weights.span_moderate {
        let t = (s - weights.span_easy) / (weights.span_moderate - weights.span_easy);
        100.0 - t * 15.0
    } else if s <= weights.span_hard {
        let t = (s - weights.span_moderate) / (weights.span_hard - weights.span_moderate);
        85.0 - t * 45.0
    } else {
        (40.0 - (s - weights.span_hard) * weights.span_falloff).max(0.0)
    };

    let rs = row_span(positions);
    let compactness = (100.0 * (1.0 - rs / weights.max_row_span)).max(0.0);

    (span_score + compactness) / 2.0
}

use super::CandidatePad;
use crate::config::ScoringWeights;

/// Anatomical plausibility of the finger combination. Starts at the
/// baseline, rewards consecutive runs and 3-5 finger grips, punishes
/// the thumb+pinky claw. Clamped to [0, 100].
pub fn ergonomic_score(weights: &ScoringWeights, positions: &[CandidatePad]) -> f32 {
    let mut fingers: Vec<u8> = positions.iter().map(|p| p.finger).collect();
    fingers.sort_unstable();
    fingers.dedup();

    let mut score = weights.ergo_baseline;

    let consecutive = fingers.len() > 1
        && (fingers[fingers.len() - 1] - fingers[0]) as usize == fingers.len() - 1;
    if consecutive {
        score += weights.bonus_consecutive;
    }

    match fingers.len() {
        3 | 4 => score += weights.bonus_three_four,
        5 => score += weights.bonus_five_fingers,
        _ => {}
    }

    let has_middle = fingers.iter().any(|&f| (2..=4).contains(&f));
    if fingers.contains(&1) && fingers.contains(&5) && !has_middle {
        score -= weights.penalty_thumb_pinky;
    }
    if fingers.len() == 2 && fingers[0] == 1 && fingers[1] == 5 {
        score -= weights.penalty_outer_pair;
    }

    score.clamp(0.0, 100.0)
}

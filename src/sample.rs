use crate::geometry::GridGeometry;
use crate::handprint::{Hand, Handprint, HandprintStore, PadPress};
use std::collections::BTreeMap;
use tracing::debug;

/// Generate a plausible synthetic handprint library: compact grips in
/// the lower rows, fingers walking outward from a random anchor.
/// Deterministic under a fixed seed; used by the `sample` subcommand,
/// the benches, and demo setups.
pub fn generate_store(
    geom: &GridGeometry,
    hand: Hand,
    count: usize,
    seed: Option<u64>,
) -> HandprintStore {
    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    let mut handprints = Vec::with_capacity(count);
    let mut attempts = 0usize;
    while handprints.len() < count && attempts < count * 50 {
        attempts += 1;
        if let Some(hp) = generate_handprint(geom, hand, &mut rng) {
            handprints.push(hp);
        }
    }
    debug!(
        generated = handprints.len(),
        attempts, "synthetic store ready"
    );
    HandprintStore { handprints }
}

fn generate_handprint(geom: &GridGeometry, hand: Hand, rng: &mut fastrand::Rng) -> Option<Handprint> {
    let n = rng.usize(3..=5);

    // Sorted random n-subset of fingers 1..=5.
    let mut pool = [1u8, 2, 3, 4, 5];
    rng.shuffle(&mut pool);
    let mut fingers = pool[..n].to_vec();
    fingers.sort_unstable();

    let mut row = rng.i8(0..3);
    let mut col = rng.i8(0..geom.row_length(row));

    let mut positions: Vec<PadPress> = Vec::with_capacity(n);
    for &finger in &fingers {
        if positions.iter().any(|p| p.row == row && p.col == col) {
            return None;
        }
        let pad_index = geom.pad_index(row, col).ok()?;
        let midi_note = geom.midi_note(row, col).ok()?;
        positions.push(PadPress {
            row,
            col,
            pad_index,
            midi_note,
            finger,
        });

        // Step outward for the next finger.
        col += rng.i8(1..=2);
        if rng.u8(0..3) == 0 {
            row += 1;
        }
        if row >= geom.rows() {
            return None;
        }
        if col >= geom.row_length(row) {
            col = geom.row_length(row) - 1;
        }
    }

    let mut hp = Handprint {
        hand,
        positions,
        comfort_rating: 40.0 + rng.f32() * 55.0,
        measurements: BTreeMap::new(),
    };
    hp.measurements = hp.computed_measurements();
    hp.validate().ok()?;
    Some(hp)
}

use crate::geometry::raw_distance;
use crate::handprint::{Hand, Handprint, HandprintStore};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairStats {
    pub avg: f32,
    pub std_dev: f32,
    pub samples: usize,
}

/// One finger of a shape, relative to the shape's anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeOffset {
    pub finger: u8,
    pub row_offset: i8,
    pub col_offset: i8,
    pub dist_from_anchor: f32,
}

/// A captured placement reduced to anchor-relative geometry, so the
/// same grip is recognizable anywhere on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordShape {
    pub fingers: Vec<u8>,
    pub offsets: Vec<ShapeOffset>,
    pub comfort: f32,
}

/// Aggregate statistics over a hand's captured history. Derived,
/// recomputed on demand from a store snapshot; never mutated in place.
#[derive(Debug, Clone)]
pub struct PatternStats {
    pub hand: Option<Hand>,
    pub handprint_count: usize,
    pub finger_distances: BTreeMap<String, PairStats>,
    pub avg_span: f32,
    pub span_std_dev: f32,
    pub chord_shapes: Vec<ChordShape>,
    /// Observation counts per finger (index = finger - 1) at each pad.
    pub finger_assignments: HashMap<(i8, i8), [u32; 5]>,
}

impl PatternStats {
    /// Most-observed finger for a pad, if any capture touched it.
    pub fn preferred_finger(&self, row: i8, col: i8) -> Option<u8> {
        let counts = self.finger_assignments.get(&(row, col))?;
        let (idx, &best) = counts
            .iter()
            .enumerate()
            .max_by_key(|&(_, &c)| c)?;
        if best == 0 {
            return None;
        }
        Some(idx as u8 + 1)
    }
}

/// Aggregate a store (optionally one hand) into pattern statistics.
/// `None` when the filtered set is empty; "no patterns" is a valid
/// state the synthesizer treats as anatomical-only assignment.
pub fn extract(store: &HandprintStore, hand: Option<Hand>) -> Option<PatternStats> {
    let prints: Vec<&Handprint> = store.for_hand(hand).collect();
    if prints.is_empty() {
        return None;
    }

    let mut pair_samples: BTreeMap<String, Vec<f32>> = BTreeMap::new();
    let mut spans = Vec::with_capacity(prints.len());
    let mut chord_shapes = Vec::with_capacity(prints.len());
    let mut finger_assignments: HashMap<(i8, i8), [u32; 5]> = HashMap::new();

    for hp in &prints {
        // Cached measurements win; recompute only when the capture
        // predates the measurement cache.
        if hp.measurements.is_empty() {
            for (key, d) in hp.computed_measurements() {
                pair_samples.entry(key).or_default().push(d);
            }
        } else {
            for (key, &d) in &hp.measurements {
                pair_samples.entry(key.clone()).or_default().push(d);
            }
        }

        spans.push(hp.span());
        chord_shapes.push(shape_of(hp));

        for p in &hp.positions {
            let counts = finger_assignments.entry((p.row, p.col)).or_insert([0; 5]);
            counts[(p.finger - 1) as usize] += 1;
        }
    }

    let finger_distances: BTreeMap<String, PairStats> = pair_samples
        .into_iter()
        .map(|(key, samples)| {
            (
                key,
                PairStats {
                    avg: mean(&samples),
                    std_dev: std_dev(&samples),
                    samples: samples.len(),
                },
            )
        })
        .collect();

    debug!(
        prints = prints.len(),
        pairs = finger_distances.len(),
        "extracted pattern statistics"
    );

    Some(PatternStats {
        hand,
        handprint_count: prints.len(),
        finger_distances,
        avg_span: mean(&spans),
        span_std_dev: std_dev(&spans),
        chord_shapes,
        finger_assignments,
    })
}

/// Anchor at the lowest finger number; remaining fingers become
/// relative offsets.
fn shape_of(hp: &Handprint) -> ChordShape {
    let anchor = match hp.positions.iter().min_by_key(|p| p.finger) {
        Some(a) => a,
        None => {
            return ChordShape {
                fingers: Vec::new(),
                offsets: Vec::new(),
                comfort: hp.comfort_rating,
            }
        }
    };

    let mut offsets: Vec<ShapeOffset> = hp
        .positions
        .iter()
        .filter(|p| p.finger != anchor.finger)
        .map(|p| ShapeOffset {
            finger: p.finger,
            row_offset: p.row - anchor.row,
            col_offset: p.col - anchor.col,
            dist_from_anchor: raw_distance(anchor.row, anchor.col, p.row, p.col),
        })
        .collect();
    offsets.sort_by_key(|o| o.finger);

    let mut fingers: Vec<u8> = hp.positions.iter().map(|p| p.finger).collect();
    fingers.sort_unstable();

    ChordShape {
        fingers,
        offsets,
        comfort: hp.comfort_rating,
    }
}

fn mean(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f32>() / samples.len() as f32
}

/// Population standard deviation.
fn std_dev(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let m = mean(samples);
    let var = samples.iter().map(|s| (s - m) * (s - m)).sum::<f32>() / samples.len() as f32;
    var.sqrt()
}

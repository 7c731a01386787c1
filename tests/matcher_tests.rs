use chordforge::config::ScoringWeights;
use chordforge::handprint::{Hand, Handprint, HandprintStore, PadPress};
use chordforge::matcher;
use chordforge::scorer::FingeringSource;
use chordforge::theory::parse_custom_pitch_classes;
use std::collections::BTreeMap;

fn press(row: i8, col: i8, midi: i32, finger: u8) -> PadPress {
    PadPress {
        row,
        col,
        pad_index: midi - 48,
        midi_note: midi,
        finger,
    }
}

fn print_with(hand: Hand, presses: Vec<PadPress>, comfort: f32) -> Handprint {
    let mut hp = Handprint {
        hand,
        positions: presses,
        comfort_rating: comfort,
        measurements: BTreeMap::new(),
    };
    hp.measurements = hp.computed_measurements();
    hp
}

/// C major triad on a hex chromatic grid at base 48:
/// C (0,0)=48, E (0,4)=52, G (1,1)=55.
fn c_major_print(comfort: f32) -> Handprint {
    print_with(
        Hand::Right,
        vec![press(0, 0, 48, 1), press(0, 4, 52, 2), press(1, 1, 55, 3)],
        comfort,
    )
}

#[test]
fn exact_triad_match_carries_the_captured_comfort() {
    let store = HandprintStore {
        handprints: vec![c_major_print(80.0)],
    };
    let target = parse_custom_pitch_classes("0,4,7");
    let weights = ScoringWeights::default();

    let found = matcher::find_exact(&store, target, None, &weights);
    assert_eq!(found.len(), 1);

    let f = &found[0];
    assert_eq!(f.comfort_score, 80);
    assert_eq!(f.hand, Hand::Right);
    assert!(matches!(
        f.source,
        FingeringSource::Captured { comfort_rating } if comfort_rating == 80.0
    ));

    // Geometry from the actual span: max pairwise distance is 4
    // ((0,0) to (0,4)), row span 1.
    assert_eq!(f.geometric_score, 71);
    assert_eq!(f.ergonomic_score, 100);
    assert_eq!(f.score, 83);

    let pcs: Vec<u8> = f.positions.iter().map(|p| p.pitch_class).collect();
    assert_eq!(pcs, vec![0, 4, 7]);
}

#[test]
fn supersets_and_subsets_of_the_target_are_rejected() {
    // C E G Bb: the full print is a superset of the triad, but its
    // C-E-G subset is an exact match.
    let hp = print_with(
        Hand::Right,
        vec![
            press(0, 0, 48, 1),
            press(0, 4, 52, 2),
            press(1, 1, 55, 3),
            press(1, 4, 58, 4),
        ],
        65.0,
    );
    let store = HandprintStore {
        handprints: vec![hp],
    };
    let weights = ScoringWeights::default();

    let triad = parse_custom_pitch_classes("0,4,7");
    let found = matcher::find_exact(&store, triad, None, &weights);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].positions.len(), 3);
    assert!(found[0].positions.iter().all(|p| p.pitch_class != 10));

    // The full seventh chord also matches, as itself.
    let seventh = parse_custom_pitch_classes("0,4,7,10");
    let found = matcher::find_exact(&store, seventh, None, &weights);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].positions.len(), 4);
}

#[test]
fn doubled_tones_yield_multiple_exact_subsets() {
    // C at two octaves plus E and G: three subsets collapse to {0,4,7}.
    let hp = print_with(
        Hand::Right,
        vec![
            press(0, 0, 48, 1),
            press(0, 4, 52, 2),
            press(1, 1, 55, 3),
            press(2, 1, 60, 4),
        ],
        70.0,
    );
    let store = HandprintStore {
        handprints: vec![hp],
    };
    let target = parse_custom_pitch_classes("0,4,7");
    let found = matcher::find_exact(&store, target, None, &ScoringWeights::default());
    assert_eq!(found.len(), 3);
    for f in &found {
        let set: chordforge::theory::PitchClassSet =
            f.positions.iter().map(|p| p.pitch_class as i32).collect();
        assert_eq!(set, target);
    }
}

#[test]
fn no_match_is_an_empty_result() {
    let store = HandprintStore {
        handprints: vec![c_major_print(80.0)],
    };
    let target = parse_custom_pitch_classes("1,2,3");
    let found = matcher::find_exact(&store, target, None, &ScoringWeights::default());
    assert!(found.is_empty());
}

#[test]
fn empty_store_and_empty_target_are_empty_results() {
    let weights = ScoringWeights::default();
    let target = parse_custom_pitch_classes("0,4,7");
    assert!(matcher::find_exact(&HandprintStore::new(), target, None, &weights).is_empty());

    let store = HandprintStore {
        handprints: vec![c_major_print(80.0)],
    };
    let empty = parse_custom_pitch_classes("");
    assert!(matcher::find_exact(&store, empty, None, &weights).is_empty());
}

#[test]
fn hand_filter_restricts_matches() {
    let store = HandprintStore {
        handprints: vec![c_major_print(80.0)],
    };
    let target = parse_custom_pitch_classes("0,4,7");
    let weights = ScoringWeights::default();
    assert!(matcher::find_exact(&store, target, Some(Hand::Left), &weights).is_empty());
    assert_eq!(
        matcher::find_exact(&store, target, Some(Hand::Right), &weights).len(),
        1
    );
}

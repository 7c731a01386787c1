use chordforge::error::ChordForgeError;
use chordforge::theory::{
    chord_pitch_classes, parse_chord_notation, parse_custom_pitch_classes, pitch_class_name,
    quality_intervals, PitchClassSet, ScaleKind,
};
use rstest::rstest;

#[test]
fn c_major_is_0_4_7() {
    let set = chord_pitch_classes(0, "maj").unwrap();
    assert_eq!(Vec::<u8>::from(set), vec![0, 4, 7]);
}

#[test]
fn cmaj7_notation_parses() {
    let p = parse_chord_notation("Cmaj7").unwrap();
    assert_eq!(p.root_pc, 0);
    assert_eq!(p.quality, "maj7");
}

#[rstest]
#[case("C#", "Db")]
#[case("D#", "Eb")]
#[case("F#", "Gb")]
#[case("G#", "Ab")]
#[case("A#", "Bb")]
fn enharmonic_spellings_share_a_root(#[case] sharp: &str, #[case] flat: &str) {
    let s = parse_chord_notation(sharp).unwrap();
    let f = parse_chord_notation(flat).unwrap();
    assert_eq!(s.root_pc, f.root_pc);
}

#[test]
fn bare_root_defaults_to_major_triad() {
    let p = parse_chord_notation("G").unwrap();
    assert_eq!(p.root_pc, 7);
    assert_eq!(p.quality, "maj");
}

#[test]
fn specific_alterations_win_over_plain_seventh() {
    assert_eq!(parse_chord_notation("C7b5#9").unwrap().quality, "7b5#9");
    assert_eq!(parse_chord_notation("C7b9").unwrap().quality, "7b9");
    assert_eq!(parse_chord_notation("C7").unwrap().quality, "7");
}

#[test]
fn exotic_alterations_match_or_return_none_never_panic() {
    // Prefix match picks up the known 13b9 head.
    let p = parse_chord_notation("E♭13b9#11").unwrap();
    assert_eq!(p.root_pc, 3);
    assert_eq!(p.quality, "13b9");
    // Complete garbage is a soft None.
    assert!(parse_chord_notation("Cxyz").is_none());
    assert!(parse_chord_notation("H7").is_none());
    assert!(parse_chord_notation("").is_none());
}

#[test]
fn minor_shorthand_variants() {
    assert_eq!(parse_chord_notation("Am").unwrap().quality, "min");
    assert_eq!(parse_chord_notation("A-").unwrap().quality, "min");
    assert_eq!(parse_chord_notation("Amin").unwrap().quality, "min");
    assert_eq!(parse_chord_notation("Am7").unwrap().quality, "m7");
    assert_eq!(parse_chord_notation("Am11").unwrap().quality, "m11");
}

#[test]
fn unknown_quality_key_is_loud() {
    match quality_intervals("superchord") {
        Err(ChordForgeError::UnknownQuality(k)) => assert_eq!(k, "superchord"),
        other => panic!("expected UnknownQuality, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn rootless_voicings_omit_the_root() {
    let set = chord_pitch_classes(0, "9_rootless").unwrap();
    assert!(!set.contains(0));
    assert!(set.contains(4));
    assert!(set.contains(2)); // the 9th, an octave down
}

#[test]
fn custom_pitch_classes_normalize_mod_12() {
    let set = parse_custom_pitch_classes("12, 13, -1");
    assert_eq!(Vec::<u8>::from(set), vec![0, 1, 11]);
}

#[test]
fn custom_pitch_classes_drop_malformed_tokens_silently() {
    let set = parse_custom_pitch_classes("0, banana, 4,, 7 ");
    assert_eq!(Vec::<u8>::from(set), vec![0, 4, 7]);
}

#[test]
fn pitch_class_set_deduplicates() {
    let set = parse_custom_pitch_classes("0, 12, 24");
    assert_eq!(set.len(), 1);
}

#[test]
fn transposed_chord_wraps_the_octave() {
    // A major: A C# E.
    let set = chord_pitch_classes(9, "maj").unwrap();
    assert_eq!(Vec::<u8>::from(set), vec![1, 4, 9]);
}

#[test]
fn scale_tables_are_well_formed() {
    use strum::IntoEnumIterator;
    for scale in ScaleKind::iter() {
        let set = scale.pitch_classes(0);
        assert_eq!(set.len(), scale.intervals().len());
        assert!(set.contains(0), "{} should contain its root", scale);
    }
    assert_eq!(ScaleKind::Chromatic.pitch_classes(5).len(), 12);
}

#[test]
fn pitch_class_names() {
    assert_eq!(pitch_class_name(0), "C");
    assert_eq!(pitch_class_name(10), "A#");
    let set = chord_pitch_classes(0, "maj").unwrap();
    assert_eq!(set.to_string(), "{C E G}");
}

#[test]
fn set_serializes_as_sorted_classes() {
    let set: PitchClassSet = parse_custom_pitch_classes("7,0,4");
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[0,4,7]");
    let back: PitchClassSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}

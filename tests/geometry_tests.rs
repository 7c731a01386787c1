use chordforge::geometry::{GridGeometry, GridKind, GridPosition, LayoutMode};
use rstest::rstest;

fn hex(mode: LayoutMode) -> GridGeometry {
    GridGeometry::new(GridKind::Hex, mode, 48)
}

fn square() -> GridGeometry {
    GridGeometry::new(GridKind::Square, LayoutMode::Chromatic, 36)
}

#[test]
fn hex_chromatic_round_trips_every_pad() {
    let g = hex(LayoutMode::Chromatic);
    for row in 0..g.rows() {
        for col in 0..g.row_length(row) {
            let idx = g.pad_index(row, col).unwrap();
            let pos = g.row_col(idx).unwrap();
            assert_eq!(pos, GridPosition::new(row, col), "pad index {}", idx);
        }
    }
}

#[test]
fn square_round_trips_every_pad() {
    let g = square();
    for row in 0..g.rows() {
        for col in 0..g.row_length(row) {
            let idx = g.pad_index(row, col).unwrap();
            assert_eq!(g.row_col(idx).unwrap(), GridPosition::new(row, col));
        }
    }
}

/// Intervals-mode indices overlap between rows, so reverse lookup may
/// land on a lower row, but the result must map back to the same
/// index.
#[test]
fn hex_intervals_reverse_is_self_consistent() {
    let g = hex(LayoutMode::Intervals);
    for row in 0..g.rows() {
        for col in 0..g.row_length(row) {
            let idx = g.pad_index(row, col).unwrap();
            let pos = g.row_col(idx).unwrap();
            assert_eq!(g.pad_index(pos.row, pos.col).unwrap(), idx);
        }
    }
}

#[test]
fn hex_chromatic_midi_notes() {
    let g = hex(LayoutMode::Chromatic);
    assert_eq!(g.midi_note(0, 0).unwrap(), 48);
    // Row 1 starts at pad index 6.
    assert_eq!(g.midi_note(1, 0).unwrap(), 54);
    assert_eq!(g.midi_note(0, 5).unwrap(), 53);
}

#[test]
fn hex_intervals_rows_stack_in_thirds() {
    let g = hex(LayoutMode::Intervals);
    // Major third up to row 1, minor third on top of that to row 2.
    assert_eq!(g.midi_note(1, 0).unwrap(), 52);
    assert_eq!(g.midi_note(2, 0).unwrap(), 55);
}

#[test]
fn square_is_tuned_in_fourths() {
    let g = square();
    assert_eq!(g.midi_note(0, 0).unwrap(), 36);
    assert_eq!(g.midi_note(1, 0).unwrap(), 41);
    assert_eq!(g.midi_note(2, 3).unwrap(), 49);
}

#[rstest]
#[case(0, 6)] // even hex rows have 6 pads
#[case(1, 5)] // odd rows have 5
#[case(10, 6)]
fn hex_row_lengths(#[case] row: i8, #[case] len: i8) {
    assert_eq!(hex(LayoutMode::Chromatic).row_length(row), len);
}

#[rstest]
#[case(0, 6)]
#[case(1, -1)]
#[case(-1, 0)]
#[case(11, 0)]
fn hex_out_of_range_positions_fail(#[case] row: i8, #[case] col: i8) {
    assert!(hex(LayoutMode::Chromatic).pad_index(row, col).is_err());
}

#[test]
fn bad_pad_index_fails() {
    assert!(hex(LayoutMode::Chromatic).row_col(61).is_err());
    assert!(hex(LayoutMode::Chromatic).row_col(-1).is_err());
    assert!(square().row_col(64).is_err());
}

#[test]
fn square_distance_is_manhattan() {
    let g = square();
    let d = g.grid_distance(GridPosition::new(0, 0), GridPosition::new(2, 3));
    assert_eq!(d, 5.0);
}

#[test]
fn hex_distance_approximates_pad_hops() {
    let g = hex(LayoutMode::Chromatic);
    // Same-row neighbors are exactly one pad width apart.
    let d = g.grid_distance(GridPosition::new(0, 0), GridPosition::new(0, 1));
    assert!((d - 1.0).abs() < 1e-6);
    // Diagonal neighbors are roughly one hop.
    let d = g.grid_distance(GridPosition::new(0, 1), GridPosition::new(1, 0));
    assert!(d > 0.9 && d < 1.1, "diagonal hop was {}", d);
}

#[test]
fn hex_interior_pad_has_six_neighbors() {
    let g = hex(LayoutMode::Chromatic);
    assert_eq!(g.neighbors(2, 2).len(), 6);
    // Grid corner loses most of them.
    assert_eq!(g.neighbors(0, 0).len(), 2);
}

#[test]
fn square_interior_pad_has_four_neighbors() {
    let g = square();
    assert_eq!(g.neighbors(3, 3).len(), 4);
    assert_eq!(g.neighbors(0, 0).len(), 2);
}

#[test]
fn neighbors_stay_in_bounds() {
    for mode in [LayoutMode::Chromatic, LayoutMode::Intervals] {
        let g = hex(mode);
        for row in 0..g.rows() {
            for col in 0..g.row_length(row) {
                for n in g.neighbors(row, col) {
                    assert!(g.pad_index(n.row, n.col).is_ok());
                }
            }
        }
    }
}

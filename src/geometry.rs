use crate::error::{CfResult, ChordForgeError};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Hex "thirds" boards: 11 rows alternating 6/5 pads (61 total).
pub const HEX_ROWS: i8 = 11;
/// Square "fourths" boards: 8x8 pad matrix.
pub const SQUARE_ROWS: i8 = 8;
pub const SQUARE_COLS: i8 = 8;

// Rendered hex pad metrics. Odd rows sit half a pad to the right;
// vertical pitch is the flat-to-flat height of a hex cell.
const HEX_PAD_WIDTH: f32 = 60.0;
const HEX_ROW_PITCH: f32 = 52.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GridKind {
    Hex,
    Square,
}

/// Pad-index numbering for hex boards.
///
/// `Chromatic` row starts advance by the physical row length, so the
/// index is bijective with (row, col). `Intervals` row starts advance
/// by alternating major/minor thirds (+4/+3), so index ranges of
/// neighboring rows overlap and reverse lookup is ambiguous: we scan
/// rows from 0 upward and take the first hit. The overlap is intrinsic
/// to laying a thirds tuning onto a fixed pad count; downstream
/// highlighting relies on the scan-ascending rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    Chromatic,
    Intervals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: i8,
    pub col: i8,
}

impl GridPosition {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
}

/// Coordinate math for one device. Immutable; callers wanting another
/// board or numbering construct a new context instead of mutating a
/// shared one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    pub kind: GridKind,
    pub mode: LayoutMode,
    pub base_midi: i32,
}

impl GridGeometry {
    pub fn new(kind: GridKind, mode: LayoutMode, base_midi: i32) -> Self {
        Self {
            kind,
            mode,
            base_midi,
        }
    }

    pub fn rows(&self) -> i8 {
        match self.kind {
            GridKind::Hex => HEX_ROWS,
            GridKind::Square => SQUARE_ROWS,
        }
    }

    pub fn row_length(&self, row: i8) -> i8 {
        match self.kind {
            GridKind::Hex => {
                if row % 2 == 0 {
                    6
                } else {
                    5
                }
            }
            GridKind::Square => SQUARE_COLS,
        }
    }

    fn check_bounds(&self, row: i8, col: i8) -> CfResult<()> {
        if row < 0 || row >= self.rows() || col < 0 || col >= self.row_length(row) {
            return Err(ChordForgeError::OutOfRange(format!(
                "pad ({}, {}) outside {} grid",
                row, col, self.kind
            )));
        }
        Ok(())
    }

    /// First pad index of a hex row under the active numbering.
    fn hex_row_start(&self, row: i8) -> i32 {
        let r = row as i32;
        match self.mode {
            // Cumulative row lengths: +6, +5, +6, ...
            LayoutMode::Chromatic => r / 2 * 11 + r % 2 * 6,
            // Alternating thirds: +4, +3, +4, ... (a fifth per row pair)
            LayoutMode::Intervals => r / 2 * 7 + r % 2 * 4,
        }
    }

    pub fn pad_index(&self, row: i8, col: i8) -> CfResult<i32> {
        self.check_bounds(row, col)?;
        match self.kind {
            GridKind::Hex => Ok(self.hex_row_start(row) + col as i32),
            GridKind::Square => Ok(row as i32 * SQUARE_COLS as i32 + col as i32),
        }
    }

    /// Reverse lookup. Square and hex-chromatic round-trip exactly; in
    /// hex-intervals mode overlapping rows resolve to the lowest row
    /// whose column range contains the index (see `LayoutMode`).
    pub fn row_col(&self, pad_index: i32) -> CfResult<GridPosition> {
        match self.kind {
            GridKind::Hex => {
                for row in 0..HEX_ROWS {
                    let offset = pad_index - self.hex_row_start(row);
                    if offset >= 0 && offset < self.row_length(row) as i32 {
                        return Ok(GridPosition::new(row, offset as i8));
                    }
                }
                Err(ChordForgeError::OutOfRange(format!(
                    "pad index {} outside hex {} numbering",
                    pad_index, self.mode
                )))
            }
            GridKind::Square => {
                let row = pad_index / SQUARE_COLS as i32;
                let col = pad_index % SQUARE_COLS as i32;
                if pad_index < 0 || row >= SQUARE_ROWS as i32 {
                    return Err(ChordForgeError::OutOfRange(format!(
                        "pad index {} outside square grid",
                        pad_index
                    )));
                }
                Ok(GridPosition::new(row as i8, col as i8))
            }
        }
    }

    pub fn midi_note(&self, row: i8, col: i8) -> CfResult<i32> {
        match self.kind {
            GridKind::Hex => Ok(self.base_midi + self.pad_index(row, col)?),
            GridKind::Square => {
                self.check_bounds(row, col)?;
                // Fourths tuning: each row a perfect fourth up.
                Ok(self.base_midi + row as i32 * 5 + col as i32)
            }
        }
    }

    pub fn pitch_class(&self, row: i8, col: i8) -> CfResult<u8> {
        Ok(self.midi_note(row, col)?.rem_euclid(12) as u8)
    }

    /// Pad-to-pad distance in "pad widths".
    ///
    /// Hex: Euclidean distance between rendered pad centers divided by
    /// the nominal pad width. This is an approximation of hop count,
    /// not true hex-cell distance; the span thresholds in the scorer
    /// are calibrated against it. Square: Manhattan.
    pub fn grid_distance(&self, a: GridPosition, b: GridPosition) -> f32 {
        match self.kind {
            GridKind::Hex => {
                let dx = (hex_center_x(b) - hex_center_x(a)) * HEX_PAD_WIDTH;
                let dy = (b.row - a.row) as f32 * HEX_ROW_PITCH;
                (dx * dx + dy * dy).sqrt() / HEX_PAD_WIDTH
            }
            GridKind::Square => ((b.row - a.row).abs() + (b.col - a.col).abs()) as f32,
        }
    }

    /// Adjacent pads, filtered to grid bounds. Hex yields up to 6
    /// (offsets depend on row parity), square up to 4.
    pub fn neighbors(&self, row: i8, col: i8) -> Vec<GridPosition> {
        let candidates: Vec<(i8, i8)> = match self.kind {
            GridKind::Hex => {
                // Odd rows are shifted half a pad right, so the two
                // diagonal neighbors swap sides with parity.
                let diag = if row % 2 == 0 {
                    [(col - 1), col]
                } else {
                    [col, (col + 1)]
                };
                vec![
                    (row, col - 1),
                    (row, col + 1),
                    (row - 1, diag[0]),
                    (row - 1, diag[1]),
                    (row + 1, diag[0]),
                    (row + 1, diag[1]),
                ]
            }
            GridKind::Square => vec![
                (row - 1, col),
                (row + 1, col),
                (row, col - 1),
                (row, col + 1),
            ],
        };

        candidates
            .into_iter()
            .filter(|&(r, c)| r >= 0 && r < self.rows() && c >= 0 && c < self.row_length(r))
            .map(|(r, c)| GridPosition::new(r, c))
            .collect()
    }
}

fn hex_center_x(p: GridPosition) -> f32 {
    let stagger = if p.row % 2 == 0 { 0.0 } else { 0.5 };
    p.col as f32 + stagger
}

/// Euclidean distance in raw row/col space, shared by span and
/// measurement math. Deliberately independent of `grid_distance` so
/// handprint statistics stay comparable across devices.
pub fn raw_distance(ar: i8, ac: i8, br: i8, bc: i8) -> f32 {
    let dr = (br - ar) as f32;
    let dc = (bc - ac) as f32;
    (dr * dr + dc * dc).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_row_starts_chromatic() {
        let g = GridGeometry::new(GridKind::Hex, LayoutMode::Chromatic, 48);
        assert_eq!(g.pad_index(0, 0).unwrap(), 0);
        assert_eq!(g.pad_index(1, 0).unwrap(), 6);
        assert_eq!(g.pad_index(2, 0).unwrap(), 11);
        assert_eq!(g.pad_index(10, 5).unwrap(), 60);
    }

    #[test]
    fn hex_row_starts_intervals() {
        let g = GridGeometry::new(GridKind::Hex, LayoutMode::Intervals, 48);
        assert_eq!(g.pad_index(0, 0).unwrap(), 0);
        assert_eq!(g.pad_index(1, 0).unwrap(), 4);
        assert_eq!(g.pad_index(2, 0).unwrap(), 7);
        assert_eq!(g.pad_index(3, 0).unwrap(), 11);
    }

    #[test]
    fn out_of_range_col() {
        let g = GridGeometry::new(GridKind::Hex, LayoutMode::Chromatic, 48);
        assert!(g.pad_index(1, 5).is_err()); // odd rows have 5 pads
        assert!(g.pad_index(0, 6).is_err());
        assert!(g.pad_index(11, 0).is_err());
    }

    #[test]
    fn intervals_reverse_takes_lowest_row() {
        let g = GridGeometry::new(GridKind::Hex, LayoutMode::Intervals, 48);
        // Index 4 is row 0 col 4 and row 1 col 0; scan resolves to row 0.
        let p = g.row_col(4).unwrap();
        assert_eq!(p, GridPosition::new(0, 4));
    }
}

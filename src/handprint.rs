use crate::error::{CfResult, ChordForgeError};
use crate::geometry::raw_distance;
use crate::theory::PitchClassSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};
use tracing::info;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    Left,
    Right,
}

/// One finger on one pad, as captured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PadPress {
    pub row: i8,
    pub col: i8,
    pub pad_index: i32,
    pub midi_note: i32,
    /// 1 = thumb .. 5 = pinky.
    pub finger: u8,
}

impl PadPress {
    pub fn pitch_class(&self) -> u8 {
        self.midi_note.rem_euclid(12) as u8
    }
}

/// A captured 3-5 finger placement with a comfort rating. Created
/// atomically at the end of a capture session and immutable after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Handprint {
    pub hand: Hand,
    /// Capture order; finger numbers strictly increasing.
    pub positions: Vec<PadPress>,
    /// 0 (unplayable) .. 100 (effortless).
    pub comfort_rating: f32,
    /// Pair key ("1-3") to Euclidean row/col distance, cached at
    /// capture time. Recomputable from positions when absent.
    #[serde(default)]
    pub measurements: BTreeMap<String, f32>,
}

impl Handprint {
    /// Unordered pair key, lowest finger first.
    pub fn pair_key(a: u8, b: u8) -> String {
        if a <= b {
            format!("{}-{}", a, b)
        } else {
            format!("{}-{}", b, a)
        }
    }

    pub fn computed_measurements(&self) -> BTreeMap<String, f32> {
        let mut out = BTreeMap::new();
        for (i, a) in self.positions.iter().enumerate() {
            for b in &self.positions[i + 1..] {
                out.insert(
                    Self::pair_key(a.finger, b.finger),
                    raw_distance(a.row, a.col, b.row, b.col),
                );
            }
        }
        out
    }

    /// Maximum pairwise row/col distance among the positions.
    pub fn span(&self) -> f32 {
        let mut max = 0.0f32;
        for (i, a) in self.positions.iter().enumerate() {
            for b in &self.positions[i + 1..] {
                max = max.max(raw_distance(a.row, a.col, b.row, b.col));
            }
        }
        max
    }

    pub fn pitch_classes(&self) -> PitchClassSet {
        self.positions
            .iter()
            .map(|p| p.midi_note.rem_euclid(12))
            .collect()
    }

    pub fn validate(&self) -> CfResult<()> {
        if self.positions.len() < 3 || self.positions.len() > 5 {
            return Err(ChordForgeError::Validation(format!(
                "handprint has {} positions, expected 3-5",
                self.positions.len()
            )));
        }
        if !(0.0..=100.0).contains(&self.comfort_rating) {
            return Err(ChordForgeError::Validation(format!(
                "comfort rating {} outside [0, 100]",
                self.comfort_rating
            )));
        }
        let mut last = 0u8;
        for p in &self.positions {
            if p.finger < 1 || p.finger > 5 {
                return Err(ChordForgeError::Validation(format!(
                    "finger {} outside 1-5",
                    p.finger
                )));
            }
            if p.finger <= last {
                return Err(ChordForgeError::Validation(
                    "finger numbers must be strictly increasing in capture order".into(),
                ));
            }
            last = p.finger;
        }
        Ok(())
    }
}

/// The caller-owned library of captured handprints. Read-only to the
/// engine: every computation takes a snapshot reference and leaves it
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HandprintStore {
    pub handprints: Vec<Handprint>,
}

impl HandprintStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.handprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handprints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Handprint> {
        self.handprints.iter()
    }

    pub fn for_hand(&self, hand: Option<Hand>) -> impl Iterator<Item = &Handprint> {
        self.handprints
            .iter()
            .filter(move |hp| hand.is_none() || hand == Some(hp.hand))
    }

    pub fn from_json_str(json: &str) -> CfResult<Self> {
        let store: Self = serde_json::from_str(json)?;
        for hp in &store.handprints {
            hp.validate()?;
        }
        Ok(store)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(&path)?;
        let store = Self::from_json_str(&content)?;
        info!(
            count = store.len(),
            path = %path.as_ref().display(),
            "loaded handprint store"
        );
        Ok(store)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> CfResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

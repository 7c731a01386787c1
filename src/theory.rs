use crate::error::{CfResult, ChordForgeError};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// A set of pitch classes (note identities mod 12) as a 12-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", from = "Vec<u8>")]
pub struct PitchClassSet(u16);

impl PitchClassSet {
    pub fn empty() -> Self {
        Self(0)
    }

    /// `{(root + i) mod 12 : i in intervals}`. Intervals may exceed an
    /// octave (9ths, 13ths) or be negative; everything normalizes into
    /// [0, 12).
    pub fn from_intervals(root: i32, intervals: &[i32]) -> Self {
        let mut set = Self::empty();
        for &i in intervals {
            set.insert((root + i).rem_euclid(12) as u8);
        }
        set
    }

    pub fn insert(&mut self, pc: u8) {
        debug_assert!(pc < 12);
        self.0 |= 1 << pc;
    }

    pub fn contains(&self, pc: u8) -> bool {
        pc < 12 && self.0 & (1 << pc) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..12u8).filter(|&pc| self.contains(pc))
    }
}

impl FromIterator<i32> for PitchClassSet {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        let mut set = Self::empty();
        for n in iter {
            set.insert(n.rem_euclid(12) as u8);
        }
        set
    }
}

impl From<PitchClassSet> for Vec<u8> {
    fn from(set: PitchClassSet) -> Self {
        set.iter().collect()
    }
}

impl From<Vec<u8>> for PitchClassSet {
    fn from(v: Vec<u8>) -> Self {
        let mut set = Self::empty();
        for pc in v {
            set.insert(pc % 12);
        }
        set
    }
}

impl std::fmt::Display for PitchClassSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.iter().map(pitch_class_name).collect();
        write!(f, "{{{}}}", names.join(" "))
    }
}

pub fn pitch_class_name(pc: u8) -> &'static str {
    const NAMES: [&str; 12] = [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ];
    NAMES[(pc % 12) as usize]
}

/// Parse a comma-separated pitch-class list ("0, 4, 7" or "-5,16").
/// Malformed tokens are dropped silently; garbage text is routine
/// user input here, not an error.
pub fn parse_custom_pitch_classes(text: &str) -> PitchClassSet {
    text.split(',')
        .filter_map(|t| t.trim().parse::<i32>().ok())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedChord {
    pub root_pc: u8,
    pub quality: &'static str,
}

// Two-character roots must win over their one-character prefixes.
const ROOTS_2: [(&str, u8); 14] = [
    ("C#", 1),
    ("Db", 1),
    ("D#", 3),
    ("Eb", 3),
    ("E#", 5),
    ("Fb", 4),
    ("F#", 6),
    ("Gb", 6),
    ("G#", 8),
    ("Ab", 8),
    ("A#", 10),
    ("Bb", 10),
    ("B#", 0),
    ("Cb", 11),
];

const ROOTS_1: [(&str, u8); 7] = [
    ("C", 0),
    ("D", 2),
    ("E", 4),
    ("F", 5),
    ("G", 7),
    ("A", 9),
    ("B", 11),
];

/// Quality patterns in match order. Prefix matching makes the order
/// load-bearing: "7b5#9" must be tested before "7b5" and "7", or the
/// shorter pattern swallows the alteration.
const QUALITY_PATTERNS: [(&str, &str); 36] = [
    ("7b5#9", "7b5#9"),
    ("minmaj7", "m_maj7"),
    ("mmaj7", "m_maj7"),
    ("maj13", "maj13"),
    ("13b9", "13b9"),
    ("maj9", "maj9"),
    ("maj7", "maj7"),
    ("add9", "add9"),
    ("m7b5", "m7b5"),
    ("dim7", "dim7"),
    ("aug7", "aug7"),
    ("7#11", "7#11"),
    ("sus2", "sus2"),
    ("sus4", "sus4"),
    ("6/9", "6_9"),
    ("m11", "m11"),
    ("mM7", "m_maj7"),
    ("7b9", "7b9"),
    ("7#9", "7#9"),
    ("7b5", "7b5"),
    ("7#5", "7#5"),
    ("dim", "dim"),
    ("aug", "aug"),
    ("maj", "maj"),
    ("min", "min"),
    ("m9", "m9"),
    ("m7", "m7"),
    ("m6", "m6"),
    ("13", "13"),
    ("11", "11"),
    ("9", "9"),
    ("7", "7"),
    ("6", "6"),
    ("m", "min"),
    ("-", "min"),
    ("M", "maj"),
];

/// Parse chord notation ("Cmaj7", "Ebm7b5", "F#13b9"). Unparseable
/// text yields `None`, never an error: the caller decides the
/// fallback. A bare root is a major triad.
pub fn parse_chord_notation(text: &str) -> Option<ParsedChord> {
    let text = text.trim();

    let (root_pc, rest) = parse_root(text)?;
    if rest.is_empty() {
        return Some(ParsedChord {
            root_pc,
            quality: "maj",
        });
    }

    for (pattern, quality) in QUALITY_PATTERNS {
        if rest.starts_with(pattern) {
            return Some(ParsedChord { root_pc, quality });
        }
    }
    None
}

fn parse_root(text: &str) -> Option<(u8, &str)> {
    // Unicode accidentals normalize to their ASCII spellings.
    let normalized: Option<(u8, usize)> = if text.len() >= 2 {
        let head: String = text.chars().take(2).collect();
        let ascii = head.replace('♭', "b").replace('♯', "#");
        ROOTS_2
            .iter()
            .find(|(s, _)| *s == ascii)
            .map(|&(_, pc)| (pc, head.len()))
    } else {
        None
    };
    if let Some((pc, consumed)) = normalized {
        return Some((pc, &text[consumed..]));
    }

    let first = text.get(0..1)?;
    ROOTS_1
        .iter()
        .find(|(s, _)| *s == first)
        .map(|&(_, pc)| (pc, &text[1..]))
}

/// Semitone intervals for a chord quality key. Unknown keys are a
/// caller contract violation and fail loud.
pub fn quality_intervals(quality: &str) -> CfResult<&'static [i32]> {
    let table: &'static [i32] = match quality {
        // Triads
        "maj" => &[0, 4, 7],
        "min" => &[0, 3, 7],
        "dim" => &[0, 3, 6],
        "aug" => &[0, 4, 8],
        "sus2" => &[0, 2, 7],
        "sus4" => &[0, 5, 7],
        // Sixths
        "6" => &[0, 4, 7, 9],
        "m6" => &[0, 3, 7, 9],
        "6_9" => &[0, 4, 7, 9, 14],
        // Sevenths
        "7" => &[0, 4, 7, 10],
        "maj7" => &[0, 4, 7, 11],
        "m7" => &[0, 3, 7, 10],
        "m_maj7" => &[0, 3, 7, 11],
        "dim7" => &[0, 3, 6, 9],
        "m7b5" => &[0, 3, 6, 10],
        "aug7" => &[0, 4, 8, 10],
        // Extensions
        "9" => &[0, 4, 7, 10, 14],
        "maj9" => &[0, 4, 7, 11, 14],
        "m9" => &[0, 3, 7, 10, 14],
        "add9" => &[0, 4, 7, 14],
        "11" => &[0, 7, 10, 14, 17],
        "m11" => &[0, 3, 10, 14, 17],
        "13" => &[0, 4, 10, 14, 21],
        "maj13" => &[0, 4, 11, 14, 21],
        // Altered dominants
        "7b5" => &[0, 4, 6, 10],
        "7#5" => &[0, 4, 8, 10],
        "7b9" => &[0, 4, 7, 10, 13],
        "7#9" => &[0, 4, 7, 10, 15],
        "7#11" => &[0, 4, 7, 10, 18],
        "7b5#9" => &[0, 4, 6, 10, 15],
        "13b9" => &[0, 4, 10, 13, 21],
        // Stacked fourths / fifths
        "quartal" => &[0, 5, 10],
        "quintal" => &[0, 7, 14],
        // Rootless jazz voicings (left-hand shells)
        "9_rootless" => &[4, 7, 10, 14],
        "maj9_rootless" => &[4, 7, 11, 14],
        "m9_rootless" => &[3, 7, 10, 14],
        "13_rootless" => &[4, 10, 14, 21],
        _ => {
            return Err(ChordForgeError::UnknownQuality(quality.to_string()));
        }
    };
    Ok(table)
}

/// Chord quality + root to pitch classes.
pub fn chord_pitch_classes(root_pc: u8, quality: &str) -> CfResult<PitchClassSet> {
    Ok(PitchClassSet::from_intervals(
        root_pc as i32,
        quality_intervals(quality)?,
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ScaleKind {
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
    MajorPentatonic,
    MinorPentatonic,
    Blues,
    WholeTone,
    Chromatic,
}

impl ScaleKind {
    pub fn intervals(&self) -> &'static [i32] {
        match self {
            Self::Major => &[0, 2, 4, 5, 7, 9, 11],
            Self::NaturalMinor => &[0, 2, 3, 5, 7, 8, 10],
            Self::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            Self::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
            Self::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            Self::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            Self::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            Self::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            Self::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            Self::MajorPentatonic => &[0, 2, 4, 7, 9],
            Self::MinorPentatonic => &[0, 3, 5, 7, 10],
            Self::Blues => &[0, 3, 5, 6, 7, 10],
            Self::WholeTone => &[0, 2, 4, 6, 8, 10],
            Self::Chromatic => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        }
    }

    pub fn pitch_classes(&self, root_pc: u8) -> PitchClassSet {
        PitchClassSet::from_intervals(root_pc as i32, self.intervals())
    }
}

use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub synth: SynthParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
}

#[derive(Args, Debug, Clone)]
pub struct SynthParams {
    /// Highest row considered comfortable reach during pad search.
    #[arg(long, default_value_t = 5)]
    pub max_search_row: i8,

    /// Pads kept per target pitch class. Bounds the combination
    /// count at pads^k for a k-note chord.
    #[arg(long, default_value_t = 3)]
    pub pads_per_pitch_class: usize,

    #[arg(long, default_value_t = 8)]
    pub max_suggestions: usize,
}

#[derive(Args, Debug, Clone)]
pub struct ScoringWeights {
    // === BLEND ===
    #[arg(long, default_value_t = 0.4)]
    pub weight_comfort: f32,
    #[arg(long, default_value_t = 0.3)]
    pub weight_geometry: f32,
    #[arg(long, default_value_t = 0.3)]
    pub weight_ergonomics: f32,

    /// Comfort baseline when a candidate traces to no capture.
    #[arg(long, default_value_t = 50.0)]
    pub neutral_comfort: f32,

    // === GEOMETRY (span breakpoints in grid units) ===
    #[arg(long, default_value_t = 3.0)]
    pub span_easy: f32,
    #[arg(long, default_value_t = 5.0)]
    pub span_moderate: f32,
    #[arg(long, default_value_t = 7.0)]
    pub span_hard: f32,
    /// Score lost per grid unit past the hard span.
    #[arg(long, default_value_t = 10.0)]
    pub span_falloff: f32,
    /// Row span at which the compactness term bottoms out.
    #[arg(long, default_value_t = 2.0)]
    pub max_row_span: f32,

    // === ERGONOMICS ===
    #[arg(long, default_value_t = 50.0)]
    pub ergo_baseline: f32,
    #[arg(long, default_value_t = 30.0)]
    pub bonus_consecutive: f32,
    #[arg(long, default_value_t = 20.0)]
    pub bonus_three_four: f32,
    #[arg(long, default_value_t = 10.0)]
    pub bonus_five_fingers: f32,
    /// Thumb + pinky with nothing in between.
    #[arg(long, default_value_t = 30.0)]
    pub penalty_thumb_pinky: f32,
    /// Exactly two fingers and they are 1 and 5.
    #[arg(long, default_value_t = 20.0)]
    pub penalty_outer_pair: f32,

    // === SHAPE SIMILARITY ===
    /// Offset deviation (grid units) at which a learned shape stops
    /// counting as a match.
    #[arg(long, default_value_t = 3.0)]
    pub shape_match_radius: f32,
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            max_search_row: 5,
            pads_per_pitch_class: 3,
            max_suggestions: 8,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            weight_comfort: 0.4,
            weight_geometry: 0.3,
            weight_ergonomics: 0.3,
            neutral_comfort: 50.0,
            span_easy: 3.0,
            span_moderate: 5.0,
            span_hard: 7.0,
            span_falloff: 10.0,
            max_row_span: 2.0,
            ergo_baseline: 50.0,
            bonus_consecutive: 30.0,
            bonus_three_four: 20.0,
            bonus_five_fingers: 10.0,
            penalty_thumb_pinky: 30.0,
            penalty_outer_pair: 20.0,
            shape_match_radius: 3.0,
        }
    }
}

use chordforge::error::CfResult;
use chordforge::patterns::PatternStats;
use chordforge::scorer::{Fingering, FingeringSource};
use chordforge::theory::pitch_class_name;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

fn positions_summary(f: &Fingering) -> String {
    f.positions
        .iter()
        .map(|p| {
            format!(
                "F{}@r{}c{}:{}",
                p.finger,
                p.row,
                p.col,
                pitch_class_name(p.pitch_class)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn source_label(f: &Fingering) -> &'static str {
    match f.source {
        FingeringSource::Captured { .. } => "captured",
        FingeringSource::Synthesized => "synth",
    }
}

pub fn print_fingerings(title: &str, list: &[Fingering]) {
    println!("\nFingerings for {}", title);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Comfort"),
        Cell::new("Geo"),
        Cell::new("Ergo"),
        Cell::new("Hand"),
        Cell::new("Source"),
        Cell::new("Positions").add_attribute(Attribute::Bold),
    ]);

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, f) in list.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(f.score),
            Cell::new(f.comfort_score),
            Cell::new(f.geometric_score),
            Cell::new(f.ergonomic_score),
            Cell::new(f.hand),
            Cell::new(source_label(f)),
            Cell::new(positions_summary(f)),
        ]);
    }
    println!("{}", table);
}

pub fn print_pattern_stats(stats: &PatternStats) {
    let hand_label = stats
        .hand
        .map(|h| h.to_string())
        .unwrap_or_else(|| "both hands".to_string());
    println!(
        "\nPattern statistics ({}, {} handprints)",
        hand_label, stats.handprint_count
    );
    println!(
        "Span: avg {:.2} / std-dev {:.2} grid units",
        stats.avg_span, stats.span_std_dev
    );

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Finger Pair").add_attribute(Attribute::Bold),
        Cell::new("Avg Dist"),
        Cell::new("Std Dev"),
        Cell::new("Samples"),
    ]);
    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    for (pair, ps) in &stats.finger_distances {
        table.add_row(vec![
            Cell::new(pair),
            Cell::new(format!("{:.2}", ps.avg)),
            Cell::new(format!("{:.2}", ps.std_dev)),
            Cell::new(ps.samples),
        ]);
    }
    println!("{}", table);

    println!(
        "Learned shapes: {} | pads with finger preference: {}",
        stats.chord_shapes.len(),
        stats.finger_assignments.len()
    );
}

pub fn write_csv(path: &str, list: &[Fingering]) -> CfResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "rank",
        "score",
        "comfort",
        "geometry",
        "ergonomics",
        "hand",
        "source",
        "target",
        "positions",
    ])?;
    for (i, f) in list.iter().enumerate() {
        writer.write_record([
            (i + 1).to_string(),
            f.score.to_string(),
            f.comfort_score.to_string(),
            f.geometric_score.to_string(),
            f.ergonomic_score.to_string(),
            f.hand.to_string(),
            source_label(f).to_string(),
            f.target.to_string(),
            positions_summary(f),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

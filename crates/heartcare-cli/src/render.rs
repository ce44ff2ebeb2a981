//! Terminal rendering of backend responses with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use heartcare_model::{
    ChartKind, ChartSpec, DataSource, FeatureImportance, NO_RISK_FACTORS_MESSAGE,
    PredictionResult, RiskTier, SeverityTone, StatDisplay, StatisticsSummary, format_percent,
    format_thousands,
};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn tier_color(tier: RiskTier) -> Color {
    match tier {
        RiskTier::Low => Color::Green,
        RiskTier::Medium => Color::Yellow,
        RiskTier::High => Color::Red,
    }
}

fn tone_color(tone: SeverityTone) -> Color {
    match tone {
        SeverityTone::High => Color::Red,
        SeverityTone::Medium => Color::Yellow,
        SeverityTone::Low => Color::Green,
        SeverityTone::Neutral => Color::Grey,
    }
}

fn source_note(source: DataSource) -> Option<String> {
    source.caption().map(|caption| format!("({caption})"))
}

// =============================================================================
// STATISTICS
// =============================================================================

pub fn statistics_table(stats: &StatisticsSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    for display in StatDisplay::ALL {
        let value = Cell::new(stats.display_text(display));
        let value = match display {
            StatDisplay::HighRiskCount => value.fg(tier_color(RiskTier::High)),
            StatDisplay::MediumRiskCount => value.fg(tier_color(RiskTier::Medium)),
            StatDisplay::LowRiskCount => value.fg(tier_color(RiskTier::Low)),
            StatDisplay::TotalPredictions => value.add_attribute(Attribute::Bold),
        };
        table.add_row(vec![Cell::new(display.label()), value]);
    }

    if let Some(age) = stats.average_age {
        table.add_row(vec![Cell::new("Average Age"), Cell::new(format!("{age:.1}"))]);
    }
    if let Some(male) = stats.male_percentage {
        table.add_row(vec![Cell::new("Male"), Cell::new(format_percent(male))]);
    }
    if let Some(female) = stats.female_percentage {
        table.add_row(vec![Cell::new("Female"), Cell::new(format_percent(female))]);
    }
    table
}

// =============================================================================
// FEATURE IMPORTANCE
// =============================================================================

pub fn importance_table(importance: &FeatureImportance) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Feature"),
        header_cell("Key"),
        header_cell("Importance"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let labels = importance.labels();
    for (rank, ((key, _), (label, percent))) in importance
        .entries()
        .iter()
        .zip(labels.iter().zip(importance.percentages()))
        .enumerate()
    {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(label),
            dim_cell(key),
            Cell::new(format_percent(percent)),
        ]);
    }
    table
}

/// Heading line for the importance table, flagged when not live.
pub fn importance_heading(source: DataSource) -> String {
    match source_note(source) {
        Some(note) => format!("Feature Importance {note}"),
        None => "Feature Importance".to_string(),
    }
}

// =============================================================================
// CHARTS
// =============================================================================

fn chart_value(spec: &ChartSpec, value: f64) -> String {
    match spec.kind {
        ChartKind::Bar { value_suffix, .. } if !value_suffix.is_empty() => {
            format!("{value:.1}{value_suffix}")
        }
        _ if value.fract() == 0.0 && value >= 0.0 => format_thousands(value as u64),
        _ => format!("{value:.1}"),
    }
}

/// One chart as a label / value table; radial charts add a share column.
pub fn chart_table(spec: &ChartSpec) -> Table {
    let radial = spec.kind.is_radial();
    let mut header = vec![header_cell("Label"), header_cell(spec.series_label)];
    if radial {
        header.push(header_cell("Share"));
    }

    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    let total = spec.total();
    for (label, value) in spec.points() {
        let mut row = vec![Cell::new(label), Cell::new(chart_value(spec, value))];
        if radial {
            let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
            row.push(dim_cell(format_percent(share)));
        }
        table.add_row(row);
    }
    table
}

/// Title line for a chart, with its data-source note.
pub fn chart_heading(spec: &ChartSpec) -> String {
    match source_note(spec.source) {
        Some(note) => format!("{} {note}", spec.title()),
        None => spec.title().to_string(),
    }
}

// =============================================================================
// PREDICTION
// =============================================================================

/// Full text report: risk summary, factors and recommendations.
pub fn prediction_report(result: &PredictionResult) -> String {
    let tier = result.risk_category.tier();

    let mut summary = Table::new();
    apply_table_style(&mut summary);
    summary.add_row(vec![
        header_cell("Risk"),
        Cell::new(result.probability_text())
            .fg(tier_color(tier))
            .add_attribute(Attribute::Bold),
    ]);
    summary.add_row(vec![
        header_cell("Category"),
        Cell::new(result.risk_category.label()).fg(tier_color(tier)),
    ]);
    if !result.risk_category.is_recognized() {
        summary.add_row(vec![header_cell("Shown as"), dim_cell(tier.label())]);
    }
    if let Some(timestamp) = &result.timestamp {
        summary.add_row(vec![header_cell("Assessed"), dim_cell(timestamp)]);
    }

    let mut out = format!("{summary}\n\n{}\n", result.explanation);

    out.push_str("\nRisk Factors\n");
    if result.has_risk_factors() {
        let mut factors = Table::new();
        factors.set_header(vec![
            header_cell("Factor"),
            header_cell("Severity"),
            header_cell("Value"),
            header_cell("Description"),
        ]);
        apply_table_style(&mut factors);
        for factor in &result.risk_factors {
            let value = match &factor.value {
                Some(serde_json::Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => "-".to_string(),
            };
            factors.add_row(vec![
                Cell::new(&factor.factor),
                Cell::new(factor.severity.as_str()).fg(tone_color(factor.severity.tone())),
                dim_cell(value),
                Cell::new(&factor.description),
            ]);
        }
        out.push_str(&format!("{factors}\n"));
    } else {
        out.push_str(&format!("{}\n", NO_RISK_FACTORS_MESSAGE));
    }

    out.push_str("\nRecommendations\n");
    for (index, item) in tier.recommendations().iter().enumerate() {
        out.push_str(&format!("{}. {item}\n", index + 1));
    }
    out
}

//! Statistics table rendering.
//!
//! One row per subscribed sensor. The full variant shows the complete
//! summary; the compact variant (narrow terminals) keeps the latest value
//! and a sparkline trend.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::data::{Classification, SensorStats};
use crate::ui::common::{format_value, truncate_name};
use crate::ui::theme;

/// Sparkline characters (8 levels of height).
const SPARKLINE_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render the full statistics table.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let stats = app.stats();

    let header = Row::new(vec![
        "Sensor", "Last", "Min", "Max", "Avg", "P95", "Trend", "Unit",
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = stats
        .values()
        .map(|summary| {
            let trend = app
                .sensors()
                .get(&summary.sensor)
                .map(|sensor| app.trend(sensor).arrow())
                .unwrap_or("→");

            Row::new(vec![
                name_cell(app, summary, 25),
                value_cell(app, summary, summary.last),
                value_cell(app, summary, summary.min),
                value_cell(app, summary, summary.max),
                value_cell(app, summary, summary.avg),
                value_cell(app, summary, summary.p95),
                Cell::from(trend),
                unit_cell(summary),
            ])
        })
        .collect();

    let widths = [
        Constraint::Fill(3), // Sensor - gets 3x share (largest)
        Constraint::Fill(1), // Last
        Constraint::Fill(1), // Min
        Constraint::Fill(1), // Max
        Constraint::Fill(1), // Avg
        Constraint::Fill(1), // P95
        Constraint::Min(5),  // Trend
        Constraint::Min(6),  // Unit
    ];

    render_table(frame, app, area, header, rows, &widths, stats.len());
}

/// Render the compact table for narrow terminals.
pub fn render_compact(frame: &mut Frame, app: &App, area: Rect) {
    let stats = app.stats();

    let header = Row::new(vec!["Sensor", "Last", "Trend", "Unit"])
        .height(1)
        .style(app.theme.header);

    let rows: Vec<Row> = stats
        .values()
        .map(|summary| {
            let sparkline = app
                .sensors()
                .get(&summary.sensor)
                .map(|sensor| {
                    let values: Vec<f64> = sensor.values().collect();
                    render_sparkline(&values, 8)
                })
                .unwrap_or_default();

            Row::new(vec![
                name_cell(app, summary, 15),
                value_cell(app, summary, summary.last),
                Cell::from(sparkline),
                unit_cell(summary),
            ])
        })
        .collect();

    let widths = [
        Constraint::Fill(2), // Sensor
        Constraint::Fill(1), // Last
        Constraint::Min(8),  // Trend - fixed 8 for sparkline chars
        Constraint::Min(4),  // Unit
    ];

    render_table(frame, app, area, header, rows, &widths, stats.len());
}

fn render_table(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    header: Row,
    rows: Vec<Row>,
    widths: &[Constraint],
    sensor_count: usize,
) {
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(format!(" Sensors ({sensor_count}) "))
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(table, area);
}

/// Sensor name in its assigned chart color.
fn name_cell(app: &App, summary: &SensorStats, max: usize) -> Cell<'static> {
    let label = app
        .sensors()
        .get(&summary.sensor)
        .map(|sensor| sensor.info.label.clone())
        .unwrap_or_else(|| summary.sensor.clone());

    Cell::from(truncate_name(&label, max)).style(
        Style::default()
            .fg(theme::rgb(app.color(&summary.sensor)))
            .add_modifier(Modifier::BOLD),
    )
}

/// A stat value colored by its own threshold classification. Absent values
/// render dimmed, never as zero.
fn value_cell(app: &App, summary: &SensorStats, value: Option<f64>) -> Cell<'static> {
    let Some(value) = value else {
        return Cell::from("N/A").style(Style::default().add_modifier(Modifier::DIM));
    };

    let classification = app.classify(summary, Some(value));
    let style = match classification {
        Classification::Warning | Classification::Critical => {
            app.theme.classification_style(classification)
        }
        _ => Style::default(),
    };
    Cell::from(format_value(value)).style(style)
}

fn unit_cell(summary: &SensorStats) -> Cell<'static> {
    Cell::from(summary.unit.clone().unwrap_or_default())
        .style(Style::default().add_modifier(Modifier::DIM))
}

/// Normalize the last `width` values into sparkline glyphs. A flat series
/// renders as a line rather than arbitrary mid-height blocks.
fn render_sparkline(values: &[f64], width: usize) -> String {
    if values.is_empty() {
        return " ".repeat(width);
    }

    let tail: Vec<f64> = values.iter().rev().take(width).rev().copied().collect();
    let min = tail.iter().copied().fold(f64::INFINITY, f64::min);
    let max = tail.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if (max - min).abs() < f64::EPSILON {
        return "─".repeat(tail.len());
    }

    tail.iter()
        .map(|&v| {
            let normalized = (v - min) / (max - min);
            let index = ((normalized * 8.0) as usize).min(7);
            SPARKLINE_CHARS[index]
        })
        .collect()
}

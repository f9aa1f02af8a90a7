//! Time-series chart rendering.
//!
//! One full-width chart when a single unit group is selected; dual-axis
//! mode renders two charts side by side, each with its own unit-labeled
//! y axis. Sensor lines use the deterministically assigned palette colors,
//! so a sensor keeps its color across refreshes and layout changes.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::{App, TimeFormat};
use crate::data::duration::format_duration;
use crate::data::{Rgb, SensorGroup};
use crate::ui::common::truncate_name;
use crate::ui::theme;

/// Render the chart area for the currently selected unit groups.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let groups = app.groups();

    match groups.len() {
        0 => render_placeholder(frame, app, area),
        1 => render_group(frame, app, &groups[0], area),
        _ => {
            let halves =
                Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(area);
            render_group(frame, app, &groups[0], halves[0]);
            render_group(frame, app, &groups[1], halves[1]);
        }
    }
}

/// Render one unit group as a line chart spanning the retention window.
fn render_group(frame: &mut Frame, app: &App, group: &SensorGroup, area: Rect) {
    let window = app.retention_window().as_secs_f64();
    let Some(latest) = app.latest_timestamp() else {
        render_placeholder(frame, app, area);
        return;
    };

    // X is seconds from the window start, so the newest sample sits at the
    // right edge regardless of wall-clock time.
    let mut series: Vec<(String, Rgb, Vec<(f64, f64)>)> = Vec::new();
    for identity in &group.sensors {
        let Some(sensor) = app.sensors().get(identity) else {
            continue;
        };
        let points: Vec<(f64, f64)> = sensor
            .readings()
            .filter_map(|r| {
                let offset = (r.timestamp - latest).num_milliseconds() as f64 / 1000.0;
                let x = window + offset;
                (0.0..=window).contains(&x).then_some((x, r.value))
            })
            .collect();
        if points.is_empty() {
            continue;
        }
        series.push((
            truncate_name(&sensor.info.label, 20),
            app.color(identity),
            points,
        ));
    }

    if series.is_empty() {
        render_placeholder(frame, app, area);
        return;
    }

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for (_, _, points) in &series {
        for &(_, y) in points {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    let (y_min, y_max) = pad_bounds(y_min, y_max);

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(name, color, points)| {
            Dataset::default()
                .name(name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme::rgb(*color)))
                .data(points)
        })
        .collect();

    let axis_style = Style::default().fg(app.theme.muted);
    let x_axis = Axis::default()
        .style(axis_style)
        .bounds([0.0, window])
        .labels(x_labels(app, latest));
    let y_axis = Axis::default()
        .style(axis_style)
        .bounds([y_min, y_max])
        .labels(vec![
            format_axis_value(y_min),
            format_axis_value((y_min + y_max) / 2.0),
            format_axis_value(y_max),
        ]);

    let title = match &group.unit {
        Some(unit) => format!(" [{unit}] "),
        None => " no unit ".to_string(),
    };
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

/// Three x labels across the window, relative offsets or wall-clock times.
fn x_labels(app: &App, latest: chrono::NaiveDateTime) -> Vec<String> {
    let window = app.retention_window();
    match app.time_format {
        TimeFormat::Relative => vec![
            format!("-{}", format_duration(window)),
            format!("-{}", format_duration(window / 2)),
            "now".to_string(),
        ],
        TimeFormat::Absolute => {
            let ms = window.as_millis() as i64;
            let start = latest - chrono::TimeDelta::milliseconds(ms);
            let mid = latest - chrono::TimeDelta::milliseconds(ms / 2);
            vec![
                start.format("%H:%M:%S").to_string(),
                mid.format("%H:%M:%S").to_string(),
                latest.format("%H:%M:%S").to_string(),
            ]
        }
    }
}

/// Pad the y bounds so lines never hug the frame; a flat series still gets
/// a visible band.
fn pad_bounds(min: f64, max: f64) -> (f64, f64) {
    if (max - min).abs() < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    }
}

fn format_axis_value(value: f64) -> String {
    if value.abs() >= 100.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Placeholder frame for a group with nothing to draw yet.
fn render_placeholder(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" chart ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let message = Paragraph::new("no readings in window")
        .style(Style::default().add_modifier(Modifier::DIM))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(message, area);
}

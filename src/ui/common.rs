//! Shared UI components: the status line, the help overlay, and the small
//! text formatting helpers used by the chart and table.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::duration::format_duration;
use crate::data::Classification;

/// Shorten a display name to `max` characters, marking the cut with `...`.
pub(crate) fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() > max {
        let kept: String = name.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        name.to_string()
    }
}

/// Format a reading by magnitude: large values drop decimals, small values
/// keep two.
pub(crate) fn format_value(value: f64) -> String {
    if value.abs() >= 100.0 {
        format!("{value:.0}")
    } else if value.abs() >= 10.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

/// Format a count for display (e.g., 1234 -> "1.2K", 1234567 -> "1.2M").
pub(crate) fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Render the status bar at the bottom.
///
/// Shows classification tallies, sensor count, the active window, skip
/// totals, pause state, and key hints. Temporary status messages and poll
/// errors take priority over the regular line.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let stats = app.stats();
    let mut tallies = [0usize; 4];
    for summary in stats.values() {
        match app.classify_last(summary) {
            Classification::Critical => tallies[0] += 1,
            Classification::Warning => tallies[1] += 1,
            Classification::Normal => tallies[2] += 1,
            Classification::Unknown => tallies[3] += 1,
        }
    }

    let dim = Style::default().add_modifier(Modifier::DIM);
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    let tally_styles = [
        (
            tallies[0],
            "critical",
            app.theme.classification_style(Classification::Critical),
        ),
        (
            tallies[1],
            "warning",
            app.theme.classification_style(Classification::Warning),
        ),
        (
            tallies[2],
            "normal",
            app.theme.classification_style(Classification::Normal),
        ),
        (tallies[3], "no data", dim),
    ];
    for (count, label, style) in tally_styles {
        if count > 0 {
            spans.push(Span::styled(format!("●{count} {label} "), style));
        }
    }

    spans.push(Span::styled(
        format!(
            "│ {} sensors │ window {}",
            stats.len(),
            format_duration(app.retention_window())
        ),
        dim,
    ));

    let skipped = app.skip_counts().total();
    if skipped > 0 {
        spans.push(Span::styled(
            format!(" │ skipped {}", format_count(skipped)),
            Style::default().fg(app.theme.warning),
        ));
    }

    if app.paused {
        spans.push(Span::styled(
            " │ PAUSED",
            Style::default().fg(app.theme.warning).add_modifier(Modifier::BOLD),
        ));
    }

    if let Some(err) = app.load_error() {
        spans.push(Span::styled(
            format!(" │ {err}"),
            Style::default().fg(app.theme.critical),
        ));
    }

    spans.push(Span::styled(
        " │ space:pause r:reset +/-:zoom c:theme t:time h:help q:quit",
        dim,
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Controls",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Space     Pause/resume updates"),
        Line::from("  r         Reset readings and stats"),
        Line::from("  + / =     Zoom in (shorter window)"),
        Line::from("  - / _     Zoom out (longer window)"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Display",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  c         Cycle color theme"),
        Line::from("  t         Relative/absolute time axis"),
        Line::from("  Ctrl-L    Force full redraw"),
        Line::from("  h or ?    Toggle this help"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  q / Esc   Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 22u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

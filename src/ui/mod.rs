//! Terminal UI rendering.
//!
//! Layout (full mode):
//!
//! ```text
//! ┌────────────────────────────────┐
//! │ statistics table               │
//! ├────────────────────────────────┤
//! │ chart (one per selected group) │
//! │                                │
//! ├────────────────────────────────┤
//! │ status line                    │
//! └────────────────────────────────┘
//! ```
//!
//! Narrow terminals swap in the compact table; short terminals drop the
//! chart entirely; anything below the minimum size gets a resize notice.

pub mod chart;
pub mod common;
pub mod table;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Minimum terminal size for a usable display.
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 8;

/// Below this width the compact table replaces the full one.
const COMPACT_WIDTH: u16 = 100;
/// Below this height the chart is dropped entirely.
const TABLE_ONLY_HEIGHT: u16 = 15;
/// Below this height the table may take up to half the screen.
const SMALL_HEIGHT: u16 = 20;

/// Render the whole dashboard for one frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area);
        return;
    }

    let compact = area.width < COMPACT_WIDTH;

    if area.height < TABLE_ONLY_HEIGHT {
        let chunks =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);
        render_table(frame, app, chunks[0], compact);
        common::render_status_bar(frame, app, chunks[1]);
    } else {
        let chunks = Layout::vertical([
            Constraint::Length(table_height(app, area)),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);
        render_table(frame, app, chunks[0], compact);
        chart::render(frame, app, chunks[1]);
        common::render_status_bar(frame, app, chunks[2]);
    }

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

/// Rows granted to the table: every sensor plus header and borders, capped
/// so the chart keeps most of the screen.
fn table_height(app: &App, area: Rect) -> u16 {
    let wanted = (app.sensors().len() as u16).saturating_add(3);
    let cap = if area.height < SMALL_HEIGHT {
        area.height / 2
    } else {
        (area.height / 6).max(6)
    };
    wanted.min(cap)
}

fn render_table(frame: &mut Frame, app: &App, area: Rect, compact: bool) {
    if compact {
        table::render_compact(frame, app, area);
    } else {
        table::render(frame, app, area);
    }
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );
    let paragraph = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    let y = (area.height / 2).saturating_sub(2);
    let height = 5.min(area.height.saturating_sub(y));
    let centered = Rect::new(0, y, area.width, height);
    frame.render_widget(paragraph, centered);
}

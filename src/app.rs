//! Application state and control logic.
//!
//! `App` owns the reader, threads its explicit cursor through each poll,
//! and exposes the accessors the rendering layer consumes. All control
//! state (paused, zoom, theme, time format) lives here.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use chrono::NaiveDateTime;

use crate::data::duration::format_duration;
use crate::data::{
    assign_colors, select_for_dual_axis, Classification, Rgb, Sensor, SensorGroup, SensorStats,
    StatsCalculator, Trend, DEFAULT_PALETTE, MAX_AXIS_GROUPS,
};
use crate::reader::{LogCursor, LogReader, SkipCounts};
use crate::ui::Theme;

/// Retention windows reachable by zoom, shortest to longest.
pub const ZOOM_LEVELS: &[Duration] = &[
    Duration::from_secs(30),
    Duration::from_secs(60),
    Duration::from_secs(120),
    Duration::from_secs(300),
    Duration::from_secs(600),
    Duration::from_secs(1200),
    Duration::from_secs(3600),
];

/// X-axis label style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// Offsets back from the newest sample, e.g. "-5m".
    Relative,
    /// Wall-clock times from the log, e.g. "10:42:00".
    Absolute,
}

impl TimeFormat {
    pub fn toggle(self) -> Self {
        match self {
            TimeFormat::Relative => TimeFormat::Absolute,
            TimeFormat::Absolute => TimeFormat::Relative,
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    /// Pausing suspends polling only; input stays live.
    pub paused: bool,
    pub show_help: bool,
    pub time_format: TimeFormat,
    pub theme: Theme,
    /// Set by Ctrl-L; the event loop clears the terminal and resets it.
    pub force_redraw: bool,

    reader: LogReader,
    /// Explicit tail position, advanced by every successful poll.
    cursor: LogCursor,
    calculator: StatsCalculator,
    colors: BTreeMap<String, Rgb>,
    zoom_index: usize,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Wrap an opened, initialized reader whose initial read returned
    /// `cursor`.
    pub fn new(reader: LogReader, cursor: LogCursor, calculator: StatsCalculator, theme: Theme) -> Self {
        let colors = assign_colors(
            reader.sensors().keys().map(String::as_str),
            DEFAULT_PALETTE,
        );
        let zoom_index = nearest_zoom_index(reader.retention_window());
        Self {
            running: true,
            paused: false,
            show_help: false,
            time_format: TimeFormat::Relative,
            theme,
            force_redraw: false,
            reader,
            cursor,
            calculator,
            colors,
            zoom_index,
            status_message: None,
        }
    }

    /// Poll the log for newly appended rows. Skipped entirely while paused;
    /// returns the number of readings appended.
    pub fn reload_data(&mut self) -> usize {
        if self.paused {
            return 0;
        }
        let outcome = self.reader.poll_new_rows(self.cursor);
        self.cursor = outcome.cursor;
        outcome.appended
    }

    // --- accessors consumed by rendering ---

    /// Current sensor store, keyed by full identity.
    pub fn sensors(&self) -> &BTreeMap<String, Sensor> {
        self.reader.sensors()
    }

    /// Fresh summaries for every sensor.
    pub fn stats(&self) -> BTreeMap<String, SensorStats> {
        self.calculator.compute_all(self.reader.sensors())
    }

    /// Unit groups selected for the chart axes (at most two).
    pub fn groups(&self) -> Vec<SensorGroup> {
        select_for_dual_axis(self.reader.sensors(), MAX_AXIS_GROUPS)
    }

    /// Display color for a sensor; identities outside the subscribed set
    /// fall back to white.
    pub fn color(&self, identity: &str) -> Rgb {
        self.colors.get(identity).copied().unwrap_or((255, 255, 255))
    }

    /// Classification of a summary's latest value.
    pub fn classify_last(&self, stats: &SensorStats) -> Classification {
        self.calculator.classify(stats, stats.last)
    }

    /// Classification of an arbitrary value under a summary's unit.
    pub fn classify(&self, stats: &SensorStats, value: Option<f64>) -> Classification {
        self.calculator.classify(stats, value)
    }

    /// Trend of a sensor's most recent readings.
    pub fn trend(&self, sensor: &Sensor) -> Trend {
        self.calculator.trend(sensor)
    }

    pub fn skip_counts(&self) -> SkipCounts {
        self.reader.skip_counts()
    }

    /// Newest timestamp seen across all parsed rows. Anchors the chart's
    /// time axis.
    pub fn latest_timestamp(&self) -> Option<NaiveDateTime> {
        self.reader.latest_timestamp()
    }

    /// Error recorded by the most recent degraded poll, if any.
    pub fn load_error(&self) -> Option<&str> {
        self.reader.last_error()
    }

    /// Returns a description of the monitored log.
    pub fn source_description(&self) -> String {
        format!("file: {}", self.reader.path().display())
    }

    pub fn retention_window(&self) -> Duration {
        self.reader.retention_window()
    }

    // --- control operations ---

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        let message = if self.paused {
            "Paused (space to resume)"
        } else {
            "Resumed"
        };
        self.set_status_message(message.to_string());
    }

    /// Clear all readings and skip counts; identities, colors, cursor, and
    /// window are untouched.
    pub fn reset(&mut self) {
        self.reader.reset_readings();
        self.set_status_message("Readings cleared".to_string());
    }

    /// Shrink the retention window one ladder step.
    pub fn zoom_in(&mut self) {
        if self.zoom_index > 0 {
            self.zoom_index -= 1;
            self.apply_zoom();
        }
    }

    /// Grow the retention window one ladder step.
    pub fn zoom_out(&mut self) {
        if self.zoom_index + 1 < ZOOM_LEVELS.len() {
            self.zoom_index += 1;
            self.apply_zoom();
        }
    }

    fn apply_zoom(&mut self) {
        let window = ZOOM_LEVELS[self.zoom_index];
        self.reader.set_retention_window(window);
        self.set_status_message(format!("Window: {}", format_duration(window)));
    }

    /// Set an arbitrary window (takes effect on the next poll) and snap the
    /// zoom ladder to the nearest step.
    pub fn set_retention_window(&mut self, window: Duration) {
        self.reader.set_retention_window(window);
        self.zoom_index = nearest_zoom_index(window);
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.set_status_message(format!("Theme: {}", self.theme.name));
    }

    pub fn toggle_time_format(&mut self) {
        self.time_format = self.time_format.toggle();
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }
}

/// Ladder step closest to `window`.
fn nearest_zoom_index(window: Duration) -> usize {
    let mut best = 0;
    let mut best_diff = Duration::MAX;
    for (index, level) in ZOOM_LEVELS.iter().enumerate() {
        let diff = if *level > window {
            *level - window
        } else {
            window - *level
        };
        if diff < best_diff {
            best_diff = diff;
            best = index;
        }
    }
    best
}

//! Theme configuration for the TUI.
//!
//! Supports dark, light, and matrix themes with automatic terminal
//! detection. Sensor line colors come from the fixed palette and are not
//! themed; only the surrounding chrome changes.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::{Classification, Rgb};

/// Convert a palette color into a ratatui color.
pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name shown when cycling with the `c` key.
    pub name: &'static str,
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for warning-level readings.
    pub warning: Color,
    /// Color for critical-level readings.
    pub critical: Color,
    /// Color for readings inside normal thresholds.
    pub normal: Color,
    /// Color for secondary text such as axis labels.
    pub muted: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for header rows in tables.
    pub header: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            name: "dark",
            highlight: Color::Cyan,
            warning: Color::Yellow,
            critical: Color::Red,
            normal: Color::Green,
            muted: Color::Gray,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            name: "light",
            highlight: Color::Blue,
            warning: Color::Yellow,
            critical: Color::Red,
            normal: Color::Green,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a green-on-black theme.
    pub fn matrix() -> Self {
        Self {
            name: "matrix",
            highlight: Color::LightGreen,
            warning: Color::Yellow,
            critical: Color::Red,
            normal: Color::Green,
            muted: Color::Green,
            border: Color::Green,
            header: Style::default().fg(Color::LightGreen).add_modifier(Modifier::BOLD),
            border_type: BorderType::Plain,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Look up a theme by name. `auto` resolves against the terminal.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "auto" => Some(Self::auto_detect()),
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "matrix" => Some(Self::matrix()),
            _ => None,
        }
    }

    /// The next theme in the dark -> light -> matrix cycle.
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::matrix(),
            _ => Self::dark(),
        }
    }

    /// Get style for a threshold classification
    pub fn classification_style(&self, classification: Classification) -> Style {
        match classification {
            Classification::Unknown => Style::default().add_modifier(Modifier::DIM),
            Classification::Normal => Style::default().fg(self.normal),
            Classification::Warning => Style::default().fg(self.warning),
            Classification::Critical => {
                Style::default().fg(self.critical).add_modifier(Modifier::BOLD)
            }
        }
    }
}

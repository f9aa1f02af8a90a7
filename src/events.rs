use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Windows delivers both press and release events
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Control chords work everywhere, including over the help overlay
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.quit(),
            KeyCode::Char('l') => app.force_redraw = true,
            _ => {}
        }
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),

        // Pause/resume log polling
        KeyCode::Char(' ') => app.toggle_pause(),

        // Clear accumulated readings
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset(),

        // Zoom the retention window
        KeyCode::Char('+') | KeyCode::Char('=') => app.zoom_in(),
        KeyCode::Char('-') | KeyCode::Char('_') => app.zoom_out(),

        // Cycle color theme
        KeyCode::Char('c') | KeyCode::Char('C') => app.cycle_theme(),

        // Switch time axis labels between relative and absolute
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_time_format(),

        // Help
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

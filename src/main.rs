use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sensorwatch::app::App;
use sensorwatch::data::duration::parse_duration;
use sensorwatch::data::{StatsCalculator, ThresholdConfig};
use sensorwatch::reader::LogReader;
use sensorwatch::ui::Theme;
use sensorwatch::{events, ui};

#[derive(Parser, Debug)]
#[command(name = "sensorwatch")]
#[command(about = "Terminal dashboard that tails HWiNFO-style sensor CSV logs")]
struct Args {
    /// Path to the sensor CSV log
    log: PathBuf,

    /// Sensor names to watch (every column when omitted)
    sensors: Vec<String>,

    /// Retention window (e.g., "30s", "5m", "1h")
    #[arg(short, long, default_value = "5m")]
    window: String,

    /// Refresh interval (e.g., "500ms", "1s")
    #[arg(short, long, default_value = "1s")]
    refresh: String,

    /// List the sensors offered by the log header and exit
    #[arg(short, long)]
    list: bool,

    /// Print a JSON stats snapshot and exit
    #[arg(short, long, conflicts_with = "list")]
    export: bool,

    /// Thresholds TOML file (per-unit warning/critical bounds)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Color theme
    #[arg(short, long, default_value = "auto")]
    theme: String,

    /// Write diagnostic logs to this file (the terminal stays clean)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        init_tracing(path)?;
    }

    let window = parse_duration(&args.window)
        .with_context(|| format!("invalid --window value {:?}", args.window))?;
    let refresh = parse_duration(&args.refresh)
        .with_context(|| format!("invalid --refresh value {:?}", args.refresh))?;

    let mut reader = LogReader::open(&args.log)?;

    if args.list {
        for name in reader.available_sensors() {
            println!("{name}");
        }
        return Ok(());
    }

    // No sensors requested means watch everything the header offers.
    let requested = if args.sensors.is_empty() {
        reader.available_sensors()
    } else {
        args.sensors.clone()
    };
    reader.initialize_sensors(&requested);
    if reader.sensors().is_empty() {
        bail!(
            "no requested sensor matches the log; available:\n  {}",
            reader.available_sensors().join("\n  ")
        );
    }

    let thresholds = load_thresholds(args.config.as_deref())?;
    let calculator = StatsCalculator::new(thresholds);
    let cursor = reader.read_initial_data(window);

    info!(
        log = %args.log.display(),
        sensors = reader.sensors().len(),
        window = ?window,
        "sensorwatch starting"
    );

    if args.export {
        return export_snapshot(&reader, &calculator);
    }

    let theme = Theme::from_name(&args.theme).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown theme {:?} (expected auto, dark, light, or matrix)",
            args.theme
        )
    })?;

    let app = App::new(reader, cursor, calculator, theme);
    run_tui(app, refresh)
}

/// Route diagnostics to a file; the terminal belongs to the UI.
fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Load per-unit thresholds: optional TOML file layered under
/// `SENSORWATCH_*` environment overrides, on top of the built-in defaults.
fn load_thresholds(path: Option<&Path>) -> Result<ThresholdConfig> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }
    let settings = builder
        .add_source(config::Environment::with_prefix("SENSORWATCH").separator("__"))
        .build()
        .context("cannot load thresholds configuration")?;

    let mut thresholds: ThresholdConfig = settings
        .try_deserialize()
        .context("malformed thresholds configuration")?;

    // Built-in defaults fill any unit the file leaves unconfigured.
    for (unit, levels) in ThresholdConfig::default().thresholds {
        thresholds.thresholds.entry(unit).or_insert(levels);
    }
    Ok(thresholds)
}

/// Print the current statistics snapshot as pretty JSON and exit.
fn export_snapshot(reader: &LogReader, calculator: &StatsCalculator) -> Result<()> {
    let stats = calculator.compute_all(reader.sensors());
    let snapshot = serde_json::json!({
        "stats": stats,
        "skipped": reader.skip_counts(),
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Run the interactive dashboard with the terminal in raw mode.
fn run_tui(mut app: App, refresh_interval: Duration) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let result = run_app(&mut terminal, &mut app, refresh_interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    refresh_interval: Duration,
) -> Result<()> {
    let mut last_refresh = Instant::now();

    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        if app.force_redraw {
            app.force_redraw = false;
            terminal.clear()?;
        }

        // Auto-refresh data periodically
        if last_refresh.elapsed() >= refresh_interval {
            app.reload_data();
            last_refresh = Instant::now();
        }
    }

    Ok(())
}

mod ui;

use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use lunar_descent::core::constants::FRAME_MS;
use lunar_descent::input::{map_key, InputAction};
use lunar_descent::utils::logging::init_file_logging;
use lunar_descent::utils::persistence::ensure_dir;
use lunar_descent::{
    process_input, FlightParams, FlightSession, ResultsLog, Settings, TelemetrySink,
    TelemetrySnapshot,
};
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Best-effort output files.
struct Sinks {
    results: ResultsLog,
    telemetry: Option<TelemetrySink>,
}

fn main() -> io::Result<()> {
    let settings = Settings::from_env()?;
    ensure_dir(&settings.data_dir)?;
    if let Err(e) = init_file_logging(&settings.log_path()) {
        eprintln!("Logging disabled: {}", e);
    }

    let telemetry = if settings.telemetry_enabled {
        match TelemetrySink::new(settings.telemetry_path()) {
            Ok(sink) => Some(sink),
            Err(e) => {
                tracing::warn!(error = %e, "telemetry disabled");
                None
            }
        }
    } else {
        None
    };
    let sinks = Sinks {
        results: ResultsLog::new(settings.results_path()),
        telemetry,
    };
    tracing::info!(
        data_dir = %settings.data_dir.display(),
        telemetry = sinks.telemetry.is_some(),
        "starting"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    // Release events are only reported once the terminal opts in.
    let key_release = supports_keyboard_enhancement().unwrap_or(false);
    if key_release {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut rng = rand::thread_rng();
    let result = run(&mut terminal, &sinks, &mut rng);

    if key_release {
        terminal.backend_mut().execute(PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("exiting");
    result
}

fn run<R: Rng>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    sinks: &Sinks,
    rng: &mut R,
) -> io::Result<()> {
    let mut session = FlightSession::new(FlightParams::default(), rng);
    let mut notice: Option<String> = None;
    let frame_budget = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, &session, notice.as_deref()))?;

        // Wait out the rest of the frame, then drain anything still queued.
        let mut timeout = frame_budget.saturating_sub(last_frame.elapsed());
        while event::poll(timeout)? {
            timeout = Duration::ZERO;
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    InputAction::Quit => return Ok(()),
                    InputAction::Flight(input) => {
                        if process_input(&mut session, input, rng) {
                            notice = None;
                        }
                    }
                    InputAction::Ignore => {}
                }
            }
        }

        let elapsed_ms = last_frame.elapsed().as_millis() as u64;
        last_frame += Duration::from_millis(elapsed_ms);
        let report = session.tick(elapsed_ms);

        if report.steps > 0 {
            if let Some(telemetry) = &sinks.telemetry {
                let snapshot = TelemetrySnapshot::capture(&session, chrono::Utc::now());
                if let Err(e) = telemetry.write(&snapshot) {
                    tracing::warn!(error = %e, path = %telemetry.path().display(), "telemetry write failed");
                    notice = Some(format!("Telemetry write failed: {}", e));
                }
            }
        }

        if let Some(summary) = report.finished {
            if let Err(e) = sinks.results.record(&summary) {
                tracing::warn!(error = %e, path = %sinks.results.path().display(), "results write failed");
                notice = Some(format!("Results write failed: {}", e));
            }
        }
    }
}

//! mediapick - Main entry point

use anyhow::Context;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use mediapick::app::App;
use mediapick::cli::Cli;
use mediapick::error::{MediaPickError, Result};
use mediapick::logging;
use mediapick::report::SelectionReport;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stdout, stdout};
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    // The log is opened before the terminal changes mode so a failure is
    // reported on a normal screen.
    if let Err(e) = logging::init_file_logging(&cli.log_file) {
        eprintln!("fatal: {}", e);
        std::process::exit(1);
    }
    info!(version = env!("CARGO_PKG_VERSION"), "mediapick starting up");

    let config = cli.picker_config();
    let mut app = App::new(&config);

    let mut terminal = setup_terminal().context("Failed to initialize terminal")?;
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if app failed)
    restore_terminal();

    if let Err(ref e) = result {
        error!(error = %e, "Application loop failed");
    }
    result.context("Application loop failed")?;

    let report = SelectionReport::from(app.wizard().selection());
    info!(?report, "Selection finished");
    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.render(true));
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()
        .map_err(|e| MediaPickError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    if let Err(e) = crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(MediaPickError::terminal(format!(
            "Failed to enter alternate screen: {}",
            e
        )));
    }

    Terminal::new(CrosstermBackend::new(stdout())).map_err(|e| {
        restore_terminal();
        MediaPickError::terminal(format!("Failed to create terminal: {}", e))
    })
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    );
}

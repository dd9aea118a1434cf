//! Pastel Calc terminal application
//!
//! ## Usage
//!
//! ```bash
//! pastel-calc                              # defaults
//! pastel-calc --config calc.yaml           # load settings
//! pastel-calc --log-file calc.log --retain-operator
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pastel_calc::core::EqualsMode;
use pastel_calc::logging::init_logging;
use pastel_calc::tui::{render, CalculatorApp, InputHandler};
use pastel_calc::{AppError, AppResult, CalcConfig};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{error, info};

/// Single-screen integer calculator
#[derive(Debug, Parser)]
#[command(name = "pastel-calc", version, about)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Keep the operator after `=` so repeated `=` re-applies it
    #[arg(long)]
    retain_operator: bool,

    /// Do not capture the mouse
    #[arg(long)]
    no_mouse: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Builds the effective configuration: file first, flags on top
fn build_config(cli: &Cli) -> AppResult<CalcConfig> {
    let mut config = match &cli.config {
        Some(path) => CalcConfig::from_file(path)?,
        None => CalcConfig::default(),
    };
    if let Some(path) = &cli.log_file {
        config = config.with_log_file(path);
    }
    if cli.retain_operator {
        config = config.with_equals_mode(EqualsMode::Retain);
    }
    if cli.no_mouse {
        config = config.with_mouse(false);
    }
    Ok(config)
}

/// Raw mode plus alternate screen, undone when dropped
#[derive(Debug)]
struct TerminalScope {
    mouse: bool,
}

impl TerminalScope {
    fn enter(mouse: bool) -> AppResult<Self> {
        enable_raw_mode()?;
        // from here on every exit path restores the terminal
        let scope = Self { mouse };
        let mut stdout = io::stdout();
        if mouse {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        Ok(scope)
    }
}

impl Drop for TerminalScope {
    fn drop(&mut self) {
        // Best effort teardown - ignore errors during drop
        let mut stdout = io::stdout();
        let _ = disable_raw_mode();
        if self.mouse {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        let _ = execute!(stdout, LeaveAlternateScreen, Show);
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    init_logging(&config)?;
    info!(equals_mode = ?config.equals_mode, mouse = config.mouse, "starting");

    let scope = TerminalScope::enter(config.mouse)?;
    let result = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(AppError::from)
        .and_then(|mut terminal| run_app(&mut terminal, CalculatorApp::from_config(&config)));
    drop(scope);

    if let Err(err) = &result {
        error!(error = %err, "terminal loop failed");
    }
    info!("exiting");
    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> AppResult<()> {
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|f| render(&app, f))?;

        let event = event::read()?;
        let size = terminal.size()?;
        let screen = Rect::new(0, 0, size.width, size.height);
        app.handle_action(input_handler.handle_event(&event), screen);
    }

    Ok(())
}

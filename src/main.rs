//! Folio - terminal portfolio viewer
//!
//! Renders a single-page portfolio (hero, skills, projects, work history,
//! contact form) as one scrollable terminal page with scroll-spy navigation.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use folio::check::CheckReport;
use folio::config::{Config, ThemeMode};
use folio::constants::{APP_BINARY_NAME, APP_NAME};
use folio::content::PortfolioContent;
use folio::logging;
use folio::tui::{self, Theme};

/// Folio - terminal portfolio viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a portfolio content TOML file
    #[arg(value_name = "CONTENT")]
    content_path: Option<PathBuf>,

    /// Override the configured theme
    #[arg(long, value_enum, value_name = "MODE")]
    theme: Option<ThemeMode>,

    /// Validate the content file and exit without starting the viewer
    #[arg(long)]
    check: bool,

    /// With --check, print the result as JSON
    #[arg(long, requires = "check")]
    json: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::load()?;

    // Resolve the content source: CLI argument, configured default, or the
    // compiled-in dataset.
    let content_path = cli
        .content_path
        .or_else(|| config.content.content_file.clone());

    if cli.check {
        let Some(path) = content_path else {
            eprintln!("--check requires a content file argument.");
            eprintln!();
            eprintln!("Example:");
            eprintln!("  {APP_BINARY_NAME} --check portfolio.toml");
            return Ok(ExitCode::FAILURE);
        };
        let report = CheckReport::for_file(&path);
        report.print(cli.json);
        return Ok(if report.valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let log_path = logging::init()?;
    tracing::info!("{} v{} starting", APP_NAME, env!("CARGO_PKG_VERSION"));
    tracing::debug!("logging to {}", log_path.display());

    let portfolio = match &content_path {
        Some(path) => {
            if !path.exists() {
                eprintln!("Error: Content file not found: {}", path.display());
                eprintln!();
                eprintln!("Please provide a valid path to a portfolio TOML file.");
                eprintln!();
                eprintln!("Examples:");
                eprintln!("  {APP_BINARY_NAME} portfolio.toml");
                eprintln!("  {APP_BINARY_NAME} --check portfolio.toml");
                return Ok(ExitCode::FAILURE);
            }
            PortfolioContent::load(path)?
        }
        None => PortfolioContent::builtin(),
    };

    let theme_mode = cli.theme.unwrap_or(config.ui.theme_mode);
    let theme = Theme::from_mode(theme_mode);

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(portfolio, config, theme);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    tracing::info!("{} exiting", APP_NAME);
    Ok(ExitCode::SUCCESS)
}

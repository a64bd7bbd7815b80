//! cpufactor - CPU allocation factors of SLURM accounting logs.

use cpufactor_cli::Args;
use cpufactor_core::{SummaryTable, scan, scan_both};
use cpufactor_plot::{App, ChartOptions, TableMode, Theme, save_scatter_html};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use miette::{IntoDiagnostic, Result, WrapErr};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = args.scan_config();

    if args.view {
        let (raw, refactored) = scan_both(&config)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to scan {}", config.dir))?;
        let (summary, mode) = if config.refactor {
            (&refactored, TableMode::Refactored)
        } else {
            (&raw, TableMode::Raw)
        };
        write_outputs(&args, summary)?;

        let app = App::new(config.dir.as_str(), raw, refactored)
            .with_mode(mode)
            .with_theme(Theme::by_name(&args.theme));
        return run_viewer(app);
    }

    let summary = scan(&config)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to scan {}", config.dir))?;
    print!("{}", summary);
    write_outputs(&args, &summary)
}

/// Initialise the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `log_level`.
fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}

/// Write the CSV table and HTML chart if requested.
fn write_outputs(args: &Args, summary: &SummaryTable) -> Result<()> {
    if let Some(path) = &args.csv {
        summary
            .save_csv(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to write {}", path))?;
    }
    if let Some(path) = &args.html {
        save_scatter_html(summary, &ChartOptions::for_table(summary), path).into_diagnostic()?;
    }
    Ok(())
}

/// Run the terminal chart viewer until the user quits.
fn run_viewer(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().into_diagnostic()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).into_diagnostic()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).into_diagnostic()?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().into_diagnostic()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).into_diagnostic()?;
    terminal.show_cursor().into_diagnostic()?;

    res.into_diagnostic()
}

/// Main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()>
where
    io::Error: From<B::Error>,
{
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.poll_events(tick_rate)?;

        if app.should_quit {
            return Ok(());
        }
    }
}

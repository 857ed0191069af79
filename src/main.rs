// crustlens: live C structure viewer

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser as _;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use crustlens::analysis::Analysis;
use crustlens::config::{Args, DumpTarget};
use crustlens::error::{AppError, AppResult};
use crustlens::logging::{init_logging, LogTarget};
use crustlens::ui::App;

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.dump {
        Some(target) => run_dump(&args, target),
        None => run_viewer(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn read_source(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Print tokens or the tree outline for one analysis pass.
fn run_dump(args: &Args, target: DumpTarget) -> AppResult<()> {
    init_logging(LogTarget::Stderr, &args.log_level)?;

    let source = match &args.path {
        Some(path) => read_source(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(AppError::Stdin)?;
            buf
        }
    };

    let analysis = Analysis::run(&source);
    let mut out = io::stdout().lock();
    match target {
        DumpTarget::Tokens => {
            for token in &analysis.tokens {
                writeln!(out, "{token}")?;
            }
        }
        DumpTarget::Tree => write!(out, "{}", analysis.tree)?,
    }

    Ok(())
}

fn run_viewer(args: &Args) -> AppResult<()> {
    let log_target = match &args.log_file {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Disabled,
    };
    init_logging(log_target, &args.log_level)?;

    let source = match &args.path {
        Some(path) if path.exists() => read_source(path)?,
        Some(path) => {
            info!(path = %path.display(), "starting new file");
            String::new()
        }
        None => String::new(),
    };
    info!(chars = source.chars().count(), "opening viewer");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(args.path.clone(), source);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use screenflow::app::Studio;
use screenflow::services;
use screenflow::tui::terminal_guard::{TerminalGuard, TerminationSignal};

fn main() -> ExitCode {
    let _logging = screenflow::logging::init();

    let seed_path = std::env::args_os().nth(1).map(PathBuf::from);
    let board = match seed_path {
        Some(path) => match services::load_board(&path) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("screenflow: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => services::sample_board(),
    };

    let settings = services::load_settings();
    let mut studio = Studio::new(board, &settings);

    match run_tui(&mut studio) {
        Ok(Some(signal)) => ExitCode::from(signal.exit_code() as u8),
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("screenflow: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_tui(studio: &mut Studio) -> io::Result<Option<TerminationSignal>> {
    let guard = TerminalGuard::new()?;

    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    let _signal_thread =
        screenflow::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    let result = screenflow::tui::crossterm::run(&mut terminal, studio, Some(&signal_rx));

    guard.restorer().restore()?;
    result
}

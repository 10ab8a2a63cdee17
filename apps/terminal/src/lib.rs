//! # WeSplit Terminal Library
//!
//! A line-oriented front end for the bill splitter. It reads commands,
//! forwards input changes to the session and prints what the core derives.
//!
//! ## Module Organization
//! ```text
//! wesplit_terminal/
//! ├── lib.rs          ◄─── You are here (logging setup & input loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Current inputs, recompute on change
//! │   └── config.rs   ◄─── Currency and output settings
//! ├── commands.rs     ◄─── Input line → Command
//! ├── display.rs      ◄─── Snapshot → text / JSON
//! └── error.rs        ◄─── App error type
//! ```

pub mod commands;
pub mod display;
pub mod error;
pub mod state;

use std::io::{BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::Command;
use display::TerminalDisplay;
use error::AppResult;
use state::{AppConfig, SplitSession};

/// Runs the input loop until `quit` or end of input.
///
/// ## Loop
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Render the empty form (configured default tip, 2 people)           │
/// │  2. For each input line:                                               │
/// │     • parse ──► Input event ──► session.apply ──► render               │
/// │     • parse ──► show / tips / help ──► print                           │
/// │     • parse or render error ──► print error, keep inputs, continue     │
/// │  3. quit or EOF ──► return                                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Errors that leave the session usable are shown and the loop carries on.
/// Only I/O failures end it early.
pub fn run<R: BufRead, W: Write>(config: &AppConfig, input: R, output: W) -> AppResult<()> {
    let display = TerminalDisplay::new(output, config.clone());
    let mut session = SplitSession::new(config.initial_inputs()?, display);
    session.refresh()?;

    for line in input.lines() {
        let line = line?;

        let command = match commands::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                warn!(input = %line.trim(), code = ?err.code, "Rejected input");
                session.sink_mut().error(&err)?;
                continue;
            }
        };

        let result = match command {
            Command::Input(event) => session.apply(event).map(drop),
            Command::Show => session.refresh().map(drop),
            Command::ListTips => session.sink_mut().notice(&commands::tip_choices()),
            Command::Help => session.sink_mut().notice(commands::HELP),
            Command::Quit => break,
        };

        if let Err(err) = result {
            if !err.is_recoverable() {
                return Err(err);
            }
            warn!(input = %line.trim(), code = ?err.code, "Could not show result");
            session.sink_mut().error(&err)?;
        }
    }

    info!("Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only the display.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every recomputation
/// - Default: warnings, plus info for this crate
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,wesplit=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

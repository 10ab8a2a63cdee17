//! # WeSplit Terminal Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (file, then environment)
//! 3. Run the input loop on stdin/stdout

use std::io;
use std::process::ExitCode;
use tracing::{error, info};

use wesplit_terminal::state::AppConfig;

fn main() -> ExitCode {
    wesplit_terminal::init_tracing();

    info!("Starting WeSplit");

    let config = AppConfig::load_or_default(None);
    info!(
        currency = %config.currency_code,
        tip = config.default_tip_percentage,
        output = ?config.output,
        "Configuration loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();

    match wesplit_terminal::run(&config, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("WeSplit stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}

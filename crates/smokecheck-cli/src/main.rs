//! CLI entry point - the composition root.
//!
//! Infrastructure is wired together via bootstrap; logging and the report
//! handler both read from the resulting context.

use std::io;
use std::process::ExitCode;

use smokecheck_cli::{Cli, CliConfig, CliError, bootstrap, handlers, logging};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run() -> Result<(), CliError> {
    // Load environment variables
    let dotenv_path = bootstrap::load_dotenv();

    // Parse CLI arguments
    let cli = Cli::parse_args()?;

    let ctx = bootstrap(CliConfig::from_cli(&cli));

    // Initialize logging
    logging::init(&ctx.config)?;
    if let Some(path) = dotenv_path {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }

    let stdout = io::stdout();
    handlers::report::execute(&ctx, &mut stdout.lock())
}

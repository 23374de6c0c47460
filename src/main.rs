use std::process::ExitCode;

use tracing::error;
use utc2local::cli;

fn main() -> ExitCode {
    cli::init_logging();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

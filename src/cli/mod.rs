mod commands;
mod logging;

pub use commands::{Cli, run};
pub use logging::init_logging;

use std::io;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::debug;

use crate::config::FilterConfig;
use crate::pipeline::filter_with;
use crate::rewrite::Rewriter;

#[derive(Parser)]
#[command(name = "utc2local")]
#[command(version = "0.1.0")]
#[command(
    about = "Rewrite UTC timestamps on stdin to local time on stdout",
    long_about = "Reads stdin line by line and replaces every \
                  YYYY-MM-DDTHH:MM:SS[.fff]Z timestamp with the same instant in the \
                  local time zone (taken from TZ or the system setting), \
                  e.g. 2017-02-22T23:33:23.973+09:00. Everything else is copied unchanged."
)]
pub struct Cli {}

pub fn run() -> Result<()> {
    let _cli = Cli::parse();

    // stdout is line buffered, so each line reaches the pipe as it is written
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let rewriter = Rewriter::new(Local);

    let stats = filter_with(stdin, stdout, &rewriter, FilterConfig::default())
        .context("Failed to filter standard input")?;

    debug!(
        "End of input: {} lines, {} timestamps converted, {} oversized lines",
        stats.lines, stats.converted, stats.oversized_lines
    );

    Ok(())
}

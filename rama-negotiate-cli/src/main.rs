//! entrypoint for rama-negotiate-cli

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(test, allow(clippy::float_cmp))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use clap::Parser;
use std::io::{self, BufRead as _, Write as _};
use tracing::level_filters::LevelFilter;

mod output;
use self::output::OutputMode;

mod trace;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Parser)]
#[command(name = "rama-negotiate")]
#[command(bin_name = "rama-negotiate")]
#[command(version, about, long_about = None)]
struct Cli {
    /// header values to split and rank, e.g. `text/html,application/xml;q=0.9`
    ///
    /// Read line by line from stdin when none are given.
    headers: Vec<String>,

    #[arg(short = 'w', long)]
    /// print the resolved quality next to each ranked value
    weights: bool,

    #[arg(short = 'p', long, conflicts_with = "weights")]
    /// print the values and their parameters as json, without ranking them
    params: bool,

    #[arg(short = 'v', long)]
    /// enable debug logging (written to stderr)
    verbose: bool,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        if self.params {
            OutputMode::Params
        } else if self.weights {
            OutputMode::Weights
        } else {
            OutputMode::Values
        }
    }
}

#[expect(clippy::exit, reason = "failure is reported through the exit status")]
fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("🚩 exit with error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), BoxError> {
    trace::init_tracing(if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    })?;

    let mode = cli.output_mode();
    let lines = if cli.headers.is_empty() {
        io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
    } else {
        cli.headers
    };
    tracing::debug!(lines = lines.len(), ?mode, "negotiate header lines");

    let output = output::render(mode, &lines)?;
    io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}

//! Hosts compactor - entry point.
//!
//! Reads a hosts file, deduplicates its blocked hostnames and rewrites them
//! packed nine to a line. Input and output paths are positional and default
//! to `hosts` and `hosts_compacted` in the working directory; the output
//! file is overwritten if it exists.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use hosts_compact::compactor;
use hosts_compact::config::{self, Config};

/// Repack host-blocking entries into fewer lines, nine hostnames per rule.
#[derive(Debug, Parser)]
#[command(name = "compact", version)]
struct Args {
    /// Hosts file to read.
    #[arg(default_value = "hosts")]
    input: PathBuf,

    /// Output file, overwritten if it exists.
    #[arg(default_value = "hosts_compacted")]
    output: PathBuf,
}

fn run(args: &Args) -> hosts_compact::Result<()> {
    let config = Config::load_or_default(config::CONFIG_FILE)?;
    compactor::compact(&args.input, &args.output, &config)?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => {
            println!(
                "File {} compacted into {}.",
                args.input.display(),
                args.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

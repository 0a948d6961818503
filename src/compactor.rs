//! The compaction pipeline.
//!
//! A run is a strict linear sequence: read the input hosts file, deduplicate
//! the blocked hostnames, repack them into lines of up to nine, and write
//! the result. The whole input is consumed before any output is produced;
//! a run that fails before the write stage leaves no output file behind.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use chrono::Local;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::hosts::{self, BASE_ENTRIES};

/// Maximum number of hostnames packed into one generated line.
pub const DOMAINS_PER_LINE: usize = 9;

/// Counters describing a completed run.
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    /// Unique hostnames extracted from the input.
    pub domains: usize,
    /// Lines written to the output file, preamble included.
    pub lines: usize,
}

/// Compact the hosts file at `input` into `output`.
///
/// Extracts and deduplicates the blocked hostnames from `input`, then
/// writes them to `output` (created, or truncated if it exists) packed
/// [`DOMAINS_PER_LINE`] to a line. Unless suppressed by the [`Config`]
/// toggles, the generated lines are preceded by a `# YYYY-MM-DD HH:MM:SS`
/// timestamp comment and the fixed [`BASE_ENTRIES`] block, in that order.
///
/// The order in which hostnames land in the generated lines is unspecified
/// and may differ between runs.
///
/// # Errors
///
/// - [`Error::InputNotFound`] if `input` does not resolve to a file
/// - [`Error::NoValidEntries`] if no hostnames survive extraction
/// - [`Error::OutputWrite`] if creating or writing `output` fails
pub fn compact(input: &Path, output: &Path, config: &Config) -> Result<Summary> {
    let file = File::open(input).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::InputNotFound(input.to_path_buf()),
        _ => Error::Io(e),
    })?;

    let domains = hosts::collect_domains(BufReader::new(file))?;
    if domains.is_empty() {
        return Err(Error::NoValidEntries);
    }

    let domain_count = domains.len();
    debug!(count = domain_count, "extracted unique hostnames");

    let batches = batch_lines(domains.into_iter().collect());
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let lines = assemble(batches, config, &timestamp);

    write_lines(output, &lines).map_err(|source| Error::OutputWrite {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        input = %input.display(),
        output = %output.display(),
        domains = domain_count,
        lines = lines.len(),
        "compaction finished"
    );

    Ok(Summary {
        domains: domain_count,
        lines: lines.len(),
    })
}

/// Pack hostnames into generated blocking lines, at most
/// [`DOMAINS_PER_LINE`] per line, preserving the given order.
fn batch_lines(domains: Vec<String>) -> Vec<String> {
    domains
        .chunks(DOMAINS_PER_LINE)
        .map(|chunk| format!("0.0.0.0 {}", chunk.join(" ")))
        .collect()
}

/// Prepend the configured preamble to the generated lines.
///
/// Order: timestamp comment, then base entries, then batches.
fn assemble(batches: Vec<String>, config: &Config, timestamp: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(batches.len() + BASE_ENTRIES.len() + 1);

    if config.omit_timestamp {
        info!("timestamp omitted");
    } else {
        lines.push(format!("# {timestamp}"));
    }

    if config.omit_base {
        info!("base entries omitted");
    } else {
        lines.extend(BASE_ENTRIES.iter().map(|entry| (*entry).to_string()));
    }

    lines.extend(batches);
    lines
}

fn write_lines(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

//! Hosts file format parsing and domain extraction.
//!
//! Reads standard `/etc/hosts` format blocklists such as Steven Black's
//! merged hosts file and collects the blocked hostnames.

use std::collections::HashSet;
use std::io::{self, BufRead};

/// Base entries emitted at the top of a compacted file.
///
/// These cover the loopback, broadcast and IPv6 aliases a hosts file is
/// expected to carry, so the generated lines never need to repeat them.
pub const BASE_ENTRIES: &[&str] = &[
    "127.0.0.1 localhost localhost.localdomain local",
    "255.255.255.255 broadcasthost",
    "::1 localhost ip6-localhost ip6-loopback",
    "fe80::1%lo0 localhost",
    "ff00::0 ip6-localnet ip6-mcastprefix",
    "ff02::1 ip6-allnodes",
    "ff02::2 ip6-allrouters",
    "ff02::3 ip6-allhosts",
    "0.0.0.0 0.0.0.0",
];

/// Hostnames already covered by [`BASE_ENTRIES`], never collected.
const REDUNDANT_DOMAINS: &[&str] = &[
    "localhost",
    "localhost.localdomain",
    "local",
    "broadcasthost",
    "ip6-localhost",
    "ip6-loopback",
    "ip6-localnet",
    "ip6-mcastprefix",
    "ip6-allnodes",
    "ip6-allrouters",
    "ip6-allhosts",
    "127.0.0.1",
    "0.0.0.0",
];

/// Leading addresses that mark a line as a blocking entry.
const BLOCK_ADDRS: &[&str] = &["0.0.0.0", "127.0.0.1"];

/// Collect the unique blocked hostnames from hosts-format content.
///
/// # Format
///
/// Standard `/etc/hosts` format:
/// - `<ip> <domain1> [domain2] [domain3]...`
/// - Comments start with `#`
/// - Empty lines are ignored
///
/// # Extraction Rules
///
/// - Only lines whose first whitespace-separated token is exactly `0.0.0.0`
///   or `127.0.0.1` contribute hostnames; everything else (comments, blank
///   lines, other address families) is skipped without error
/// - A `#`-prefixed token ends the line; it and the tokens after it are a
///   trailing comment
/// - Redundant system hostnames (compared case-insensitively) are dropped
/// - Duplicates across any number of lines collapse to one entry
///
/// Iteration order of the returned set is unspecified.
///
/// # Errors
///
/// Returns the underlying [`io::Error`] if reading fails.
pub fn collect_domains<R: BufRead>(mut reader: R) -> io::Result<HashSet<String>> {
    let mut domains = HashSet::new();
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line)?;
        if bytes_read == 0 {
            break;
        }

        let mut tokens = line.split_whitespace();

        // Only blocking entries are relevant
        let Some(addr) = tokens.next() else {
            continue;
        };
        if !BLOCK_ADDRS.contains(&addr) {
            continue;
        }

        for token in tokens {
            // Trailing comment, the rest of the line is irrelevant
            if token.starts_with('#') {
                break;
            }

            if REDUNDANT_DOMAINS.contains(&token.to_lowercase().as_str()) {
                continue;
            }

            domains.insert(token.to_string());
        }
    }

    Ok(domains)
}

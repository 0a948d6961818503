//! Hosts file compactor.
//!
//! Repacks the blocking entries of a hosts file into fewer lines by
//! grouping up to nine hostnames per rule, a workaround for resolvers
//! (notably the Windows DNS Client service) that misbehave when a very
//! large hosts file is present. Blocking behavior is preserved: every
//! unique blocked hostname from the input reappears exactly once in the
//! output.
//!
//! # Architecture
//!
//! - [`config`]: deploy-time configuration
//! - [`hosts`]: hosts-format parsing and domain extraction
//! - [`compactor`]: the read → dedupe → chunk → write pipeline
//! - [`error`]: error types
//!
//! # Example
//!
//! ```rust
//! use hosts_compact::hosts;
//!
//! let content = "# comment\n0.0.0.0 ads.example.com tracker.example.com\n";
//! let domains = hosts::collect_domains(content.as_bytes()).unwrap();
//! assert_eq!(domains.len(), 2);
//! assert!(domains.contains("ads.example.com"));
//! ```

pub mod compactor;
pub mod config;
pub mod error;
pub mod hosts;

pub use config::Config;
pub use error::{Error, Result};

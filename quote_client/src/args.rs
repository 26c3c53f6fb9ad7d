//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quote_common::net::{CLIENT_TIMEOUT, DEFAULT_SERVER_URL};

/// File written by `--output` when no path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "cotacao.txt";

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// URL of the quote server endpoint.
    #[clap(long, env = "QUOTE_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub url: String,

    /// Deadline, in milliseconds, for the whole request.
    #[clap(
        long,
        env = "QUOTE_CLIENT_TIMEOUT_MS",
        default_value_t = CLIENT_TIMEOUT.as_millis() as u64
    )]
    pub timeout_ms: u64,

    /// Write the quote to a file instead of printing it
    /// (defaults to `cotacao.txt` when given without a path).
    #[clap(long, num_args = 0..=1, default_missing_value = DEFAULT_OUTPUT_FILE)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Deadline for the request, counted from the start of the run.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_by_default() {
        let args = Args::try_parse_from(["quote_client"]).unwrap();
        assert_eq!(args.url, "http://localhost:8080/cotacao");
        assert_eq!(args.timeout(), Duration::from_millis(300));
        assert!(args.output.is_none());
    }

    #[test]
    fn bare_output_flag_writes_the_default_file() {
        let args = Args::try_parse_from(["quote_client", "--output"]).unwrap();
        assert_eq!(args.output, Some(PathBuf::from("cotacao.txt")));
    }

    #[test]
    fn output_accepts_a_path() {
        let args = Args::try_parse_from(["quote_client", "--output", "/tmp/usd.txt"]).unwrap();
        assert_eq!(args.output, Some(PathBuf::from("/tmp/usd.txt")));
    }
}

//! Command-line arguments for the Quote Server.
//!
//! Every option can also be supplied through the environment variable shown in `--help`.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quote_common::net::{DEFAULT_BIND_ADDRESS, STORE_TIMEOUT, UPSTREAM_TIMEOUT, UPSTREAM_URL};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address the HTTP listener binds to.
    #[clap(long, env = "QUOTE_SERVER_BIND", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: String,

    /// Upstream endpoint publishing the USD-BRL quote.
    #[clap(long, env = "QUOTE_UPSTREAM_URL", default_value = UPSTREAM_URL)]
    pub upstream_url: String,

    /// Deadline, in milliseconds, for each upstream call.
    #[clap(
        long,
        env = "QUOTE_UPSTREAM_TIMEOUT_MS",
        default_value_t = UPSTREAM_TIMEOUT.as_millis() as u64
    )]
    pub upstream_timeout_ms: u64,

    /// SQLite file where served quotes are recorded.
    #[clap(long, env = "QUOTE_DB_PATH", default_value = "quotes.db")]
    pub db_path: PathBuf,

    /// Deadline, in milliseconds, for recording one quote.
    #[clap(
        long,
        env = "QUOTE_STORE_TIMEOUT_MS",
        default_value_t = STORE_TIMEOUT.as_millis() as u64
    )]
    pub store_timeout_ms: u64,

    /// Serve quotes without recording them.
    #[clap(long)]
    pub no_persist: bool,
}

impl Args {
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}

//! Quote Client — reads the current USD-BRL bid from the quote server once and
//! either prints it or writes it to a quote file.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --url http://localhost:8080/cotacao
//! quote_client --output            # writes ./cotacao.txt
//! ```
//!
//! The whole request is bounded by `--timeout-ms` (300ms by default), counted
//! from the start of the run. Any failure prints its message, leaves no file
//! behind and ends the process with a failure status.
#![warn(missing_docs)]
mod args;
mod output;

use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};
use quote_common::http::get_json;
use quote_common::{Quote, QuoteError, Result};
use tokio::time::Instant;

use crate::args::Args;
use crate::output::Output;

/// Fetches one quote and delivers it, returning the operator-facing line.
///
/// The deadline runs from `started`, so time spent before the request (argument
/// parsing, client setup) counts against it.
async fn run(args: &Args, started: Instant) -> Result<String> {
    let deadline = args.timeout();
    let http = reqwest::Client::builder()
        .user_agent(concat!("quote_client/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| QuoteError::Prepare(e.to_string()))?;

    let fetch = get_json::<Quote>(&http, &args.url, deadline);
    let quote = tokio::time::timeout_at(started + deadline, fetch)
        .await
        .map_err(|_| QuoteError::Timeout(deadline))??;
    debug!("Received bid {} from {}", quote.bid, args.url);

    Output::new(args.output.clone()).deliver(&quote)
}

#[tokio::main]
async fn main() -> ExitCode {
    let started = Instant::now();
    init_logger();
    let args = Args::parse();

    match run(&args, started).await {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Quote request to {} failed", args.url);
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logger() {
    logger().init();
}

fn logger() -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Info)
        .parse_default_env();
    builder
}

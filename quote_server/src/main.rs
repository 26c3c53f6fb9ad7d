//! USD-BRL quote HTTP server.
//!
//! Serves `GET /cotacao` (and `GET /`) by fetching the last bid from the upstream
//! provider and answering `{"bid": "<bid>"}`. The binary wires together:
//!
//! - `UpstreamClient` — one deadline-bounded GET per request to the provider.
//! - `QuoteStore` — append-only SQLite log; each served bid is recorded first,
//!   under its own deadline, and a bid that cannot be recorded is not served.
//! - `router` — the axum routes and the handler tying the two together.
//!
//! Concurrency: every inbound connection is served by its own tokio task. The
//! only state shared between requests is the append-only store.
//!
//! Failures are surfaced as `500` with the message as plain text, other methods
//! as `405`. Nothing is retried.
#![warn(missing_docs)]
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use quote_common::QuoteError;
use quote_common::Result;

use crate::args::Args;
use crate::router::{AppState, router};
use crate::storage::QuoteStore;
use crate::upstream::UpstreamClient;

mod args;
mod error;
pub mod model;
mod router;
mod storage;
mod upstream;

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let http = reqwest::Client::builder()
        .user_agent(concat!("quote_server/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| QuoteError::Prepare(e.to_string()))?;
    let upstream = UpstreamClient::new(http, args.upstream_url.clone(), args.upstream_timeout());
    info!(
        "Upstream provider: {} (deadline {}ms)",
        upstream.url(),
        args.upstream_timeout_ms
    );

    let store = if args.no_persist {
        info!("Persistence disabled, quotes are served without being recorded");
        None
    } else {
        let store = QuoteStore::open(&args.db_path)?;
        info!(
            "Recording quotes in {} (deadline {}ms)",
            args.db_path.display(),
            args.store_timeout_ms
        );
        Some(store)
    };

    let state = AppState {
        upstream: Arc::new(upstream),
        store,
        store_deadline: args.store_timeout(),
    };

    let listener = tokio::net::TcpListener::bind(args.bind.as_str()).await?;
    info!("Quote server listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Quote server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C, serving until killed: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Ctrl+C received. Shutting down server...");
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

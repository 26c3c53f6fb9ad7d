//! HTTP surface of the quote server.
//!
//! One handler serves both `/cotacao` and `/`. Per accepted request it fetches a
//! fresh bid, records it when a store is configured, and only then answers.
//! A quote that could not be recorded is never served.
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::Method;
use axum::routing::any;
use axum::{Json, Router};
use log::info;
use quote_common::Quote;
use quote_common::net::QUOTE_PATH;

use crate::error::ApiError;
use crate::storage::QuoteStore;
use crate::upstream::UpstreamClient;

/// Dependencies of the quote handler, built once in `main`.
#[derive(Clone)]
pub struct AppState {
    /// Upstream quote provider.
    pub upstream: Arc<UpstreamClient>,
    /// Quote log; `None` serves without recording.
    pub store: Option<QuoteStore>,
    /// Deadline for each insert into `store`.
    pub store_deadline: Duration,
}

/// Builds the router serving the quote on `/cotacao` and `/`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(QUOTE_PATH, any(serve_quote))
        .route("/", any(serve_quote))
        .with_state(state)
}

async fn serve_quote(
    State(state): State<AppState>,
    method: Method,
) -> Result<Json<Quote>, ApiError> {
    if method != Method::GET {
        return Err(ApiError::MethodNotAllowed);
    }

    let bid = state.upstream.fetch_bid().await?;
    if let Some(store) = &state.store {
        store.insert_bid(&bid, state.store_deadline).await?;
    }

    info!("Served USD-BRL bid {}", bid);
    Ok(Json(Quote::new(bid)))
}

//! Outbound call from the server to the upstream quote provider.
use std::time::Duration;

use quote_common::Result;
use quote_common::http::get_json;
use reqwest::Client;

use crate::model::upstream::UpstreamQuote;

/// Outbound side of the server: reads the last USD-BRL bid from the provider.
///
/// Each call issues exactly one GET bounded by `deadline`, counted from the
/// start of that call and never from the age of the inbound request.
pub struct UpstreamClient {
    http: Client,
    url: String,
    deadline: Duration,
}

impl UpstreamClient {
    /// Wraps an HTTP client pointed at `url`.
    pub fn new(http: Client, url: impl Into<String>, deadline: Duration) -> Self {
        Self {
            http,
            url: url.into(),
            deadline,
        }
    }

    /// Fetches the current bid, verbatim.
    pub async fn fetch_bid(&self) -> Result<String> {
        let quote: UpstreamQuote = get_json(&self.http, &self.url, self.deadline).await?;
        Ok(quote.usdbrl.bid)
    }

    /// Endpoint this client reads from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::routing::get;
    use quote_common::QuoteError;

    async fn serve(body: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = Router::new().route("/json/last/USD-BRL", get(move || async move { body }));
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/json/last/USD-BRL", addr)
    }

    #[tokio::test]
    async fn returns_the_bid_without_reformatting() {
        let url = serve(r#"{"USDBRL":{"code":"USD","bid":"5.4300","ask":"5.4310"}}"#).await;
        let upstream = UpstreamClient::new(Client::new(), url, Duration::from_millis(200));

        assert_eq!(upstream.fetch_bid().await.unwrap(), "5.4300");
    }

    #[tokio::test]
    async fn a_document_without_bid_is_a_decode_error() {
        let url = serve(r#"{"USDBRL":{"code":"USD"}}"#).await;
        let upstream = UpstreamClient::new(Client::new(), url, Duration::from_millis(200));

        let err = upstream.fetch_bid().await.unwrap_err();
        assert!(matches!(err, QuoteError::Decode(_)), "{err:?}");
    }
}

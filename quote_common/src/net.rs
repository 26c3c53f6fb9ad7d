//! Shared networking constants used by client and server.
use std::time::Duration;

/// Default bind address of the quote server.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
/// Path serving the quote. The server also answers on `/`.
pub const QUOTE_PATH: &str = "/cotacao";
/// Default URL the client reads the quote from.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080/cotacao";
/// Upstream endpoint publishing the last USD-BRL quote.
pub const UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Deadline for the server's call to the upstream provider.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_millis(200);
/// Deadline for recording one quote in the store.
pub const STORE_TIMEOUT: Duration = Duration::from_millis(10);
/// Deadline for the whole client run.
pub const CLIENT_TIMEOUT: Duration = Duration::from_millis(300);

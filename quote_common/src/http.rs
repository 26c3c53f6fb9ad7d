//! Deadline-bounded JSON GET shared by both hops of the quote chain.
//!
//! `get_json` is the one place where outbound failures are classified. The
//! deadline starts when the call starts and covers sending the request,
//! checking the status and reading the whole body. Nothing is retried.
use std::time::Duration;

use log::debug;
use reqwest::{Client, Request, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::QuoteError;
use crate::result::Result;

/// Issues one GET to `url` and decodes a `200 OK` JSON body into `T`.
///
/// - `Prepare` if the request cannot be built,
/// - `Timeout` if `deadline` elapses first,
/// - `Request` for any other transport failure,
/// - `InvalidStatus` for anything but 200,
/// - `Read` if the body cannot be read,
/// - `Decode` if the body is not a `T`.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    deadline: Duration,
) -> Result<T> {
    let request = client
        .get(url)
        .build()
        .map_err(|e| QuoteError::Prepare(e.to_string()))?;

    debug!("GET {} (deadline {}ms)", url, deadline.as_millis());
    tokio::time::timeout(deadline, exchange(client, request, deadline))
        .await
        .map_err(|_| QuoteError::Timeout(deadline))?
}

async fn exchange<T: DeserializeOwned>(
    client: &Client,
    request: Request,
    deadline: Duration,
) -> Result<T> {
    let response = client
        .execute(request)
        .await
        .map_err(|e| classify(e, deadline))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(QuoteError::InvalidStatus(status.as_u16()));
    }

    let body = response.bytes().await.map_err(|e| {
        if e.is_timeout() {
            QuoteError::Timeout(deadline)
        } else {
            QuoteError::Read(e.to_string())
        }
    })?;
    Ok(serde_json::from_slice::<T>(&body)?)
}

fn classify(err: reqwest::Error, deadline: Duration) -> QuoteError {
    if err.is_timeout() {
        QuoteError::Timeout(deadline)
    } else if err.is_builder() {
        QuoteError::Prepare(err.to_string())
    } else {
        QuoteError::Request(err.to_string())
    }
}

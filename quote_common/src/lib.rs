//!
//! Common types and utilities shared by the quote server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the `Quote` payload exchanged between server and client.
//! - `http` — deadline-bounded JSON GET with the shared failure classification.
//! - `net` — networking constants and default deadlines.
#![warn(missing_docs)]
pub mod error;
pub mod http;
pub mod net;
pub mod quote;
pub mod result;

pub use error::QuoteError;
pub use quote::Quote;
pub use result::Result;

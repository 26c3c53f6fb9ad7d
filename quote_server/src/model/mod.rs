//! Domain models for the quote server.
//!
//! - `upstream` — the document published by the upstream quote provider.

pub mod upstream;

//! Rendering of a fetched quote: a stdout line or a quote file.
use std::fs;
use std::path::PathBuf;

use log::debug;
use quote_common::{Quote, Result};

/// Where the quote ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Print the bid.
    Stdout,
    /// Overwrite the file with `Dólar: <bid>`, then confirm on stdout.
    File(PathBuf),
}

impl Output {
    pub fn new(path: Option<PathBuf>) -> Self {
        path.map_or(Output::Stdout, Output::File)
    }

    /// Delivers `quote` and returns the line to show the operator.
    pub fn deliver(&self, quote: &Quote) -> Result<String> {
        match self {
            Output::Stdout => Ok(format!("Current USD quote: {}", quote.bid)),
            Output::File(path) => {
                let contents = file_contents(quote);
                fs::write(path, &contents)?;
                debug!("Wrote {} bytes to {}", contents.len(), path.display());
                Ok(format!("{} updated, current quote: {}", path.display(), contents))
            }
        }
    }
}

fn file_contents(quote: &Quote) -> String {
    format!("Dólar: {}", quote.bid)
}

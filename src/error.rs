//! Failures of a generation run

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Template could not be opened or read
    #[error("Cannot read template {}: {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invocation cannot produce valid output
    #[error("Invalid template {}: {reason}", .path.display())]
    Configuration { path: PathBuf, reason: String },

    /// Output file could not be created or written
    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Whether the run failed before any output was produced.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::TemplateRead { .. } | Error::Configuration { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

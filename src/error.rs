// std imports
use std::io::{self, Write, stderr};
use std::path::PathBuf;

// third-party imports
use owo_colors::OwoColorize;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to open file {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize match: {0}")]
    Json(#[from] json::Error),
}

impl Error {
    /// Writes the error to standard error output.
    pub fn log(&self) {
        self.log_to(&mut stderr()).ok();
    }

    /// Writes the error to the given target.
    pub fn log_to<W: Write>(&self, target: &mut W) -> io::Result<()> {
        writeln!(target, "{} {}", "error:".bright_red().bold(), self)
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

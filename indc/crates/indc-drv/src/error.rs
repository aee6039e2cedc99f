//! Error handling for the indc driver.
//!
//! Lexical failures are rendered as diagnostics before they become a
//! [`DriverError::Lex`]; every other variant is printed as its message.

use std::io;
use std::path::PathBuf;

use indc_lex::LexError;
use thiserror::Error;

/// Errors that end the processing of one file or of the whole run.
#[derive(Error, Debug)]
pub enum DriverError {
    /// A source file could not be read.
    #[error("unable to open '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A source file failed to lex; its diagnostic has been emitted.
    #[error("lexing '{}' failed", path.display())]
    Lex {
        path: PathBuf,
        #[source]
        source: LexError,
    },

    /// The configuration file is unreadable or malformed.
    #[error("invalid configuration '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Writing the trace or a diagnostic failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl DriverError {
    /// Returns true if the error's report has already been written.
    pub fn is_reported(&self) -> bool {
        matches!(self, DriverError::Lex { .. })
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

//! Error types for the interactive console.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the interactive console.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// A line ended inside a quoted string or an open bracket/brace.
    #[error("Unterminated quote or bracket in input (nesting depth {depth})")]
    Unbalanced {
        /// The nesting depth left at the end of the line
        depth: i32,
    },

    /// The history directory could not be created.
    #[error("Failed to create history directory {path}: {source}")]
    HistoryDir {
        /// The directory that could not be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The history file could not be written.
    #[error("Failed to write history file {path}: {source}")]
    HistoryWrite {
        /// The history file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The line editor failed.
    #[error("Line editor error: {0}")]
    Editor(String),
}

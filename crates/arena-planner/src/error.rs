//! Error types for the planner.

use std::io;

use arena_seeker::SeekerError;

/// Errors that can occur while loading a catalog or editing the game list.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// Reading or writing a file failed.
    #[error("{0}")]
    Io(#[from] io::Error),

    /// The CSV reader could not decode the input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A query or sort request was rejected by the engine.
    #[error(transparent)]
    Seeker(#[from] SeekerError),

    /// The catalog header lacks a column the schema needs.
    #[error("catalog is missing the '{0}' column")]
    MissingColumn(&'static str),

    /// A list selector that is neither a name, an index, nor a range.
    #[error("invalid input format: {0}")]
    InvalidSelection(String),

    /// A 1-based index outside the list it refers to.
    #[error("index {index} is out of range (1-{len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A `start-end` range that is reversed or reaches past the list.
    #[error("invalid range {start}-{end}; enter numbers between 1 and {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// No game with the given name.
    #[error("game not found: {0}")]
    GameNotFound(String),

    /// The selector was blank.
    #[error("input cannot be empty")]
    EmptySelection,
}

impl PlannerError {
    pub(crate) fn invalid_selection(input: impl Into<String>) -> Self {
        Self::InvalidSelection(input.into())
    }

    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        Self::GameNotFound(name.into())
    }
}

/// Result type for planner operations.
pub type Result<T> = std::result::Result<T, PlannerError>;

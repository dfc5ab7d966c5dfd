//! Error types for the word-finding engine.

use std::io;
use thiserror::Error;

/// Errors that can occur while configuring a [`WordTool`](crate::WordTool) or
/// loading its word list.
///
/// None of these are raised while querying: a word that fails a constraint is
/// simply left out of the results.
#[derive(Debug, Error)]
pub enum WordToolError {
    /// Available and limited letters were both requested.
    ///
    /// The two are mutually exclusive; the active one has to be cleared before
    /// the other can be set.
    #[error("{attempted} cannot be set while {active} is non-empty")]
    ConflictingConstraint {
        /// The constraint that was being set.
        attempted: &'static str,
        /// The constraint already in effect.
        active: &'static str,
    },

    /// The pattern is not a valid regular expression.
    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// Why the regex engine rejected it.
        #[source]
        source: regex::Error,
    },

    /// The word list source could not be read.
    #[error("Could not read word list from {name}: {source}")]
    InvalidWordListSource {
        /// Path or description of the source.
        name: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// A specialized `Result` type for word-finding operations.
pub type Result<T> = std::result::Result<T, WordToolError>;

//! # wordtool
//!
//! Find dictionary words that satisfy letter and pattern constraints.
//!
//! Useful for word games: anagram search, crossword fills, letter-tile games.
//! A [`WordTool`] holds a word list and any combination of:
//!
//! - **available letters**: words must be spelled from these letters, with
//!   `?` wildcards standing in for any letter;
//! - **limited letters**: listed letters are capped, all others are free;
//! - **excluded letters**: words must contain none of these;
//! - **included letters**: words must contain all of these;
//! - **minimum / maximum length**;
//! - **pattern**: a regular expression the word must contain a match for;
//! - **extra tests**: arbitrary caller-supplied predicates.
//!
//! ## Example
//!
//! ```rust
//! use wordtool::prelude::*;
//!
//! let mut tool = WordTool::with_word_list(["planet", "plant", "plane", "plate", "pleat"]);
//! tool.set_available_letters("aelnpt")?;
//! tool.set_included_letters("n");
//! tool.set_min_length(5);
//!
//! assert_eq!(tool.find_words(), vec!["planet", "plant", "plane"]);
//! # Ok::<(), wordtool::WordToolError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod error;
pub mod letters;
pub mod sort;
pub mod wordlist;

/// Command-line driver
#[cfg(feature = "cli")]
pub mod cli;

pub use engine::{Constraints, WordFilter, WordTool};
pub use error::{Result, WordToolError};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::engine::{Constraints, WordFilter, WordTool};
    pub use crate::error::WordToolError;
    pub use crate::letters::{LetterBudget, LetterCount};
    pub use crate::sort::{SortKey, SortSpec};
}

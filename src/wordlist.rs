//! Word list loading.
//!
//! Word lists are plain text, one word per line:
//!
//! ```text
//! aardvark
//! abacus
//! abandon
//! ```
//!
//! Each line is trimmed of surrounding whitespace and otherwise kept verbatim.
//! No case folding or other normalization is done. Blank lines are skipped.

use crate::error::{Result, WordToolError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Environment variable naming a word list to use instead of the bundled one.
pub const DICTIONARY_ENV_VAR: &str = "WORDTOOL_DICTIONARY";

/// Source name reported for the word list compiled into the crate.
pub const BUNDLED_SOURCE: &str = "<bundled>";

/// The word list shipped with the crate, embedded at build time.
pub const BUNDLED_WORDS: &str = include_str!("../data/wordlist.txt");

/// Path of a word list to use instead of the bundled one.
///
/// `$WORDTOOL_DICTIONARY` if it is set and non-empty, `None` otherwise.
pub fn default_dictionary_path() -> Option<PathBuf> {
    match std::env::var_os(DICTIONARY_ENV_VAR) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => None,
    }
}

/// The bundled word list, parsed the same way as [`read_word_list`].
pub fn bundled_word_list() -> Vec<String> {
    BUNDLED_WORDS.lines().filter_map(clean_line).map(str::to_string).collect()
}

#[inline]
fn clean_line(line: &str) -> Option<&str> {
    let word = line.trim();
    (!word.is_empty()).then_some(word)
}

/// Read a word list from any buffered reader.
///
/// Lines are trimmed. Lines that are empty after trimming are dropped rather
/// than kept as empty-string candidates, so an empty word can never match.
pub fn read_word_list<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = clean_line(&line?) {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Read a word list from the file at `path`.
///
/// # Errors
///
/// Returns [`WordToolError::InvalidWordListSource`] if the file cannot be
/// opened or read.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let source_error = |source| WordToolError::InvalidWordListSource {
        name: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(source_error)?;
    read_word_list(BufReader::new(file)).map_err(source_error)
}

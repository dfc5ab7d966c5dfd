//! Output ordering for found words.
//!
//! The engine always returns words in word-list order. A [`SortSpec`] is a
//! short string of sort keys applied left to right, each as a stable sort, so
//! later keys take precedence and earlier keys break ties:
//!
//! | key | meaning                        |
//! |-----|--------------------------------|
//! | `a` | alphabetical, ascending        |
//! | `A` | alphabetical, descending       |
//! | `l` | length, ascending              |
//! | `L` | length, descending             |
//! | `r` | reverse the current order      |
//!
//! ```rust
//! use wordtool::sort::SortSpec;
//!
//! let spec: SortSpec = "aL".parse()?;
//! let mut words = vec!["bb".to_string(), "c".to_string(), "aa".to_string()];
//! spec.apply(&mut words);
//! assert_eq!(words, vec!["aa", "bb", "c"]);
//! # Ok::<(), wordtool::sort::SortSpecError>(())
//! ```

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single ordering step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// `a`
    Alphabetical,
    /// `A`
    AlphabeticalDescending,
    /// `l`
    Length,
    /// `L`
    LengthDescending,
    /// `r`
    Reverse,
}

impl SortKey {
    /// The key's letter in a sort spec.
    pub fn as_char(self) -> char {
        match self {
            Self::Alphabetical => 'a',
            Self::AlphabeticalDescending => 'A',
            Self::Length => 'l',
            Self::LengthDescending => 'L',
            Self::Reverse => 'r',
        }
    }

    fn apply(self, words: &mut [String]) {
        match self {
            Self::Alphabetical => words.sort(),
            Self::AlphabeticalDescending => words.sort_by(|a, b| b.cmp(a)),
            Self::Length => words.sort_by_key(|w| w.chars().count()),
            Self::LengthDescending => {
                words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()))
            }
            Self::Reverse => words.reverse(),
        }
    }
}

impl TryFrom<char> for SortKey {
    type Error = SortSpecError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'a' => Ok(Self::Alphabetical),
            'A' => Ok(Self::AlphabeticalDescending),
            'l' => Ok(Self::Length),
            'L' => Ok(Self::LengthDescending),
            'r' => Ok(Self::Reverse),
            other => Err(SortSpecError::InvalidKey(other)),
        }
    }
}

/// Errors from parsing a [`SortSpec`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortSpecError {
    /// The spec was empty.
    #[error("Empty sort specifier. Expected a combination of 'a', 'A', 'l', 'L', and/or 'r'.")]
    Empty,
    /// The spec contained a character that is not a sort key.
    #[error("'{0}' is not a valid sort key. Expected a combination of 'a', 'A', 'l', 'L', and/or 'r'.")]
    InvalidKey(char),
}

/// A sequence of [`SortKey`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    /// The keys in application order.
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Reorder `words` according to every key in turn.
    pub fn apply(&self, words: &mut [String]) {
        for key in &self.keys {
            key.apply(words);
        }
    }
}

impl FromStr for SortSpec {
    type Err = SortSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SortSpecError::Empty);
        }
        let keys = s
            .chars()
            .map(SortKey::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { keys })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in &self.keys {
            write!(f, "{}", key.as_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn sorted(spec: &str, list: &[&str]) -> Vec<String> {
        let spec: SortSpec = spec.parse().unwrap();
        let mut list = words(list);
        spec.apply(&mut list);
        list
    }

    #[test]
    fn test_parse() {
        let spec: SortSpec = "aAlLr".parse().unwrap();
        assert_eq!(
            spec.keys(),
            &[
                SortKey::Alphabetical,
                SortKey::AlphabeticalDescending,
                SortKey::Length,
                SortKey::LengthDescending,
                SortKey::Reverse,
            ]
        );
        assert_eq!(spec.to_string(), "aAlLr");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<SortSpec>(), Err(SortSpecError::Empty));
        assert_eq!("ax".parse::<SortSpec>(), Err(SortSpecError::InvalidKey('x')));
    }

    #[test]
    fn test_alphabetical() {
        assert_eq!(sorted("a", &["pear", "apple", "fig"]), words(&["apple", "fig", "pear"]));
        assert_eq!(sorted("A", &["pear", "apple", "fig"]), words(&["pear", "fig", "apple"]));
    }

    #[test]
    fn test_length_is_stable() {
        assert_eq!(
            sorted("l", &["pear", "fig", "kiwi", "ox"]),
            words(&["ox", "fig", "pear", "kiwi"])
        );
        assert_eq!(
            sorted("L", &["pear", "fig", "kiwi", "ox"]),
            words(&["pear", "kiwi", "fig", "ox"])
        );
    }

    #[test]
    fn test_later_keys_take_precedence() {
        assert_eq!(
            sorted("al", &["pear", "fig", "kiwi", "ox"]),
            words(&["ox", "fig", "kiwi", "pear"])
        );
    }

    #[test]
    fn test_reverse() {
        assert_eq!(sorted("r", &["b", "c", "a"]), words(&["a", "c", "b"]));
        assert_eq!(sorted("ar", &["b", "c", "a"]), words(&["c", "b", "a"]));
    }
}

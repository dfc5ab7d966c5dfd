//! Letter multisets over the lowercase alphabet plus the `?` wildcard.
//!
//! A [`LetterCount`] is a fixed-size tally indexed by letter offset, with one
//! extra slot for the wildcard. Two constructors cover the two ways a letter
//! string is read:
//!
//! - [`LetterCount::count`] starts every letter at zero and tallies what is
//!   present (used for words, available letters and required letters).
//! - [`LetterCount::limiting`] starts every letter at [`UNLIMITED`] and only
//!   the letters actually listed become counted (used for limited letters).
//!
//! Any other character (uppercase letters, apostrophes, accented letters)
//! is tallied in a small overflow map next to the array. Such a character
//! starts at zero in both kinds of multiset, so a limiting multiset caps it
//! at the number of times it is listed, and an unlisted one can only be
//! covered by a wildcard.
//!
//! # Example
//!
//! ```rust
//! use wordtool::letters::{is_subset_of, LetterCount};
//!
//! let budget = LetterCount::count("cat?");
//! let (fits, _) = is_subset_of("coat", &budget);
//! assert!(fits);
//!
//! let (fits, _) = is_subset_of("coot", &budget);
//! assert!(!fits);
//! ```

mod budget;

pub use budget::LetterBudget;

use std::collections::BTreeMap;
use std::fmt;

/// Number of letters in the alphabet tracked by [`LetterCount`].
pub const ALPHABET_SIZE: usize = 26;

/// The wildcard character. In a budget each `?` can stand in for one letter
/// that the budget would otherwise not allow.
pub const WILDCARD: char = '?';

/// Count given to every letter a limiting multiset does not list.
///
/// Words longer than this are not a practical concern, so the value behaves
/// as "no limit".
pub const UNLIMITED: u32 = 100;

const WILDCARD_SLOT: usize = ALPHABET_SIZE;
const SLOTS: usize = ALPHABET_SIZE + 1;

#[inline]
fn slot(c: char) -> Option<usize> {
    match c {
        'a'..='z' => Some(c as usize - 'a' as usize),
        WILDCARD => Some(WILDCARD_SLOT),
        _ => None,
    }
}

#[inline]
fn letter_at(index: usize) -> char {
    (b'a' + index as u8) as char
}

/// Per-character counts: `a..=z` and the `?` wildcard in fixed slots, every
/// other character in an overflow map.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct LetterCount {
    counts: [u32; SLOTS],
    other: BTreeMap<char, u32>,
}

impl LetterCount {
    /// Create a multiset with every count at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally every character occurring in `word`.
    pub fn count(word: &str) -> Self {
        let mut tally = Self::new();
        for c in word.chars() {
            tally.add(c);
        }
        tally
    }

    /// Build a limiting multiset from `letters`.
    ///
    /// Every letter of the alphabet starts at [`UNLIMITED`]. The first
    /// occurrence of a letter in `letters` resets it to zero before counting,
    /// so listed letters end up capped at the number of times they are listed.
    /// The wildcard and characters outside the alphabet start at zero like a
    /// counting multiset.
    pub fn limiting(letters: &str) -> Self {
        let mut limits = Self::new();
        limits.counts[..ALPHABET_SIZE].fill(UNLIMITED);

        let mut listed = [false; ALPHABET_SIZE];
        for c in letters.chars() {
            if let Some(i) = slot(c).filter(|&i| i < ALPHABET_SIZE) {
                if !listed[i] {
                    listed[i] = true;
                    limits.counts[i] = 0;
                }
            }
            limits.add(c);
        }

        limits
    }

    /// Increment the count for `c`, returning the new count.
    #[inline]
    pub fn add(&mut self, c: char) -> u32 {
        let count = match slot(c) {
            Some(i) => &mut self.counts[i],
            None => self.other.entry(c).or_insert(0),
        };
        *count += 1;
        *count
    }

    /// Count held for `c`.
    #[inline]
    pub fn get(&self, c: char) -> u32 {
        match slot(c) {
            Some(i) => self.counts[i],
            None => self.other.get(&c).copied().unwrap_or(0),
        }
    }

    /// Number of wildcards held.
    #[inline]
    pub fn wildcards(&self) -> u32 {
        self.counts[WILDCARD_SLOT]
    }

    /// Letters of the alphabet whose count is exactly zero, in order.
    pub fn zero_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.counts[..ALPHABET_SIZE]
            .iter()
            .enumerate()
            .filter(|(_, &n)| n == 0)
            .map(|(i, _)| letter_at(i))
    }

    /// Iterate over `(character, count)` for every character with a positive
    /// count: alphabet first, then other characters, wildcard last.
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        let letters = self.counts[..ALPHABET_SIZE]
            .iter()
            .enumerate()
            .map(|(i, &n)| (letter_at(i), n));
        let other = self.other.iter().map(|(&c, &n)| (c, n));
        let wildcard = std::iter::once((WILDCARD, self.wildcards()));

        letters.chain(other).chain(wildcard).filter(|&(_, n)| n > 0)
    }

    /// `true` if every count is zero.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl fmt::Debug for LetterCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Check whether `word` can be spelled from `budget`.
///
/// Walks the word one character at a time, keeping a running tally. Each time
/// a character's tally goes over its budget, one wildcard from the budget's
/// `?` slot is spent. When the wildcards run out the walk stops and
/// `(false, partial_tally)` is returned; the partial tally only covers the
/// prefix that was walked and must not be relied upon. On success the tally
/// covers the whole word.
pub fn is_subset_of(word: &str, budget: &LetterCount) -> (bool, LetterCount) {
    let mut tally = LetterCount::new();
    let mut wildcards_used = 0;

    for c in word.chars() {
        if tally.add(c) > budget.get(c) {
            wildcards_used += 1;
            if wildcards_used > budget.wildcards() {
                return (false, tally);
            }
        }
    }

    (true, tally)
}

/// Check that `word` contains every required character at least as many
/// times as `required` asks for.
///
/// A tally already computed for `word` can be passed in to skip recounting.
pub fn contains_at_least(word: &str, required: &LetterCount, tally: Option<&LetterCount>) -> bool {
    let owned;
    let tally = match tally {
        Some(tally) => tally,
        None => {
            owned = LetterCount::count(word);
            &owned
        }
    };

    required.iter().all(|(c, need)| tally.get(c) >= need)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        let tally = LetterCount::count("banana");
        assert_eq!(tally.get('a'), 3);
        assert_eq!(tally.get('n'), 2);
        assert_eq!(tally.get('b'), 1);
        assert_eq!(tally.get('z'), 0);
        assert_eq!(tally.wildcards(), 0);
    }

    #[test]
    fn test_count_wildcards_and_other_characters() {
        let tally = LetterCount::count("a??B-B");
        assert_eq!(tally.get('a'), 1);
        assert_eq!(tally.wildcards(), 2);
        assert_eq!(tally.get('B'), 2);
        assert_eq!(tally.get('-'), 1);
        assert_eq!(tally.get('b'), 0);
    }

    #[test]
    fn test_limiting() {
        let limits = LetterCount::limiting("eex");
        assert_eq!(limits.get('e'), 2);
        assert_eq!(limits.get('x'), 1);
        assert_eq!(limits.get('a'), UNLIMITED);
        assert_eq!(limits.wildcards(), 0);
    }

    #[test]
    fn test_limiting_counts_past_sentinel() {
        let letters = "a".repeat(UNLIMITED as usize + 1);
        let limits = LetterCount::limiting(&letters);
        assert_eq!(limits.get('a'), UNLIMITED + 1);
    }

    #[test]
    fn test_limiting_wildcards() {
        let limits = LetterCount::limiting("q??");
        assert_eq!(limits.get('q'), 1);
        assert_eq!(limits.wildcards(), 2);
    }

    #[test]
    fn test_zero_letters() {
        let budget = LetterCount::count("abcdefghijklmnopqrstuvwx");
        let zeros: Vec<char> = budget.zero_letters().collect();
        assert_eq!(zeros, vec!['y', 'z']);
    }

    #[test]
    fn test_is_subset_exact_fit() {
        let budget = LetterCount::count("cart");
        let (fits, tally) = is_subset_of("cart", &budget);
        assert!(fits);
        assert_eq!(tally, LetterCount::count("cart"));
    }

    #[test]
    fn test_is_subset_over_budget() {
        let budget = LetterCount::count("cart");
        assert!(!is_subset_of("cats", &budget).0);
        assert!(!is_subset_of("attar", &budget).0);
    }

    #[test]
    fn test_is_subset_spends_wildcards() {
        let budget = LetterCount::count("cat?");
        assert!(is_subset_of("scat", &budget).0);
        assert!(is_subset_of("tact", &budget).0);
        assert!(!is_subset_of("stat", &budget).0);
        assert!(!is_subset_of("scab", &budget).0);
    }

    #[test]
    fn test_is_subset_unlisted_characters_need_wildcards() {
        let budget = LetterCount::count("dont");
        assert!(!is_subset_of("don't", &budget).0);

        let budget = LetterCount::count("dont?");
        assert!(is_subset_of("don't", &budget).0);
    }

    #[test]
    fn test_is_subset_listed_characters_outside_alphabet() {
        let budget = LetterCount::count("don't");
        let (fits, tally) = is_subset_of("don't", &budget);
        assert!(fits);
        assert_eq!(tally.get('\''), 1);

        let budget = LetterCount::count("Cat");
        assert!(is_subset_of("Cat", &budget).0);
        assert!(!is_subset_of("cat", &budget).0);
        assert!(!is_subset_of("CCat", &budget).0);
    }

    #[test]
    fn test_limiting_characters_outside_alphabet() {
        let limits = LetterCount::limiting("E'");
        assert_eq!(limits.get('E'), 1);
        assert_eq!(limits.get('\''), 1);
        assert_eq!(limits.get('Z'), 0);
        assert_eq!(limits.get('e'), UNLIMITED);

        assert!(is_subset_of("don't", &limits).0);
        assert!(!is_subset_of("y'all'd", &limits).0);
        assert!(!is_subset_of("Zoe", &limits).0);
    }

    #[test]
    fn test_contains_at_least_characters_outside_alphabet() {
        let required = LetterCount::count("A'");
        assert!(contains_at_least("Ain't", &required, None));
        assert!(!contains_at_least("ain't", &required, None));
        assert!(!contains_at_least("Aint", &required, None));
    }

    #[test]
    fn test_is_subset_of_limiting_budget() {
        let budget = LetterCount::limiting("s");
        assert!(is_subset_of("trains", &budget).0);
        assert!(!is_subset_of("stress", &budget).0);
    }

    #[test]
    fn test_contains_at_least() {
        let required = LetterCount::count("aat");
        assert!(contains_at_least("attar", &required, None));
        assert!(!contains_at_least("tar", &required, None));
    }

    #[test]
    fn test_contains_at_least_reuses_tally() {
        let required = LetterCount::count("z");
        let tally = LetterCount::count("zoo");
        // The supplied tally wins over the word itself.
        assert!(contains_at_least("cat", &required, Some(&tally)));
    }

    #[test]
    fn test_debug_lists_positive_counts() {
        let tally = LetterCount::count("ab?Z");
        assert_eq!(format!("{:?}", tally), "{'a': 1, 'b': 1, 'Z': 1, '?': 1}");
    }
}

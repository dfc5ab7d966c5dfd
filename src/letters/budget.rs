//! The letter supply a word has to be spelled from.

use super::{is_subset_of, LetterCount};

/// Which letters a word may use, and how many of each.
///
/// "Available" and "limited" letters are two readings of a letter string that
/// cannot be active at the same time, so they share one value:
///
/// - [`LetterBudget::Available`]: a closed supply. Letters that are not listed
///   cannot be used at all (unless a `?` wildcard is spent on them).
/// - [`LetterBudget::Limited`]: an open supply. Listed letters are capped at
///   the number of times they are listed; everything else is unlimited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LetterBudget {
    /// No letter supply constraint.
    #[default]
    Unconstrained,
    /// Words must be spelled from exactly these letters.
    Available {
        /// The letters as given.
        letters: String,
        /// Counting multiset of `letters`, wildcards included.
        counts: LetterCount,
    },
    /// Listed letters are capped, others are free.
    Limited {
        /// The letters as given.
        letters: String,
        /// Limiting multiset of `letters`.
        counts: LetterCount,
    },
}

impl LetterBudget {
    /// Closed supply built from `letters`; empty input yields
    /// [`LetterBudget::Unconstrained`].
    pub fn available(letters: &str) -> Self {
        if letters.is_empty() {
            return Self::Unconstrained;
        }
        Self::Available {
            letters: letters.to_string(),
            counts: LetterCount::count(letters),
        }
    }

    /// Open supply capping only the letters in `letters`; empty input yields
    /// [`LetterBudget::Unconstrained`].
    pub fn limited(letters: &str) -> Self {
        if letters.is_empty() {
            return Self::Unconstrained;
        }
        Self::Limited {
            letters: letters.to_string(),
            counts: LetterCount::limiting(letters),
        }
    }

    /// The available-letters string, or `""` when that mode is not active.
    pub fn available_letters(&self) -> &str {
        match self {
            Self::Available { letters, .. } => letters,
            _ => "",
        }
    }

    /// The limited-letters string, or `""` when that mode is not active.
    pub fn limited_letters(&self) -> &str {
        match self {
            Self::Limited { letters, .. } => letters,
            _ => "",
        }
    }

    /// Per-letter budget, if any supply constraint is active.
    pub fn counts(&self) -> Option<&LetterCount> {
        match self {
            Self::Unconstrained => None,
            Self::Available { counts, .. } | Self::Limited { counts, .. } => Some(counts),
        }
    }

    /// `true` unless the budget is [`LetterBudget::Unconstrained`].
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Unconstrained)
    }

    /// Letters this budget rules out entirely.
    ///
    /// Only a closed supply without wildcards rules anything out: every letter
    /// it holds zero of. A limited supply never does, and neither does a closed
    /// supply holding at least one `?`.
    pub fn unavailable_letters(&self) -> Vec<char> {
        match self {
            Self::Available { counts, .. } if counts.wildcards() == 0 => {
                counts.zero_letters().collect()
            }
            _ => Vec::new(),
        }
    }

    /// Check `word` against the budget.
    ///
    /// Returns whether the word fits, and the word's letter tally when one was
    /// computed (only on success).
    pub fn admits(&self, word: &str) -> (bool, Option<LetterCount>) {
        match self.counts() {
            None => (true, None),
            Some(counts) => match is_subset_of(word, counts) {
                (true, tally) => (true, Some(tally)),
                (false, _) => (false, None),
            },
        }
    }
}

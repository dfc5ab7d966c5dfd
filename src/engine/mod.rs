//! The constraint engine.
//!
//! [`WordTool`] owns a word list and a set of constraints, and answers one
//! question: which words satisfy every active constraint?
//!
//! Constraints split into two groups:
//!
//! - **Internal tests** (length bounds, pattern, excluded letters, letter
//!   budget, required letters) are owned by the engine. Their combined result
//!   is cached and reused until a constraint or the word list changes.
//! - **Extra tests** are [`WordFilter`]s supplied by the caller. They run on
//!   every query and are never cached.
//!
//! # Example
//!
//! ```rust
//! use wordtool::WordTool;
//!
//! let mut tool = WordTool::with_word_list(["cat", "cart", "art", "tar", "rat", "cats"]);
//! tool.set_available_letters("cart")?;
//! assert_eq!(tool.find_words(), vec!["cat", "cart", "art", "tar", "rat"]);
//!
//! tool.set_pattern("^c")?;
//! assert_eq!(tool.find_words(), vec!["cat", "cart"]);
//! # Ok::<(), wordtool::WordToolError>(())
//! ```

mod constraints;
mod filter;

pub use constraints::Constraints;
pub use filter::WordFilter;

use crate::error::{Result, WordToolError};
use crate::letters::{contains_at_least, LetterBudget, LetterCount};
use crate::wordlist;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info, trace};

const AVAILABLE_LETTERS: &str = "available letters";
const LIMITED_LETTERS: &str = "limited letters";

/// Freshness of the internal-test results.
#[derive(Debug, Clone, Default)]
enum CacheState {
    /// Must be rebuilt before the next query.
    #[default]
    Stale,
    /// Words that passed every internal test, in word-list order.
    Fresh(Vec<String>),
}

/// Finds words in a word list that satisfy a set of letter and pattern
/// constraints.
pub struct WordTool {
    words: Vec<String>,
    source: String,

    budget: LetterBudget,
    excluded_letters: String,
    exclusions: BTreeSet<char>,
    included_letters: String,
    required: Option<LetterCount>,
    pattern: String,
    regex: Option<Regex>,

    min_length: usize,
    effective_min_length: usize,
    max_length: usize,
    effective_max_length: usize,

    extra_tests: Vec<Box<dyn WordFilter>>,
    cache: CacheState,
}

impl WordTool {
    /// Create an engine over the default word list: the file named by
    /// `$WORDTOOL_DICTIONARY` if set, the bundled list otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`WordToolError::InvalidWordListSource`] if the file named by
    /// the environment cannot be read.
    pub fn new() -> Result<Self> {
        let mut tool = Self::empty();
        tool.load_default_word_list()?;
        Ok(tool)
    }

    /// Create an engine over the word list compiled into the crate.
    pub fn with_bundled_word_list() -> Self {
        let mut tool = Self::empty();
        tool.install_word_list(
            wordlist::bundled_word_list(),
            wordlist::BUNDLED_SOURCE.to_string(),
        );
        tool
    }

    /// Create an engine over the word list stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`WordToolError::InvalidWordListSource`] if the file cannot be
    /// read.
    pub fn from_dictionary_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut tool = Self::empty();
        tool.set_dictionary_file(path)?;
        Ok(tool)
    }

    /// Create an engine over lines read from `reader`; `name` describes the
    /// source in errors.
    ///
    /// # Errors
    ///
    /// Returns [`WordToolError::InvalidWordListSource`] if reading fails.
    pub fn from_reader<R: BufRead>(reader: R, name: &str) -> Result<Self> {
        let mut tool = Self::empty();
        tool.read_word_list_from(reader, name)?;
        Ok(tool)
    }

    /// Create an engine over the given words.
    pub fn with_word_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tool = Self::empty();
        tool.set_word_list(words);
        tool
    }

    fn empty() -> Self {
        Self {
            words: Vec::new(),
            source: String::new(),
            budget: LetterBudget::Unconstrained,
            excluded_letters: String::new(),
            exclusions: BTreeSet::new(),
            included_letters: String::new(),
            required: None,
            pattern: String::new(),
            regex: None,
            min_length: 0,
            effective_min_length: 0,
            max_length: 0,
            effective_max_length: 0,
            extra_tests: Vec::new(),
            cache: CacheState::Stale,
        }
    }

    // ---- Word list ----

    /// The words being searched, in their original order.
    pub fn word_list(&self) -> &[String] {
        &self.words
    }

    /// Where the word list came from: a file path, a reader name,
    /// `"<bundled>"` for the embedded list, or `"<custom>"` for a list
    /// assigned directly.
    pub fn dictionary_source(&self) -> &str {
        &self.source
    }

    /// Replace the word list.
    pub fn set_word_list<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
        self.source = "<custom>".to_string();
        self.invalidate();
        debug!(words = self.words.len(), "word list replaced");
    }

    /// Replace the word list with the contents of the file at `path`.
    ///
    /// An empty path selects the default word list, as [`new`](Self::new)
    /// does.
    ///
    /// # Errors
    ///
    /// Returns [`WordToolError::InvalidWordListSource`] if the file cannot be
    /// read. The current word list stays in place.
    pub fn set_dictionary_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return self.load_default_word_list();
        }

        let words = wordlist::load_word_list(path)?;
        self.install_word_list(words, path.display().to_string());
        Ok(())
    }

    fn load_default_word_list(&mut self) -> Result<()> {
        match wordlist::default_dictionary_path() {
            Some(path) => {
                let words = wordlist::load_word_list(&path)?;
                self.install_word_list(words, path.display().to_string());
            }
            None => self.install_word_list(
                wordlist::bundled_word_list(),
                wordlist::BUNDLED_SOURCE.to_string(),
            ),
        }
        Ok(())
    }

    /// Replace the word list with lines read from `reader`.
    ///
    /// `name` describes the source in errors and in
    /// [`dictionary_source`](Self::dictionary_source).
    ///
    /// # Errors
    ///
    /// Returns [`WordToolError::InvalidWordListSource`] if reading fails. The
    /// current word list stays in place.
    pub fn read_word_list_from<R: BufRead>(&mut self, reader: R, name: &str) -> Result<()> {
        let words = wordlist::read_word_list(reader).map_err(|source| {
            WordToolError::InvalidWordListSource {
                name: name.to_string(),
                source,
            }
        })?;
        self.install_word_list(words, name.to_string());
        Ok(())
    }

    fn install_word_list(&mut self, words: Vec<String>, source: String) {
        info!(source = %source, words = words.len(), "loaded word list");
        self.words = words;
        self.source = source;
        self.invalidate();
    }

    /// `true` if `word` is in the word list verbatim.
    pub fn check_for(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    // ---- Letter budget ----

    /// The letter supply currently in force.
    pub fn letter_budget(&self) -> &LetterBudget {
        &self.budget
    }

    /// Letters words must be spelled from (`""` when inactive).
    pub fn available_letters(&self) -> &str {
        self.budget.available_letters()
    }

    /// Restrict matches to words spelled from `letters`.
    ///
    /// Each letter may be used as many times as it occurs in `letters`. Every
    /// `?` lets a word use one letter it would otherwise not be allowed. An
    /// empty string lifts the restriction.
    ///
    /// # Errors
    ///
    /// Returns [`WordToolError::ConflictingConstraint`] if `letters` is
    /// non-empty while limited letters are set. Nothing changes in that case.
    pub fn set_available_letters(&mut self, letters: &str) -> Result<()> {
        if letters == self.budget.available_letters() {
            return Ok(());
        }
        if !letters.is_empty() && !self.budget.limited_letters().is_empty() {
            return Err(WordToolError::ConflictingConstraint {
                attempted: AVAILABLE_LETTERS,
                active: LIMITED_LETTERS,
            });
        }

        trace!(letters, "available letters changed");
        self.budget = LetterBudget::available(letters);
        self.invalidate();
        self.update_effective_max_length();
        self.update_exclusions();
        Ok(())
    }

    /// Letters in limited supply (`""` when inactive).
    pub fn limited_letters(&self) -> &str {
        self.budget.limited_letters()
    }

    /// Cap the letters in `letters` at the number of times each is listed,
    /// leaving all other letters unlimited. An empty string lifts the cap.
    ///
    /// # Errors
    ///
    /// Returns [`WordToolError::ConflictingConstraint`] if `letters` is
    /// non-empty while available letters are set. Nothing changes in that
    /// case.
    pub fn set_limited_letters(&mut self, letters: &str) -> Result<()> {
        if letters == self.budget.limited_letters() {
            return Ok(());
        }
        if !letters.is_empty() && !self.budget.available_letters().is_empty() {
            return Err(WordToolError::ConflictingConstraint {
                attempted: LIMITED_LETTERS,
                active: AVAILABLE_LETTERS,
            });
        }

        trace!(letters, "limited letters changed");
        self.budget = LetterBudget::limited(letters);
        self.invalidate();
        self.update_exclusions();
        Ok(())
    }

    // ---- Excluded / included letters ----

    /// Letters no match may contain.
    pub fn excluded_letters(&self) -> &str {
        &self.excluded_letters
    }

    /// Forbid every character of `letters` from appearing in a match.
    pub fn set_excluded_letters(&mut self, letters: &str) {
        trace!(letters, "excluded letters changed");
        self.excluded_letters = letters.to_string();
        self.invalidate();
        self.update_exclusions();
    }

    /// Every character a match must not contain: the excluded letters, plus
    /// the letters a wildcard-free available-letter supply holds none of.
    pub fn effective_exclusions(&self) -> &BTreeSet<char> {
        &self.exclusions
    }

    fn update_exclusions(&mut self) {
        let mut exclusions: BTreeSet<char> = self.excluded_letters.chars().collect();
        exclusions.extend(self.budget.unavailable_letters());
        self.exclusions = exclusions;
    }

    /// Letters every match must contain.
    pub fn included_letters(&self) -> &str {
        &self.included_letters
    }

    /// Require every match to contain each letter of `letters` at least as
    /// many times as it occurs there.
    pub fn set_included_letters(&mut self, letters: &str) {
        trace!(letters, "included letters changed");
        self.included_letters = letters.to_string();
        self.required = (!letters.is_empty()).then(|| LetterCount::count(letters));
        self.invalidate();
        self.update_effective_min_length();
    }

    // ---- Pattern ----

    /// The regular expression matches must contain a match for.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Require every match to contain a match for the regular expression
    /// `pattern`. The search is unanchored; use `^` and `$` to pin it. An
    /// empty string removes the requirement.
    ///
    /// # Errors
    ///
    /// Returns [`WordToolError::InvalidPattern`] if `pattern` does not
    /// compile. Nothing changes in that case.
    pub fn set_pattern(&mut self, pattern: &str) -> Result<()> {
        let regex = if pattern.is_empty() {
            None
        } else {
            let regex = Regex::new(pattern).map_err(|source| WordToolError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            Some(regex)
        };

        trace!(pattern, "pattern changed");
        self.pattern = pattern.to_string();
        self.regex = regex;
        self.invalidate();
        Ok(())
    }

    // ---- Length bounds ----

    /// Explicit minimum length (0 when unset).
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Minimum length in force: the explicit minimum combined with the number
    /// of included letters, whichever is larger. 0 means no bound.
    pub fn effective_min_length(&self) -> usize {
        self.effective_min_length
    }

    /// Set the explicit minimum length; 0 removes it.
    pub fn set_min_length(&mut self, length: usize) {
        trace!(length, "minimum length changed");
        self.min_length = length;
        self.invalidate();
        self.update_effective_min_length();
    }

    /// Explicit maximum length (0 when unset).
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Maximum length in force: the explicit maximum combined with the number
    /// of available letters, whichever is smaller. 0 means no bound.
    pub fn effective_max_length(&self) -> usize {
        self.effective_max_length
    }

    /// Set the explicit maximum length; 0 removes it.
    pub fn set_max_length(&mut self, length: usize) {
        trace!(length, "maximum length changed");
        self.max_length = length;
        self.invalidate();
        self.update_effective_max_length();
    }

    fn update_effective_max_length(&mut self) {
        let implied = self.budget.available_letters().chars().count();
        self.effective_max_length = match (self.max_length, implied) {
            (0, implied) => implied,
            (explicit, 0) => explicit,
            (explicit, implied) => explicit.min(implied),
        };
    }

    fn update_effective_min_length(&mut self) {
        let implied = self.included_letters.chars().count();
        self.effective_min_length = match (self.min_length, implied) {
            (0, implied) => implied,
            (explicit, 0) => explicit,
            (explicit, implied) => explicit.max(implied),
        };
    }

    // ---- Bulk access ----

    /// Snapshot of every raw constraint.
    pub fn constraints(&self) -> Constraints {
        Constraints {
            available_letters: self.available_letters().to_string(),
            limited_letters: self.limited_letters().to_string(),
            excluded_letters: self.excluded_letters.clone(),
            included_letters: self.included_letters.clone(),
            pattern: self.pattern.clone(),
            min_length: self.min_length,
            max_length: self.max_length,
        }
    }

    /// Install every constraint in `constraints`.
    ///
    /// Switching between available and limited letters is allowed here: the
    /// one being dropped is cleared before the other is set.
    ///
    /// # Errors
    ///
    /// Fails without changing anything if `constraints` sets both available
    /// and limited letters, or if its pattern does not compile.
    pub fn apply(&mut self, constraints: &Constraints) -> Result<()> {
        if !constraints.available_letters.is_empty() && !constraints.limited_letters.is_empty() {
            return Err(WordToolError::ConflictingConstraint {
                attempted: LIMITED_LETTERS,
                active: AVAILABLE_LETTERS,
            });
        }

        // Only the pattern can still fail; set it before anything else.
        self.set_pattern(&constraints.pattern)?;

        if constraints.limited_letters.is_empty() {
            self.set_limited_letters("")?;
            self.set_available_letters(&constraints.available_letters)?;
        } else {
            self.set_available_letters("")?;
            self.set_limited_letters(&constraints.limited_letters)?;
        }
        self.set_excluded_letters(&constraints.excluded_letters);
        self.set_included_letters(&constraints.included_letters);
        self.set_min_length(constraints.min_length);
        self.set_max_length(constraints.max_length);
        Ok(())
    }

    // ---- Extra tests ----

    /// Add a test every match must also pass. Tests run in the order added.
    pub fn add_extra_test<F>(&mut self, test: F)
    where
        F: WordFilter + 'static,
    {
        self.extra_tests.push(Box::new(test));
    }

    /// Remove all extra tests.
    pub fn clear_extra_tests(&mut self) {
        self.extra_tests.clear();
    }

    /// Number of extra tests installed.
    pub fn extra_test_count(&self) -> usize {
        self.extra_tests.len()
    }

    // ---- Evaluation ----

    /// `true` if `word` passes every internal test.
    ///
    /// Tests run cheapest first and stop at the first failure: length bounds,
    /// pattern, excluded letters, letter budget, required letters.
    pub fn passes_internal_tests(&self, word: &str) -> bool {
        let length = word.chars().count();
        if self.effective_min_length > 0 && length < self.effective_min_length {
            return false;
        }
        if self.effective_max_length > 0 && length > self.effective_max_length {
            return false;
        }
        if let Some(regex) = &self.regex {
            if !regex.is_match(word) {
                return false;
            }
        }
        if !self.exclusions.is_empty() && word.chars().any(|c| self.exclusions.contains(&c)) {
            return false;
        }

        let (fits, tally) = self.budget.admits(word);
        if !fits {
            return false;
        }

        match &self.required {
            Some(required) => contains_at_least(word, required, tally.as_ref()),
            None => true,
        }
    }

    /// `true` if `word` passes every extra test.
    pub fn passes_extra_tests(&self, word: &str) -> bool {
        self.extra_tests.iter().all(|test| test.accepts(word))
    }

    /// `true` if `word` passes every internal and extra test.
    ///
    /// The word does not have to be in the word list.
    pub fn is_word_valid(&self, word: &str) -> bool {
        self.passes_internal_tests(word) && self.passes_extra_tests(word)
    }

    /// All words in the word list passing every test, in word-list order.
    ///
    /// Internal-test results are reused from the previous call unless a
    /// constraint or the word list has changed since. Extra tests always run.
    pub fn find_words(&mut self) -> Vec<String> {
        let cached = match std::mem::take(&mut self.cache) {
            CacheState::Fresh(words) => words,
            CacheState::Stale => self.rebuild_cache(),
        };

        let found = cached
            .iter()
            .filter(|w| self.passes_extra_tests(w))
            .cloned()
            .collect();

        self.cache = CacheState::Fresh(cached);
        found
    }

    /// `true` if the next [`find_words`](Self::find_words) call can reuse the
    /// internal-test results.
    pub fn is_cache_fresh(&self) -> bool {
        matches!(self.cache, CacheState::Fresh(_))
    }

    fn rebuild_cache(&self) -> Vec<String> {
        let matches: Vec<String> = self
            .words
            .iter()
            .filter(|w| self.passes_internal_tests(w))
            .cloned()
            .collect();
        debug!(
            candidates = self.words.len(),
            matches = matches.len(),
            "rebuilt match cache"
        );
        matches
    }

    #[inline]
    fn invalidate(&mut self) {
        self.cache = CacheState::Stale;
    }
}

impl fmt::Debug for WordTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordTool")
            .field("source", &self.source)
            .field("words", &self.words.len())
            .field("constraints", &self.constraints())
            .field("extra_tests", &self.extra_tests.len())
            .field("cache_fresh", &self.is_cache_fresh())
            .finish()
    }
}

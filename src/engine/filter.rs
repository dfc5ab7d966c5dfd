//! Caller-supplied word tests.

/// A test a word must pass, supplied from outside the engine.
///
/// Extra tests are never cached: they run again on every query, so they may
/// depend on state that changes between calls. Any `Fn(&str) -> bool` closure
/// is a `WordFilter`.
///
/// # Example
///
/// ```rust
/// use wordtool::WordTool;
///
/// let mut tool = WordTool::with_word_list(["level", "lever", "radar"]);
/// tool.add_extra_test(|w: &str| w.chars().eq(w.chars().rev()));
/// assert_eq!(tool.find_words(), vec!["level", "radar"]);
/// ```
pub trait WordFilter {
    /// Return `true` if `word` passes.
    fn accepts(&self, word: &str) -> bool;
}

impl<F> WordFilter for F
where
    F: Fn(&str) -> bool,
{
    #[inline]
    fn accepts(&self, word: &str) -> bool {
        self(word)
    }
}

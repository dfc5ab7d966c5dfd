//! A plain bundle of constraint values.

/// Every raw constraint a [`WordTool`](crate::WordTool) accepts, as one value.
///
/// Empty strings and zero lengths mean "not constrained". Use
/// [`WordTool::apply`](crate::WordTool::apply) to install a whole bundle and
/// [`WordTool::constraints`](crate::WordTool::constraints) to read one back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    /// Closed letter supply (conflicts with `limited_letters`).
    pub available_letters: String,
    /// Capped letters, all others free (conflicts with `available_letters`).
    pub limited_letters: String,
    /// Letters no match may contain.
    pub excluded_letters: String,
    /// Letters every match must contain, with multiplicity.
    pub included_letters: String,
    /// Regular expression a match must contain a match for.
    pub pattern: String,
    /// Minimum word length in characters.
    pub min_length: usize,
    /// Maximum word length in characters.
    pub max_length: usize,
}

impl Constraints {
    /// `true` if no constraint is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

use crate::error::DiffResult;
use crate::myers;
use crate::patch::Patch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of context elements kept on each side of a chunk by default.
pub const DEFAULT_CONTEXT: usize = 3;

/// Settings for computing a [`Patch`].
///
/// ```
/// use seqpatch::DiffOptions;
///
/// let options = DiffOptions::new().context(1);
/// let patch = options.diff(&["a", "b", "c"], &["a", "x", "c"]).unwrap();
/// assert_eq!(patch.deltas()[0].original().before(), ["a"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiffOptions {
    context: usize,
    max_edit_distance: Option<usize>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            context: DEFAULT_CONTEXT,
            max_edit_distance: None,
        }
    }
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many unchanged elements are kept before and after each chunk.
    /// Zero disables context verification.
    pub fn context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    /// Aborts the search once the edit distance exceeds `limit`.
    pub fn max_edit_distance(mut self, limit: usize) -> Self {
        self.max_edit_distance = Some(limit);
        self
    }

    pub fn context_width(&self) -> usize {
        self.context
    }

    pub fn edit_distance_limit(&self) -> Option<usize> {
        self.max_edit_distance
    }

    /// Diffs two sequences comparing elements with `==`.
    pub fn diff<T: PartialEq + Clone>(&self, original: &[T], revised: &[T]) -> DiffResult<Patch<T>> {
        self.diff_by(original, revised, |a, b| a == b)
    }

    /// Diffs two sequences comparing elements with `eq`.
    pub fn diff_by<T, F>(&self, original: &[T], revised: &[T], eq: F) -> DiffResult<Patch<T>>
    where
        T: Clone,
        F: Fn(&T, &T) -> bool,
    {
        let changes = myers::diff_with_limit(original, revised, eq, self.max_edit_distance)?;
        Ok(Patch::build(original, revised, &changes, self.context))
    }
}

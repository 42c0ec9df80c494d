use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of an edit span.
/// removed from the original (Delete)
/// added from the revised (Insert)
/// replaced by revised elements (Change)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChangeKind {
    Delete,
    Insert,
    Change,
}

/// A contiguous edit span produced by the Myers search.
///
/// `original` and `revised` are half-open index ranges into the two inputs.
/// A Delete has an empty `revised` range, an Insert an empty `original` one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub kind: ChangeKind,
    pub original: Range<usize>,
    pub revised: Range<usize>,
}

impl Change {
    pub fn new(kind: ChangeKind, original: Range<usize>, revised: Range<usize>) -> Self {
        Change {
            kind,
            original,
            revised,
        }
    }
}

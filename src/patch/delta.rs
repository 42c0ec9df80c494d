use super::Chunk;
use crate::error::PatchError;
use crate::myers::ChangeKind;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One typed edit: the original-side chunk it replaces and the revised-side
/// chunk that replaces it.
///
/// For an Insert the original chunk is empty, for a Delete the revised one is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Delta<T> {
    kind: ChangeKind,
    original: Chunk<T>,
    revised: Chunk<T>,
}

impl<T> Delta<T> {
    pub fn new(kind: ChangeKind, original: Chunk<T>, revised: Chunk<T>) -> Self {
        Delta {
            kind,
            original,
            revised,
        }
    }

    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    pub fn original(&self) -> &Chunk<T> {
        &self.original
    }

    pub fn revised(&self) -> &Chunk<T> {
        &self.revised
    }

    pub(crate) fn map_chunks<F>(self, mut f: F) -> Self
    where
        F: FnMut(Chunk<T>) -> Chunk<T>,
    {
        Delta {
            kind: self.kind,
            original: f(self.original),
            revised: f(self.revised),
        }
    }

    /// Checks that neither side of this delta touches the same side of `other`.
    pub fn verify_disjoint(&self, other: &Delta<T>) -> Result<(), PatchError> {
        self.original.verify_disjoint(&other.original)?;
        self.revised.verify_disjoint(&other.revised)
    }
}

impl<T: PartialEq> Delta<T> {
    /// Verifies the original chunk, content and context, against `target`.
    pub fn verify(&self, target: &[T]) -> Result<(), PatchError> {
        self.original.verify(target)
    }
}

impl<T: Clone> Delta<T> {
    /// Replaces the original chunk's elements with the revised ones, at the
    /// original position.
    ///
    /// Only bounds are checked; use [`Delta::verify`] to check content first.
    pub fn apply_to(&self, target: &mut Vec<T>) -> Result<(), PatchError> {
        splice(target, &self.original, &self.revised)
    }

    /// The inverse of [`Delta::apply_to`]: replaces the revised chunk's
    /// elements with the original ones, at the revised position.
    pub fn restore(&self, target: &mut Vec<T>) -> Result<(), PatchError> {
        splice(target, &self.revised, &self.original)
    }
}

fn splice<T: Clone>(target: &mut Vec<T>, from: &Chunk<T>, to: &Chunk<T>) -> Result<(), PatchError> {
    let range = from.range_within(target.len())?;
    target.splice(range, to.lines().iter().cloned());
    Ok(())
}

struct Lines<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for Lines<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, line) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{line}")?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Display> fmt::Display for Delta<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.original.position();
        match self.kind {
            ChangeKind::Insert => write!(
                f,
                "[InsertDelta, position: {position}, lines: {}]",
                Lines(self.revised.lines())
            ),
            ChangeKind::Delete => write!(
                f,
                "[DeleteDelta, position: {position}, lines: {}]",
                Lines(self.original.lines())
            ),
            ChangeKind::Change => write!(
                f,
                "[ChangeDelta, position: {position}, lines: {} to {}]",
                Lines(self.original.lines()),
                Lines(self.revised.lines())
            ),
        }
    }
}

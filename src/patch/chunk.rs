use crate::error::PatchError;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A positioned slice of one sequence, with the elements around it.
///
/// `lines` is the slice `[position, position + lines.len())` of the sequence
/// the chunk was taken from. `before` and `after` hold up to the context width
/// of neighbouring elements and are only used for verification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chunk<T> {
    position: usize,
    lines: Vec<T>,
    before: Vec<T>,
    after: Vec<T>,
}

impl<T> Chunk<T> {
    pub fn new(position: usize, lines: Vec<T>) -> Self {
        Chunk {
            position,
            lines,
            before: Vec::new(),
            after: Vec::new(),
        }
    }

    pub fn with_context(mut self, before: Vec<T>, after: Vec<T>) -> Self {
        self.before = before;
        self.after = after;
        self
    }

    /// Replaces the content, keeping position and context.
    pub fn with_lines(mut self, lines: Vec<T>) -> Self {
        self.lines = lines;
        self
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn lines(&self) -> &[T] {
        &self.lines
    }

    pub fn before(&self) -> &[T] {
        &self.before
    }

    pub fn after(&self) -> &[T] {
        &self.after
    }

    pub fn size(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index one past the last element of the chunk, saturating at `usize::MAX`.
    pub fn end(&self) -> usize {
        self.position.saturating_add(self.lines.len())
    }

    pub fn range(&self) -> Range<usize> {
        self.position..self.end()
    }

    /// The chunk's range within a sequence of length `len`.
    pub(crate) fn range_within(&self, len: usize) -> Result<Range<usize>, PatchError> {
        match self.position.checked_add(self.lines.len()) {
            Some(end) if end <= len => Ok(self.position..end),
            _ => Err(PatchError::OutOfBounds {
                position: self.position,
                size: self.size(),
                len,
            }),
        }
    }

    /// Checks that this chunk and `other` leave each other at least one
    /// position apart.
    ///
    /// Fails when the span covering both chunks is not longer than their
    /// combined size, i.e. when they intersect or touch.
    pub fn verify_disjoint(&self, other: &Chunk<T>) -> Result<(), PatchError> {
        let start = self.position.min(other.position);
        let end = self.end().max(other.end());
        if end - start <= self.size().saturating_add(other.size()) {
            return Err(PatchError::Overlap {
                position: self.position,
                other: other.position,
            });
        }
        Ok(())
    }
}

impl<T: PartialEq> Chunk<T> {
    /// Verifies that this chunk's content and surroundings match `target`.
    pub fn verify(&self, target: &[T]) -> Result<(), PatchError> {
        let end = self.range_within(target.len())?.end;
        if let Some(offset) = target[self.position..end]
            .iter()
            .zip(&self.lines)
            .position(|(t, l)| t != l)
        {
            return Err(PatchError::ContentMismatch {
                position: self.position + offset,
            });
        }

        let before_matches = self
            .position
            .checked_sub(self.before.len())
            .is_some_and(|start| target[start..self.position] == self.before[..]);
        if !before_matches {
            return Err(PatchError::BeforeMismatch {
                position: self.position,
            });
        }

        let after_matches = end.checked_add(self.after.len()).is_some_and(|after_end| {
            after_end <= target.len() && target[end..after_end] == self.after[..]
        });
        if !after_matches {
            return Err(PatchError::AfterMismatch { position: end });
        }
        Ok(())
    }
}

/// Cuts `range` out of `seq` together with up to `context` elements on each
/// side, clamped at the sequence edges.
///
/// # Panics
///
/// Panics if `range` is not within `seq`.
pub(crate) fn chunk_of<T: Clone>(seq: &[T], range: Range<usize>, context: usize) -> Chunk<T> {
    let before_start = range.start.saturating_sub(context);
    let after_end = range.end.saturating_add(context).min(seq.len());
    Chunk::new(range.start, seq[range.clone()].to_vec())
        .with_context(seq[before_start..range.start].to_vec(), seq[range.end..after_end].to_vec())
}

mod chunk;
mod delta;

pub use chunk::Chunk;
pub use delta::Delta;

use crate::error::PatchError;
use crate::myers::Change;
use chunk::chunk_of;
use std::fmt;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The deltas between an original and a revised sequence, ordered by
/// ascending original position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Patch<T> {
    deltas: Vec<Delta<T>>,
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch { deltas: Vec::new() }
    }
}

impl<T> Patch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Patch {
            deltas: Vec::with_capacity(capacity),
        }
    }

    /// Adds a delta after any delta with the same or a lower original position.
    pub fn add_delta(&mut self, delta: Delta<T>) {
        let position = delta.original().position();
        let at = self
            .deltas
            .partition_point(|d| d.original().position() <= position);
        self.deltas.insert(at, delta);
    }

    pub fn deltas(&self) -> &[Delta<T>] {
        &self.deltas
    }

    pub fn into_deltas(self) -> Vec<Delta<T>> {
        self.deltas
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Delta<T>> {
        self.deltas.iter()
    }

    /// Checks every delta of this patch against every delta of `other`, for
    /// callers combining independently computed patches.
    pub fn verify_disjoint(&self, other: &Patch<T>) -> Result<(), PatchError> {
        for delta in &self.deltas {
            for other_delta in &other.deltas {
                delta.verify_disjoint(other_delta)?;
            }
        }
        Ok(())
    }
}

impl<T: Clone> Patch<T> {
    /// Builds a patch from the spans computed by [`crate::myers::diff`],
    /// attaching up to `context` elements before and after each chunk.
    ///
    /// # Panics
    ///
    /// Panics if a span's range lies outside its sequence.
    pub fn build(original: &[T], revised: &[T], changes: &[Change], context: usize) -> Self {
        changes
            .iter()
            .map(|change| {
                Delta::new(
                    change.kind,
                    chunk_of(original, change.original.clone(), context),
                    chunk_of(revised, change.revised.clone(), context),
                )
            })
            .collect()
    }

    /// Turns the revised sequence back into the original. Opposite of
    /// [`Patch::apply`].
    ///
    /// Content is not verified, only positions are bounds-checked.
    pub fn restore(&self, target: &[T]) -> Result<Vec<T>, PatchError> {
        debug!(deltas = self.deltas.len(), target_len = target.len(), "restoring patch");
        let mut result = target.to_vec();
        for delta in self.deltas.iter().rev() {
            delta.restore(&mut result)?;
            trace!(kind = ?delta.kind(), position = delta.revised().position(), "restored delta");
        }
        Ok(result)
    }
}

impl<T: PartialEq> Patch<T> {
    /// Verifies every delta against `target` without changing anything.
    pub fn verify(&self, target: &[T]) -> Result<(), PatchError> {
        self.deltas.iter().try_for_each(|delta| delta.verify(target))
    }
}

impl<T: PartialEq + Clone> Patch<T> {
    /// Applies the patch to a copy of `target`, which should be the original
    /// sequence, and returns the revised one.
    ///
    /// Deltas are applied from the last position to the first, so that each
    /// one still finds its position unshifted. The first delta that doesn't
    /// match `target` aborts with its error.
    pub fn apply(&self, target: &[T]) -> Result<Vec<T>, PatchError> {
        debug!(deltas = self.deltas.len(), target_len = target.len(), "applying patch");
        let mut result = target.to_vec();
        for delta in self.deltas.iter().rev() {
            // checked against the input: later deltas may already have
            // rewritten this one's trailing context in `result`
            if let Err(e) = delta.verify(target) {
                debug!(position = delta.original().position(), error = %e, "delta does not match target");
                return Err(e);
            }
            delta.apply_to(&mut result)?;
            trace!(kind = ?delta.kind(), position = delta.original().position(), "applied delta");
        }
        Ok(result)
    }
}

impl<T> FromIterator<Delta<T>> for Patch<T> {
    fn from_iter<I: IntoIterator<Item = Delta<T>>>(iter: I) -> Self {
        let mut deltas: Vec<Delta<T>> = iter.into_iter().collect();
        deltas.sort_by_key(|d| d.original().position());
        Patch { deltas }
    }
}

impl<T> IntoIterator for Patch<T> {
    type Item = Delta<T>;
    type IntoIter = std::vec::IntoIter<Delta<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.deltas.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Patch<T> {
    type Item = &'a Delta<T>;
    type IntoIter = std::slice::Iter<'a, Delta<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.deltas.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Patch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Patch{{deltas=[")?;
        for (i, delta) in self.deltas.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{delta}")?;
        }
        write!(f, "]}}")
    }
}

// deserialized deltas go through `FromIterator` to restore the ordering
#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw<T> {
            deltas: Vec<Delta<T>>,
        }
        let raw = Raw::<T>::deserialize(deserializer)?;
        Ok(raw.deltas.into_iter().collect())
    }
}

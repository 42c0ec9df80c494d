//! Diffing and patching of sequences.
//!
//! [`diff`] computes the shortest edit script between two sequences (Myers'
//! algorithm) and returns it as a [`Patch`] of typed deltas, each carrying a
//! bit of surrounding context. [`patch`] turns the original sequence into the
//! revised one after checking that every delta still matches, and [`unpatch`]
//! goes the other way.
//!
//! ```
//! let original = vec!["aaa", "bbb", "ccc"];
//! let revised = vec!["aaa", "zzz", "ccc"];
//!
//! let p = seqpatch::diff(&original, &revised, 1).unwrap();
//! assert_eq!(p.to_string(), "Patch{deltas=[[ChangeDelta, position: 1, lines: [bbb] to [zzz]]]}");
//! assert_eq!(seqpatch::patch(&original, &p).unwrap(), revised);
//! assert_eq!(seqpatch::unpatch(&revised, &p).unwrap(), original);
//! ```

pub mod error;
pub mod myers;
pub mod options;
pub mod patch;
pub mod text;

pub use error::{DiffError, DiffResult, PatchError};
pub use myers::{Change, ChangeKind};
pub use options::DiffOptions;
pub use patch::{Chunk, Delta, Patch};

/// Computes the patch turning `original` into `revised`, keeping up to
/// `context` elements around each delta.
pub fn diff<T: PartialEq + Clone>(
    original: &[T],
    revised: &[T],
    context: usize,
) -> DiffResult<Patch<T>> {
    DiffOptions::new().context(context).diff(original, revised)
}

/// Same as [`diff`], with `eq` deciding which elements are equal.
pub fn diff_by<T, F>(original: &[T], revised: &[T], eq: F, context: usize) -> DiffResult<Patch<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    DiffOptions::new().context(context).diff_by(original, revised, eq)
}

/// Applies `patch` to `original`, returning the revised sequence.
pub fn patch<T: PartialEq + Clone>(original: &[T], patch: &Patch<T>) -> Result<Vec<T>, PatchError> {
    patch.apply(original)
}

/// Reverts `patch` on `revised`, returning the original sequence.
pub fn unpatch<T: Clone>(revised: &[T], patch: &Patch<T>) -> Result<Vec<T>, PatchError> {
    patch.restore(revised)
}

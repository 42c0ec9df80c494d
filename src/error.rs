//! Error types for diffing and patching.

/// Failure of the edit-script search.
///
/// Apart from [`DiffError::EditDistanceExceeded`], which is only returned when
/// the caller sets a budget, these indicate a defect in the search rather than
/// a problem with the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// The search ran out of edit distances without reaching the end of both sequences.
    #[error("could not find a diff path")]
    NoPath,

    /// The backtrace found a snake where an insert or delete was expected.
    #[error("bad diff path: found snake when looking for an edit")]
    MalformedPath,

    /// The frontier was read on a diagonal that was never reached.
    #[error("diagonal {k} was read before it was reached")]
    MissingDiagonal { k: isize },

    /// The edit distance is larger than the configured limit.
    #[error("edit distance exceeds the limit of {limit}")]
    EditDistanceExceeded { limit: usize },
}

/// A patch (or one of its chunks) does not fit the target sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    #[error("incorrect chunk: position {position} with size {size} exceeds target of length {len}")]
    OutOfBounds {
        position: usize,
        size: usize,
        len: usize,
    },

    #[error("incorrect chunk: content doesn't match the target at index {position}")]
    ContentMismatch { position: usize },

    #[error("incorrect chunk: surroundings before index {position} don't match the target")]
    BeforeMismatch { position: usize },

    #[error("incorrect chunk: surroundings after index {position} don't match the target")]
    AfterMismatch { position: usize },

    /// Two chunks would override the same target positions.
    #[error("chunks at positions {position} and {other} would override the same target position")]
    Overlap { position: usize, other: usize },
}

pub type DiffResult<T> = Result<T, DiffError>;

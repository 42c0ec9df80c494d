//! Diffing of plain text, by line or by character.

use crate::error::DiffResult;
use crate::options::DiffOptions;
use crate::patch::{Chunk, Patch};

/// Computes the patch between two strings after breaking them into newlines.
///
/// Trailing empty lines are dropped, so a final newline makes no difference.
pub fn diff_lines(original: &str, revised: &str, context: usize) -> DiffResult<Patch<String>> {
    DiffOptions::new()
        .context(context)
        .diff(&split_lines(original), &split_lines(revised))
}

fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    // text without any newline stays a single line, even when empty
    if lines.len() > 1 {
        while lines.last() == Some(&"") {
            lines.pop();
        }
    }
    lines.into_iter().map(ToString::to_string).collect()
}

/// Computes the patch between two strings character by character, then
/// [`collapse`]s every chunk into a single run.
///
/// ```
/// use seqpatch::text::diff_inline;
///
/// let patch = diff_inline("es", "fest", 1).unwrap();
/// let runs: Vec<&str> = patch
///     .iter()
///     .map(|d| d.revised().lines()[0].as_str())
///     .collect();
/// assert_eq!(runs, ["f", "t"]);
/// ```
pub fn diff_inline(original: &str, revised: &str, context: usize) -> DiffResult<Patch<String>> {
    let original: Vec<String> = original.chars().map(String::from).collect();
    let revised: Vec<String> = revised.chars().map(String::from).collect();
    let patch = DiffOptions::new().context(context).diff(&original, &revised)?;
    Ok(collapse(patch))
}

/// Builds a new patch where each chunk's lines are joined into one element.
///
/// Positions and context are kept, so the result describes where each run
/// sits but no longer applies to the per-character sequences.
pub fn collapse(patch: Patch<String>) -> Patch<String> {
    patch
        .into_iter()
        .map(|delta| delta.map_chunks(join_lines))
        .collect()
}

fn join_lines(chunk: Chunk<String>) -> Chunk<String> {
    if chunk.is_empty() {
        return chunk;
    }
    let run = chunk.lines().concat();
    chunk.with_lines(vec![run])
}

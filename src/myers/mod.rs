mod types;
pub use types::*;

use crate::error::{DiffError, DiffResult};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Seed on diagonal 1, never part of a returned path.
    Bootstrap,
    /// End of a run of matching elements.
    Snake,
    /// End of a run of inserts and deletes.
    Edit,
}

#[derive(Debug, Clone, Copy)]
struct PathNode {
    x: usize,
    y: usize,
    step: Step,
    prev: Option<usize>,
}

/// Arena of path nodes, linked backwards through `prev`.
#[derive(Default)]
struct Path {
    nodes: Vec<PathNode>,
}

impl Path {
    fn push(&mut self, node: PathNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn get(&self, idx: usize) -> PathNode {
        self.nodes[idx]
    }

    /// Last snake at or before `idx`. Consecutive edit nodes collapse onto it,
    /// which is what turns adjacent deletes and inserts into one Change.
    fn previous_snake(&self, mut idx: usize) -> Option<usize> {
        loop {
            let node = self.nodes[idx];
            match (node.step, node.prev) {
                (Step::Bootstrap, _) => return None,
                (Step::Edit, Some(prev)) => idx = prev,
                _ => return Some(idx),
            }
        }
    }
}

/// Furthest reaching node per diagonal k, stored as an index into the [`Path`].
struct V {
    data: Vec<Option<usize>>,
    offset: isize,
}

impl V {
    fn new(size: usize) -> Self {
        V {
            data: vec![None; 2 * size + 1],
            offset: size as isize,
        }
    }

    fn get(&self, k: isize) -> DiffResult<usize> {
        self.data[(k + self.offset) as usize].ok_or(DiffError::MissingDiagonal { k })
    }

    fn set(&mut self, k: isize, node: usize) {
        self.data[(k + self.offset) as usize] = Some(node);
    }
}

/// Computes the edit spans between two sequences using the Myers algorithm.
///
/// # Examples
///
/// ```
/// use seqpatch::myers::{diff, Change, ChangeKind};
///
/// let old = vec![1, 2, 3, 4, 5];
/// let new = vec![2, 3, 4, 6];
/// let result = diff(&old, &new, |a, b| a == b).unwrap();
/// assert_eq!(result, vec![
///     Change::new(ChangeKind::Delete, 0..1, 0..0),
///     Change::new(ChangeKind::Change, 4..5, 3..4),
/// ]);
/// ```
///
/// # Arguments
///
/// * `original` - The original sequence
/// * `revised` - The revised sequence
/// * `eq` - Element equality; the only comparison the search performs
pub fn diff<T, F>(original: &[T], revised: &[T], eq: F) -> DiffResult<Vec<Change>>
where
    F: Fn(&T, &T) -> bool,
{
    diff_with_limit(original, revised, eq, None)
}

/// Same as [`diff`], but gives up with [`DiffError::EditDistanceExceeded`] once
/// the edit distance is known to be larger than `limit`.
///
/// The search is O((N+M)·D) in time and memory, so inputs with little in
/// common can take very long. The limit bounds D.
pub fn diff_with_limit<T, F>(
    original: &[T],
    revised: &[T],
    eq: F,
    limit: Option<usize>,
) -> DiffResult<Vec<Change>>
where
    F: Fn(&T, &T) -> bool,
{
    let n = original.len();
    let m = revised.len();
    let maxi = n + m + 1;
    let mut path = Path::default();
    let mut v = V::new(maxi);
    v.set(
        1,
        path.push(PathNode {
            x: 0,
            y: 0,
            step: Step::Bootstrap,
            prev: None,
        }),
    );

    for d in 0..maxi as isize {
        if let Some(limit) = limit {
            if d as usize > limit {
                warn!(original_len = n, revised_len = m, limit, "edit distance limit exceeded");
                return Err(DiffError::EditDistanceExceeded { limit });
            }
        }
        for k in (-d..=d).step_by(2) {
            // ties go to the delete (k - 1)
            let (mut x, from) = if k == -d
                || (k != d && path.get(v.get(k - 1)?).x < path.get(v.get(k + 1)?).x)
            {
                let from = v.get(k + 1)?;
                (path.get(from).x, from)
            } else {
                let from = v.get(k - 1)?;
                (path.get(from).x + 1, from)
            };
            let mut y = (x as isize - k) as usize;

            let prev = path.previous_snake(from);
            let mut node = path.push(PathNode {
                x,
                y,
                step: Step::Edit,
                prev,
            });
            while x < n && y < m && eq(&original[x], &revised[y]) {
                x += 1;
                y += 1;
            }
            if x != path.get(node).x {
                node = path.push(PathNode {
                    x,
                    y,
                    step: Step::Snake,
                    prev: Some(node),
                });
            }
            v.set(k, node);

            if x >= n && y >= m {
                let changes = traceback(&path, node)?;
                debug!(
                    original_len = n,
                    revised_len = m,
                    edit_distance = d,
                    changes = changes.len(),
                    "computed edit script"
                );
                return Ok(changes);
            }
        }
    }
    Err(DiffError::NoPath)
}

fn traceback(path: &Path, end: usize) -> DiffResult<Vec<Change>> {
    let mut changes = Vec::new();
    let last = path.get(end);
    let mut cursor = if last.step == Step::Snake {
        last.prev
    } else {
        Some(end)
    };

    while let Some(idx) = cursor {
        let node = path.get(idx);
        let Some(anchor_idx) = node.prev else {
            break;
        };
        if node.step == Step::Snake {
            return Err(DiffError::MalformedPath);
        }
        let anchor = path.get(anchor_idx);
        if anchor.step == Step::Bootstrap {
            break;
        }

        let kind = if anchor.x == node.x {
            ChangeKind::Insert
        } else if anchor.y == node.y {
            ChangeKind::Delete
        } else {
            ChangeKind::Change
        };
        changes.push(Change::new(kind, anchor.x..node.x, anchor.y..node.y));

        cursor = if anchor.step == Step::Snake {
            anchor.prev
        } else {
            Some(anchor_idx)
        };
    }

    changes.reverse();
    Ok(changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn eq_diff<T: PartialEq>(old: &[T], new: &[T]) -> Vec<Change> {
        diff(old, new, |a, b| a == b).unwrap()
    }

    proptest! {
        #[test]
        fn test_length_invariant(old: Vec<u8>, new: Vec<u8>) {
            let result = eq_diff(&old, &new);
            let deletes: usize = result.iter().map(|c| c.original.len()).sum();
            let inserts: usize = result.iter().map(|c| c.revised.len()).sum();
            prop_assert_eq!(old.len() - deletes, new.len() - inserts);
        }

        #[test]
        fn test_idempotency(els: Vec<u8>) {
            prop_assert_eq!(eq_diff(&els, &els), vec![]);
        }

        #[test]
        fn test_new_empty(els in prop::collection::vec(any::<u8>(), 1..50)) {
            let result = eq_diff(&els, &[]);
            prop_assert_eq!(result, vec![Change::new(ChangeKind::Delete, 0..els.len(), 0..0)]);
        }

        #[test]
        fn test_old_empty(els in prop::collection::vec(any::<u8>(), 1..50)) {
            let result = eq_diff(&[], &els);
            prop_assert_eq!(result, vec![Change::new(ChangeKind::Insert, 0..0, 0..els.len())]);
        }

        #[test]
        fn test_symmetry(old: Vec<u8>, new: Vec<u8>) {
            let result = eq_diff(&old, &new);
            let result_2 = eq_diff(&new, &old);
            let deletes: usize = result.iter().map(|c| c.original.len()).sum();
            let inserts: usize = result.iter().map(|c| c.revised.len()).sum();
            let deletes_2: usize = result_2.iter().map(|c| c.original.len()).sum();
            let inserts_2: usize = result_2.iter().map(|c| c.revised.len()).sum();
            prop_assert_eq!(deletes + inserts, deletes_2 + inserts_2);
        }

        #[test]
        fn test_spans_ordered_and_separated(
            old in prop::collection::vec(0u8..4, 0..30),
            new in prop::collection::vec(0u8..4, 0..30),
        ) {
            let result = eq_diff(&old, &new);
            for w in result.windows(2) {
                prop_assert!(w[0].original.end < w[1].original.start);
                prop_assert!(w[0].revised.end < w[1].revised.start);
            }
            for c in &result {
                let expected = match (c.original.is_empty(), c.revised.is_empty()) {
                    (true, false) => ChangeKind::Insert,
                    (false, true) => ChangeKind::Delete,
                    (false, false) => ChangeKind::Change,
                    (true, true) => unreachable!("empty change"),
                };
                prop_assert_eq!(c.kind, expected);
            }
        }

        #[test]
        fn test_unmatched_elements_are_covered(
            old in prop::collection::vec(0u8..4, 0..30),
            new in prop::collection::vec(0u8..4, 0..30),
        ) {
            // everything between spans lines up element for element
            let result = eq_diff(&old, &new);
            let (mut x, mut y) = (0, 0);
            for c in result.iter() {
                prop_assert_eq!(c.original.start - x, c.revised.start - y);
                prop_assert_eq!(&old[x..c.original.start], &new[y..c.revised.start]);
                x = c.original.end;
                y = c.revised.end;
            }
            prop_assert_eq!(&old[x..], &new[y..]);
        }
    }

    #[test]
    fn test_simple_change() {
        let old = vec!["a", "b", "c"];
        let new = vec!["a", "x", "c"];
        let result = eq_diff(&old, &new);
        assert_eq!(result, [Change::new(ChangeKind::Change, 1..2, 1..2)]);
    }

    #[test]
    fn test_completely_different() {
        let old = vec!["a", "b", "c"];
        let new = vec!["x", "y", "z"];
        let result = eq_diff(&old, &new);
        assert_eq!(result, vec![Change::new(ChangeKind::Change, 0..3, 0..3)]);
    }

    #[test]
    fn test_both_empty() {
        let result = eq_diff::<u8>(&[], &[]);
        assert_eq!(result, vec![]);
    }

    #[test]
    fn test_duplicates() {
        let old = vec!["a", "a", "b"];
        let new = vec!["a", "b", "b"];
        let result = eq_diff(&old, &new);
        assert_eq!(
            result,
            vec![
                Change::new(ChangeKind::Delete, 1..2, 1..1),
                Change::new(ChangeKind::Insert, 3..3, 2..3),
            ]
        );
    }

    #[test]
    fn test_insertion_in_middle() {
        let old = vec!["a", "c"];
        let new = vec!["a", "b", "c"];
        let result = eq_diff(&old, &new);
        assert_eq!(result, vec![Change::new(ChangeKind::Insert, 1..1, 1..2)]);
    }

    #[test]
    fn test_myers_paper_example() {
        let old = vec!["A", "B", "C", "A", "B", "B", "A"];
        let new = vec!["C", "B", "A", "B", "A", "C"];
        let result = eq_diff(&old, &new);
        assert_eq!(
            result,
            vec![
                Change::new(ChangeKind::Delete, 0..2, 0..0),
                Change::new(ChangeKind::Insert, 3..3, 1..2),
                Change::new(ChangeKind::Delete, 5..6, 4..4),
                Change::new(ChangeKind::Insert, 7..7, 5..6),
            ]
        );
    }

    #[test]
    fn test_adjacent_edits_merge_into_change() {
        let old = vec!["line1", "line2", "line3"];
        let new = vec!["line1", "line2-2", "line4"];
        let result = eq_diff(&old, &new);
        assert_eq!(result, vec![Change::new(ChangeKind::Change, 1..3, 1..3)]);
    }

    #[test]
    fn test_custom_equality() {
        let old = vec!["Alpha", "beta", "Gamma"];
        let new = vec!["alpha", "BETA", "delta"];
        let result = diff(&old, &new, |a, b| a.eq_ignore_ascii_case(b)).unwrap();
        assert_eq!(result, vec![Change::new(ChangeKind::Change, 2..3, 2..3)]);
    }

    #[test]
    fn test_limit_exceeded() {
        let old = vec![1, 2, 3, 4];
        let new = vec![5, 6, 7, 8];
        let result = diff_with_limit(&old, &new, |a, b| a == b, Some(3));
        assert_eq!(result, Err(DiffError::EditDistanceExceeded { limit: 3 }));
    }

    #[test]
    fn test_limit_at_edit_distance() {
        // distance is exactly 2
        let old = vec![1, 2, 3];
        let new = vec![1, 9, 3];
        let result = diff_with_limit(&old, &new, |a, b| a == b, Some(2));
        assert_eq!(result, Ok(vec![Change::new(ChangeKind::Change, 1..2, 1..2)]));
    }
}

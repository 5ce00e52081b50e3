//! Line-level diff producing change spans for the divider.

use par_shot_render::{ChangeType, DiffChangeSpan};

/// Maximum line count per side before skipping LCS (prevents O(n*m) blowup).
pub const MAX_LCS_LINES: usize = 2000;

fn lcs_table(a: &[&str], b: &[&str]) -> Vec<Vec<usize>> {
    let m = a.len();
    let n = b.len();
    let mut table = vec![vec![0usize; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                table[i][j] = table[i - 1][j - 1] + 1;
            } else {
                table[i][j] = table[i - 1][j].max(table[i][j - 1]);
            }
        }
    }

    table
}

/// Matched `(left, right)` line pairs in ascending order
fn matched_pairs(left: &[&str], right: &[&str]) -> Vec<(usize, usize)> {
    let table = lcs_table(left, right);
    let mut pairs = Vec::new();
    let (mut i, mut j) = (left.len(), right.len());
    while i > 0 && j > 0 {
        if left[i - 1] == right[j - 1] {
            pairs.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] >= table[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    pairs.reverse();
    pairs
}

fn gap_span(left: (usize, usize), right: (usize, usize)) -> Option<DiffChangeSpan> {
    let change_type = match (left.0 < left.1, right.0 < right.1) {
        (true, true) => ChangeType::Modified,
        (false, true) => ChangeType::Inserted,
        (true, false) => ChangeType::Deleted,
        (false, false) => return None,
    };
    Some(DiffChangeSpan::new(left, right, change_type))
}

/// Compare two texts line by line.
///
/// Runs of unmatched lines become one span each: lines only on the right
/// are inserted, lines only on the left are deleted, and runs with lines on
/// both sides are modified.
pub fn diff_lines(left: &str, right: &str) -> Vec<DiffChangeSpan> {
    let left: Vec<&str> = left.split('\n').collect();
    let right: Vec<&str> = right.split('\n').collect();

    if left.len() > MAX_LCS_LINES || right.len() > MAX_LCS_LINES {
        log::warn!(
            "Diff too large for line matching ({} vs {} lines), marking whole file modified",
            left.len(),
            right.len()
        );
        return gap_span((0, left.len()), (0, right.len()))
            .filter(|_| left != right)
            .into_iter()
            .collect();
    }

    let mut spans = Vec::new();
    let (mut prev_left, mut prev_right) = (0usize, 0usize);
    let end = (left.len(), right.len());
    for (l, r) in matched_pairs(&left, &right).into_iter().chain(std::iter::once(end)) {
        spans.extend(gap_span((prev_left, l), (prev_right, r)));
        prev_left = l + 1;
        prev_right = r + 1;
    }
    spans
}

//! Levenshtein edit distance.

/// Minimum number of single-character insertions, deletions and
/// substitutions turning `first` into `second`.
///
/// Uses one rolling column of `len(first) + 1` cells swept once per
/// character of `second`. Characters are compared as-is; callers fold case
/// beforehand if they want case-insensitive matching.
pub fn levenshtein(first: &str, second: &str) -> usize {
    let first: Vec<char> = first.chars().collect();
    let mut column: Vec<usize> = (0..=first.len()).collect();

    for (x, c2) in second.chars().enumerate() {
        let x = x + 1;
        column[0] = x;
        let mut last_diag = x - 1;
        for (y, &c1) in first.iter().enumerate() {
            let y = y + 1;
            let old_diag = column[y];
            let substitution = last_diag + usize::from(c1 != c2);
            column[y] = (column[y] + 1).min(column[y - 1] + 1).min(substitution);
            last_diag = old_diag;
        }
    }

    column[first.len()]
}

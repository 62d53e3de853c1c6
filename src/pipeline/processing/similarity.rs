/// Normalized textual similarity between two name strings, in `[0, 1]`.
///
/// Both inputs are lowercased before scoring. The score is the sequence
/// matching ratio `2 * M / T`, where `T` is the combined length of both
/// strings and `M` counts the characters covered by greedy longest
/// matching blocks, found recursively over the unmatched remainders.
/// Two empty strings score 1.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matches = matching_chars(&a, &b);
    2.0 * matches as f64 / total as f64
}

/// Characters covered by the longest matching block plus, recursively,
/// the blocks found in the remainders on each side of it.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, len) = longest_matching_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_chars(&a[..a_start], &b[..b_start])
        + matching_chars(&a[a_start + len..], &b[b_start + len..])
}

/// Longest contiguous block common to both slices.
///
/// Ties resolve to the earliest block in `a`, then the earliest in `b`.
fn longest_matching_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0usize, 0usize, 0usize);
    if a.is_empty() || b.is_empty() {
        return best;
    }

    // prev[j + 1] holds the length of the common suffix ending at
    // a[i - 1], b[j], rolled forward one row at a time.
    let mut prev = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        let mut row = vec![0usize; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                row[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        prev = row;
    }
    best
}

//! Levenshtein edit distance, shared by feature extraction and both similarity scorers.

/// Minimum number of single-symbol insertions, deletions or substitutions
/// turning `a` into `b`.
///
/// Rolling two rows over the shorter sequence keeps memory at
/// `O(min(len(a), len(b)))`.
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if inner.is_empty() {
        return outer.len();
    }

    let mut prev: Vec<usize> = (0..=inner.len()).collect();
    let mut curr = vec![0usize; inner.len() + 1];

    for (i, x) in outer.iter().enumerate() {
        curr[0] = i + 1;
        for (j, y) in inner.iter().enumerate() {
            let insertion = prev[j + 1] + 1;
            let deletion = curr[j] + 1;
            let substitution = prev[j] + usize::from(x != y);
            curr[j + 1] = insertion.min(deletion).min(substitution);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner.len()]
}

/// Character-level distance between two strings (Unicode scalar values, not bytes).
pub fn levenshtein_str(a: &str, b: &str) -> usize {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();
    levenshtein(&a, &b)
}

#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// `(len(reference) - distance) / (len(reference) + 1)`.
///
/// The `+1` keeps empty references finite; the result goes negative when the
/// candidate differs by more than the reference length.
pub fn retention_ratio(reference: &str, candidate: &str) -> f64 {
    let len = char_len(reference) as f64;
    let distance = levenshtein_str(reference, candidate) as f64;
    (len - distance) / (len + 1.0)
}

#[cfg(test)]
#[path = "../tests/src_inline/distance.rs"]
mod tests;

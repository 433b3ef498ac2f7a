//! Longest-proper-prefix-suffix (failure function) tables.

use crate::symbol::Symbol;

/// Build the LPS table for `pattern`.
///
/// `lps[k]` is the length of the longest proper prefix of `pattern[..=k]`
/// that is also a suffix of it, so `lps[k] <= k` always holds.
pub fn build<S: Symbol>(pattern: &[S]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0usize; m];

    let mut len = 0;
    let mut i = 1;
    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            // Fall back to the next shorter border, keep i
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

/// Widest border found anywhere in the pattern (0 for an empty pattern)
pub fn max_border<S: Symbol>(pattern: &[S]) -> usize {
    build(pattern).into_iter().max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_table() {
        assert_eq!(build(b"ababaca"), vec![0, 0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_uniform_pattern() {
        assert_eq!(build(b"aaaa"), vec![0, 1, 2, 3]);
        assert_eq!(max_border(b"aaaa"), 3);
    }

    #[test]
    fn test_fallback_chain() {
        assert_eq!(build(b"aabaaab"), vec![0, 1, 0, 1, 2, 2, 3]);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(build::<u8>(b"").is_empty());
        assert_eq!(build(b"x"), vec![0]);
        assert_eq!(max_border::<u8>(b""), 0);
    }

    #[test]
    fn test_bounded_by_index() {
        let table = build(b"abcabcabdabcabcabc");
        for (k, &value) in table.iter().enumerate() {
            assert!(value <= k);
        }
    }
}

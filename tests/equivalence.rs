//! Integration tests checking that every matcher, and the hybrid dispatcher,
//! report exactly the same matches.

use proptest::prelude::*;
use strmatch::matcher::{Algorithm, boyer_moore, kmp, naive, rabin_karp};
use proptest::test_runner::TestCaseError;
use strmatch::select::{DecisionReason, GoCrazy, Registry, hybrid};
use strmatch::{MatchSet, Matcher};

/// Overlapping occurrences via memchr, used as an independent oracle
fn oracle(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() {
        return (0..=text.len()).collect();
    }
    let mut positions = Vec::new();
    let mut start = 0;
    while let Some(pos) = memchr::memmem::find(&text[start..], pattern) {
        positions.push(start + pos);
        start += pos + 1;
        if start > text.len() {
            break;
        }
    }
    positions
}

fn all_results<S: strmatch::Symbol>(text: &[S], pattern: &[S]) -> Vec<(Algorithm, MatchSet)> {
    Algorithm::ALL
        .iter()
        .map(|&a| (a, a.search(text, pattern)))
        .collect()
}

fn assert_all_agree(text: &[u8], pattern: &[u8]) {
    let expected = oracle(text, pattern);
    for (algorithm, matches) in all_results(text, pattern) {
        assert_eq!(
            matches, expected,
            "{algorithm} disagrees for text={text:?} pattern={pattern:?}"
        );
    }
}

#[test]
fn test_documented_edge_cases() {
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.search::<u8>(b"", b""), [0], "{algorithm}");
        assert_eq!(algorithm.search(b"abc", b""), [0, 1, 2, 3], "{algorithm}");
        assert!(algorithm.search(b"ab", b"abc").is_empty(), "{algorithm}");
        assert!(algorithm.search(b"", b"a").is_empty(), "{algorithm}");
        assert_eq!(algorithm.search(b"aaaa", b"aa"), [0, 1, 2], "{algorithm}");
    }
}

#[test]
fn test_good_suffix_scenario() {
    let text = b"AAAAAAAAAAAAAAAB";
    assert_eq!(boyer_moore::search(text, b"AAAB"), naive::search(text, b"AAAB"));
    assert_eq!(boyer_moore::search(text, b"AAAB"), [12]);
}

#[test]
fn test_handpicked_inputs() {
    let cases: &[(&[u8], &[u8])] = &[
        (b"abracadabra", b"abra"),
        (b"abababababab", b"ababab"),
        (b"aaaaaaaaaaaaaaab", b"aaaaaab"),
        (b"aaabaaabaaab", b"aaabaaaba"),
        (b"GCATCGCAGAGAGTATACAGTACG", b"GCAGAGAG"),
        (b"\x00\x01\x02\x00\x01\x02\x00\x01", b"\x00\x01"),
        (b"mississippi", b"issi"),
        (b"mississippi", b"ssippi"),
        (b"xyz", b"xyz"),
    ];
    for &(text, pattern) in cases {
        assert_all_agree(text, pattern);
    }
}

#[test]
fn test_long_text_routes() {
    // Exercises the long-text, binary and default branches of the hybrid
    let text = b"the quick brown fox jumps over the lazy dog. ".repeat(40);
    assert_all_agree(&text, b"lazy dog");
    assert_all_agree(&text, b"jumps over the lazy");

    let mut binary = vec![0u8; 200];
    binary.extend_from_slice(&text[..200]);
    assert_all_agree(&binary, b"fox jumps over the");
}

#[test]
fn test_wide_symbols_agree() {
    let text: Vec<u16> = "ababαβγαβγ日本日本日本".encode_utf16().collect();
    for needle in ["αβγ", "日本日本", "ab", "γ", ""] {
        let pattern: Vec<u16> = needle.encode_utf16().collect();
        let results = all_results(&text, &pattern);
        let (_, expected) = &results[0];
        for (algorithm, matches) in &results {
            assert_eq!(matches, expected, "{algorithm} on {needle:?}");
        }
    }
}

#[test]
fn test_char_symbols_agree() {
    let text: Vec<char> = "ça ça çà ça ÇA".chars().collect();
    let pattern: Vec<char> = "ça".chars().collect();
    for (algorithm, matches) in all_results(&text, &pattern) {
        assert_eq!(matches, [0, 3, 9], "{algorithm}");
    }
}

#[test]
fn test_idempotent() {
    let text = b"abcabcabcabc";
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.search(text, b"cab"), algorithm.search(text, b"cab"));
    }
}

#[test]
fn test_registry_cross_check() {
    let registry = Registry::<u8>::with_defaults();
    let text = b"na na na batman".repeat(50);
    let matches = registry.cross_check(&text, b"na na").unwrap();
    assert_eq!(matches.into_vec(), oracle(&text, b"na na"));
}

#[test]
fn test_hybrid_matches_every_branch_choice() {
    let inputs: &[(&[u8], &[u8])] = &[
        (b"abc", b""),
        (b"abcabc", b"c"),
        (b"aaaaaaaaaa", b"aaaa"),
        (b"aaaaaaaaaaaaaaab", b"aaaaaab"),
        (b"hello world", b"world"),
        (b"\x00\x00\x00\x00\x00\x00abcdefghijklmnop", b"bcdefghijklm"),
        (b"plain text with a long needle inside", b"a long needle"),
    ];
    let dispatcher = GoCrazy::new();
    for &(text, pattern) in inputs {
        let decision = hybrid::choose(text, pattern);
        let chosen = decision.algorithm.search(text, pattern);
        assert_eq!(dispatcher.search(text, pattern), chosen, "{decision:?}");
        assert_eq!(chosen, oracle(text, pattern), "{decision:?}");
    }
}

#[test]
fn test_rabin_karp_collisions_verified() {
    let params = rabin_karp::RollingHashParams::new(256, 3).unwrap();
    let text = b"the theme of these thermal thesis";
    assert_eq!(
        rabin_karp::search_with(params, text, b"the"),
        kmp::search(text, b"the")
    );
}

fn small_alphabet(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..max_len)
}

/// Mix of compact and wide code units, so both bad-character paths are used
const WIDE_ALPHABET: [u16; 5] = [0x61, 0x62, 0xE7, 0x3B1, 0x65E5];

fn wide_symbols(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(prop::sample::select(WIDE_ALPHABET.to_vec()), len)
}

fn to_chars(units: &[u16]) -> Vec<char> {
    units
        .iter()
        .map(|&u| char::from_u32(u32::from(u)).unwrap())
        .collect()
}

fn check_agreement<S: strmatch::Symbol>(text: &[S], pattern: &[S]) -> Result<(), TestCaseError> {
    let expected = naive::search(text, pattern);
    for (algorithm, matches) in all_results(text, pattern) {
        prop_assert_eq!(matches, expected.clone(), "{}", algorithm);
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_all_matchers_agree(text in small_alphabet(64), pattern in small_alphabet(6)) {
        let expected = oracle(&text, &pattern);
        for (algorithm, matches) in all_results(&text, &pattern) {
            prop_assert_eq!(matches.into_vec(), expected.clone(), "{}", algorithm);
        }
    }

    #[test]
    fn prop_binary_inputs_agree(
        text in prop::collection::vec(any::<u8>(), 0..700),
        pattern in prop::collection::vec(0u8..4, 0..12),
    ) {
        let expected = oracle(&text, &pattern);
        for (algorithm, matches) in all_results(&text, &pattern) {
            prop_assert_eq!(matches.into_vec(), expected.clone(), "{}", algorithm);
        }
    }

    #[test]
    fn prop_long_repetitive_text_agrees(
        unit in small_alphabet(4),
        repeats in 1usize..200,
        pattern in small_alphabet(14),
    ) {
        let text = unit.repeat(repeats);
        let expected = oracle(&text, &pattern);
        for (algorithm, matches) in all_results(&text, &pattern) {
            prop_assert_eq!(matches.into_vec(), expected.clone(), "{}", algorithm);
        }
    }

    #[test]
    fn prop_long_wide_text_agrees(
        text in wide_symbols(501..900),
        len in 3usize..14,
        at in any::<prop::sample::Index>(),
    ) {
        let start = at.index(text.len() - len);
        let pattern = text[start..start + len].to_vec();
        prop_assert_eq!(hybrid::choose(&text, &pattern).reason, DecisionReason::LongText);
        check_agreement(&text, &pattern)?;
        check_agreement(&to_chars(&text), &to_chars(&pattern))?;
    }

    #[test]
    fn prop_wide_binary_text_agrees(
        header in prop::collection::vec(prop::sample::select(vec![0u16, 1, 2, 0x1B]), 60..100),
        body in wide_symbols(100..400),
        len in 11usize..16,
        at in any::<prop::sample::Index>(),
    ) {
        let start = at.index(body.len() - len);
        let pattern = body[start..start + len].to_vec();
        let mut text = header;
        text.extend_from_slice(&body);
        prop_assert_eq!(hybrid::choose(&text, &pattern).reason, DecisionReason::BinaryText);
        check_agreement(&text, &pattern)?;
        check_agreement(&to_chars(&text), &to_chars(&pattern))?;
    }

    #[test]
    fn prop_boyer_moore_moves_forward(text in small_alphabet(80), pattern in small_alphabet(8)) {
        let mut last: Option<usize> = None;
        let mut monotonic = true;
        boyer_moore::search_traced(&text, &pattern, |step| {
            if step.shift == 0 || last.is_some_and(|prev| step.offset <= prev) {
                monotonic = false;
            }
            last = Some(step.offset);
        });
        prop_assert!(monotonic);
    }

    #[test]
    fn prop_rolling_hash_in_range(text in prop::collection::vec(any::<u8>(), 2..200), m in 1usize..8) {
        prop_assume!(m < text.len());
        let params = rabin_karp::RollingHashParams::default();
        let mut hash = rabin_karp::RollingHash::new(params, &text[..m]);
        prop_assert!((0..params.prime()).contains(&hash.value()));
        for i in 0..text.len() - m {
            hash.roll(text[i], text[i + m]);
            prop_assert!((0..params.prime()).contains(&hash.value()));
        }
    }
}

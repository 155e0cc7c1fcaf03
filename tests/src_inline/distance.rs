use super::*;

const SAMPLES: &[&str] = &[
    "", "a", "ab", "ba", "cat", "bat", "kitten", "sitting", "flaw", "lawn", "naïve", "saturday",
    "sunday",
];

#[test]
fn test_known_distances() {
    assert_eq!(levenshtein_str("kitten", "sitting"), 3);
    assert_eq!(levenshtein_str("flaw", "lawn"), 2);
    assert_eq!(levenshtein_str("saturday", "sunday"), 3);
    assert_eq!(levenshtein_str("cat", "bat"), 1);
}

#[test]
fn test_empty_inputs() {
    assert_eq!(levenshtein_str("", ""), 0);
    assert_eq!(levenshtein_str("", "abc"), 3);
    assert_eq!(levenshtein_str("abc", ""), 3);
    let empty: [u8; 0] = [];
    assert_eq!(levenshtein(&empty, &empty), 0);
}

#[test]
fn test_counts_chars_not_bytes() {
    assert_eq!(levenshtein_str("naïve", "naive"), 1);
    assert_eq!(char_len("naïve"), 5);
}

#[test]
fn test_identity_and_symmetry() {
    for a in SAMPLES {
        assert_eq!(levenshtein_str(a, a), 0);
        for b in SAMPLES {
            assert_eq!(levenshtein_str(a, b), levenshtein_str(b, a), "{a} vs {b}");
        }
    }
}

#[test]
fn test_triangle_inequality() {
    for a in SAMPLES {
        for b in SAMPLES {
            for c in SAMPLES {
                assert!(levenshtein_str(a, b) <= levenshtein_str(a, c) + levenshtein_str(c, b));
            }
        }
    }
}

#[test]
fn test_distance_from_empty_is_length() {
    for b in SAMPLES {
        assert_eq!(levenshtein_str("", b), char_len(b));
    }
}

#[test]
fn test_generic_over_tokens() {
    let a = ["the", "cat", "sat"];
    let b = ["the", "bat", "sat", "down"];
    assert_eq!(levenshtein(&a, &b), 2);
}

#[test]
fn test_retention_ratio() {
    assert_eq!(retention_ratio("", ""), 0.0);
    assert_eq!(retention_ratio("abc", "abc"), 0.75);
    assert_eq!(retention_ratio("ab", "abcdef"), -0.5);
}

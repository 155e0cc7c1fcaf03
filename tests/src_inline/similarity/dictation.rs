use approx::assert_relative_eq;

use super::*;

#[test]
fn test_all_correct() {
    let (words, summary) = score_dictation(&["cat", "dog"], &["cat", "dog"]);
    assert_eq!(words.len(), 2);
    assert_eq!(summary.overall_accuracy, 1.0);
    assert_eq!(summary.correct_count, 2);
    assert_eq!(summary.total_count, 2);
    assert_eq!(summary.unanswered_count, 0);
}

#[test]
fn test_single_substitution() {
    let (words, summary) = score_dictation(&["cat"], &["bat"]);
    assert_eq!(words[0].edit_distance, 1);
    assert_relative_eq!(words[0].accuracy, 1.0 - 1.0 / 3.0);
    assert!(!words[0].exact_match);
    assert_eq!(summary.correct_count, 0);
}

#[test]
fn test_case_insensitive() {
    let (words, _) = score_dictation(&["House"], &["hOUSE"]);
    assert!(words[0].exact_match);
    assert_eq!(words[0].accuracy, 1.0);
    assert_eq!(words[0].expected, "House");
    assert_eq!(words[0].actual, "hOUSE");
}

#[test]
fn test_accuracy_uses_lowercased_length() {
    // "İ" lowercases to "i" plus a combining dot, so the expected word has 9 chars
    let (words, _) = score_dictation(&["İstanbul"], &["istanbul"]);
    assert_eq!(words[0].edit_distance, 1);
    assert_relative_eq!(words[0].accuracy, 1.0 - 1.0 / 9.0);
}

#[test]
fn test_accuracy_floored_at_zero() {
    let (words, _) = score_dictation(&["ox"], &["elephant"]);
    assert!(words[0].edit_distance > 2);
    assert_eq!(words[0].accuracy, 0.0);
}

#[test]
fn test_empty_expected_word() {
    let (words, _) = score_dictation(&[""], &["a"]);
    assert_eq!(words[0].accuracy, 0.0);

    let (words, _) = score_dictation(&[""], &[""]);
    assert_eq!(words[0].accuracy, 0.0);
    assert!(words[0].exact_match);
}

#[test]
fn test_empty_lists() {
    let empty: [&str; 0] = [];
    let (words, summary) = score_dictation(&empty, &["cat"]);
    assert!(words.is_empty());
    assert_eq!(summary.overall_accuracy, 0.0);
    assert_eq!(summary.total_count, 0);
}

#[test]
fn test_pairs_up_to_shorter_list() {
    let expected = vec!["apple".to_string(), "banana".to_string(), "cat".to_string()];
    let typed = vec!["aple".to_string()];
    let (words, summary) = score_dictation(&expected, &typed);
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].index, 0);
    assert_relative_eq!(summary.overall_accuracy, 0.8);
    assert_eq!(summary.unanswered_count, 2);

    let (words, summary) = score_dictation(&["cat"], &["cat", "extra"]);
    assert_eq!(words.len(), 1);
    assert_eq!(summary.unanswered_count, 0);
}

use crate::distance::{char_len, levenshtein_str};
use crate::model::similarity::{DictationSummary, WordAccuracyResult};

/// Pairs expected and typed words by index (up to the shorter list) and scores
/// each pair case-insensitively.
pub fn score_dictation<E, T>(
    expected_words: &[E],
    typed_words: &[T],
) -> (Vec<WordAccuracyResult>, DictationSummary)
where
    E: AsRef<str>,
    T: AsRef<str>,
{
    let results = expected_words
        .iter()
        .zip(typed_words)
        .enumerate()
        .map(|(index, (expected, typed))| score_word(index, expected.as_ref(), typed.as_ref()))
        .collect::<Vec<_>>();

    let total_count = results.len();
    let correct_count = results.iter().filter(|r| r.exact_match).count();
    let overall_accuracy = if total_count == 0 {
        0.0
    } else {
        results.iter().map(|r| r.accuracy).sum::<f64>() / total_count as f64
    };

    let summary = DictationSummary {
        overall_accuracy,
        correct_count,
        total_count,
        unanswered_count: expected_words.len() - total_count,
    };
    (results, summary)
}

fn score_word(index: usize, expected: &str, typed: &str) -> WordAccuracyResult {
    let expected_lower = expected.to_lowercase();
    let edit_distance = levenshtein_str(&expected_lower, &typed.to_lowercase());
    // lowercasing can change the char count (e.g. U+0130)
    let expected_len = char_len(&expected_lower);
    let accuracy = if expected_len == 0 {
        0.0
    } else {
        (1.0 - edit_distance as f64 / expected_len as f64).max(0.0)
    };
    WordAccuracyResult {
        index,
        expected: expected.to_string(),
        actual: typed.to_string(),
        edit_distance,
        accuracy,
        exact_match: edit_distance == 0,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/similarity/dictation.rs"]
mod tests;

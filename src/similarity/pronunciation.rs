use crate::distance::{char_len, levenshtein_str};
use crate::model::profile::TierCutoffs;
use crate::model::similarity::PronunciationScore;

/// Scores an attempted phonemic transcription against the original one.
pub fn score_pronunciation(original_ipa: &str, attempted_ipa: &str) -> PronunciationScore {
    score_pronunciation_with(original_ipa, attempted_ipa, &TierCutoffs::default())
}

pub fn score_pronunciation_with(
    original_ipa: &str,
    attempted_ipa: &str,
    tiers: &TierCutoffs,
) -> PronunciationScore {
    let original_len = char_len(original_ipa);
    let attempted_len = char_len(attempted_ipa);
    let edit_distance = levenshtein_str(original_ipa, attempted_ipa);

    let span = original_len.max(attempted_len).max(1) as f64;
    let accuracy_score = (span - edit_distance as f64) / span * 100.0;
    let inaccuracy = edit_distance as f64 / original_len.max(1) as f64;

    PronunciationScore {
        accuracy_score,
        inaccuracy,
        feedback_tier: tiers.tier(accuracy_score),
        edit_distance,
        original_len,
        attempted_len,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/similarity/pronunciation.rs"]
mod tests;

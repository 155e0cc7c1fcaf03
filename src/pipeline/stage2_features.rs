use std::collections::BTreeSet;

use crate::distance::{char_len, retention_ratio};
use crate::model::features::{FeatureInputs, FeatureVector, PhoneticScores};
use crate::model::profile::{PhoneticWeights, ScoringProfile};
use crate::phonetic::{CaverphoneVersion, PhoneticAlgorithm, encode_text};

/// Feature vector with the built-in phonetic weights and Caverphone rule set.
pub fn extract_features(
    extracted_text: &str,
    corrected_text: &str,
    grammar_corrected_text: &str,
    flagged_token_count: u32,
) -> FeatureVector {
    let weights = PhoneticWeights::default();
    FeatureVector {
        spelling_accuracy: spelling_accuracy(extracted_text, corrected_text),
        grammatical_accuracy: grammatical_accuracy(corrected_text, grammar_corrected_text),
        correction_percentage: correction_percentage(extracted_text, flagged_token_count),
        phonetic_accuracy: phonetic_accuracy(
            extracted_text,
            corrected_text,
            &weights,
            CaverphoneVersion::default(),
        ),
    }
}

pub fn run_stage2(inputs: &FeatureInputs, profile: &ScoringProfile) -> FeatureVector {
    let features = FeatureVector {
        spelling_accuracy: spelling_accuracy(&inputs.extracted_text, &inputs.corrected_text),
        grammatical_accuracy: grammatical_accuracy(
            &inputs.corrected_text,
            &inputs.grammar_corrected_text,
        ),
        correction_percentage: correction_percentage(
            &inputs.extracted_text,
            inputs.flagged_token_count,
        ),
        phonetic_accuracy: phonetic_accuracy(
            &inputs.extracted_text,
            &inputs.corrected_text,
            &profile.phonetic_weights,
            profile.caverphone_version,
        ),
    };
    tracing::debug!(?features, "computed feature vector");
    features
}

/// `(len(extracted) - distance(extracted, corrected)) / (len(extracted) + 1) * 100`.
pub fn spelling_accuracy(extracted_text: &str, corrected_text: &str) -> f64 {
    retention_ratio(extracted_text, corrected_text) * 100.0
}

/// Compares the token sets of the spelling- and grammar-corrected texts; the larger
/// one-sided difference counts as the number of grammar edits.
pub fn grammatical_accuracy(corrected_text: &str, grammar_corrected_text: &str) -> f64 {
    let spelled = corrected_text.split_whitespace().collect::<BTreeSet<_>>();
    let grammar = grammar_corrected_text
        .split_whitespace()
        .collect::<BTreeSet<_>>();
    let edits = spelled
        .difference(&grammar)
        .count()
        .max(grammar.difference(&spelled).count()) as f64;
    let len = char_len(corrected_text) as f64;
    (len - edits) / (len + 1.0) * 100.0
}

pub fn correction_percentage(extracted_text: &str, flagged_token_count: u32) -> f64 {
    let words = extracted_text.split_whitespace().count().max(1) as f64;
    flagged_token_count as f64 / words * 100.0
}

pub fn phonetic_scores(
    extracted_text: &str,
    corrected_text: &str,
    caverphone_version: CaverphoneVersion,
) -> PhoneticScores {
    let score = |algorithm: PhoneticAlgorithm| {
        let extracted = encode_text(extracted_text, algorithm, caverphone_version);
        let corrected = encode_text(corrected_text, algorithm, caverphone_version);
        retention_ratio(&extracted, &corrected)
    };
    PhoneticScores {
        soundex: score(PhoneticAlgorithm::Soundex),
        metaphone: score(PhoneticAlgorithm::Metaphone),
        caverphone: score(PhoneticAlgorithm::Caverphone),
        nysiis: score(PhoneticAlgorithm::Nysiis),
    }
}

/// Weighted sum of the per-algorithm scores, as a percentage.
pub fn fuse_phonetic_scores(scores: &PhoneticScores, weights: &PhoneticWeights) -> f64 {
    (weights.caverphone * scores.caverphone
        + weights.soundex * scores.soundex
        + weights.metaphone * scores.metaphone
        + weights.nysiis * scores.nysiis)
        * 100.0
}

pub fn phonetic_accuracy(
    extracted_text: &str,
    corrected_text: &str,
    weights: &PhoneticWeights,
    caverphone_version: CaverphoneVersion,
) -> f64 {
    let scores = phonetic_scores(extracted_text, corrected_text, caverphone_version);
    fuse_phonetic_scores(&scores, weights)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_features.rs"]
mod tests;

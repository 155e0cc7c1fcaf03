use super::json::{render_batch_json, render_codes_json, render_dictation_json, render_json};
use super::text::{
    render_analysis_text, render_batch_text, render_codes_text, render_dictation_text,
    render_pronunciation_text,
};
use super::*;
use crate::model::classification::ClassificationResult;
use crate::model::fallback::FallbackUsed;
use crate::model::features::FeatureInputs;
use crate::phonetic::phonetic_codes;
use crate::similarity::{score_dictation, score_pronunciation};

fn analysis(label: bool, features: [f64; 4]) -> Analysis {
    let (class_weights, leaf, path) = if label {
        ([1.0, 0.0], 8, vec![0, 2, 4, 8])
    } else {
        ([0.0, 1.0], 1, vec![0, 1])
    };
    Analysis {
        inputs: FeatureInputs {
            extracted_text: "a b".to_string(),
            corrected_text: "a b".to_string(),
            grammar_corrected_text: "a b".to_string(),
            flagged_token_count: 0,
        },
        features: FeatureVector::from_array(features),
        classification: ClassificationResult {
            label,
            class_weights,
            confidence: 1.0,
            leaf,
            path,
        },
        fallbacks: vec![],
    }
}

#[test]
fn test_quantiles() {
    let v = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(median(&v), 3.0);
    assert_eq!(quantile_indexed(&v, 0.9), 5.0);
    assert_eq!(quantile_indexed(&v, 0.0), 1.0);
    // even length takes the upper middle
    assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 3.0);
    assert_eq!(median(&[]), 0.0);
}

#[test]
fn test_summarize_counts_and_rate() {
    let analyses = vec![
        analysis(true, [99.0, 99.5, 2.0, 60.0]),
        analysis(false, [90.0, 98.0, 10.0, 40.0]),
        analysis(false, [80.0, 97.0, 20.0, 50.0]),
    ];
    let summary = summarize(&analyses);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.indicative, 1);
    assert_eq!(summary.not_indicative, 2);
    assert_eq!(summary.detection_rate, 33.33);
    assert_eq!(summary.feature_medians.spelling_accuracy, 90.0);
    assert_eq!(summary.feature_medians.correction_percentage, 10.0);
    assert_eq!(summary.feature_medians.phonetic_accuracy, 50.0);
}

#[test]
fn test_summarize_empty() {
    let summary = summarize(&[]);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.detection_rate, 0.0);
    assert_eq!(summary.feature_medians, FeatureVector::from_array([0.0; 4]));
}

#[test]
fn test_round_2dp() {
    assert_eq!(round_2dp(66.666666), 66.67);
    assert_eq!(round_2dp(50.0), 50.0);
    assert_eq!(format_f64_2(5.0), "5.00");
    assert_eq!(format_f64_6(0.5), "0.500000");
}

#[test]
fn test_analysis_text() {
    let mut a = analysis(true, [99.0, 99.5, 2.0, 60.0]);
    a.fallbacks = vec![FallbackUsed::CorrectedText, FallbackUsed::FlaggedTokenCount];
    let out = render_analysis_text(&a);
    assert!(out.contains("Verdict: indicative (confidence 1.000000)"));
    assert!(out.contains("Leaf: 8 (path 0 -> 2 -> 4 -> 8)"));
    assert!(out.contains("  spelling_accuracy: 99.000000"));
    assert!(out.contains("Fallbacks: corrected_text, flagged_token_count"));

    let out = render_analysis_text(&analysis(false, [0.0; 4]));
    assert!(out.contains("Verdict: not_indicative"));
    assert!(out.contains("Fallbacks: none"));
}

#[test]
fn test_batch_text_and_json() {
    let analyses = vec![
        analysis(true, [99.0, 99.5, 2.0, 60.0]),
        analysis(false, [90.0, 98.0, 10.0, 40.0]),
    ];
    let summary = summarize(&analyses);
    let text = render_batch_text(&analyses, &summary);
    assert!(text.starts_with("sample\tverdict"));
    assert!(text.contains("2\tnot_indicative\t1\t"));
    assert!(text.contains("Detection rate: 50.00%"));

    let json = render_batch_json(&analyses, &summary).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["samples"].as_array().unwrap().len(), 2);
    assert_eq!(value["summary"]["indicative"], 1);
    assert_eq!(value["summary"]["detection_rate"], 50.0);
    assert_eq!(value["samples"][0]["classification"]["leaf"], 8);
}

#[test]
fn test_codes_renderers() {
    let rows = vec![("Peter".to_string(), phonetic_codes("Peter"))];
    let text = render_codes_text(&rows);
    assert!(text.contains("Peter\tP360\tPTR\tPT1111\tPATAR"));

    let json = render_codes_json(&rows).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["word"], "Peter");
    assert_eq!(value[0]["soundex"], "P360");
    assert_eq!(value[0]["nysiis"], "PATAR");
}

#[test]
fn test_similarity_renderers() {
    let score = score_pronunciation("θɪŋk", "sɪŋk");
    let text = render_pronunciation_text(&score);
    assert!(text.contains("Accuracy: 75.00%"));
    assert!(text.contains("Feedback: good - "));
    let value: serde_json::Value = serde_json::from_str(&render_json(&score).unwrap()).unwrap();
    assert_eq!(value["feedback_tier"], "good");

    let (words, summary) = score_dictation(&["cat", "dog", "fish"], &["bat", "dog"]);
    let text = render_dictation_text(&words, &summary);
    assert!(text.contains("1\tcat\tbat\t1\t66.67 *"));
    assert!(text.contains("Correct: 1/2"));
    assert!(text.contains("Unanswered: 1"));
    let json = render_dictation_json(&words, &summary).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["unanswered_count"], 1);
    assert_eq!(value["words"][1]["exact_match"], true);
}

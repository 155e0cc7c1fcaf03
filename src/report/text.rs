use crate::model::features::{Feature, FeatureVector};
use crate::model::similarity::{DictationSummary, PronunciationScore, WordAccuracyResult};
use crate::phonetic::PhoneticCodes;
use crate::pipeline::Analysis;
use crate::report::{BatchSummary, format_f64_2, format_f64_6};

pub fn render_analysis_text(analysis: &Analysis) -> String {
    let mut out = String::new();
    let class = &analysis.classification;

    out.push_str("Text Screening Report\n");
    out.push_str("=====================\n\n");
    out.push_str(&format!(
        "Verdict: {} (confidence {})\n",
        class.verdict(),
        format_f64_6(class.confidence)
    ));
    let path = class
        .path
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" -> ");
    out.push_str(&format!("Leaf: {} (path {})\n\n", class.leaf, path));

    out.push_str("Features\n");
    push_features(&mut out, &analysis.features);

    out.push_str(&format!(
        "\nFlagged tokens: {}\n",
        analysis.inputs.flagged_token_count
    ));
    let fallbacks = if analysis.fallbacks.is_empty() {
        "none".to_string()
    } else {
        analysis
            .fallbacks
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    out.push_str(&format!("Fallbacks: {}\n", fallbacks));
    out
}

pub fn render_batch_text(analyses: &[Analysis], summary: &BatchSummary) -> String {
    let mut out = String::new();
    out.push_str("sample\tverdict\tleaf\tspelling\tgrammar\tcorrection\tphonetic\n");
    for (i, analysis) in analyses.iter().enumerate() {
        let f = &analysis.features;
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            i + 1,
            analysis.classification.verdict(),
            analysis.classification.leaf,
            format_f64_6(f.spelling_accuracy),
            format_f64_6(f.grammatical_accuracy),
            format_f64_6(f.correction_percentage),
            format_f64_6(f.phonetic_accuracy)
        ));
    }

    out.push_str("\nBatch summary\n");
    out.push_str(&format!("Total: {}\n", summary.total));
    out.push_str(&format!("Indicative: {}\n", summary.indicative));
    out.push_str(&format!("Not indicative: {}\n", summary.not_indicative));
    out.push_str(&format!(
        "Detection rate: {}%\n",
        format_f64_2(summary.detection_rate)
    ));
    out.push_str("Feature medians\n");
    push_features(&mut out, &summary.feature_medians);
    out
}

pub fn render_codes_text(rows: &[(String, PhoneticCodes)]) -> String {
    let mut out = String::from("word\tsoundex\tmetaphone\tcaverphone\tnysiis\n");
    for (word, codes) in rows {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            word, codes.soundex, codes.metaphone, codes.caverphone, codes.nysiis
        ));
    }
    out
}

pub fn render_pronunciation_text(score: &PronunciationScore) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Accuracy: {}%\n",
        format_f64_2(score.accuracy_score)
    ));
    out.push_str(&format!(
        "Edit distance: {} ({} vs {} symbols)\n",
        score.edit_distance, score.original_len, score.attempted_len
    ));
    out.push_str(&format!(
        "Feedback: {} - {}\n",
        score.feedback_tier,
        score.feedback_tier.message()
    ));
    out
}

pub fn render_dictation_text(words: &[WordAccuracyResult], summary: &DictationSummary) -> String {
    let mut out = String::from("#\texpected\ttyped\tdistance\taccuracy\n");
    for word in words {
        let mark = if word.exact_match { "" } else { " *" };
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}{}\n",
            word.index + 1,
            word.expected,
            word.actual,
            word.edit_distance,
            format_f64_2(word.accuracy * 100.0),
            mark
        ));
    }
    out.push_str(&format!(
        "\nOverall accuracy: {}%\n",
        format_f64_2(summary.overall_accuracy * 100.0)
    ));
    out.push_str(&format!(
        "Correct: {}/{}\n",
        summary.correct_count, summary.total_count
    ));
    if summary.unanswered_count > 0 {
        out.push_str(&format!("Unanswered: {}\n", summary.unanswered_count));
    }
    out
}

fn push_features(out: &mut String, features: &FeatureVector) {
    for feature in Feature::ALL {
        out.push_str(&format!(
            "  {}: {}\n",
            feature.name(),
            format_f64_6(features.get(feature))
        ));
    }
}

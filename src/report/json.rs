use serde::Serialize;

use crate::error::Result;
use crate::model::similarity::{DictationSummary, WordAccuracyResult};
use crate::phonetic::PhoneticCodes;
use crate::pipeline::Analysis;
use crate::report::BatchSummary;

#[derive(Serialize)]
struct BatchReport<'a> {
    samples: &'a [Analysis],
    summary: &'a BatchSummary,
}

#[derive(Serialize)]
struct CodesRow<'a> {
    word: &'a str,
    #[serde(flatten)]
    codes: &'a PhoneticCodes,
}

#[derive(Serialize)]
struct DictationReport<'a> {
    words: &'a [WordAccuracyResult],
    summary: &'a DictationSummary,
}

/// Pretty JSON for any single result (analysis, pronunciation score, summary).
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn render_batch_json(analyses: &[Analysis], summary: &BatchSummary) -> Result<String> {
    render_json(&BatchReport {
        samples: analyses,
        summary,
    })
}

pub fn render_codes_json(rows: &[(String, PhoneticCodes)]) -> Result<String> {
    let rows = rows
        .iter()
        .map(|(word, codes)| CodesRow { word, codes })
        .collect::<Vec<_>>();
    render_json(&rows)
}

pub fn render_dictation_json(
    words: &[WordAccuracyResult],
    summary: &DictationSummary,
) -> Result<String> {
    render_json(&DictationReport { words, summary })
}

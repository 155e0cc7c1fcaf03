pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::features::{Feature, FeatureVector};
use crate::pipeline::Analysis;

/// Aggregate over a batch of analyses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub indicative: usize,
    pub not_indicative: usize,
    /// Share of indicative samples in percent, two decimals.
    pub detection_rate: f64,
    pub feature_medians: FeatureVector,
}

pub fn summarize(analyses: &[Analysis]) -> BatchSummary {
    let total = analyses.len();
    let indicative = analyses.iter().filter(|a| a.classification.label).count();
    let detection_rate = if total == 0 {
        0.0
    } else {
        round_2dp(indicative as f64 / total as f64 * 100.0)
    };

    let mut medians = [0.0f64; 4];
    for feature in Feature::ALL {
        let values = analyses
            .iter()
            .map(|a| a.features.get(feature))
            .collect::<Vec<_>>();
        medians[feature.index()] = median(&values);
    }

    BatchSummary {
        total,
        indicative,
        not_indicative: total - indicative,
        detection_rate,
        feature_medians: FeatureVector::from_array(medians),
    }
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn round_2dp(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Nearest-rank quantile (upper element for even-length medians). NaN sorts last.
pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let idx = ((sorted.len() - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;

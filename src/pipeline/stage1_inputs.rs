use crate::model::fallback::{
    CollaboratorReport, CorrectedTextFallback, FallbackPolicy, FallbackUsed, GrammarTextFallback,
};
use crate::model::features::FeatureInputs;

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub inputs: FeatureInputs,
    pub fallbacks: Vec<FallbackUsed>,
}

/// Fills every missing collaborator value from `policy` so feature extraction
/// only ever sees explicit arguments.
pub fn resolve_inputs(
    extracted_text: &str,
    report: &CollaboratorReport,
    policy: &FallbackPolicy,
) -> Stage1Output {
    let mut fallbacks = Vec::new();

    let corrected_text = match &report.corrected_text {
        Some(text) => text.clone(),
        None => {
            fallbacks.push(FallbackUsed::CorrectedText);
            match policy.corrected_text {
                CorrectedTextFallback::Identity => extracted_text.to_string(),
            }
        }
    };

    let grammar_corrected_text = match &report.grammar_corrected_text {
        Some(text) => text.clone(),
        None => {
            fallbacks.push(FallbackUsed::GrammarCorrectedText);
            match policy.grammar_corrected_text {
                GrammarTextFallback::SpellingCorrected => corrected_text.clone(),
            }
        }
    };

    let flagged_token_count = match report.flagged_token_count {
        Some(count) => count,
        None => {
            fallbacks.push(FallbackUsed::FlaggedTokenCount);
            policy
                .flagged_tokens
                .estimate(extracted_text.split_whitespace().count())
        }
    };

    if !fallbacks.is_empty() {
        tracing::warn!(?fallbacks, "collaborator values missing; fallbacks applied");
    }

    Stage1Output {
        inputs: FeatureInputs {
            extracted_text: extracted_text.to_string(),
            corrected_text,
            grammar_corrected_text,
            flagged_token_count,
        },
        fallbacks,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_inputs.rs"]
mod tests;

//! Text screening pipeline: collaborator inputs -> feature vector -> decision tree.

pub mod stage1_inputs;
pub mod stage2_features;
pub mod stage3_classify;

use serde::Serialize;

use crate::model::classification::ClassificationResult;
use crate::model::fallback::{CollaboratorReport, FallbackUsed};
use crate::model::features::{FeatureInputs, FeatureVector};
use crate::model::profile::ScoringProfile;

#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub inputs: FeatureInputs,
    pub features: FeatureVector,
    pub classification: ClassificationResult,
    pub fallbacks: Vec<FallbackUsed>,
}

/// Runs all three stages over one snapshot of `extracted_text`.
pub fn analyze_text(
    extracted_text: &str,
    report: &CollaboratorReport,
    profile: &ScoringProfile,
) -> Analysis {
    let stage1 = stage1_inputs::resolve_inputs(extracted_text, report, &profile.fallback);
    let features = stage2_features::run_stage2(&stage1.inputs, profile);
    let classification = stage3_classify::run_stage3(&profile.tree, &features);
    Analysis {
        inputs: stage1.inputs,
        features,
        classification,
        fallbacks: stage1.fallbacks,
    }
}

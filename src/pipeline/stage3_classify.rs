use crate::model::classification::ClassificationResult;
use crate::model::features::FeatureVector;
use crate::model::tree::{DecisionTree, TreeNode};

/// Classifies against the built-in screening tree.
pub fn classify(features: &FeatureVector) -> ClassificationResult {
    run_stage3(&DecisionTree::default_v1(), features)
}

/// Walks the tree from the root; `value <= threshold` takes the left child.
/// NaN fails every comparison and therefore always goes right.
pub fn run_stage3(tree: &DecisionTree, features: &FeatureVector) -> ClassificationResult {
    let mut idx = 0usize;
    let mut path = Vec::new();
    loop {
        path.push(idx);
        match tree.node(idx) {
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                idx = if features.get(*feature) <= *threshold {
                    *left
                } else {
                    *right
                };
            }
            TreeNode::Leaf { weights } => {
                let label = weights[0] == 1.0;
                let confidence = if label { weights[0] } else { weights[1] };
                tracing::debug!(leaf = idx, label, confidence, "classified feature vector");
                return ClassificationResult {
                    label,
                    class_weights: *weights,
                    confidence,
                    leaf: idx,
                    path,
                };
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_classify.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// Outcome of one decision-tree evaluation.
///
/// `class_weights` is the terminal leaf as stored in the tree; `label` is true when
/// the first weight is 1.0. `confidence` is the leaf weight backing `label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: bool,
    pub class_weights: [f64; 2],
    pub confidence: f64,
    pub leaf: usize,
    pub path: Vec<usize>,
}

impl ClassificationResult {
    pub fn verdict(&self) -> &'static str {
        if self.label {
            "indicative"
        } else {
            "not_indicative"
        }
    }
}

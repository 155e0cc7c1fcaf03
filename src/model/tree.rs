use serde::{Deserialize, Serialize};

use crate::error::LexiError;
use crate::model::features::Feature;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    /// `value <= threshold` goes to `left`.
    Split {
        feature: Feature,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        weights: [f64; 2],
    },
}

/// Fixed, already-trained binary decision tree stored as a node array rooted at 0.
///
/// Construction checks that every child index is in range and that no node is
/// reachable twice, so evaluation always terminates at a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TreeNode>", into = "Vec<TreeNode>")]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
}

impl DecisionTree {
    pub fn new(nodes: Vec<TreeNode>) -> Result<Self, LexiError> {
        validate_nodes(&nodes)?;
        Ok(Self { nodes })
    }

    /// The screening tree shipped with the engine. Only the first three features are consulted.
    ///
    /// Thresholds are rounded to six decimals; the trained values carry more digits
    /// (96.40350723266602, 99.1046028137207, 2.408450722694397, 1.7936508059501648).
    pub fn default_v1() -> Self {
        Self {
            nodes: vec![
                TreeNode::Split {
                    feature: Feature::SpellingAccuracy,
                    threshold: 96.403507,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf {
                    weights: [0.0, 1.0],
                },
                TreeNode::Split {
                    feature: Feature::GrammaticalAccuracy,
                    threshold: 99.104603,
                    left: 3,
                    right: 4,
                },
                TreeNode::Leaf {
                    weights: [0.0, 1.0],
                },
                TreeNode::Split {
                    feature: Feature::CorrectionPercentage,
                    threshold: 2.408451,
                    left: 5,
                    right: 8,
                },
                TreeNode::Split {
                    feature: Feature::CorrectionPercentage,
                    threshold: 1.793651,
                    left: 6,
                    right: 7,
                },
                TreeNode::Leaf {
                    weights: [1.0, 0.0],
                },
                TreeNode::Leaf {
                    weights: [0.0, 1.0],
                },
                TreeNode::Leaf {
                    weights: [1.0, 0.0],
                },
            ],
        }
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> &TreeNode {
        &self.nodes[index]
    }

    pub fn leaf_indices(&self) -> Vec<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| matches!(n, TreeNode::Leaf { .. }))
            .map(|(i, _)| i)
            .collect()
    }
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::default_v1()
    }
}

impl TryFrom<Vec<TreeNode>> for DecisionTree {
    type Error = LexiError;

    fn try_from(nodes: Vec<TreeNode>) -> Result<Self, Self::Error> {
        Self::new(nodes)
    }
}

impl From<DecisionTree> for Vec<TreeNode> {
    fn from(tree: DecisionTree) -> Self {
        tree.nodes
    }
}

fn validate_nodes(nodes: &[TreeNode]) -> Result<(), LexiError> {
    if nodes.is_empty() {
        return Err(LexiError::InvalidConfig("decision tree has no nodes".to_string()));
    }

    let mut seen = vec![false; nodes.len()];
    let mut stack = vec![0usize];
    while let Some(idx) = stack.pop() {
        if seen[idx] {
            return Err(LexiError::InvalidConfig(format!(
                "decision tree node {idx} is reachable more than once"
            )));
        }
        seen[idx] = true;
        match &nodes[idx] {
            TreeNode::Split {
                threshold,
                left,
                right,
                ..
            } => {
                if !threshold.is_finite() {
                    return Err(LexiError::InvalidConfig(format!(
                        "decision tree node {idx} has a non-finite threshold"
                    )));
                }
                for &child in [left, right] {
                    if child >= nodes.len() {
                        return Err(LexiError::InvalidConfig(format!(
                            "decision tree node {idx} points at missing node {child}"
                        )));
                    }
                    stack.push(child);
                }
            }
            TreeNode::Leaf { weights } => {
                if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
                    return Err(LexiError::InvalidConfig(format!(
                        "decision tree leaf {idx} has invalid weights"
                    )));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/tree.rs"]
mod tests;

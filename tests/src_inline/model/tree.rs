use super::*;

#[test]
fn test_default_tree_is_valid() {
    let tree = DecisionTree::default_v1();
    assert!(validate_nodes(tree.nodes()).is_ok());
    assert_eq!(tree.leaf_indices(), vec![1, 3, 6, 7, 8]);
}

#[test]
fn test_default_leaves_sum_to_one() {
    let tree = DecisionTree::default_v1();
    for idx in tree.leaf_indices() {
        if let TreeNode::Leaf { weights } = tree.node(idx) {
            assert_eq!(weights[0] + weights[1], 1.0);
        }
    }
}

#[test]
fn test_rejects_empty_tree() {
    assert!(DecisionTree::new(Vec::new()).is_err());
}

#[test]
fn test_rejects_out_of_range_child() {
    let nodes = vec![TreeNode::Split {
        feature: Feature::SpellingAccuracy,
        threshold: 1.0,
        left: 1,
        right: 5,
    }];
    assert!(DecisionTree::new(nodes).is_err());
}

#[test]
fn test_rejects_cycle() {
    let nodes = vec![
        TreeNode::Split {
            feature: Feature::SpellingAccuracy,
            threshold: 1.0,
            left: 1,
            right: 0,
        },
        TreeNode::Leaf {
            weights: [1.0, 0.0],
        },
    ];
    assert!(DecisionTree::new(nodes).is_err());
}

#[test]
fn test_rejects_non_finite_threshold() {
    let nodes = vec![
        TreeNode::Split {
            feature: Feature::SpellingAccuracy,
            threshold: f64::NAN,
            left: 1,
            right: 2,
        },
        TreeNode::Leaf {
            weights: [1.0, 0.0],
        },
        TreeNode::Leaf {
            weights: [0.0, 1.0],
        },
    ];
    assert!(DecisionTree::new(nodes).is_err());
}

#[test]
fn test_serde_roundtrip_validates() {
    let json = serde_json::to_string(&DecisionTree::default_v1()).unwrap();
    let back: DecisionTree = serde_json::from_str(&json).unwrap();
    assert_eq!(back, DecisionTree::default_v1());

    let bad = r#"[{"split":{"feature":"spelling_accuracy","threshold":1.0,"left":3,"right":4}}]"#;
    assert!(serde_json::from_str::<DecisionTree>(bad).is_err());
}

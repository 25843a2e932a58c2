//! Random forest evaluated over scikit-learn's flat tree arrays.

use serde::{Deserialize, Serialize};

/// Marker stored in `children_left`/`children_right` for leaf nodes.
pub const TREE_LEAF: i64 = -1;

/// Binary decision tree in the flat parallel-array node layout.
///
/// Node `0` is the root. An internal node sends a sample left when
/// `x[feature] <= threshold`. `value` holds per-class weights for every node;
/// only leaf rows are read at inference time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<Vec<f64>>,
}

impl DecisionTree {
    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.children_left.len()
    }

    /// Validate layout invariants against the artifact's feature and class counts.
    ///
    /// Children must point strictly forward, which also rules out cycles.
    pub fn validate(&self, n_features: usize, n_classes: usize) -> Result<(), String> {
        let n = self.node_count();
        if n == 0 {
            return Err("tree has no nodes".to_string());
        }
        for (name, len) in [
            ("children_right", self.children_right.len()),
            ("feature", self.feature.len()),
            ("threshold", self.threshold.len()),
            ("value", self.value.len()),
        ] {
            if len != n {
                return Err(format!("{name} has {len} entries but tree has {n} nodes"));
            }
        }
        for node in 0..n {
            let left = self.children_left[node];
            let right = self.children_right[node];
            if left == TREE_LEAF || right == TREE_LEAF {
                if left != right {
                    return Err(format!("node {node} has exactly one child"));
                }
                self.validate_leaf(node, n_classes)?;
                continue;
            }
            for child in [left, right] {
                if child <= node as i64 || child >= n as i64 {
                    return Err(format!("node {node} points to invalid child {child}"));
                }
            }
            let feature = self.feature[node];
            if feature < 0 || feature as usize >= n_features {
                return Err(format!(
                    "node {node} splits on feature {feature} but the model has {n_features}"
                ));
            }
            if !self.threshold[node].is_finite() {
                return Err(format!("node {node} has a non-finite threshold"));
            }
        }
        Ok(())
    }

    fn validate_leaf(&self, node: usize, n_classes: usize) -> Result<(), String> {
        let weights = &self.value[node];
        if weights.len() != n_classes {
            return Err(format!(
                "leaf {node} has {} class weights but the model has {n_classes} classes",
                weights.len()
            ));
        }
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(format!("leaf {node} has a negative or non-finite weight"));
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(format!("leaf {node} carries no class weight"));
        }
        Ok(())
    }

    /// Index of the leaf a sample lands in. Missing features read as `0.0`.
    pub fn leaf_index(&self, features: &[f64]) -> usize {
        let mut node = 0usize;
        loop {
            let left = self.children_left[node];
            if left == TREE_LEAF {
                return node;
            }
            let value = features
                .get(self.feature[node] as usize)
                .copied()
                .unwrap_or(0.0);
            node = if value <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
    }

    /// Class distribution of the leaf a sample lands in.
    pub fn class_probabilities(&self, features: &[f64]) -> Vec<f64> {
        let weights = &self.value[self.leaf_index(features)];
        let total: f64 = weights.iter().sum();
        weights.iter().map(|w| w / total).collect()
    }
}

/// Bagged ensemble of decision trees; probabilities are averaged across trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn validate(&self, n_features: usize, n_classes: usize) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("random forest has no trees".to_string());
        }
        for (idx, tree) in self.trees.iter().enumerate() {
            tree.validate(n_features, n_classes)
                .map_err(|err| format!("tree {idx}: {err}"))?;
        }
        Ok(())
    }

    pub fn class_probabilities(&self, features: &[f64], n_classes: usize) -> Vec<f64> {
        let mut sum = vec![0.0f64; n_classes];
        for tree in &self.trees {
            for (acc, p) in sum.iter_mut().zip(tree.class_probabilities(features)) {
                *acc += p;
            }
        }
        let count = self.trees.len() as f64;
        for v in &mut sum {
            *v /= count;
        }
        sum
    }
}

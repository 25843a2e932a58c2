use std::path::{Path, PathBuf};

use placement_predictor::ml::{
    DecisionTree, Estimator, FORMAT_VERSION, ModelArtifact, RandomForest, TREE_LEAF,
};

/// Path of the demo forest shipped with the repository.
pub fn demo_model_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("demo")
        .join("placement_model.json")
}

/// One-split tree on CGPA: `<= threshold` mostly not placed, above mostly placed.
pub fn cgpa_stump(threshold: f64) -> DecisionTree {
    DecisionTree {
        children_left: vec![1, TREE_LEAF, TREE_LEAF],
        children_right: vec![2, TREE_LEAF, TREE_LEAF],
        feature: vec![1, -2, -2],
        threshold: vec![threshold, -2.0, -2.0],
        value: vec![vec![10.0, 10.0], vec![8.0, 2.0], vec![1.0, 9.0]],
    }
}

pub fn forest(trees: Vec<DecisionTree>) -> ModelArtifact {
    ModelArtifact {
        format_version: FORMAT_VERSION,
        n_features_in: 2,
        feature_names: vec!["iq".into(), "cgpa".into()],
        classes: vec![0, 1],
        estimator: Estimator::RandomForest(RandomForest { trees }),
    }
}

/// Serialize a model to `dir/name` and return the path.
pub fn write_model(dir: &Path, name: &str, model: &ModelArtifact) -> PathBuf {
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(model).expect("serialize model");
    std::fs::write(&path, json).expect("write model");
    path
}

//! JSON model artifact envelope and its load-time validation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Classifier, LogisticRegression, RandomForest};

/// Artifact format version understood by this build.
pub const FORMAT_VERSION: u32 = 1;

/// Errors raised while loading a model artifact.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model file not found at {path}")]
    NotFound { path: PathBuf },
    #[error("Failed to read model {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid model JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Unsupported model format_version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("Invalid model: {0}")]
    Invalid(String),
}

impl ModelError {
    /// True when the artifact file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ModelError::NotFound { .. })
    }
}

/// Estimator payload, tagged by `kind` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimator {
    RandomForest(RandomForest),
    LogisticRegression(LogisticRegression),
}

impl Estimator {
    /// Human-readable estimator name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Estimator::RandomForest(_) => "Random Forest Classifier",
            Estimator::LogisticRegression(_) => "Logistic Regression",
        }
    }
}

/// Versioned classifier exported by the training process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    /// Number of features each sample must carry, in training order.
    pub n_features_in: usize,
    /// Optional names for the features, same order as the samples.
    #[serde(default)]
    pub feature_names: Vec<String>,
    /// Class labels in probability-column order.
    pub classes: Vec<i64>,
    pub estimator: Estimator,
}

impl ModelArtifact {
    /// Validate structural invariants of the artifact.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.format_version != FORMAT_VERSION {
            return Err(ModelError::UnsupportedVersion {
                found: self.format_version,
                expected: FORMAT_VERSION,
            });
        }
        if self.n_features_in == 0 {
            return Err(ModelError::Invalid("n_features_in must be > 0".to_string()));
        }
        if !self.feature_names.is_empty() && self.feature_names.len() != self.n_features_in {
            return Err(ModelError::Invalid(format!(
                "{} feature names for {} features",
                self.feature_names.len(),
                self.n_features_in
            )));
        }
        if self.classes.len() < 2 {
            return Err(ModelError::Invalid(
                "Model must contain at least 2 classes".to_string(),
            ));
        }
        for (idx, class) in self.classes.iter().enumerate() {
            if self.classes[..idx].contains(class) {
                return Err(ModelError::Invalid(format!("duplicate class label {class}")));
            }
        }
        let n_classes = self.classes.len();
        match &self.estimator {
            Estimator::RandomForest(forest) => forest.validate(self.n_features_in, n_classes),
            Estimator::LogisticRegression(model) => model.validate(self.n_features_in, n_classes),
        }
        .map_err(ModelError::Invalid)
    }

    /// Load and validate a model from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, ModelError> {
        let bytes = std::fs::read(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ModelError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ModelError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let model: Self = serde_json::from_slice(&bytes).map_err(|source| ModelError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        model.validate()?;
        Ok(model)
    }

    /// Position of a class label in the probability columns.
    pub fn class_index(&self, label: i64) -> Option<usize> {
        self.classes.iter().position(|&class| class == label)
    }
}

impl Classifier for ModelArtifact {
    fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn n_features(&self) -> usize {
        self.n_features_in
    }

    fn class_probabilities(&self, features: &[f64]) -> Vec<f64> {
        match &self.estimator {
            Estimator::RandomForest(forest) => {
                forest.class_probabilities(features, self.classes.len())
            }
            Estimator::LogisticRegression(model) => model.class_probabilities(features),
        }
    }
}

//! Classifier artifacts and the inference interface the form talks to.
//!
//! Models are trained elsewhere and exported as JSON. This module only loads,
//! validates and evaluates them.

mod artifact;
mod forest;
pub mod loader;
mod logreg;

pub use artifact::{Estimator, FORMAT_VERSION, ModelArtifact, ModelError};
pub use forest::{DecisionTree, RandomForest, TREE_LEAF};
pub use logreg::LogisticRegression;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Inference surface shared by every supported estimator.
///
/// The single-sample methods are the primitives; the matrix forms evaluate
/// each row independently and keep the row order.
pub trait Classifier {
    /// Class labels in the order used by [`Classifier::class_probabilities`].
    fn classes(&self) -> &[i64];

    /// Number of features expected per sample.
    fn n_features(&self) -> usize;

    /// Probability of each class for one sample, summing to 1.
    fn class_probabilities(&self, features: &[f64]) -> Vec<f64>;

    /// Most probable class label for one sample. Ties go to the earlier class.
    ///
    /// Panics if the model has no classes; loaded artifacts always carry at least two.
    fn classify(&self, features: &[f64]) -> i64 {
        let proba = self.class_probabilities(features);
        self.classes()[argmax(&proba)]
    }

    /// Row-wise class probabilities, shape `(n_samples, n_classes)`.
    fn predict_proba(&self, x: ArrayView2<'_, f64>) -> Array2<f64> {
        let mut out = Array2::zeros((x.nrows(), self.classes().len()));
        for (row, mut target) in x.rows().into_iter().zip(out.rows_mut()) {
            let proba = self.class_probabilities(&row.to_vec());
            target.assign(&ArrayView1::from(&proba));
        }
        out
    }

    /// Row-wise class labels, one per sample.
    fn predict(&self, x: ArrayView2<'_, f64>) -> Array1<i64> {
        x.rows()
            .into_iter()
            .map(|row| self.classify(&row.to_vec()))
            .collect()
    }
}

/// Index of the largest value, first index on ties. Returns 0 for empty input.
pub(crate) fn argmax(values: &[f64]) -> usize {
    let mut best_idx = 0usize;
    let mut best_val = f64::NEG_INFINITY;
    for (idx, &v) in values.iter().enumerate() {
        if v > best_val {
            best_val = v;
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    struct Fixed {
        classes: Vec<i64>,
        proba: Vec<f64>,
    }

    impl Classifier for Fixed {
        fn classes(&self) -> &[i64] {
            &self.classes
        }

        fn n_features(&self) -> usize {
            2
        }

        fn class_probabilities(&self, _features: &[f64]) -> Vec<f64> {
            self.proba.clone()
        }
    }

    #[test]
    fn argmax_prefers_first_on_ties() {
        assert_eq!(argmax(&[0.5, 0.5]), 0);
        assert_eq!(argmax(&[0.2, 0.7, 0.7]), 1);
        assert_eq!(argmax(&[]), 0);
    }

    #[test]
    fn classify_maps_argmax_to_label() {
        let model = Fixed {
            classes: vec![0, 1],
            proba: vec![0.3, 0.7],
        };
        assert_eq!(model.classify(&[1.0, 2.0]), 1);
    }

    #[test]
    fn matrix_forms_keep_row_order_and_shape() {
        let model = Fixed {
            classes: vec![0, 1],
            proba: vec![0.9, 0.1],
        };
        let x = array![[100.0, 7.0], [120.0, 9.0], [60.0, 3.5]];
        let proba = model.predict_proba(x.view());
        assert_eq!(proba.dim(), (3, 2));
        assert_eq!(proba.row(2).to_vec(), vec![0.9, 0.1]);
        assert_eq!(model.predict(x.view()).to_vec(), vec![0, 0, 0]);
    }
}

//! Binary logistic regression.

use serde::{Deserialize, Serialize};

/// Linear model scoring the second class: `P(classes[1]) = sigmoid(coef · x + intercept)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coef: Vec<f64>,
    pub intercept: f64,
}

impl LogisticRegression {
    pub fn validate(&self, n_features: usize, n_classes: usize) -> Result<(), String> {
        if n_classes != 2 {
            return Err(format!(
                "logistic regression supports 2 classes, found {n_classes}"
            ));
        }
        if self.coef.len() != n_features {
            return Err(format!(
                "coef has {} weights but the model has {n_features} features",
                self.coef.len()
            ));
        }
        if !self.intercept.is_finite() || self.coef.iter().any(|w| !w.is_finite()) {
            return Err("coefficients must be finite".to_string());
        }
        Ok(())
    }

    /// Raw decision value before the sigmoid.
    pub fn decision_function(&self, features: &[f64]) -> f64 {
        self.coef
            .iter()
            .zip(features)
            .fold(self.intercept, |acc, (w, x)| acc + w * x)
    }

    /// `[P(classes[0]), P(classes[1])]`.
    pub fn class_probabilities(&self, features: &[f64]) -> Vec<f64> {
        let positive = sigmoid(self.decision_function(features));
        vec![1.0 - positive, positive]
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_decision_is_even_odds() {
        let model = LogisticRegression {
            coef: vec![0.0, 0.0],
            intercept: 0.0,
        };
        assert_eq!(model.class_probabilities(&[120.0, 9.0]), vec![0.5, 0.5]);
    }

    #[test]
    fn sigmoid_is_stable_for_large_magnitudes() {
        assert_eq!(sigmoid(800.0), 1.0);
        assert_eq!(sigmoid(-800.0), 0.0);
        assert!((sigmoid(2.0) + sigmoid(-2.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn higher_cgpa_raises_placement_odds() {
        let model = LogisticRegression {
            coef: vec![0.02, 1.1],
            intercept: -10.0,
        };
        let low = model.class_probabilities(&[100.0, 5.0])[1];
        let high = model.class_probabilities(&[100.0, 9.0])[1];
        assert!(high > low);
    }

    #[test]
    fn validate_checks_shape() {
        let model = LogisticRegression {
            coef: vec![0.1],
            intercept: 0.0,
        };
        assert!(model.validate(2, 2).is_err());
        assert!(model.validate(1, 3).is_err());
        model.validate(1, 2).unwrap();
    }
}

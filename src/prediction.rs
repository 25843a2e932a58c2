//! Bridge between the form inputs and the classifier.
//!
//! Inputs become a one-row feature matrix `[[iq, cgpa]]`; the model's binary
//! output is mapped onto a placement outcome with both class probabilities.

use ndarray::{Array2, array};
use thiserror::Error;

use crate::ml::Classifier;

pub const IQ_MIN: i32 = 50;
pub const IQ_MAX: i32 = 200;
pub const IQ_DEFAULT: i32 = 100;
pub const CGPA_MIN: f64 = 0.0;
pub const CGPA_MAX: f64 = 10.0;
pub const CGPA_DEFAULT: f64 = 7.0;
pub const CGPA_STEP: f64 = 0.01;

/// Features per sample, in model order: IQ then CGPA.
pub const FEATURE_COUNT: usize = 2;
/// Model label meaning the student was placed.
pub const PLACED_LABEL: i64 = 1;
/// Model label meaning the student was not placed.
pub const NOT_PLACED_LABEL: i64 = 0;

/// Errors raised when a model cannot serve the placement form.
#[derive(Debug, Error, PartialEq)]
pub enum PredictionError {
    #[error("Model expects {found} features but the form provides {expected} (IQ, CGPA)")]
    FeatureCount { expected: usize, found: usize },
    #[error("Model classes {classes:?} do not include label {missing}")]
    MissingClass { classes: Vec<i64>, missing: i64 },
}

/// One form submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentInput {
    pub iq: i32,
    pub cgpa: f64,
}

impl Default for StudentInput {
    fn default() -> Self {
        Self {
            iq: IQ_DEFAULT,
            cgpa: CGPA_DEFAULT,
        }
    }
}

impl StudentInput {
    pub fn new(iq: i32, cgpa: f64) -> Self {
        Self { iq, cgpa }
    }

    /// Snap values into the widget ranges, CGPA rounded to the input step.
    pub fn clamped(self) -> Self {
        let cgpa = if self.cgpa.is_finite() {
            round_to_step(self.cgpa.clamp(CGPA_MIN, CGPA_MAX))
        } else {
            CGPA_DEFAULT
        };
        Self {
            iq: self.iq.clamp(IQ_MIN, IQ_MAX),
            cgpa,
        }
    }

    /// Single-row feature matrix in model order.
    pub fn feature_matrix(&self) -> Array2<f64> {
        array![[f64::from(self.iq), self.cgpa]]
    }
}

fn round_to_step(value: f64) -> f64 {
    let steps_per_unit = (1.0 / CGPA_STEP).round();
    (value * steps_per_unit).round() / steps_per_unit
}

/// Placement outcome derived from the predicted label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    Placed,
    NotPlaced,
}

impl PlacementOutcome {
    /// Label `1` is placed; every other label is treated as not placed.
    pub fn from_label(label: i64) -> Self {
        if label == PLACED_LABEL {
            Self::Placed
        } else {
            Self::NotPlaced
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Placed => "PLACED",
            Self::NotPlaced => "NOT PLACED",
        }
    }
}

/// Model answer for one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub input: StudentInput,
    /// Raw label returned by the classifier.
    pub label: i64,
    pub outcome: PlacementOutcome,
    pub placed_probability: f64,
    pub not_placed_probability: f64,
}

impl Prediction {
    /// Probability of the predicted outcome.
    pub fn confidence(&self) -> f64 {
        match self.outcome {
            PlacementOutcome::Placed => self.placed_probability,
            PlacementOutcome::NotPlaced => self.not_placed_probability,
        }
    }
}

/// Column indices of the not-placed and placed labels.
fn label_columns<C: Classifier + ?Sized>(model: &C) -> Result<(usize, usize), PredictionError> {
    if model.n_features() != FEATURE_COUNT {
        return Err(PredictionError::FeatureCount {
            expected: FEATURE_COUNT,
            found: model.n_features(),
        });
    }
    let column = |missing: i64| {
        model
            .classes()
            .iter()
            .position(|&class| class == missing)
            .ok_or_else(|| PredictionError::MissingClass {
                classes: model.classes().to_vec(),
                missing,
            })
    };
    Ok((column(NOT_PLACED_LABEL)?, column(PLACED_LABEL)?))
}

/// Check a model can serve the form before any submission.
pub fn check_compatible<C: Classifier + ?Sized>(model: &C) -> Result<(), PredictionError> {
    label_columns(model).map(|_| ())
}

/// Run the classifier on one submission.
pub fn predict<C: Classifier + ?Sized>(
    model: &C,
    input: StudentInput,
) -> Result<Prediction, PredictionError> {
    let (not_placed_col, placed_col) = label_columns(model)?;
    let x = input.feature_matrix();
    let label = model.predict(x.view())[0];
    let proba = model.predict_proba(x.view());
    let placed_probability = proba[[0, placed_col]];
    let not_placed_probability = proba[[0, not_placed_col]];
    tracing::debug!(
        iq = input.iq,
        cgpa = input.cgpa,
        label,
        placed_probability,
        not_placed_probability,
        "Classifier evaluated"
    );
    Ok(Prediction {
        input,
        label,
        outcome: PlacementOutcome::from_label(label),
        placed_probability,
        not_placed_probability,
    })
}

/// Format a probability as a percentage with two decimals, e.g. `85.00%`.
pub fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// Echo a CGPA the way it was entered, keeping one decimal for whole numbers.
pub fn format_cgpa(cgpa: f64) -> String {
    format!("{cgpa:?}")
}

//! Bridges the model loader and prediction logic to the egui UI.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::AppSettings;
use crate::egui_app::state::{ModelStatus, UiState};
use crate::egui_app::view_model;
use crate::ml::{ModelArtifact, ModelError, loader};
use crate::prediction::{self, Prediction, StudentInput};

/// Maintains app state and runs submissions against the cached model.
pub struct PredictorController {
    pub ui: UiState,
    model_path: PathBuf,
    model: Option<Arc<ModelArtifact>>,
    last_prediction: Option<Prediction>,
}

impl PredictorController {
    /// Build the controller from persisted settings. The model is not loaded yet.
    pub fn new(settings: &AppSettings) -> Self {
        let ui = UiState {
            about: view_model::about_state(&settings.about),
            form: StudentInput::new(settings.form.default_iq, settings.form.default_cgpa).clamped(),
            ..UiState::default()
        };
        Self {
            ui,
            model_path: settings.model.resolved_path(),
            model: None,
            last_prediction: None,
        }
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn model(&self) -> Option<&Arc<ModelArtifact>> {
        self.model.as_ref()
    }

    pub fn last_prediction(&self) -> Option<&Prediction> {
        self.last_prediction.as_ref()
    }

    /// Load the configured model through the process-wide cache and update the banner.
    pub fn load_model(&mut self) {
        let path = self.model_path.clone();
        let loaded = loader::load_cached(&path)
            .map_err(LoadFailure::from)
            .and_then(|model| self.accept_model(model));
        match loaded {
            Ok(()) => {
                self.ui.model = ModelStatus::Loaded { path };
            }
            Err(LoadFailure::Model(err)) if err.is_not_found() => {
                warn!(path = %path.display(), "Model file not found");
                self.model = None;
                self.ui.model = ModelStatus::Missing { path };
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "Model unavailable");
                self.model = None;
                self.ui.model = ModelStatus::Failed {
                    path,
                    message: err.to_string(),
                };
            }
        }
    }

    fn accept_model(&mut self, model: Arc<ModelArtifact>) -> Result<(), LoadFailure> {
        prediction::check_compatible(model.as_ref())?;
        self.model = Some(model);
        Ok(())
    }

    pub fn set_iq(&mut self, iq: i32) {
        self.update_form(StudentInput { iq, ..self.ui.form });
    }

    pub fn set_cgpa(&mut self, cgpa: f64) {
        self.update_form(StudentInput { cgpa, ..self.ui.form });
    }

    fn update_form(&mut self, input: StudentInput) {
        let input = input.clamped();
        if input == self.ui.form {
            return;
        }
        self.ui.form = input;
        self.ui.result = None;
        self.ui.prediction_error = None;
        self.last_prediction = None;
    }

    /// Run the classifier on the current form values.
    pub fn submit(&mut self) {
        let Some(model) = self.model.as_ref() else {
            warn!("Submit ignored: no model loaded");
            return;
        };
        let input = self.ui.form;
        match prediction::predict(model.as_ref(), input) {
            Ok(result) => {
                info!(
                    iq = input.iq,
                    cgpa = input.cgpa,
                    outcome = result.outcome.label(),
                    placed_probability = result.placed_probability,
                    "Prediction rendered"
                );
                self.ui.result = Some(view_model::result_view(&result));
                self.ui.prediction_error = None;
                self.last_prediction = Some(result);
            }
            Err(err) => {
                error!(error = %err, "Prediction failed");
                self.ui.result = None;
                self.ui.prediction_error = Some(err.to_string());
                self.last_prediction = None;
            }
        }
    }
}

/// Reasons a model cannot be used by the form.
#[derive(Debug, thiserror::Error)]
enum LoadFailure {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Incompatible(#[from] prediction::PredictionError),
}

//! Shared state types for the egui UI.

use std::path::{Path, PathBuf};

use crate::egui_app::ui::style::StatusTone;
use crate::prediction::StudentInput;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub model: ModelStatus,
    pub about: AboutState,
    pub form: StudentInput,
    /// Result of the last submit; cleared whenever an input changes.
    pub result: Option<ResultView>,
    /// Message shown instead of a result when the classifier rejects a submission.
    pub prediction_error: Option<String>,
}

/// Load state of the classifier artifact.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModelStatus {
    #[default]
    NotLoaded,
    Loaded { path: PathBuf },
    Missing { path: PathBuf },
    Failed { path: PathBuf, message: String },
}

impl ModelStatus {
    /// Rendering stops below the banner unless the model is ready.
    pub fn halts(&self) -> bool {
        !matches!(self, ModelStatus::Loaded { .. })
    }

    pub fn banner(&self) -> BannerView {
        match self {
            ModelStatus::NotLoaded => BannerView {
                text: "Loading model...".to_string(),
                tone: StatusTone::Info,
            },
            ModelStatus::Loaded { .. } => BannerView {
                text: "✅ Model loaded successfully!".to_string(),
                tone: StatusTone::Success,
            },
            ModelStatus::Missing { path } => BannerView {
                text: format!(
                    "❌ Model file not found! Please ensure '{}' exists.",
                    display_name(path)
                ),
                tone: StatusTone::Error,
            },
            ModelStatus::Failed { path, message } => BannerView {
                text: format!(
                    "❌ Could not load model '{}': {message}",
                    display_name(path)
                ),
                tone: StatusTone::Error,
            },
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// A single callout line with its tone.
#[derive(Clone, Debug, PartialEq)]
pub struct BannerView {
    pub text: String,
    pub tone: StatusTone,
}

/// Sidebar copy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AboutState {
    pub lines: Vec<String>,
}

/// Display strings for one prediction.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub headline: BannerView,
    pub confidence: String,
    pub placed: BannerView,
    pub not_placed: BannerView,
    pub input_summary: Vec<String>,
}

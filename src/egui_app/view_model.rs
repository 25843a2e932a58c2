//! Helpers to convert domain data into egui-facing view structs.

use crate::config::AboutSettings;
use crate::egui_app::state::{AboutState, BannerView, ResultView};
use crate::egui_app::ui::style::StatusTone;
use crate::prediction::{PlacementOutcome, Prediction, format_cgpa, format_percent};

/// Build the display strings for a prediction.
pub fn result_view(prediction: &Prediction) -> ResultView {
    let headline = match prediction.outcome {
        PlacementOutcome::Placed => BannerView {
            text: format!("Result: {} ✅", prediction.outcome.label()),
            tone: StatusTone::Success,
        },
        PlacementOutcome::NotPlaced => BannerView {
            text: format!("Result: {} ❌", prediction.outcome.label()),
            tone: StatusTone::Error,
        },
    };
    ResultView {
        headline,
        confidence: format_percent(prediction.confidence()),
        placed: BannerView {
            text: format!("Placed: {}", format_percent(prediction.placed_probability)),
            tone: StatusTone::Info,
        },
        not_placed: BannerView {
            text: format!(
                "Not Placed: {}",
                format_percent(prediction.not_placed_probability)
            ),
            tone: StatusTone::Warning,
        },
        input_summary: vec![
            format!("IQ Score: {}", prediction.input.iq),
            format!("CGPA: {}", format_cgpa(prediction.input.cgpa)),
        ],
    }
}

/// Sidebar lines describing the app and model.
pub fn about_state(settings: &AboutSettings) -> AboutState {
    let mut lines = vec![
        "This app predicts placement status based on IQ and CGPA.".to_string(),
        format!("Model: {}", settings.model_name),
    ];
    if let Some(accuracy) = settings.reported_accuracy {
        lines.push(format!("Accuracy: {:.0}%", accuracy * 100.0));
    }
    AboutState { lines }
}

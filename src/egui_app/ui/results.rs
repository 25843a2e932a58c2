use super::{callout, callout_text, style};
use crate::egui_app::state::{BannerView, UiState};
use eframe::egui::{self, RichText, Ui};

/// Prediction result, probability breakdown and input echo.
pub(super) fn render(ui: &mut Ui, state: &UiState) {
    if let Some(message) = &state.prediction_error {
        callout(
            ui,
            &BannerView {
                text: format!("❌ Prediction failed: {message}"),
                tone: style::StatusTone::Error,
            },
        );
        return;
    }
    let Some(view) = &state.result else {
        return;
    };

    ui.label(RichText::new("📊 Prediction Result").size(22.0).strong());
    ui.add_space(6.0);
    callout_text(
        ui,
        &view.headline,
        RichText::new(&view.headline.text).strong(),
    );
    ui.add_space(8.0);
    ui.label(RichText::new("Confidence").color(style::muted_text()));
    ui.label(RichText::new(&view.confidence).size(32.0));

    ui.add_space(12.0);
    ui.label(RichText::new("Probability Distribution").size(18.0).strong());
    ui.add_space(6.0);
    ui.columns(2, |columns| {
        callout_text(
            &mut columns[0],
            &view.placed,
            RichText::new(&view.placed.text).strong(),
        );
        callout_text(
            &mut columns[1],
            &view.not_placed,
            RichText::new(&view.not_placed.text).strong(),
        );
    });

    ui.add_space(12.0);
    egui::CollapsingHeader::new("📋 View Input Summary")
        .default_open(false)
        .show(ui, |ui| {
            for line in &view.input_summary {
                ui.label(line);
            }
        });
}

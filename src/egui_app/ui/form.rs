use super::style;
use crate::egui_app::controller::PredictorController;
use crate::prediction::{CGPA_MAX, CGPA_MIN, CGPA_STEP, IQ_MAX, IQ_MIN};
use eframe::egui::{self, Color32, RichText, Ui};

/// Student inputs in two columns followed by the submit button.
pub(super) fn render(ui: &mut Ui, controller: &mut PredictorController) {
    ui.label(RichText::new("📝 Student Information").size(22.0).strong());
    ui.add_space(6.0);

    let mut iq = controller.ui.form.iq;
    let mut cgpa = controller.ui.form.cgpa;
    ui.columns(2, |columns| {
        field_label(&mut columns[0], "IQ Score");
        columns[0]
            .add(egui::DragValue::new(&mut iq).range(IQ_MIN..=IQ_MAX).speed(1.0))
            .on_hover_text(format!("Enter IQ score between {IQ_MIN}-{IQ_MAX}"));

        field_label(&mut columns[1], "CGPA (out of 10)");
        columns[1]
            .add(
                egui::DragValue::new(&mut cgpa)
                    .range(CGPA_MIN..=CGPA_MAX)
                    .speed(CGPA_STEP)
                    .fixed_decimals(2),
            )
            .on_hover_text(format!("Enter CGPA between {CGPA_MIN:.1}-{CGPA_MAX:.1}"));
    });
    controller.set_iq(iq);
    controller.set_cgpa(cgpa);

    ui.add_space(12.0);
    let button = egui::Button::new(
        RichText::new("🔮 Predict Placement")
            .strong()
            .color(Color32::WHITE),
    )
    .fill(style::primary_button_fill());
    if ui.add(button).clicked() {
        controller.submit();
    }
}

fn field_label(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(style::muted_text()));
}

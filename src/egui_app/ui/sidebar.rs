use super::style;
use crate::egui_app::state::AboutState;
use eframe::egui::{self, Frame, Margin, RichText};

pub(super) fn render(ctx: &egui::Context, about: &AboutState) {
    egui::SidePanel::left("about_panel")
        .resizable(false)
        .default_width(240.0)
        .frame(
            Frame::new()
                .fill(style::sidebar_fill())
                .inner_margin(Margin::same(14)),
        )
        .show(ctx, |ui| {
            ui.label(RichText::new("ℹ️ About").size(20.0).strong());
            ui.add_space(8.0);
            for line in &about.lines {
                ui.label(line);
                ui.add_space(4.0);
            }
        });
}

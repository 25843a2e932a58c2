//! egui renderer for the placement form.
mod form;
mod results;
mod sidebar;
pub mod style;

use crate::config::AppSettings;
use crate::egui_app::controller::PredictorController;
use crate::egui_app::state::BannerView;
use eframe::egui::{self, Frame, Margin, RichText, Stroke, Ui, Vec2, epaint::CornerRadius};

/// Smallest window size that keeps both input columns readable.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(560.0, 520.0);
/// Initial window size.
pub const DEFAULT_VIEWPORT_SIZE: Vec2 = Vec2::new(860.0, 760.0);

/// Renders the placement form using the shared controller state.
pub struct PredictorApp {
    controller: PredictorController,
    visuals_set: bool,
}

impl PredictorApp {
    /// Create the app and load the configured model once.
    pub fn new(settings: &AppSettings) -> Self {
        let mut controller = PredictorController::new(settings);
        controller.load_model();
        Self::from_controller(controller)
    }

    /// Wrap an already prepared controller.
    pub fn from_controller(controller: PredictorController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    pub fn controller(&self) -> &PredictorController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PredictorController {
        &mut self.controller
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    /// Draw one frame. Everything below the model banner is skipped while
    /// the model is unavailable.
    pub fn render(&mut self, ctx: &egui::Context) {
        self.apply_visuals(ctx);
        let halted = self.controller.ui.model.halts();
        if !halted {
            sidebar::render(ctx, &self.controller.ui.about);
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_max_width(720.0);
                    render_header(ui);
                    callout(ui, &self.controller.ui.model.banner());
                    if halted {
                        return;
                    }
                    ui.add_space(12.0);
                    form::render(ui, &mut self.controller);
                    ui.add_space(12.0);
                    results::render(ui, &self.controller.ui);
                });
        });
    }
}

fn render_header(ui: &mut Ui) {
    ui.add_space(8.0);
    ui.label(RichText::new("🎓 Placement Prediction System").size(30.0).strong());
    ui.add_space(4.0);
    ui.label(RichText::new("Enter Student Details to Predict Placement").size(18.0));
    ui.add_space(10.0);
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}

/// Full-width tinted box in the banner's tone.
pub(crate) fn callout(ui: &mut Ui, banner: &BannerView) {
    callout_text(ui, banner, RichText::new(&banner.text));
}

pub(crate) fn callout_text(ui: &mut Ui, banner: &BannerView, text: RichText) {
    let (accent, fill) = style::tone_colors(banner.tone);
    Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, accent))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(text.color(accent));
        });
}

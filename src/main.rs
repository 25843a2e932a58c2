#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based placement predictor.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use placement_predictor::config;
use placement_predictor::egui_app::ui::{DEFAULT_VIEWPORT_SIZE, MIN_VIEWPORT_SIZE, PredictorApp};
use placement_predictor::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = config::load_or_init();
    match &settings {
        Ok(settings) => logging::LaunchPaths::resolve(settings).log(),
        Err(err) => tracing::error!("Failed to load settings: {err}"),
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("Placement Predictor")
        .with_inner_size(DEFAULT_VIEWPORT_SIZE)
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Placement Predictor",
        native_options,
        Box::new(move |_cc| {
            let app: Box<dyn eframe::App> = match settings {
                Ok(settings) => Box::new(PredictorApp::new(&settings)),
                Err(err) => Box::new(LaunchError {
                    message: format!("Failed to load config: {err}"),
                }),
            };
            Ok(app)
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}

//! Library exports for the placement predictor binaries, benches and tests.
/// Application directory resolution.
pub mod app_dirs;
/// Persisted settings.
pub mod config;
/// egui front end.
pub mod egui_app;
/// Tracing setup.
pub mod logging;
/// Classifier artifacts and inference.
pub mod ml;
/// Form-to-model bridge.
pub mod prediction;

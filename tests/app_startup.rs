mod support;

use placement_predictor::config;
use placement_predictor::egui_app::controller::PredictorController;
use placement_predictor::egui_app::state::ModelStatus;
use placement_predictor::egui_app::ui::PredictorApp;
use placement_predictor::prediction::PlacementOutcome;
use eframe::egui;
use tempfile::tempdir;

use support::env::PlacementEnvGuard;
use support::model::{cgpa_stump, demo_model_path, forest, write_model};

/// Render one headless frame and return every painted string.
fn render_once(app: &mut PredictorApp) -> Vec<String> {
    let ctx = egui::Context::default();
    let output = ctx.run(egui::RawInput::default(), |ctx| app.render(ctx));
    let mut pending: Vec<&egui::Shape> =
        output.shapes.iter().map(|clipped| &clipped.shape).collect();
    let mut texts = Vec::new();
    while let Some(shape) = pending.pop() {
        match shape {
            egui::Shape::Text(text) => texts.push(text.galley.text().to_string()),
            egui::Shape::Vec(shapes) => pending.extend(shapes.iter()),
            _ => {}
        }
    }
    texts
}

#[test]
fn first_launch_writes_config_and_reports_missing_model() {
    let home = tempdir().unwrap();
    let missing = home.path().join("placement_model.json");
    let _guard = PlacementEnvGuard::set(home.path().to_path_buf(), Some(missing.clone()));

    let settings = config::load_or_init().unwrap();
    assert!(config::config_path().unwrap().is_file());

    let mut app = PredictorApp::new(&settings);
    let texts = render_once(&mut app);
    assert!(texts.iter().any(|text| text.contains("Model file not found!")));
    assert!(!texts.iter().any(|text| text.contains("IQ Score")));
    assert!(!texts.iter().any(|text| text.contains("🔮 Predict Placement")));
    let controller = app.controller();
    assert_eq!(controller.ui.model, ModelStatus::Missing { path: missing });
    assert_eq!(
        controller.ui.model.banner().text,
        "❌ Model file not found! Please ensure 'placement_model.json' exists."
    );
    assert!(controller.model().is_none());
    assert!(controller.ui.result.is_none());
}

#[test]
fn demo_model_end_to_end_through_controller() {
    let home = tempdir().unwrap();
    let _guard = PlacementEnvGuard::set(home.path().to_path_buf(), Some(demo_model_path()));

    let settings = config::load_or_init().unwrap();
    let mut controller = PredictorController::new(&settings);
    controller.load_model();
    assert!(!controller.ui.model.halts());

    controller.set_iq(150);
    controller.set_cgpa(9.5);
    controller.submit();
    let result = controller.last_prediction().expect("prediction");
    assert_eq!(result.outcome, PlacementOutcome::Placed);
    let view = controller.ui.result.as_ref().expect("result view");
    assert_eq!(view.headline.text, "Result: PLACED ✅");
    assert_eq!(view.input_summary, vec!["IQ Score: 150", "CGPA: 9.5"]);

    let mut app = PredictorApp::from_controller(controller);
    let texts = render_once(&mut app);
    assert!(texts.iter().any(|text| text.contains("IQ Score")));
    assert!(texts.iter().any(|text| text == "Placed: 86.32%"));
}

#[test]
fn model_with_wrong_feature_count_is_reported() {
    let home = tempdir().unwrap();
    let mut model = forest(vec![cgpa_stump(6.5)]);
    model.n_features_in = 3;
    model.feature_names.push("age".into());
    let path = write_model(home.path(), "three_features.json", &model);
    let _guard = PlacementEnvGuard::set(home.path().to_path_buf(), Some(path));

    let settings = config::load_or_init().unwrap();
    let mut controller = PredictorController::new(&settings);
    controller.load_model();
    assert!(matches!(controller.ui.model, ModelStatus::Failed { .. }));
    assert!(controller.ui.model.halts());
    controller.submit();
    assert!(controller.last_prediction().is_none());
}

#[test]
fn stump_model_follows_cgpa_threshold() {
    let home = tempdir().unwrap();
    let model = forest(vec![cgpa_stump(6.5)]);
    let path = write_model(home.path(), "stump.json", &model);
    let _guard = PlacementEnvGuard::set(home.path().to_path_buf(), Some(path));

    let settings = config::load_or_init().unwrap();
    let mut controller = PredictorController::new(&settings);
    controller.load_model();

    controller.set_cgpa(6.5);
    controller.submit();
    let low = controller.last_prediction().unwrap().clone();
    assert_eq!(low.outcome, PlacementOutcome::NotPlaced);
    assert!((low.placed_probability - 0.2).abs() < 1e-12);

    controller.set_cgpa(6.51);
    assert!(controller.ui.result.is_none());
    controller.submit();
    let high = controller.last_prediction().unwrap();
    assert_eq!(high.outcome, PlacementOutcome::Placed);
    assert!((high.placed_probability - 0.9).abs() < 1e-12);
}

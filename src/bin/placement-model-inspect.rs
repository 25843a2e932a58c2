//! Developer utility to inspect a placement model and run one prediction from the shell.

use std::path::PathBuf;

use placement_predictor::ml::{Estimator, ModelArtifact};
use placement_predictor::egui_app::view_model;
use placement_predictor::prediction::{self, Prediction, StudentInput};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Clone, PartialEq)]
struct CliOptions {
    model_path: PathBuf,
    iq: Option<i32>,
    cgpa: Option<f64>,
}

fn run() -> Result<(), String> {
    let options = parse_args(std::env::args().skip(1).collect())?;
    let model = ModelArtifact::load_json(&options.model_path).map_err(|err| err.to_string())?;
    print_summary(&model);

    let input = match (options.iq, options.cgpa) {
        (Some(iq), Some(cgpa)) => StudentInput::new(iq, cgpa),
        (None, None) => return Ok(()),
        _ => return Err("--iq and --cgpa must be given together".to_string()),
    };
    let result = prediction::predict(&model, input).map_err(|err| err.to_string())?;
    println!();
    for line in prediction_lines(&result) {
        println!("{line}");
    }
    Ok(())
}

/// Same strings the form shows for a prediction.
fn prediction_lines(result: &Prediction) -> Vec<String> {
    let view = view_model::result_view(result);
    let mut lines = view.input_summary;
    lines.push(view.headline.text);
    lines.push(format!("Confidence: {}", view.confidence));
    lines.push(view.placed.text);
    lines.push(view.not_placed.text);
    lines
}

fn print_summary(model: &ModelArtifact) {
    println!("estimator: {}", model.estimator.display_name());
    println!("format_version: {}", model.format_version);
    println!("classes: {:?}", model.classes);
    if model.feature_names.is_empty() {
        println!("features: {}", model.n_features_in);
    } else {
        println!("features: {}", model.feature_names.join(", "));
    }
    match &model.estimator {
        Estimator::RandomForest(forest) => {
            let nodes: usize = forest.trees.iter().map(|tree| tree.node_count()).sum();
            println!("trees: {} ({nodes} nodes)", forest.trees.len());
        }
        Estimator::LogisticRegression(lr) => {
            println!("coef: {:?}", lr.coef);
            println!("intercept: {}", lr.intercept);
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut model_path: Option<PathBuf> = None;
    let mut iq: Option<i32> = None;
    let mut cgpa: Option<f64> = None;

    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => return Err(help_text()),
            "--model" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--model requires a value".to_string())?;
                model_path = Some(PathBuf::from(value));
            }
            "--iq" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--iq requires a value".to_string())?;
                iq = Some(
                    value
                        .parse::<i32>()
                        .map_err(|_| format!("Invalid --iq value: {value}"))?,
                );
            }
            "--cgpa" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--cgpa requires a value".to_string())?;
                cgpa = Some(
                    value
                        .parse::<f64>()
                        .map_err(|_| format!("Invalid --cgpa value: {value}"))?,
                );
            }
            unknown => return Err(format!("Unknown argument: {unknown}\n\n{}", help_text())),
        }
        idx += 1;
    }

    let model_path = model_path.ok_or_else(|| format!("--model is required\n\n{}", help_text()))?;
    Ok(CliOptions {
        model_path,
        iq,
        cgpa,
    })
}

fn help_text() -> String {
    [
        "placement-model-inspect",
        "",
        "Usage:",
        "  placement-model-inspect --model <placement_model.json> [--iq <n> --cgpa <x>]",
        "",
        "Prints the model summary. With --iq and --cgpa, also prints the prediction.",
    ]
    .join("\n")
}

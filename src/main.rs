mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use cropguard::config::{ClassifierConfig, Config};
use cropguard::logic::RulesEngine;
use cropguard::{global, DiseasePredictor};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Commands::Predict {
            crop,
            symptoms,
            reading,
            model,
        } => {
            let classifier = global::init(&classifier_config(&config, model));
            let predictor = DiseasePredictor::new(classifier);
            let report = predictor.report(&crop, &symptoms, &reading.to_raw().resolve());
            print_json(&report)?;
        }
        Commands::Classify { reading, model } => {
            global::init(&classifier_config(&config, model));
            let features = cropguard::logic::FeatureVector::build(&reading.to_raw().resolve());
            print_json(&RiskOutput {
                risk_level: global::classify(&features),
            })?;
        }
        Commands::Rules => {
            print_json(&RulesEngine::new().list_rules())?;
        }
        Commands::Check { model } => {
            let classifier = global::init(&classifier_config(&config, model));
            print_json(&classifier.status())?;
        }
    }

    global::shutdown();
    Ok(())
}

#[derive(Serialize)]
struct RiskOutput {
    risk_level: cropguard::RiskLabel,
}

fn classifier_config(config: &Config, model_override: Option<PathBuf>) -> ClassifierConfig {
    match model_override {
        Some(path) => ClassifierConfig::with_model_path(path),
        None => config.classifier.clone(),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{}", json);
    Ok(())
}

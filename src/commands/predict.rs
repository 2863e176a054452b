//! One-off prediction for a single reading supplied on the command line.

use crate::cli;
use crate::config;
use crate::core::TransformerReading;
use crate::model::ClassifierAdapter;
use crate::risk;
use anyhow::Result;
use colored::*;
use std::path::PathBuf;

pub struct PredictConfig {
    pub load: f64,
    pub oil_temp: f64,
    pub rainfall: f64,
    pub age: f64,
    pub model: Option<PathBuf>,
    pub format: Option<cli::OutputFormat>,
}

pub fn handle_predict(config: PredictConfig) -> Result<()> {
    let file_config = config::load_config();

    let reading = TransformerReading {
        transformer_id: "adhoc".to_string(),
        load_percent: config.load,
        oil_temp_c: config.oil_temp,
        rainfall_mm: config.rainfall,
        age_years: config.age,
    };

    let mut scored = risk::assess(&reading);

    let model_path = config.model.or(file_config.model_path);
    if let Some(path) = model_path {
        let adapter = ClassifierAdapter::from_artifact(&path)?;
        let prediction = adapter.predict(&reading)?;
        scored.assessment.ai_label = Some(prediction.label);
        scored.assessment.ai_confidence = Some(prediction.confidence);
    }

    match config.format {
        Some(cli::OutputFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(&scored.assessment)?);
        }
        _ => print_assessment(&scored.assessment),
    }
    Ok(())
}

fn print_assessment(assessment: &crate::core::RiskAssessment) {
    println!("Rule score:  {}", assessment.rule_score);
    println!(
        "Rule label:  {}",
        match assessment.rule_label {
            crate::core::RiskLevel::High => assessment.rule_label.as_str().red().bold(),
            crate::core::RiskLevel::Medium => assessment.rule_label.as_str().yellow(),
            crate::core::RiskLevel::Low => assessment.rule_label.as_str().green(),
        }
    );
    if let (Some(label), Some(confidence)) = (assessment.ai_label, assessment.ai_confidence) {
        println!("AI label:    {label} (confidence {confidence:.2})");
    }
    println!("Explanation: {}", assessment.explanation);
}

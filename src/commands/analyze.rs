use crate::cli;
use crate::config::{self, GridmapConfig};
use crate::core::{FleetReport, PredictionFailure, RiskDistribution, RiskLevel, ScoredReading};
use crate::io::output::{create_writer, JsonWriter, MarkdownWriter, OutputWriter};
use crate::io::readings::{load_readings, LoadOutcome};
use crate::model::ClassifierAdapter;
use crate::risk;
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub model: Option<PathBuf>,
    pub no_model: bool,
    pub min_level: Option<cli::LevelFilter>,
    pub top: Option<usize>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let file_config = config::load_config();

    let outcome = load_readings(&config.path)
        .with_context(|| format!("Failed to load readings from {}", config.path.display()))?;

    let (adapter, model_status) = resolve_adapter(&config, &file_config);
    let report = build_report(outcome, adapter.as_ref(), model_status);
    let report = apply_display_filters(report, &config, &file_config);

    let format = resolve_format(config.format, &file_config);
    write_report(&report, format, config.output.as_deref())
}

/// Decide whether a classifier runs for this pass. A missing or broken
/// artifact degrades to rule-only scoring with the reason surfaced in the
/// report, never a fabricated prediction.
fn resolve_adapter(
    config: &AnalyzeConfig,
    file_config: &GridmapConfig,
) -> (Option<ClassifierAdapter>, Option<String>) {
    if config.no_model {
        return (None, None);
    }

    let model_path = config
        .model
        .clone()
        .or_else(|| file_config.model_path.clone());

    let Some(path) = model_path else {
        return (None, None);
    };

    match ClassifierAdapter::from_artifact(&path) {
        Ok(adapter) => (Some(adapter), None),
        Err(e) => {
            log::warn!("{e}; falling back to rule-based scoring only");
            (None, Some(format!("unavailable ({e})")))
        }
    }
}

/// Score every valid reading independently. A per-row prediction failure
/// leaves that row's AI fields absent, records the failure in the report,
/// and keeps going.
fn build_report(
    outcome: LoadOutcome,
    adapter: Option<&ClassifierAdapter>,
    model_status: Option<String>,
) -> FleetReport {
    let mut rows: Vec<ScoredReading> = Vec::with_capacity(outcome.readings.len());
    let mut prediction_failures = Vec::new();

    for reading in &outcome.readings {
        let mut scored = risk::assess(reading);
        if let Some(adapter) = adapter {
            match adapter.predict(reading) {
                Ok(prediction) => {
                    scored.assessment.ai_label = Some(prediction.label);
                    scored.assessment.ai_confidence = Some(prediction.confidence);
                }
                Err(e) => {
                    log::warn!("{e}");
                    prediction_failures.push(PredictionFailure {
                        transformer_id: reading.transformer_id.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }
        rows.push(scored);
    }

    FleetReport {
        timestamp: Utc::now(),
        distribution: RiskDistribution::from_rows(&rows),
        rows,
        rejected: outcome.rejected,
        prediction_failures,
        model_status,
    }
}

/// Display-layer filtering. The distribution keeps whole-fleet counts;
/// only the rendered rows are narrowed.
fn apply_display_filters(
    mut report: FleetReport,
    config: &AnalyzeConfig,
    file_config: &GridmapConfig,
) -> FleetReport {
    let min_level = config
        .min_level
        .map(RiskLevel::from)
        .or_else(|| min_level_from_config(file_config));
    if let Some(min) = min_level {
        report.rows.retain(|row| row.assessment.rule_label >= min);
    }

    let top = config.top.or(file_config.display.top);
    if let Some(top) = top {
        report
            .rows
            .sort_by(|a, b| b.assessment.rule_score.cmp(&a.assessment.rule_score));
        report.rows.truncate(top);
    }

    report
}

fn min_level_from_config(file_config: &GridmapConfig) -> Option<RiskLevel> {
    match file_config.display.min_level.as_deref() {
        Some("low") => Some(RiskLevel::Low),
        Some("medium") => Some(RiskLevel::Medium),
        Some("high") => Some(RiskLevel::High),
        _ => None,
    }
}

fn resolve_format(
    flag: Option<cli::OutputFormat>,
    file_config: &GridmapConfig,
) -> cli::OutputFormat {
    flag.unwrap_or(match file_config.format.as_deref() {
        Some("json") => cli::OutputFormat::Json,
        Some("markdown") => cli::OutputFormat::Markdown,
        _ => cli::OutputFormat::Terminal,
    })
}

fn write_report(
    report: &FleetReport,
    format: cli::OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut writer: Box<dyn OutputWriter> = match format {
                cli::OutputFormat::Json => Box::new(JsonWriter::new(file)),
                cli::OutputFormat::Markdown => Box::new(MarkdownWriter::new(file)),
                // Tables and color codes make no sense in a file.
                cli::OutputFormat::Terminal => Box::new(MarkdownWriter::new(file)),
            };
            writer.write_report(report)
        }
        None => create_writer(format.into()).write_report(report),
    }
}

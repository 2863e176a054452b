use crate::core::{FleetReport, RiskLevel};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use std::io::Write;

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &FleetReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &FleetReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &FleetReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_risk_table(report)?;
        self.write_rejected(report)?;
        self.write_prediction_failures(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &FleetReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Transformer Risk Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &FleetReport) -> anyhow::Result<()> {
        let dist = &report.distribution;
        writeln!(self.writer, "## Fleet Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Transformers scored | {} |", dist.total_transformers)?;
        writeln!(self.writer, "| High risk | {} |", dist.high_count)?;
        writeln!(self.writer, "| Medium risk | {} |", dist.medium_count)?;
        writeln!(self.writer, "| Low risk | {} |", dist.low_count)?;
        writeln!(self.writer, "| Rows excluded | {} |", report.rejected.len())?;
        if !report.prediction_failures.is_empty() {
            writeln!(
                self.writer,
                "| Prediction failures | {} |",
                report.prediction_failures.len()
            )?;
        }
        if let Some(status) = &report.model_status {
            writeln!(self.writer, "| Classifier | {status} |")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_risk_table(&mut self, report: &FleetReport) -> anyhow::Result<()> {
        if report.rows.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Transformer Risk Status")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Transformer | Load % | Oil °C | Rain mm | Age | Score | Level | AI | Conf | Explanation |"
        )?;
        writeln!(
            self.writer,
            "|-------------|--------|--------|---------|-----|-------|-------|----|------|-------------|"
        )?;

        for row in &report.rows {
            let r = &row.reading;
            let a = &row.assessment;
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} | {} |",
                r.transformer_id,
                r.load_percent,
                r.oil_temp_c,
                r.rainfall_mm,
                r.age_years,
                a.rule_score,
                a.rule_label,
                a.ai_label.map(|l| l.to_string()).unwrap_or_else(|| "-".to_string()),
                a.ai_confidence
                    .map(|c| format!("{c:.2}"))
                    .unwrap_or_else(|| "-".to_string()),
                a.explanation,
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_rejected(&mut self, report: &FleetReport) -> anyhow::Result<()> {
        if report.rejected.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Excluded Rows")?;
        writeln!(self.writer)?;
        for rejected in &report.rejected {
            writeln!(
                self.writer,
                "- `{}` - field `{}` {}",
                rejected.transformer_id, rejected.field, rejected.message
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_prediction_failures(&mut self, report: &FleetReport) -> anyhow::Result<()> {
        if report.prediction_failures.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Prediction Failures")?;
        writeln!(self.writer)?;
        for failure in &report.prediction_failures {
            writeln!(
                self.writer,
                "- `{}` - {}",
                failure.transformer_id, failure.message
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_report(&mut self, report: &FleetReport) -> anyhow::Result<()> {
        print_header();
        print_summary(report);
        print_fleet_table(report);
        print_rejected(report);
        print_prediction_failures(report);
        Ok(())
    }
}

fn print_header() {
    println!("{}", "Transformer Risk Report".bold().blue());
    println!("{}", "=======================".blue());
    println!();
}

fn print_summary(report: &FleetReport) {
    let dist = &report.distribution;
    println!("Summary:");
    println!("  Transformers scored: {}", dist.total_transformers);
    println!(
        "  High: {}  Medium: {}  Low: {}",
        dist.high_count.to_string().red(),
        dist.medium_count.to_string().yellow(),
        dist.low_count.to_string().green()
    );
    if !report.rejected.is_empty() {
        println!(
            "  Rows excluded: {}",
            report.rejected.len().to_string().yellow()
        );
    }
    if let Some(status) = &report.model_status {
        println!("  Classifier: {}", status.yellow());
    }
    println!();
}

fn print_fleet_table(report: &FleetReport) {
    if report.rows.is_empty() {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Transformer",
            "Load %",
            "Oil °C",
            "Rain mm",
            "Age",
            "Score",
            "Level",
            "AI",
            "Conf",
            "Explanation",
        ]);

    for row in &report.rows {
        let r = &row.reading;
        let a = &row.assessment;
        table.add_row(vec![
            Cell::new(&r.transformer_id),
            Cell::new(r.load_percent),
            Cell::new(r.oil_temp_c),
            Cell::new(r.rainfall_mm),
            Cell::new(r.age_years),
            Cell::new(a.rule_score),
            Cell::new(colored_level(a.rule_label)),
            Cell::new(
                a.ai_label
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(
                a.ai_confidence
                    .map(|c| format!("{c:.2}"))
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(&a.explanation),
        ]);
    }

    println!("{table}");
    println!();
}

fn colored_level(level: RiskLevel) -> String {
    match level {
        RiskLevel::High => level.as_str().red().bold().to_string(),
        RiskLevel::Medium => level.as_str().yellow().to_string(),
        RiskLevel::Low => level.as_str().green().to_string(),
    }
}

fn print_rejected(report: &FleetReport) {
    if report.rejected.is_empty() {
        return;
    }

    println!("{} Excluded rows:", "!".yellow().bold());
    for rejected in &report.rejected {
        println!(
            "  - {} - field {} {}",
            rejected.transformer_id,
            rejected.field.yellow(),
            rejected.message
        );
    }
    println!();
}

fn print_prediction_failures(report: &FleetReport) {
    if report.prediction_failures.is_empty() {
        return;
    }

    println!("{} Prediction failures:", "!".yellow().bold());
    for failure in &report.prediction_failures {
        println!(
            "  - {} - {}",
            failure.transformer_id.yellow(),
            failure.message
        );
    }
    println!();
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}

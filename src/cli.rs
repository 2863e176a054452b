use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gridmap")]
#[command(about = "Transformer fleet failure-risk analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a fleet table and report risk per transformer
    Analyze {
        /// CSV file with transformer readings
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Trained classifier artifact (JSON)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Skip the classifier even if an artifact is configured
        #[arg(long = "no-model")]
        no_model: bool,

        /// Show only transformers at or above this risk level
        #[arg(long = "min-level", value_enum)]
        min_level: Option<LevelFilter>,

        /// Show only the N highest-scoring transformers
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Score a single reading given on the command line
    Predict {
        /// Load as a percentage of rated capacity
        #[arg(long)]
        load: f64,

        /// Oil temperature in degrees Celsius
        #[arg(long = "oil-temp")]
        oil_temp: f64,

        /// Rainfall in millimetres
        #[arg(long)]
        rainfall: f64,

        /// Transformer age in years
        #[arg(long)]
        age: f64,

        /// Trained classifier artifact (JSON)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LevelFilter {
    Low,
    Medium,
    High,
}

impl From<LevelFilter> for crate::core::RiskLevel {
    fn from(f: LevelFilter) -> Self {
        match f {
            LevelFilter::Low => crate::core::RiskLevel::Low,
            LevelFilter::Medium => crate::core::RiskLevel::Medium,
            LevelFilter::High => crate::core::RiskLevel::High,
        }
    }
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter_conversion() {
        assert_eq!(
            crate::core::RiskLevel::from(LevelFilter::Low),
            crate::core::RiskLevel::Low
        );
        assert_eq!(
            crate::core::RiskLevel::from(LevelFilter::Medium),
            crate::core::RiskLevel::Medium
        );
        assert_eq!(
            crate::core::RiskLevel::from(LevelFilter::High),
            crate::core::RiskLevel::High
        );
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Terminal),
            crate::io::output::OutputFormat::Terminal
        );
    }

    #[test]
    fn test_cli_parsing_analyze_command() {
        let args = vec![
            "gridmap",
            "analyze",
            "data/fleet.csv",
            "--format",
            "json",
            "--min-level",
            "medium",
            "--top",
            "5",
        ];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Analyze {
                path,
                format,
                min_level,
                top,
                no_model,
                ..
            } => {
                assert_eq!(path, PathBuf::from("data/fleet.csv"));
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(min_level, Some(LevelFilter::Medium));
                assert_eq!(top, Some(5));
                assert!(!no_model);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_cli_parsing_predict_command() {
        let args = vec![
            "gridmap", "predict", "--load", "90", "--oil-temp", "75", "--rainfall", "150",
            "--age", "20",
        ];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Predict {
                load,
                oil_temp,
                rainfall,
                age,
                ..
            } => {
                assert_eq!(load, 90.0);
                assert_eq!(oil_temp, 75.0);
                assert_eq!(rainfall, 150.0);
                assert_eq!(age, 20.0);
            }
            _ => panic!("Expected Predict command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(vec!["gridmap", "init", "--force"]);

        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_level_filter_ordering() {
        assert!(LevelFilter::Low < LevelFilter::Medium);
        assert!(LevelFilter::Medium < LevelFilter::High);
    }
}

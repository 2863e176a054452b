//! CLI command implementations.
//!
//! Each submodule handles one subcommand with its configuration and
//! execution logic:
//! - **analyze**: score a fleet table and render the risk report
//! - **predict**: score a single reading given on the command line
//! - **init**: write a default `.gridmap.toml`

pub mod analyze;
pub mod init;
pub mod predict;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
pub use predict::{handle_predict, PredictConfig};

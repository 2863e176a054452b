//! `.gridmap.toml` discovery and parsing.
//!
//! The config file is optional; every field has a CLI flag that overrides
//! it. Discovery walks ancestor directories from the current working
//! directory, nearest file wins.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".gridmap.toml";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridmapConfig {
    /// Path to the trained classifier artifact (JSON).
    pub model_path: Option<PathBuf>,
    /// Default output format: "terminal", "markdown", or "json".
    pub format: Option<String>,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Show only transformers at or above this level by default.
    pub min_level: Option<String>,
    /// Show only the N highest-scoring transformers by default.
    pub top: Option<usize>,
}

/// Pure function to parse and validate config from TOML contents
pub fn parse_config(contents: &str) -> Result<GridmapConfig, String> {
    let config: GridmapConfig = toml::from_str(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    if let Some(format) = &config.format {
        if !matches!(format.as_str(), "terminal" | "markdown" | "json") {
            return Err(format!(
                "Unknown format `{format}` in {CONFIG_FILE_NAME} (expected terminal, markdown, or json)"
            ));
        }
    }
    if let Some(level) = &config.display.min_level {
        if !matches!(level.as_str(), "low" | "medium" | "high") {
            return Err(format!(
                "Unknown min_level `{level}` in {CONFIG_FILE_NAME} (expected low, medium, or high)"
            ));
        }
    }
    Ok(config)
}

fn try_load_from_path(config_path: &Path) -> Option<GridmapConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration from the nearest `.gridmap.toml`, or defaults.
pub fn load_config() -> GridmapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using default config.", e);
            return GridmapConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_from_path(&path))
        .unwrap_or_default()
}

/// Template written by `gridmap init`.
pub fn default_config_template() -> &'static str {
    r#"# gridmap configuration

# Path to the trained classifier artifact (JSON). Leave commented to run
# rule-based scoring only.
# model_path = "ml/model.json"

# Default output format: terminal, markdown, or json
format = "terminal"

[display]
# Show only transformers at or above this level: low, medium, high
# min_level = "medium"

# Show only the N highest-scoring transformers
# top = 10
"#
}

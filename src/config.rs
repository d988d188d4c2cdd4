use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = ".helm-autoupdate.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Failed to compile filename_regex {pattern:?}: {source}")]
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },
}

/// Top-level `.helm-autoupdate.yaml` document
///
/// ```yaml
/// charts:
///   - identity: datadog
///     chart:
///       repository: https://helm.datadoghq.com
///       name: datadog
///       version: "*"
/// filename_regex:
///   - .*\.yaml
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AutoUpdateConfig {
    pub charts: Vec<ChartEntry>,
    pub filename_regex: Vec<String>,
    /// `filename_regex` compiled at load time
    #[serde(skip)]
    pub parsed_regex: Vec<Regex>,
}

/// Maps an annotation identity to a chart in a repository
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChartEntry {
    pub identity: String,
    pub chart: ChartSpec,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChartSpec {
    /// Repository location, e.g. `https://aws.github.io/eks-charts`
    pub repository: String,
    /// Chart name inside the repository index
    pub name: String,
    /// Version constraint: an exact version, a semver range or `*`
    #[serde(default)]
    pub version: String,
}

impl AutoUpdateConfig {
    /// Parse a config document and compile its filename filters
    pub fn load(data: &str) -> Result<Self, ConfigError> {
        let mut config: AutoUpdateConfig = serde_yaml::from_str(data)?;

        config.parsed_regex = config
            .filename_regex
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ConfigError::InvalidRegex {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<_, _>>()?;

        debug!(
            "Loaded config with {} chart(s), {} filename filter(s)",
            config.charts.len(),
            config.parsed_regex.len()
        );
        Ok(config)
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(&data)
    }

    /// Chart configured for an identity
    ///
    /// The first entry wins; later entries with the same identity are
    /// never consulted.
    pub fn find_chart(&self, identity: &str) -> Option<&ChartSpec> {
        self.charts
            .iter()
            .find(|entry| entry.identity == identity)
            .map(|entry| &entry.chart)
    }
}

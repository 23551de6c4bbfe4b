//! Optional TOML run file

use std::path::{Path, PathBuf};

use gravitas_core::{AccessConfig, NetworkFiles};
use serde::Deserialize;

use crate::CliError;

/// Contents of a run file; every section may be left out
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub files: Option<NetworkFiles>,
    /// Objective parameter file, read when no `[objective]` section is given
    pub objective_file: Option<PathBuf>,
    pub objective: Option<AccessConfig>,
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub stop_metrics: Option<PathBuf>,
    pub line_metrics: Option<PathBuf>,
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| CliError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}

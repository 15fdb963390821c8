//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treemetrics/treemetrics.toml`
//! 3. Explicit config file (`--config <FILE>`)
//! 4. Environment variables: `TREEMETRICS_*` prefix
//!
//! Command-line flags are applied on top of the loaded settings by the CLI layer.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Prefix of environment variable overrides, e.g. `TREEMETRICS_TRAVERSAL`.
pub const ENV_PREFIX: &str = "TREEMETRICS";

/// Notation of tree input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// `1{2{4,5},3{6,7}}`
    #[default]
    Bracket,
    /// `1,2,3,null,5`
    Level,
}

/// Shape of command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `name: value` line per metric
    #[default]
    Plain,
    /// TOML document
    Toml,
    /// Tree diagram followed by the metrics
    Tree,
}

/// How the tree is walked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Traversal {
    /// Call-stack recursion, depth limited by the thread stack
    Recursive,
    /// Explicit heap stack, any depth
    #[default]
    Iterative,
}

/// Which diameter computation to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DiameterAlgorithm {
    /// Single traversal carrying (height, diameter)
    #[default]
    Linear,
    /// Reference definition, recomputes heights per node
    Quadratic,
}

macro_rules! display_as_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    match self.to_possible_value() {
                        Some(value) => f.write_str(value.get_name()),
                        None => Ok(()),
                    }
                }
            }
        )*
    };
}

display_as_value!(InputFormat, OutputFormat, Traversal, DiameterAlgorithm);

/// Unified configuration for treemetrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Notation used to read trees (default: bracket)
    pub input_format: InputFormat,
    /// Output shape (default: plain)
    pub output_format: OutputFormat,
    /// Traversal strategy (default: iterative)
    pub traversal: Traversal,
    /// Diameter algorithm (default: linear)
    pub diameter: DiameterAlgorithm,
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    pub input_format: Option<InputFormat>,
    pub output_format: Option<OutputFormat>,
    pub traversal: Option<Traversal>,
    pub diameter: Option<DiameterAlgorithm>,
}

/// Get the XDG config directory for treemetrics.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treemetrics").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treemetrics.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            input_format: overlay.input_format.unwrap_or(self.input_format),
            output_format: overlay.output_format.unwrap_or(self.output_format),
            traversal: overlay.traversal.unwrap_or(self.traversal),
            diameter: overlay.diameter.unwrap_or(self.diameter),
        }
    }

    /// Load settings with layered precedence from the standard locations.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), config_file, None)
    }

    /// Load settings from explicit sources.
    ///
    /// A missing global file is skipped. `env` replaces the process
    /// environment when given (keys like `TREEMETRICS_TRAVERSAL`).
    pub fn load_from(
        global: Option<&Path>,
        config_file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            debug!("config file: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables (explicit override)
        current.apply_env_overrides(env)
    }

    fn apply_env_overrides(self, env: Option<HashMap<String, String>>) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()
            .map_err(config_err)?;

        let raw: RawSettings = config.try_deserialize().map_err(config_err)?;
        Ok(self.merge_with(&raw))
    }

    /// Serialize as a TOML document (also usable as a config file).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

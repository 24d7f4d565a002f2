use super::common::ReportFormat;
use crate::Result;
use crate::ordering::SortKey;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

const LOG_TARGET: &str = "    config";

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File name looked up in the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "tablestats.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Metric to sort tables by; unset lists tables grouped by keyspace
    #[serde(default)]
    pub sort_key: Option<String>,

    /// Sort smallest first instead of largest first
    #[serde(default)]
    pub ascending: bool,

    /// Keep only the first N tables of a sorted listing (0 keeps all)
    #[serde(default)]
    pub top: usize,

    /// Size fields in snapshots use human-readable units
    #[serde(default)]
    pub human_readable: bool,

    /// Report output format
    #[serde(default)]
    pub format: ReportFormat,
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `tablestats.toml` in `search_dir` is used if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load(search_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading tablestats configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = search_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!(target: LOG_TARGET, "No '{path}' found, using the default configuration");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading tablestats configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        log::debug!(target: LOG_TARGET, "Loaded configuration from '{final_path}'");
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the sort key is not part of the vocabulary
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = self.sort_key.as_deref().filter(|name| !name.is_empty())
            && let Err(e) = SortKey::parse(name)
        {
            return Err(app_err!("invalid sort_key in configuration: {e}"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}

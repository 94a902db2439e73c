use crate::error::{PadError, Result};
use crate::model::Mode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const CONFIG_DIR_ENV: &str = "PAD_CONFIG_DIR";
pub const DEFAULT_LENGTH: usize = 80;
pub const DEFAULT_FILL: char = ' ';

/// User defaults, stored in `config.json`. Command-line flags win over these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PadConfig {
    /// Target width when `--length` is not given
    #[serde(default = "default_length")]
    pub length: usize,

    /// Fill character when `--char` is not given
    #[serde(default = "default_fill")]
    pub fill: char,

    /// Mode when `--mode` is not given or not recognised
    #[serde(default)]
    pub mode: Mode,
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

fn default_fill() -> char {
    DEFAULT_FILL
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            fill: DEFAULT_FILL,
            mode: Mode::default(),
        }
    }
}

impl PadConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PadError::Io)?;
        let config: PadConfig =
            serde_json::from_str(&content).map_err(PadError::Serialization)?;
        tracing::debug!(path = %config_path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// `$PAD_CONFIG_DIR` if set, otherwise the platform config directory.
    pub fn default_dir() -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Some(PathBuf::from(dir));
        }
        directories::ProjectDirs::from("com", "pad", "pad")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

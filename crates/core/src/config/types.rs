use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::dataset::LoadOptions;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Generation defaults for one named profile. Every field is optional.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Profile {
    /// Directory where exports land when no output path is given.
    pub export_dir: Option<String>,
    /// Number of variations for simple runs.
    pub count: Option<usize>,
    /// How many dataset variations to print.
    pub preview_limit: Option<usize>,
    /// Field separator of data files, a single ASCII character.
    pub delimiter: Option<String>,
    pub max_file_size_mb: Option<u64>,
    /// Fixed seed for reproducible output.
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

pub const DEFAULT_COUNT: usize = 10;

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    /// Config file the values came from; `None` when built-in defaults apply.
    pub source: Option<PathBuf>,
    pub export_dir: PathBuf,
    pub count: usize,
    pub preview_limit: Option<usize>,
    pub delimiter: u8,
    pub max_file_size: u64,
    pub seed: Option<u64>,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Data loading options for this profile.
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions { delimiter: self.delimiter, max_size: self.max_file_size }
    }

    /// Where an export with the given default file name goes.
    pub fn export_path(&self, file_name: &str) -> PathBuf {
        self.export_dir.join(file_name)
    }
}

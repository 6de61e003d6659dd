use crate::config::types::{
    ConfigFile, DEFAULT_COUNT, LoggingConfig, Profile, ResolvedConfig,
};
use crate::dataset::{DEFAULT_DELIMITER, MAX_FILE_SIZE};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("delimiter must be a single ASCII character, got '{0}'")]
    BadDelimiter(String),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and resolve the configuration.
    ///
    /// With no explicit path, a missing file at the default location is not
    /// an error: built-in defaults are returned instead.
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        if !path.exists() {
            if config_path.is_some() {
                return Err(ConfigError::NotFound(path.display().to_string()));
            }
            debug!(path = %path.display(), "no config file, using defaults");
            let active = profile_override.unwrap_or("default");
            return Self::resolve_profile(
                active,
                &Profile::default(),
                &LoggingConfig::default(),
                None,
            );
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }
        if cf.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        let active = profile_override
            .map(ToOwned::to_owned)
            .or(cf.profile.clone())
            .unwrap_or_else(|| "default".to_string());

        let prof = cf
            .profiles
            .get(&active)
            .ok_or_else(|| ConfigError::ProfileNotFound(active.clone()))?;

        Self::resolve_profile(&active, prof, &cf.logging, Some(path))
    }

    fn resolve_profile(
        active: &str,
        prof: &Profile,
        log_cfg: &LoggingConfig,
        source: Option<PathBuf>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let export_dir = match &prof.export_dir {
            Some(dir) => expand_path(dir)?,
            None => PathBuf::from("."),
        };

        let delimiter = match &prof.delimiter {
            Some(d) => parse_delimiter(d)?,
            None => DEFAULT_DELIMITER,
        };

        let max_file_size = prof
            .max_file_size_mb
            .map_or(MAX_FILE_SIZE, |mb| mb.saturating_mul(1024 * 1024));

        // Resolve log file path if present
        let logging = if let Some(ref file) = log_cfg.file {
            let expanded_file = expand_path(&file.to_string_lossy())?;
            LoggingConfig {
                level: log_cfg.level.clone(),
                file_level: log_cfg.file_level.clone(),
                file: Some(expanded_file),
            }
        } else {
            log_cfg.clone()
        };

        Ok(ResolvedConfig {
            active_profile: active.to_string(),
            source,
            export_dir,
            count: prof.count.unwrap_or(DEFAULT_COUNT),
            preview_limit: prof.preview_limit,
            delimiter,
            max_file_size,
            seed: prof.seed,
            logging,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("spingen").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("spingen").join("config.toml")
}

fn parse_delimiter(raw: &str) -> Result<u8, ConfigError> {
    let unescaped = if raw == "\\t" { "\t" } else { raw };
    match unescaped.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(ConfigError::BadDelimiter(raw.to_string())),
    }
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}

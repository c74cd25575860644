//! Configuration loading and discovery for `spritegen.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::SpritegenConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "spritegen.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML parsing error
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override output directory
    pub out: Option<PathBuf>,
    /// Override scale factor
    pub scale: Option<u32>,
    /// Force metadata sidecars on
    pub metadata: Option<bool>,
    /// Number of parallel jobs
    pub jobs: Option<usize>,
}

/// A configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: SpritegenConfig,
    /// The file that was read, if any.
    pub path: Option<PathBuf>,
    /// Directory that relative paths resolve against.
    pub root: PathBuf,
}

impl LoadedConfig {
    /// Output directory resolved against the project root.
    pub fn out_dir(&self) -> PathBuf {
        resolve_path(&self.root, &self.config.project.out)
    }
}

/// Find `spritegen.toml` by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_config_from)
}

/// Find `spritegen.toml` by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// An explicit path must exist. Without one the file is discovered from the
/// working directory; with none found, defaults apply and the working
/// directory is the project root.
pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            let config = load_config_file(&p)?;
            let root = project_root(&p).map(Path::to_path_buf).unwrap_or_else(|| cwd.clone());
            log::info!("loaded configuration from {}", p.display());
            Ok(LoadedConfig { config, path: Some(p), root })
        }
        None => {
            log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(LoadedConfig { config: default_config(), path: None, root: cwd })
        }
    }
}

/// Load and validate a specific file.
pub fn load_config_file(path: &Path) -> Result<SpritegenConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    parse_config(&contents).map_err(|e| match e {
        ConfigError::Parse { source, .. } => ConfigError::Parse { path: path.to_path_buf(), source },
        other => other,
    })
}

/// Parse and validate configuration text.
pub fn parse_config(contents: &str) -> Result<SpritegenConfig, ConfigError> {
    let config: SpritegenConfig = toml::from_str(contents)
        .map_err(|source| ConfigError::Parse { path: PathBuf::from(CONFIG_FILE_NAME), source })?;
    check(&config)?;
    Ok(config)
}

fn check(config: &SpritegenConfig) -> Result<(), ConfigError> {
    let errors = config.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()))
    }
}

/// Configuration used when no `spritegen.toml` exists.
pub fn default_config() -> SpritegenConfig {
    SpritegenConfig::default()
}

/// Merge CLI overrides into a configuration and re-validate.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut SpritegenConfig, overrides: &CliOverrides) -> Result<(), ConfigError> {
    if let Some(ref out) = overrides.out {
        config.project.out = out.clone();
    }
    if let Some(scale) = overrides.scale {
        config.defaults.scale = scale;
    }
    if let Some(metadata) = overrides.metadata {
        config.defaults.metadata = metadata;
    }
    if let Some(jobs) = overrides.jobs {
        config.defaults.jobs = Some(jobs);
    }
    check(config)
}

/// Get the project root directory from a config file path.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Resolve a path relative to the project root.
///
/// If the path is absolute, returns it unchanged.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

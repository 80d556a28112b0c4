//! Application configuration for vitae.
//!
//! An optional `vitae.toml` in the working directory relocates the data
//! directory. Without it the build reads `./data/`. The page always goes to
//! `./index.html`. Per-category file and field names are fixed and not part
//! of the config.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, VitaeError};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "vitae.toml";

/// The rendered page, relative to the working directory.
pub const OUTPUT_FILE_NAME: &str = "index.html";

// ---------------------------------------------------------------------------
// Config structs (matching vitae.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input and output locations.
    #[serde(default)]
    pub paths: PathsConfig,
}

/// `[paths]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the category data files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> String {
    "data".into()
}

// ---------------------------------------------------------------------------
// Build config (runtime, resolved from config file)
// ---------------------------------------------------------------------------

/// Runtime build configuration with paths resolved against a base directory.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory the category files are read from.
    pub data_dir: PathBuf,
    /// Path of the rendered page.
    pub output_path: PathBuf,
}

impl BuildConfig {
    /// Resolve the data directory relative to `base`. An absolute
    /// `data_dir` is kept as it is. The output page stays at
    /// [`OUTPUT_FILE_NAME`] in the working directory.
    pub fn resolve(config: &AppConfig, base: &Path) -> Self {
        Self {
            data_dir: base.join(&config.paths.data_dir),
            output_path: PathBuf::from(OUTPUT_FILE_NAME),
        }
    }
}

impl From<&AppConfig> for BuildConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            data_dir: PathBuf::from(&config.paths.data_dir),
            output_path: PathBuf::from(OUTPUT_FILE_NAME),
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Load `vitae.toml` from the working directory. Returns defaults if the
/// file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = PathBuf::from(CONFIG_FILE_NAME);

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| VitaeError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        VitaeError::config(format!("failed to parse {}: {e}", path.display()))
    })?;

    validate(&config)?;
    tracing::debug!(?path, "loaded config file");
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<()> {
    if config.paths.data_dir.trim().is_empty() {
        return Err(VitaeError::config("paths.data_dir must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_layout() {
        let config = AppConfig::default();
        let build = BuildConfig::from(&config);
        assert_eq!(build.data_dir, PathBuf::from("data"));
        assert_eq!(build.output_path, PathBuf::from("index.html"));
    }

    #[test]
    fn partial_paths_section_parses() {
        let config: AppConfig = toml::from_str("[paths]\ndata_dir = \"cv-data\"\n").expect("parse");
        assert_eq!(config.paths.data_dir, "cv-data");
    }

    #[test]
    fn resolve_joins_relative_paths() {
        let config = AppConfig::default();
        let build = BuildConfig::resolve(&config, Path::new("/srv/site"));
        assert_eq!(build.data_dir, PathBuf::from("/srv/site/data"));
        assert_eq!(build.output_path, PathBuf::from("index.html"));
    }

    #[test]
    fn load_config_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[paths]\ndata_dir = \"cv\"\n").expect("write");

        let config = load_config_from(&path).expect("load");
        assert_eq!(config.paths.data_dir, "cv");
    }

    #[test]
    fn output_file_key_cannot_move_the_page() {
        let config: AppConfig =
            toml::from_str("[paths]\noutput_file = \"public/index.html\"\n").expect("parse");
        let build = BuildConfig::resolve(&config, Path::new("/srv/site"));
        assert_eq!(build.data_dir, PathBuf::from("/srv/site/data"));
        assert_eq!(build.output_path, PathBuf::from(OUTPUT_FILE_NAME));
    }

    #[test]
    fn empty_data_dir_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[paths]\ndata_dir = \"\"\n").expect("write");

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("data_dir"));
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[paths\n").expect("write");

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, VitaeError::Config { .. }));
    }
}

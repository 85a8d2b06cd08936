// Configuration loading and parsing (statline.toml).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for statline.toml.
#[derive(Debug, Clone, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    server: ServerSection,
    #[serde(default)]
    data: DataSection,
}

#[derive(Debug, Clone, Deserialize)]
struct ServerSection {
    #[serde(default = "default_port")]
    port: u16,
}

#[derive(Debug, Clone, Deserialize)]
struct DataSection {
    #[serde(default = "default_season_dir")]
    season_dir: String,
    #[serde(default = "default_team")]
    default_team: String,
}

fn default_port() -> u16 {
    9172
}

fn default_season_dir() -> String {
    "season".to_string()
}

fn default_team() -> String {
    "NYM".to_string()
}

impl Default for ServerSection {
    fn default() -> Self {
        ServerSection { port: default_port() }
    }
}

impl Default for DataSection {
    fn default() -> Self {
        DataSection {
            season_dir: default_season_dir(),
            default_team: default_team(),
        }
    }
}

/// The assembled runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub season_dir: PathBuf,
    /// Team code applied when a request omits `team`.
    pub default_team: String,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from `statline.toml` in the current directory.
/// A missing file is not an error: built-in defaults apply.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new("statline.toml"))
}

/// Load configuration from an explicit path. Exposed for testing.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let file: ConfigFile = if path.exists() {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?
    } else {
        ConfigFile::default()
    };

    let config = Config {
        port: file.server.port,
        season_dir: PathBuf::from(file.data.season_dir),
        default_team: file.data.default_team.trim().to_uppercase(),
    };

    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.default_team.len() != 3 {
        return Err(ConfigError::ValidationError {
            field: "data.default_team".to_string(),
            message: format!(
                "expected a 3-letter team code, got '{}'",
                config.default_team
            ),
        });
    }
    Ok(())
}

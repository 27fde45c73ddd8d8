//! Optional TOML configuration.
//!
//! ```toml
//! [render]
//! indent = 8
//!
//! [types]
//! hugeint = "number"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use cube_model::{CanonicalType, TypeMappings};
use cube_output::DEFAULT_INDENT;
use serde::Deserialize;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "cube-dbt.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid type mapping in {path}: {vendor} = {target:?} ({message})")]
    InvalidMapping {
        path: PathBuf,
        vendor: String,
        target: String,
        message: String,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    render: RenderConfig,
    #[serde(default)]
    types: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

/// Resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub render: RenderConfig,
    pub type_mappings: TypeMappings,
}

impl Config {
    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid TOML, or maps a vendor
    /// type onto something other than a dimension type.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Load `explicit` if given, else the default file when it exists.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::load(fallback)
        } else {
            debug!("no config file, using defaults");
            Ok(Self::default())
        }
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        let mut type_mappings = TypeMappings::new();
        for (vendor, target) in raw.types {
            let canonical = target.parse::<CanonicalType>().map_err(|message| {
                ConfigError::InvalidMapping {
                    path: path.to_path_buf(),
                    vendor: vendor.clone(),
                    target: target.clone(),
                    message,
                }
            })?;
            type_mappings.insert(&vendor, canonical);
        }
        debug!(
            path = %path.display(),
            indent = raw.render.indent,
            overrides = type_mappings.overrides().count(),
            "loaded config"
        );
        Ok(Self {
            render: raw.render,
            type_mappings,
        })
    }
}

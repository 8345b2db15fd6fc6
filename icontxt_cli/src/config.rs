// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TOML configuration: default input values and the output path.

use std::path::{Path, PathBuf};

use icontxt_layout::{DEFAULT_FONT_SIZE, DEFAULT_LINE_HEIGHT};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file read when `--config` is not given, if it exists.
pub(crate) const DEFAULT_CONFIG_PATH: &str = "icontxt.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// Reading or writing the file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The value could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The whole configuration file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Where `render` writes when `--output` is absent.
    pub(crate) output: Option<PathBuf>,
    /// Extra font files loaded before rendering.
    pub(crate) font_files: Vec<PathBuf>,
    /// Default input values.
    pub(crate) defaults: InputDefaults,
}

/// Default values for every input control.
///
/// Numbers are stored as given; the layout core clamps them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct InputDefaults {
    pub(crate) text: String,
    pub(crate) background: String,
    pub(crate) font_color: String,
    pub(crate) font_family: String,
    pub(crate) font_size: i64,
    pub(crate) line_height: f64,
    pub(crate) bold: bool,
    pub(crate) italic: bool,
    pub(crate) align: String,
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            text: "Icon".into(),
            background: "#1f2937".into(),
            font_color: "#ffffff".into(),
            font_family: "sans-serif".into(),
            font_size: i64::from(DEFAULT_FONT_SIZE),
            line_height: DEFAULT_LINE_HEIGHT,
            bold: false,
            italic: false,
            align: "center".into(),
            x: 50.0,
            y: 50.0,
        }
    }
}

impl Config {
    /// Parses a configuration from TOML text.
    pub(crate) fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the configuration at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded configuration from {}", path.display());
        Self::from_toml(&text, path)
    }

    /// Loads `explicit` if given (it must exist), else [`DEFAULT_CONFIG_PATH`]
    /// if present, else the built-in defaults.
    pub(crate) fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Writes the configuration to `path`.
    pub(crate) fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

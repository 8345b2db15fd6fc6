// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The persisted light/dark UI preference.

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::ConfigError;

/// Preferences key holding the theme.
pub(crate) const THEME_KEY: &str = "icontxt-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parses a stored value; anything but `light` or `dark` is rejected.
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label of the control that switches away from this theme.
    pub(crate) fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to Dark",
            Self::Dark => "Switch to Light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A TOML preferences file; keys other than [`THEME_KEY`] are preserved.
#[derive(Clone, Debug)]
pub(crate) struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored theme, falling back to light when the file or key
    /// is missing or holds an unknown value. The result is written back.
    pub(crate) fn init(&self) -> Result<Theme, ConfigError> {
        let theme = self
            .read_table()?
            .get(THEME_KEY)
            .and_then(toml::Value::as_str)
            .and_then(Theme::from_name)
            .unwrap_or_default();
        debug!("initial theme {theme} from {}", self.path.display());
        self.update(theme)?;
        Ok(theme)
    }

    /// Stores `theme` and returns the toggle label to show for it.
    pub(crate) fn update(&self, theme: Theme) -> Result<&'static str, ConfigError> {
        let mut table = self.read_table()?;
        table.insert(THEME_KEY.into(), toml::Value::String(theme.as_str().into()));
        let text = toml::to_string_pretty(&table)?;
        std::fs::write(&self.path, text).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!("applied {theme} theme");
        Ok(theme.toggle_label())
    }

    fn read_table(&self) -> Result<toml::Table, ConfigError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(toml::Table::new()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        text.parse().map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

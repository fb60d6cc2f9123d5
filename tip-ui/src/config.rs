//! Settings read from `tip-time.toml`.
//!
//! Every key is optional:
//!
//! ```toml
//! locale = "en-US"
//! default_tip_percent = "18"
//! round_up = false
//! log_level = "info"
//! log_file = "tip-time.log"
//!
//! [window]
//! width = 420.0
//! height = 560.0
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tip_core::{CurrencyFormat, CurrencyLocale, TipCalculator};
use tracing::debug;

/// Looked up in the working directory when `--config` isn't given.
pub const DEFAULT_CONFIG_FILE: &str = "tip-time.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 560.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TipConfig {
    /// Currency locale; taken from the environment when unset.
    pub locale: Option<CurrencyLocale>,
    /// Text pre-filled into the tip percentage field.
    pub default_tip_percent: String,
    /// Initial position of the round-up switch.
    pub round_up: bool,
    /// `EnvFilter` directive, e.g. `debug` or `info,tip_core=trace`.
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub window: WindowConfig,
}

impl TipConfig {
    pub fn from_toml_str(
        text: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads the config at `path`. The file must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Self::from_toml_str(&text, path)
    }

    /// Reads the config at `path`, or returns defaults when there is no such file.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file; using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Applies command-line values on top of the file's values.
    pub fn with_overrides(
        mut self,
        locale: Option<CurrencyLocale>,
        log_level: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if locale.is_some() {
            self.locale = locale;
        }
        if log_level.is_some() {
            self.log_level = log_level;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
    }

    /// The configured locale, or the one from the environment.
    pub fn currency_locale(&self) -> CurrencyLocale {
        self.locale.unwrap_or_else(CurrencyLocale::from_env)
    }

    /// Builds the initial calculator state for the main window.
    pub fn initial_calculator(&self) -> TipCalculator {
        TipCalculator::new(CurrencyFormat::for_locale(self.currency_locale()))
            .with_defaults(self.default_tip_percent.clone(), self.round_up)
    }
}

//! Conversion settings.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{ConvertError, ConvertResult};

static DEFAULT_FALLBACK_TITLE: &str = "hol2ics";

/// What to do when the first line is not a `[Title] count` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    /// Fail the conversion.
    #[default]
    Strict,
    /// Drop the line and use `fallback_title`.
    Lenient,
}

/// How DTSTAMP values are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StampStyle {
    /// Local wall-clock time without a zone marker, e.g. `20241019T143005`.
    #[default]
    Local,
    /// UTC with a trailing `Z`, e.g. `20241019T123005Z`.
    Utc,
}

/// Settings from ~/.config/hol2ics/config.toml and `HOL2ICS_*` variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub header_mode: HeaderMode,
    pub fallback_title: String,
    /// Escape `\`, `;`, `,` and newlines in PRODID and SUMMARY values.
    pub escape_text: bool,
    pub dtstamp: StampStyle,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            header_mode: HeaderMode::Strict,
            fallback_title: DEFAULT_FALLBACK_TITLE.to_string(),
            escape_text: true,
            dtstamp: StampStyle::Local,
        }
    }
}

impl ConvertOptions {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hol2ics").join("config.toml"))
    }

    /// Load settings from the default config file (if any) and the environment.
    pub fn load() -> ConvertResult<Self> {
        Self::load_from(Self::config_path().as_deref())
    }

    /// Load settings from `path` (missing file means defaults) and the environment.
    pub fn load_from(path: Option<&Path>) -> ConvertResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path.to_path_buf()).required(false));
        }

        builder
            .add_source(Environment::with_prefix("HOL2ICS").try_parsing(true))
            .build()
            .map_err(|e| ConvertError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ConvertError::Config(e.to_string()))
    }
}

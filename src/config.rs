//! Settings for rendering decoded lists
//!
//! The crate ships `defaults/attrlist.default.toml` compiled in. [Loader] starts from that
//! table, stacks any user TOML files and single-key overrides on top, and produces
//! [Settings].

use crate::numbers::NumberFormat;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/attrlist.default.toml");

/// Resolved settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub formatting: FormattingConfig,
}

/// `[formatting]` table: how `ToText` renders each value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormattingConfig {
    #[serde(default)]
    pub precision: Option<usize>,
}

impl Settings {
    /// Number format for [crate::NumberList::to_text_with]
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            precision: self.formatting.precision,
        }
    }
}

/// Builds [Settings] from the compiled-in table plus user sources, later sources winning
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only the compiled-in table
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Stack a TOML file that must exist; a missing file fails in [Loader::build]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Stack a TOML file that is skipped when absent
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key, e.g. `formatting.precision`; wins over every file
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<Settings, ConfigError> {
        let settings: Settings = self.builder.build()?.try_deserialize()?;
        tracing::debug!(?settings, "loaded configuration");
        Ok(settings)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings from the compiled-in table alone
pub fn load_defaults() -> Result<Settings, ConfigError> {
    Loader::new().build()
}

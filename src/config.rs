//! Configuration loading
//!
//! `defaults/classorder.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Callers layer user files on top of
//! those defaults via [`Loader`] before deserializing into [`ClassorderConfig`].

use crate::sorting::SortOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/classorder.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassorderConfig {
    pub sorting: SortOptions,
    pub ranking: RankingConfig,
}

/// Input for the table ranking engine.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Prefix carried by every utility name.
    #[serde(default)]
    pub prefix: String,
    /// Layer names, in output order.
    pub layers: Vec<String>,
    /// Variant names, in output order.
    #[serde(default)]
    pub variants: Vec<String>,
    /// Known class names per layer, in output order (unprefixed).
    #[serde(default)]
    pub classes: BTreeMap<String, Vec<String>>,
}

/// Builds a [`ClassorderConfig`] from the embedded defaults plus whatever
/// sources are layered on top. Later sources win key by key; arrays (class
/// and variant lists) are replaced whole.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a project file. Building fails if it does not exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml_file(path.as_ref(), true)
    }

    /// Layer a file that may be absent, such as a per-user override.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml_file(path.as_ref(), false)
    }

    /// Layer configuration text handed over by a host formatter.
    pub fn with_toml(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self
    }

    /// Override one dotted key, e.g. `sorting.ignore_first` from a CLI flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<ClassorderConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn with_toml_file(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone: built-in ranking table, no envelope.
pub fn load_defaults() -> Result<ClassorderConfig, ConfigError> {
    Loader::new().build()
}

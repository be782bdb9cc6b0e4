//! Configuration loader
//!
//! `defaults/zrxp.default.toml` is embedded into the crate so documented
//! defaults and runtime behavior stay in sync. Callers layer their own files
//! and overrides on top via [`Loader`] before deserializing into [`ZrxpConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::zrxp::error::ZrxpError;
use crate::zrxp::formats::OutputFormat;
use crate::zrxp::strategy::ParseStrategy;
use crate::zrxp::tabular::{Delimiter, TabularReader};

const DEFAULT_TOML: &str = include_str!("../../defaults/zrxp.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ZrxpConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
    pub tabular: TabularConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub strategy: ParseStrategy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub materialize: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TabularConfig {
    pub delimiter: Delimiter,
}

impl TabularConfig {
    pub fn reader(&self) -> TabularReader {
        TabularReader::with_delimiter(self.delimiter)
    }
}

/// Layers user files and overrides over the built-in defaults
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `("parser.strategy", "bulk")`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ZrxpError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    ///
    /// Unknown strategy, format or delimiter names fail here as
    /// configuration errors.
    pub fn build(self) -> Result<ZrxpConfig, ZrxpError> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<ZrxpConfig, ZrxpError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parser.strategy, ParseStrategy::Eager);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.materialize);
        assert_eq!(config.tabular.delimiter, Delimiter::Whitespace);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parser.strategy", "bulk")
            .expect("override to apply")
            .set_override("output.format", "treeviz")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.parser.strategy, ParseStrategy::Bulk);
        assert_eq!(config.output.format, OutputFormat::Treeviz);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[tabular]\ndelimiter = \"comma\"").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.tabular.delimiter, Delimiter::Comma);
        assert_eq!(config.tabular.reader().delimiter(), Delimiter::Comma);
        assert_eq!(config.parser.strategy, ParseStrategy::Eager);
    }

    #[test]
    fn optional_file_may_be_absent() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here.toml")
            .build()
            .unwrap();
        assert_eq!(config.parser.strategy, ParseStrategy::Eager);
    }

    #[test]
    fn missing_required_file_is_configuration_error() {
        let err = Loader::new()
            .with_file("/definitely/not/here.toml")
            .build()
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn unknown_strategy_is_configuration_error() {
        let err = Loader::new()
            .set_override("parser.strategy", "pandas")
            .unwrap()
            .build()
            .unwrap_err();
        assert!(err.is_configuration());
    }
}

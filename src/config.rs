//! Store configuration loaded from `stowage.toml`.
//!
//! The file names the local store, the external command that performs store
//! writes, and any session properties the command's arguments can name as
//! `{property:NAME}`. Every table
//! is optional; an empty file yields [`StoreConfig::default`].

use crate::request::BuildContext;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Conventional configuration file name.
pub const CONFIG_FILE_NAME: &str = "stowage.toml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration {path}")]
    Read {
        /// Path of the unreadable file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("invalid configuration {path}: {source}")]
    Parse {
        /// Path of the malformed file.
        path: Utf8PathBuf,
        /// The parser error.
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Local store location. Command-line and environment overrides take
    /// precedence over this value.
    pub local_store: Option<Utf8PathBuf>,
    /// External command used to write artefacts into the store.
    pub writer: Option<WriterConfig>,
    /// Session properties passed through the build context.
    pub properties: BTreeMap<String, String>,
}

impl StoreConfig {
    /// Read and parse the configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it does not match the schema.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        Self::load_with(path, |p| std::fs::read_to_string(p))
    }

    /// Load configuration using the supplied reader.
    ///
    /// This exists so tests can supply file contents without touching the
    /// file system.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when `read` fails and
    /// [`ConfigError::Parse`] when the contents do not match the schema.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use stowage::config::StoreConfig;
    ///
    /// let config = StoreConfig::load_with(Utf8Path::new("stowage.toml"), |_| {
    ///     Ok("local_store = \"/srv/store\"\n".to_owned())
    /// })?;
    /// assert_eq!(config.local_store.as_deref().map(|p| p.as_str()), Some("/srv/store"));
    /// # Ok::<(), stowage::config::ConfigError>(())
    /// ```
    pub fn load_with<F>(path: &Utf8Path, read: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&Utf8Path) -> std::io::Result<String>,
    {
        let contents = read(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Build a context for `local_store` carrying the configured properties.
    #[must_use]
    pub fn build_context(&self, local_store: impl Into<Utf8PathBuf>) -> BuildContext {
        self.properties
            .iter()
            .fold(BuildContext::new(local_store), |context, (key, value)| {
                context.with_property(key.as_str(), value.as_str())
            })
    }
}

/// The external command that writes one artefact into the store.
///
/// Arguments may contain placeholders such as `{file}` or `{coordinate}`;
/// the writer expands them per artefact.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WriterConfig {
    /// Program to run.
    pub command: String,
    /// Argument templates.
    #[serde(default)]
    pub args: Vec<String>,
}

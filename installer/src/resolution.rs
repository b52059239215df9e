//! Configuration and local store resolution.
//!
//! The local store is taken from the first source that yields a value:
//! the `--local-store` flag, the [`LOCAL_STORE_ENV`] environment variable,
//! the configuration file, and finally `<home>/.stowage/repository`.

use crate::dirs::{BaseDirs, stowage_config_dir};
use crate::error::{InstallerError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use std::io::ErrorKind;
use stowage::config::{CONFIG_FILE_NAME, ConfigError, StoreConfig};

/// Environment variable overriding the local store location.
pub const LOCAL_STORE_ENV: &str = "STOWAGE_LOCAL_STORE";

/// Where the configuration file is expected.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigLocation {
    /// Named with `--config`; the file must exist.
    Explicit(Utf8PathBuf),
    /// The platform default; a missing file means default settings.
    Default(Utf8PathBuf),
    /// No configuration directory could be determined.
    Unavailable,
}

impl ConfigLocation {
    /// Human-readable description for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Explicit(path) | Self::Default(path) => path.to_string(),
            Self::Unavailable => CONFIG_FILE_NAME.to_owned(),
        }
    }
}

/// Decide where configuration is read from.
#[must_use]
pub fn config_location(cli_path: Option<&Utf8Path>, dirs: &dyn BaseDirs) -> ConfigLocation {
    if let Some(path) = cli_path {
        return ConfigLocation::Explicit(path.to_owned());
    }
    stowage_config_dir(dirs)
        .and_then(|dir| Utf8PathBuf::try_from(dir).ok())
        .map_or(ConfigLocation::Unavailable, |dir| {
            ConfigLocation::Default(dir.join(CONFIG_FILE_NAME))
        })
}

/// Load configuration from `location`.
///
/// # Errors
///
/// Returns [`InstallerError::Config`] when an explicit file cannot be read,
/// or when any file that exists fails to parse.
pub fn load_config(location: &ConfigLocation) -> Result<StoreConfig> {
    match location {
        ConfigLocation::Explicit(path) => Ok(StoreConfig::load(path)?),
        ConfigLocation::Default(path) => match StoreConfig::load(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                debug!("no configuration at {path}; using defaults");
                Ok(StoreConfig::default())
            }
            other => Ok(other?),
        },
        ConfigLocation::Unavailable => Ok(StoreConfig::default()),
    }
}

/// Read the local store override from the environment.
///
/// Empty values are ignored.
#[must_use]
pub fn local_store_from_env() -> Option<Utf8PathBuf> {
    std::env::var(LOCAL_STORE_ENV)
        .ok()
        .filter(|value| !value.is_empty())
        .map(Utf8PathBuf::from)
}

/// The platform default local store, `<home>/.stowage/repository`.
#[must_use]
pub fn default_local_store(dirs: &dyn BaseDirs) -> Option<Utf8PathBuf> {
    dirs.home_dir()
        .and_then(|home| Utf8PathBuf::try_from(home).ok())
        .map(|home| home.join(".stowage").join("repository"))
}

/// Pick the local store from the available sources.
///
/// # Errors
///
/// Returns [`InstallerError::LocalStoreUnresolved`] when no source yields a
/// location.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use stowage::config::StoreConfig;
/// use stowage_installer::dirs::SystemBaseDirs;
/// use stowage_installer::resolution::resolve_local_store;
///
/// let store = resolve_local_store(
///     Some(Utf8Path::new("/srv/store")),
///     None,
///     &StoreConfig::default(),
///     &SystemBaseDirs,
/// )?;
/// assert_eq!(store, "/srv/store");
/// # Ok::<(), stowage_installer::error::InstallerError>(())
/// ```
pub fn resolve_local_store(
    cli_override: Option<&Utf8Path>,
    env_override: Option<Utf8PathBuf>,
    config: &StoreConfig,
    dirs: &dyn BaseDirs,
) -> Result<Utf8PathBuf> {
    cli_override
        .map(Utf8Path::to_path_buf)
        .or(env_override)
        .or_else(|| config.local_store.clone())
        .or_else(|| default_local_store(dirs))
        .ok_or(InstallerError::LocalStoreUnresolved {
            env_var: LOCAL_STORE_ENV,
        })
}

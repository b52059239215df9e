//! Platform directory lookup.
//!
//! Resolution code asks a [`BaseDirs`] implementation for the home and
//! configuration directories so tests can substitute fixed locations.

use std::path::PathBuf;

/// Name of the per-application directory under the platform config dir.
pub const APP_DIR_NAME: &str = "stowage";

/// Source of platform-specific base directories.
#[cfg_attr(test, mockall::automock)]
pub trait BaseDirs {
    /// The user's home directory.
    fn home_dir(&self) -> Option<PathBuf>;

    /// The platform configuration directory, e.g. `~/.config` on Linux.
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Directory holding stowage's own configuration.
#[must_use]
pub fn stowage_config_dir(dirs: &dyn BaseDirs) -> Option<PathBuf> {
    dirs.config_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// [`BaseDirs`] backed by `directories-next`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBaseDirs;

impl BaseDirs for SystemBaseDirs {
    fn home_dir(&self) -> Option<PathBuf> {
        directories_next::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories_next::BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stowage_config_dir_nests_under_config_dir() {
        let mut dirs = MockBaseDirs::new();
        dirs.expect_config_dir()
            .return_const(Some(PathBuf::from("/home/ada/.config")));

        assert_eq!(
            stowage_config_dir(&dirs),
            Some(PathBuf::from("/home/ada/.config/stowage"))
        );
    }

    #[test]
    fn stowage_config_dir_is_none_without_config_dir() {
        let mut dirs = MockBaseDirs::new();
        dirs.expect_config_dir().return_const(None::<PathBuf>);

        assert!(stowage_config_dir(&dirs).is_none());
    }
}

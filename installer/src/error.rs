//! Error types for the stowage installer CLI.
//!
//! Variants carry enough context (paths, commands) for the message printed on
//! stderr to be actionable without a backtrace.

use camino::Utf8PathBuf;
use stowage::InstallError;
use stowage::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while running the installer.
#[derive(Debug, Error)]
pub enum InstallerError {
    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The project descriptor could not be read.
    #[error("failed to read project descriptor {path}")]
    DescriptorRead {
        /// Path of the descriptor.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The project descriptor is not valid.
    #[error("invalid project descriptor {path}: {reason}")]
    InvalidDescriptor {
        /// Path of the descriptor.
        path: Utf8PathBuf,
        /// Description of the problem.
        reason: String,
    },

    /// No local store location could be determined.
    #[error("could not determine the local store; pass --local-store or set {env_var}")]
    LocalStoreUnresolved {
        /// Environment variable consulted for an override.
        env_var: &'static str,
    },

    /// No store writer command is configured.
    #[error("no store writer configured; add a [writer] table to {config_hint}")]
    WriterNotConfigured {
        /// Where the configuration was looked up.
        config_hint: String,
    },

    /// The store writer command ran but reported failure.
    #[error("store writer `{command}` failed: {reason}")]
    WriterCommand {
        /// The program that was run.
        command: String,
        /// Exit status and captured stderr.
        reason: String,
    },

    /// Installation failed.
    #[error(transparent)]
    Install(#[from] InstallError),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Test stub received an unexpected or mismatched command invocation.
    #[cfg(any(test, feature = "test-support"))]
    #[error("stub mismatch: {message}")]
    StubMismatch {
        /// Description of what was expected versus what was received.
        message: String,
    },
}

/// Result type alias using [`InstallerError`].
pub type Result<T> = std::result::Result<T, InstallerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use stowage::{Coordinate, ProjectIdentity};

    #[test]
    fn local_store_unresolved_mentions_overrides() {
        let err = InstallerError::LocalStoreUnresolved {
            env_var: "STOWAGE_LOCAL_STORE",
        };
        let msg = err.to_string();
        assert!(msg.contains("--local-store"));
        assert!(msg.contains("STOWAGE_LOCAL_STORE"));
    }

    #[test]
    fn writer_command_includes_command_and_reason() {
        let err = InstallerError::WriterCommand {
            command: "store-put".to_owned(),
            reason: "exit status 2: checksum mismatch".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("store-put"));
        assert!(msg.contains("checksum mismatch"));
    }

    #[test]
    fn install_errors_are_transparent() {
        let coordinate = Coordinate::new(
            ProjectIdentity::new("org.example", "demo", "1.0.0"),
            Some("sources".to_owned()),
            "jar",
        );
        let err = InstallerError::from(InstallError::MissingFile {
            coordinate: Box::new(coordinate),
        });
        assert_eq!(
            err.to_string(),
            "no file assigned to attached artifact org.example:demo:jar:sources:1.0.0"
        );
    }

    #[test]
    fn descriptor_read_preserves_source() {
        let err = InstallerError::DescriptorRead {
            path: Utf8PathBuf::from("project.toml"),
            source: std::io::Error::other("permission denied"),
        };
        assert!(err.to_string().contains("project.toml"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

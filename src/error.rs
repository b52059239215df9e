//! Error types for project installation.
//!
//! Every variant aborts the install immediately. Nothing is retried and
//! artefacts written before the failure stay in the store.

use crate::coordinate::Coordinate;
use crate::store::StoreWriteError;
use thiserror::Error;

/// Errors raised by [`ProjectInstaller`](crate::installer::ProjectInstaller).
#[derive(Debug, Error)]
pub enum InstallError {
    /// A required argument was not supplied.
    #[error("the parameter {0} is not allowed to be absent")]
    InvalidArgument(&'static str),

    /// An attached artefact was registered without a file.
    #[error("no file assigned to attached artifact {coordinate}")]
    MissingFile {
        /// Coordinate of the attachment lacking a file.
        coordinate: Box<Coordinate>,
    },

    /// The store writer failed.
    #[error("failed to install {coordinate}: {source}")]
    StoreWrite {
        /// Coordinate being written when the writer failed.
        coordinate: Box<Coordinate>,
        /// The writer's error.
        #[source]
        source: StoreWriteError,
    },
}

impl InstallError {
    /// The coordinate the error concerns, if any.
    #[must_use]
    pub fn coordinate(&self) -> Option<&Coordinate> {
        match self {
            Self::InvalidArgument(_) => None,
            Self::MissingFile { coordinate } | Self::StoreWrite { coordinate, .. } => {
                Some(&**coordinate)
            }
        }
    }
}

impl From<StoreWriteError> for InstallError {
    fn from(source: StoreWriteError) -> Self {
        Self::StoreWrite {
            coordinate: Box::new(source.coordinate().clone()),
            source,
        }
    }
}

/// Result type alias using [`InstallError`].
pub type Result<T> = std::result::Result<T, InstallError>;

//! The store writer boundary.
//!
//! Copying bytes into the local store and producing integrity metadata is the
//! job of a [`StoreWriter`]. The installer only decides *what* is written and
//! in which order.

use crate::coordinate::Coordinate;
use crate::project::ArtifactRef;
use crate::request::BuildContext;
use thiserror::Error;

/// Boxed underlying cause of a store write failure.
pub type WriteCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Writes artefact files into the local store.
///
/// Implementations receive the full ordered batch for one install and must
/// write it in order, stopping at the first unrecoverable failure.
#[cfg_attr(test, mockall::automock)]
pub trait StoreWriter {
    /// Write every artefact in `artifacts`, in order.
    ///
    /// Each artefact passed here has a file assigned.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreWriteError`] naming the first coordinate that could
    /// not be written. Earlier artefacts in the batch stay written.
    fn install(
        &self,
        context: &BuildContext,
        artifacts: &[ArtifactRef],
    ) -> Result<(), StoreWriteError>;
}

impl<W: StoreWriter + ?Sized> StoreWriter for &W {
    fn install(
        &self,
        context: &BuildContext,
        artifacts: &[ArtifactRef],
    ) -> Result<(), StoreWriteError> {
        (**self).install(context, artifacts)
    }
}

impl<W: StoreWriter + ?Sized> StoreWriter for Box<W> {
    fn install(
        &self,
        context: &BuildContext,
        artifacts: &[ArtifactRef],
    ) -> Result<(), StoreWriteError> {
        (**self).install(context, artifacts)
    }
}

/// A store writer failed to write one coordinate.
#[derive(Debug, Error)]
#[error("failed to write {coordinate} to the local store: {source}")]
pub struct StoreWriteError {
    coordinate: Box<Coordinate>,
    #[source]
    source: WriteCause,
}

impl StoreWriteError {
    /// Create an error for `coordinate` caused by `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stowage::coordinate::{Coordinate, ProjectIdentity};
    /// use stowage::store::StoreWriteError;
    ///
    /// let coordinate = Coordinate::new(ProjectIdentity::new("g", "a", "1"), None, "jar");
    /// let err = StoreWriteError::new(coordinate, "disk full");
    /// assert!(err.to_string().contains("g:a:jar:1"));
    /// assert!(err.to_string().contains("disk full"));
    /// ```
    #[must_use]
    pub fn new(coordinate: Coordinate, source: impl Into<WriteCause>) -> Self {
        Self {
            coordinate: Box::new(coordinate),
            source: source.into(),
        }
    }

    /// The coordinate being written when the failure occurred.
    #[must_use]
    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }
}

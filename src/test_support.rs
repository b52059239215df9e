//! Test doubles for code that drives a [`StoreWriter`].
//!
//! Enabled with the `test-support` feature. Not covered by semver.

use crate::coordinate::Coordinate;
use crate::project::ArtifactRef;
use crate::request::BuildContext;
use crate::store::{StoreWriteError, StoreWriter};
use std::cell::RefCell;

/// A writer that records every batch it receives.
///
/// When a failing coordinate is set, artefacts before it in a batch are
/// recorded as written and the write stops there.
#[derive(Debug, Default)]
pub struct RecordingStoreWriter {
    batches: RefCell<Vec<Vec<ArtifactRef>>>,
    written: RefCell<Vec<Coordinate>>,
    fail_on: Option<Coordinate>,
}

impl RecordingStoreWriter {
    /// Create a writer that fails when it reaches `coordinate`.
    #[must_use]
    pub fn failing_on(coordinate: Coordinate) -> Self {
        Self {
            fail_on: Some(coordinate),
            ..Self::default()
        }
    }

    /// Every batch received, in call order.
    #[must_use]
    pub fn batches(&self) -> Vec<Vec<ArtifactRef>> {
        self.batches.borrow().clone()
    }

    /// Coordinates written successfully, in write order.
    #[must_use]
    pub fn written(&self) -> Vec<Coordinate> {
        self.written.borrow().clone()
    }
}

impl StoreWriter for RecordingStoreWriter {
    fn install(
        &self,
        _context: &BuildContext,
        artifacts: &[ArtifactRef],
    ) -> Result<(), StoreWriteError> {
        self.batches.borrow_mut().push(artifacts.to_vec());
        for artifact in artifacts {
            let coordinate = artifact.coordinate();
            if self.fail_on.as_ref() == Some(coordinate) {
                return Err(StoreWriteError::new(
                    coordinate.clone(),
                    "simulated store failure",
                ));
            }
            self.written.borrow_mut().push(coordinate.clone());
        }
        Ok(())
    }
}

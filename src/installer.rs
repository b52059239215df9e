//! Installation decision logic.
//!
//! [`ProjectInstaller`] turns one [`Project`] into an ordered batch of
//! artefacts and hands that batch to its [`StoreWriter`]. The primary
//! artefact is optional: a project without a primary file simply contributes
//! nothing for it. Attached artefacts are explicit registrations and must
//! carry a file.

use crate::error::{InstallError, Result};
use crate::project::{ArtifactRef, Project};
use crate::request::{BuildContext, InstallRequest};
use crate::store::StoreWriter;
use log::{debug, info, warn};

/// Installs projects into the local store through a [`StoreWriter`].
///
/// The installer holds no state besides its writer, so one instance can serve
/// any number of sequential installs.
#[derive(Debug)]
pub struct ProjectInstaller<W> {
    writer: W,
}

impl<W: StoreWriter> ProjectInstaller<W> {
    /// Create an installer that writes through `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// The store writer in use.
    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Swap in a different writer, returning the previous one.
    pub fn replace_writer(&mut self, writer: W) -> W {
        std::mem::replace(&mut self.writer, writer)
    }

    /// Install the project carried by `request`.
    ///
    /// The writer is called at most once, with the batch derived by
    /// [`plan_installation`]. An empty batch skips the writer entirely.
    /// Returns the number of artefacts handed to the writer.
    ///
    /// # Errors
    ///
    /// - [`InstallError::InvalidArgument`] when `context` or `request` is
    ///   `None`, checked in that order before anything else happens.
    /// - [`InstallError::MissingFile`] when an attached artefact has no file.
    /// - [`InstallError::StoreWrite`] when the writer fails; artefacts written
    ///   before the failure remain in the store.
    ///
    /// # Examples
    ///
    /// ```
    /// use stowage::coordinate::ProjectIdentity;
    /// use stowage::installer::ProjectInstaller;
    /// use stowage::project::{Packaging, Project};
    /// use stowage::request::{BuildContext, InstallRequest};
    /// use stowage::test_support::RecordingStoreWriter;
    ///
    /// let project = Project::new(
    ///     ProjectIdentity::new("org.example", "parent", "1.0.0"),
    ///     Packaging::from("pom"),
    ///     None,
    /// );
    /// let installer = ProjectInstaller::new(RecordingStoreWriter::default());
    /// let context = BuildContext::new("/tmp/store");
    ///
    /// let written = installer.install(Some(&context), Some(InstallRequest::new(project)))?;
    /// assert_eq!(written, 0);
    /// assert!(installer.writer().batches().is_empty());
    /// # Ok::<(), stowage::error::InstallError>(())
    /// ```
    pub fn install(
        &self,
        context: Option<&BuildContext>,
        request: Option<InstallRequest>,
    ) -> Result<usize> {
        let context = context.ok_or(InstallError::InvalidArgument("buildContext"))?;
        let request = request.ok_or(InstallError::InvalidArgument("installRequest"))?;
        let project = request.into_project();

        let artifacts = plan_installation(&project)?;
        if artifacts.is_empty() {
            debug!("nothing to install for {}", project.identity());
            return Ok(0);
        }

        info!(
            "installing {} artifact(s) for {} into {}",
            artifacts.len(),
            project.identity(),
            context.local_store()
        );
        self.writer.install(context, &artifacts)?;
        Ok(artifacts.len())
    }
}

/// Derive the ordered install batch for `project`.
///
/// The primary artefact comes first when it has a file that is not a
/// directory, followed by every attached artefact in registration order.
///
/// The result is not a function of the project alone: whether the primary
/// file names an existing directory is read from the file system, so the
/// same project can plan differently once its build output changes on disk.
///
/// # Errors
///
/// Returns [`InstallError::MissingFile`] for the first attached artefact
/// without a file.
pub fn plan_installation(project: &Project) -> Result<Vec<ArtifactRef>> {
    let attached = project.attached_artifacts();
    let mut artifacts = Vec::with_capacity(attached.len() + 1);

    if primary_is_installable(project) {
        artifacts.push(project.primary_artifact().clone());
    }

    for artifact in attached {
        if !artifact.is_installable() {
            return Err(InstallError::MissingFile {
                coordinate: Box::new(artifact.coordinate().clone()),
            });
        }
        artifacts.push(artifact.clone());
    }

    debug!(
        "planned {} artifact(s) for {} ({} packaging)",
        artifacts.len(),
        project.identity(),
        project.packaging()
    );
    Ok(artifacts)
}

fn primary_is_installable(project: &Project) -> bool {
    let primary = project.primary_artifact();
    let Some(file) = primary.file() else {
        if project.packaging().produces_primary_file() {
            debug!(
                "{} packaging assigned no primary file to {}; skipping it",
                project.packaging(),
                primary.coordinate()
            );
        } else {
            debug!(
                "{} packaging has no primary file for {}",
                project.packaging(),
                primary.coordinate()
            );
        }
        return false;
    };

    // A directory here means the build compiled but never packaged.
    if file.is_dir() {
        warn!(
            "primary artifact {} points at directory {file}; skipping it",
            primary.coordinate()
        );
        return false;
    }
    true
}

#[cfg(test)]
#[path = "installer_tests.rs"]
mod tests;

//! Per-invocation inputs: the build context and the install request.

use crate::project::Project;
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeMap;

/// Caller-owned settings for one build session.
///
/// The installer only checks that a context was supplied; the fields are read
/// by [`StoreWriter`](crate::store::StoreWriter) implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    local_store: Utf8PathBuf,
    properties: BTreeMap<String, String>,
}

impl BuildContext {
    /// Create a context targeting `local_store`.
    #[must_use]
    pub fn new(local_store: impl Into<Utf8PathBuf>) -> Self {
        Self {
            local_store: local_store.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Add a session property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Location of the local store.
    #[must_use]
    pub fn local_store(&self) -> &Utf8Path {
        &self.local_store
    }

    /// Look up a session property.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// All session properties, ordered by key.
    #[must_use]
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }
}

/// A request to install exactly one project.
///
/// Requests are consumed by
/// [`ProjectInstaller::install`](crate::installer::ProjectInstaller::install).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    project: Project,
}

impl InstallRequest {
    /// Wrap `project` in a request.
    #[must_use]
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    /// The project to install.
    #[must_use]
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Consume the request and return its project.
    #[must_use]
    pub fn into_project(self) -> Project {
        self.project
    }
}

impl From<Project> for InstallRequest {
    fn from(project: Project) -> Self {
        Self::new(project)
    }
}

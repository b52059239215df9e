//! Project model: packaging, artefact references, and built projects.

use crate::coordinate::{Coordinate, ProjectIdentity};
use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;

/// Packaging tags whose build never yields a primary file.
const METADATA_ONLY_PACKAGINGS: &[&str] = &["pom"];

/// How a project is built, e.g. `jar`, `pom`, or a custom lifecycle tag.
///
/// The tag is free-form; only a handful of well-known values carry extra
/// meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Packaging(String);

impl Packaging {
    /// Create a packaging tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Get the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a build with this packaging is expected to produce a primary
    /// file.
    ///
    /// # Examples
    ///
    /// ```
    /// use stowage::project::Packaging;
    ///
    /// assert!(!Packaging::from("pom").produces_primary_file());
    /// assert!(Packaging::from("custom-lifecycle").produces_primary_file());
    /// ```
    #[must_use]
    pub fn produces_primary_file(&self) -> bool {
        !METADATA_ONLY_PACKAGINGS.contains(&self.0.as_str())
    }

    /// The file extension of the primary artefact for this packaging.
    ///
    /// Unknown tags map to themselves.
    #[must_use]
    pub fn default_extension(&self) -> &str {
        match self.0.as_str() {
            "jar" | "maven-plugin" | "ejb" | "test-jar" | "java-source" | "javadoc" => "jar",
            other => other,
        }
    }
}

impl Default for Packaging {
    fn default() -> Self {
        Self::new("jar")
    }
}

impl From<&str> for Packaging {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Packaging {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A reference to one build output and the coordinate it belongs at.
///
/// `file` is `None` when the build produced nothing for this coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRef {
    coordinate: Coordinate,
    file: Option<Utf8PathBuf>,
}

impl ArtifactRef {
    /// Create a reference from its coordinate parts.
    #[must_use]
    pub fn new(
        identity: ProjectIdentity,
        classifier: Option<String>,
        extension: impl Into<String>,
        file: Option<Utf8PathBuf>,
    ) -> Self {
        Self {
            coordinate: Coordinate::new(identity, classifier, extension),
            file,
        }
    }

    /// The store coordinate.
    #[must_use]
    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    /// The owning project identity.
    #[must_use]
    pub fn identity(&self) -> &ProjectIdentity {
        self.coordinate.identity()
    }

    /// The classifier, if any.
    #[must_use]
    pub fn classifier(&self) -> Option<&str> {
        self.coordinate.classifier()
    }

    /// The file extension.
    #[must_use]
    pub fn extension(&self) -> &str {
        self.coordinate.extension()
    }

    /// The produced file, if one exists.
    #[must_use]
    pub fn file(&self) -> Option<&Utf8Path> {
        self.file.as_deref()
    }

    /// Whether a file has been assigned to this reference.
    #[must_use]
    pub fn is_installable(&self) -> bool {
        self.file.is_some()
    }
}

/// A built project: its identity, packaging, and produced artefacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    identity: ProjectIdentity,
    packaging: Packaging,
    primary_artifact: ArtifactRef,
    attached_artifacts: Vec<ArtifactRef>,
}

impl Project {
    /// Create a project whose primary artefact sits at the bare project
    /// coordinate with the packaging's default extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use stowage::coordinate::ProjectIdentity;
    /// use stowage::project::{Packaging, Project};
    ///
    /// let project = Project::new(
    ///     ProjectIdentity::new("org.example", "parent", "1.0.0"),
    ///     Packaging::from("pom"),
    ///     None,
    /// );
    /// assert_eq!(project.primary_artifact().extension(), "pom");
    /// assert!(project.attached_artifacts().is_empty());
    /// ```
    #[must_use]
    pub fn new(identity: ProjectIdentity, packaging: Packaging, file: Option<Utf8PathBuf>) -> Self {
        let extension = packaging.default_extension().to_owned();
        Self::with_primary_extension(identity, packaging, extension, file)
    }

    /// Create a project whose primary artefact uses an explicit extension.
    #[must_use]
    pub fn with_primary_extension(
        identity: ProjectIdentity,
        packaging: Packaging,
        extension: impl Into<String>,
        file: Option<Utf8PathBuf>,
    ) -> Self {
        let primary_artifact = ArtifactRef::new(identity.clone(), None, extension, file);
        Self {
            identity,
            packaging,
            primary_artifact,
            attached_artifacts: Vec::new(),
        }
    }

    /// Register an attached artefact under this project's identity.
    ///
    /// Attachments keep their registration order.
    #[must_use]
    pub fn with_attached(
        mut self,
        classifier: Option<String>,
        extension: impl Into<String>,
        file: Option<Utf8PathBuf>,
    ) -> Self {
        self.attached_artifacts.push(ArtifactRef::new(
            self.identity.clone(),
            classifier,
            extension,
            file,
        ));
        self
    }

    /// The project identity.
    #[must_use]
    pub fn identity(&self) -> &ProjectIdentity {
        &self.identity
    }

    /// The packaging tag.
    #[must_use]
    pub fn packaging(&self) -> &Packaging {
        &self.packaging
    }

    /// The primary artefact.
    #[must_use]
    pub fn primary_artifact(&self) -> &ArtifactRef {
        &self.primary_artifact
    }

    /// Attached artefacts in registration order.
    #[must_use]
    pub fn attached_artifacts(&self) -> &[ArtifactRef] {
        &self.attached_artifacts
    }
}

//! Store coordinates and project identities.
//!
//! A [`Coordinate`] names exactly one slot in the local store. Every slot
//! belongs to the namespace of a [`ProjectIdentity`]; the classifier and
//! extension distinguish the primary artefact from its attachments.

use std::fmt;

/// The `(group, artifact, version)` triple that names a project.
///
/// # Examples
///
/// ```
/// use stowage::coordinate::ProjectIdentity;
///
/// let identity = ProjectIdentity::new("org.example", "demo", "1.0.0");
/// assert_eq!(identity.to_string(), "org.example:demo:1.0.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectIdentity {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl ProjectIdentity {
    /// Create an identity from its three components.
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// The group the project publishes under.
    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// The project's artefact name within its group.
    #[must_use]
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// The project version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for ProjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// A fully qualified slot in the local store.
///
/// Rendered as `group:artifact:extension[:classifier]:version`, the same
/// shape resolvers print, so error messages can be pasted back into
/// dependency declarations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    identity: ProjectIdentity,
    classifier: Option<String>,
    extension: String,
}

impl Coordinate {
    /// Create a coordinate within `identity`'s namespace.
    #[must_use]
    pub fn new(
        identity: ProjectIdentity,
        classifier: Option<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            identity,
            classifier,
            extension: extension.into(),
        }
    }

    /// The owning project identity.
    #[must_use]
    pub fn identity(&self) -> &ProjectIdentity {
        &self.identity
    }

    /// The classifier, if this is not the bare project coordinate.
    #[must_use]
    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// The file extension stored at this coordinate.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = &self.identity;
        write!(f, "{}:{}:{}", id.group_id, id.artifact_id, self.extension)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        write!(f, ":{}", id.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn identity() -> ProjectIdentity {
        ProjectIdentity::new("org.apache.maven.test", "test", "1.0.0-SNAPSHOT")
    }

    #[rstest]
    #[case::bare(None, "jar", "org.apache.maven.test:test:jar:1.0.0-SNAPSHOT")]
    #[case::classified(
        Some("sources"),
        "jar",
        "org.apache.maven.test:test:jar:sources:1.0.0-SNAPSHOT"
    )]
    #[case::pom(None, "pom", "org.apache.maven.test:test:pom:1.0.0-SNAPSHOT")]
    fn coordinate_display(
        #[case] classifier: Option<&str>,
        #[case] extension: &str,
        #[case] expected: &str,
    ) {
        let coordinate = Coordinate::new(identity(), classifier.map(str::to_owned), extension);
        assert_eq!(coordinate.to_string(), expected);
    }

    #[test]
    fn coordinates_differ_by_classifier() {
        let bare = Coordinate::new(identity(), None, "jar");
        let sources = Coordinate::new(identity(), Some("sources".to_owned()), "jar");
        assert_ne!(bare, sources);
        assert_eq!(bare.identity(), sources.identity());
    }
}

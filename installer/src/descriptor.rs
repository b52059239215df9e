//! Project descriptor parsing.
//!
//! A descriptor is a TOML file naming the project's coordinates and the files
//! its build produced:
//!
//! ```toml
//! [project]
//! group_id = "org.example"
//! artifact_id = "demo"
//! version = "1.0.0"
//! packaging = "jar"
//! file = "target/demo.jar"
//!
//! [[attached]]
//! classifier = "sources"
//! file = "target/demo-sources.jar"
//! ```
//!
//! Relative file paths are resolved against the descriptor's directory.

use crate::error::{InstallerError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use stowage::{Packaging, Project, ProjectIdentity};

/// Conventional descriptor file name.
pub const DEFAULT_DESCRIPTOR: &str = "project.toml";

/// Extension used for attached artefacts that do not name one.
const DEFAULT_ATTACHED_EXTENSION: &str = "jar";

/// Raw descriptor contents.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProjectDescriptor {
    /// The project's identity and primary artefact.
    pub project: ProjectSection,
    /// Attached artefacts, in installation order.
    #[serde(default)]
    pub attached: Vec<AttachedSection>,
}

/// The `[project]` table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    /// Group identifier.
    pub group_id: String,
    /// Artefact identifier.
    pub artifact_id: String,
    /// Version string.
    pub version: String,
    /// Packaging tag; `jar` when omitted.
    #[serde(default)]
    pub packaging: Option<String>,
    /// Primary artefact file, if one was produced.
    #[serde(default)]
    pub file: Option<Utf8PathBuf>,
    /// Primary artefact extension; derived from the packaging when omitted.
    #[serde(default)]
    pub extension: Option<String>,
}

/// One `[[attached]]` entry.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AttachedSection {
    /// Distinguishing classifier.
    #[serde(default)]
    pub classifier: Option<String>,
    /// File extension; `jar` when omitted.
    #[serde(default)]
    pub extension: Option<String>,
    /// The produced file. Installing an entry without one fails.
    #[serde(default)]
    pub file: Option<Utf8PathBuf>,
}

impl ProjectDescriptor {
    /// Parse descriptor text.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::InvalidDescriptor`] when `contents` is not
    /// a valid descriptor.
    pub fn parse(path: &Utf8Path, contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|err| InstallerError::InvalidDescriptor {
            path: path.to_owned(),
            reason: err.message().to_owned(),
        })
    }

    /// Convert into a [`Project`], resolving relative paths against
    /// `base_dir`.
    #[must_use]
    pub fn into_project(self, base_dir: &Utf8Path) -> Project {
        let ProjectSection {
            group_id,
            artifact_id,
            version,
            packaging,
            file,
            extension,
        } = self.project;
        let identity = ProjectIdentity::new(group_id, artifact_id, version);
        let packaging = packaging.map_or_else(Packaging::default, Packaging::from);
        let resolve = |file: Utf8PathBuf| resolve_against(base_dir, file);

        let file = file.map(resolve);
        let project = match extension {
            Some(extension) => {
                Project::with_primary_extension(identity, packaging, extension, file)
            }
            None => Project::new(identity, packaging, file),
        };

        self.attached.into_iter().fold(project, |project, attached| {
            project.with_attached(
                attached.classifier,
                attached
                    .extension
                    .unwrap_or_else(|| DEFAULT_ATTACHED_EXTENSION.to_owned()),
                attached.file.map(resolve),
            )
        })
    }
}

fn resolve_against(base_dir: &Utf8Path, file: Utf8PathBuf) -> Utf8PathBuf {
    if file.is_absolute() {
        file
    } else {
        base_dir.join(file)
    }
}

/// Read the descriptor at `path` and build the project it describes.
///
/// # Errors
///
/// Returns [`InstallerError::DescriptorRead`] if the file cannot be read and
/// [`InstallerError::InvalidDescriptor`] if it cannot be parsed.
pub fn load_project(path: &Utf8Path) -> Result<Project> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| InstallerError::DescriptorRead {
            path: path.to_owned(),
            source,
        })?;
    let base_dir = path.parent().unwrap_or_else(|| Utf8Path::new(""));
    Ok(ProjectDescriptor::parse(path, &contents)?.into_project(base_dir))
}

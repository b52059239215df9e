//! Output formatting for install plans.
//!
//! A dry run prints the derived plan either for people or as JSON for
//! scripting.

use camino::Utf8Path;
use serde::Serialize;
use stowage::{ArtifactRef, ProjectIdentity};

/// Format an install plan for human-readable output.
///
/// # Examples
///
/// ```
/// use stowage::ProjectIdentity;
/// use stowage_installer::plan_output::format_human;
///
/// let identity = ProjectIdentity::new("org.example", "parent", "1.0.0");
/// let output = format_human(&identity, &[]);
/// assert!(output.contains("Nothing to install"));
/// ```
#[must_use]
pub fn format_human(identity: &ProjectIdentity, plan: &[ArtifactRef]) -> String {
    if plan.is_empty() {
        return format!("Nothing to install for {identity}.");
    }

    let mut output = format!("Install plan for {identity}:\n");
    for (index, artifact) in plan.iter().enumerate() {
        let file = artifact.file().map_or("", Utf8Path::as_str);
        output.push_str(&format!(
            "  {}. {} <- {file}\n",
            index + 1,
            artifact.coordinate()
        ));
    }
    output
}

/// Format an install plan as JSON.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use stowage::ProjectIdentity;
/// use stowage_installer::plan_output::format_json;
///
/// let identity = ProjectIdentity::new("org.example", "parent", "1.0.0");
/// let json = format_json(&identity, Utf8Path::new("/srv/store"), &[]);
/// assert!(json.contains("\"artifacts\": []"));
/// ```
#[must_use]
pub fn format_json(
    identity: &ProjectIdentity,
    local_store: &Utf8Path,
    plan: &[ArtifactRef],
) -> String {
    let json_data = PlanJson::from_plan(identity, local_store, plan);

    serde_json::to_string_pretty(&json_data).unwrap_or_else(|_| "{}".to_owned())
}

/// JSON-serializable representation of an install plan.
#[derive(Debug, Serialize)]
pub struct PlanJson {
    /// The project coordinates, `group:artifact:version`.
    pub project: String,
    /// Store the plan would be written into.
    pub local_store: String,
    /// Artefacts in installation order.
    pub artifacts: Vec<ArtifactEntry>,
}

impl PlanJson {
    fn from_plan(
        identity: &ProjectIdentity,
        local_store: &Utf8Path,
        plan: &[ArtifactRef],
    ) -> Self {
        let artifacts = plan
            .iter()
            .map(|artifact| ArtifactEntry {
                coordinate: artifact.coordinate().to_string(),
                classifier: artifact.classifier().map(str::to_owned),
                extension: artifact.extension().to_owned(),
                file: artifact.file().map(|file| file.to_string()),
            })
            .collect();

        Self {
            project: identity.to_string(),
            local_store: local_store.to_string(),
            artifacts,
        }
    }
}

/// JSON entry for one planned artefact.
#[derive(Debug, Serialize)]
pub struct ArtifactEntry {
    /// Full coordinate string.
    pub coordinate: String,
    /// Classifier, or `null` for the primary artefact.
    pub classifier: Option<String>,
    /// File extension.
    pub extension: String,
    /// Source file.
    pub file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};

    #[fixture]
    fn identity() -> ProjectIdentity {
        ProjectIdentity::new("org.example", "demo", "1.0.0")
    }

    #[fixture]
    fn plan(identity: ProjectIdentity) -> Vec<ArtifactRef> {
        vec![
            ArtifactRef::new(
                identity.clone(),
                None,
                "jar",
                Some(Utf8PathBuf::from("target/demo.jar")),
            ),
            ArtifactRef::new(
                identity,
                Some("sources".to_owned()),
                "jar",
                Some(Utf8PathBuf::from("target/demo-sources.jar")),
            ),
        ]
    }

    #[rstest]
    fn format_human_lists_artifacts_in_order(identity: ProjectIdentity, plan: Vec<ArtifactRef>) {
        let output = format_human(&identity, &plan);

        assert!(output.starts_with("Install plan for org.example:demo:1.0.0:"));
        let primary = output
            .find("1. org.example:demo:jar:1.0.0 <- target/demo.jar")
            .expect("primary line");
        let sources = output
            .find("2. org.example:demo:jar:sources:1.0.0 <- target/demo-sources.jar")
            .expect("sources line");
        assert!(primary < sources);
    }

    #[rstest]
    fn format_human_empty_plan(identity: ProjectIdentity) {
        assert_eq!(
            format_human(&identity, &[]),
            "Nothing to install for org.example:demo:1.0.0."
        );
    }

    #[rstest]
    fn format_json_is_valid_json(identity: ProjectIdentity, plan: Vec<ArtifactRef>) {
        let json = format_json(&identity, Utf8Path::new("/srv/store"), &plan);

        let parsed: serde_json::Value = serde_json::from_str(&json).expect("should be valid JSON");
        assert_eq!(parsed["project"], "org.example:demo:1.0.0");
        assert_eq!(parsed["local_store"], "/srv/store");
        let artifacts = parsed["artifacts"].as_array().expect("artifacts array");
        assert_eq!(artifacts.len(), 2);
        assert!(artifacts[0]["classifier"].is_null());
        assert_eq!(artifacts[1]["classifier"], "sources");
        assert_eq!(artifacts[1]["file"], "target/demo-sources.jar");
    }
}

//! Unit tests for the project installer.
//!
//! The store writer is mocked so each test can assert exactly which batch,
//! if any, reaches the store.

use super::{ProjectInstaller, plan_installation};
use crate::coordinate::ProjectIdentity;
use crate::error::InstallError;
use crate::project::{ArtifactRef, Packaging, Project};
use crate::request::{BuildContext, InstallRequest};
use crate::store::{MockStoreWriter, StoreWriteError};
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};

#[fixture]
fn identity() -> ProjectIdentity {
    ProjectIdentity::new("org.apache.maven.test", "test", "1.0.0-SNAPSHOT")
}

#[fixture]
fn context() -> BuildContext {
    BuildContext::new("/tmp/local-store")
}

fn jar_project(identity: ProjectIdentity) -> Project {
    Project::new(
        identity,
        Packaging::from("jar"),
        Some(Utf8PathBuf::from("target/test-1.0.0-SNAPSHOT.jar")),
    )
}

fn silent_writer() -> MockStoreWriter {
    let mut mock = MockStoreWriter::new();
    mock.expect_install().never();
    mock
}

// -------------------------------------------------------------------------
// Preconditions
// -------------------------------------------------------------------------

#[rstest]
fn install_rejects_missing_context_first(identity: ProjectIdentity) {
    let installer = ProjectInstaller::new(silent_writer());

    let absent_both = installer.install(None, None);
    let absent_context = installer.install(None, Some(InstallRequest::new(jar_project(identity))));

    for result in [absent_both, absent_context] {
        assert!(
            matches!(result, Err(InstallError::InvalidArgument("buildContext"))),
            "expected buildContext to be reported, got {result:?}"
        );
    }
}

#[rstest]
fn install_rejects_missing_request(context: BuildContext) {
    let installer = ProjectInstaller::new(silent_writer());

    let result = installer.install(Some(&context), None);

    assert!(
        matches!(result, Err(InstallError::InvalidArgument("installRequest"))),
        "expected installRequest to be reported, got {result:?}"
    );
}

// -------------------------------------------------------------------------
// Primary artefact eligibility
// -------------------------------------------------------------------------

#[rstest]
#[case::pom("pom")]
#[case::custom_lifecycle("custom-lifecycle")]
#[case::jar_without_package_step("jar")]
fn install_skips_primary_without_file(
    identity: ProjectIdentity,
    context: BuildContext,
    #[case] packaging: &str,
) {
    let project = Project::new(identity, Packaging::from(packaging), None);
    let installer = ProjectInstaller::new(silent_writer());

    let result = installer.install(Some(&context), Some(InstallRequest::new(project)));

    assert!(result.is_ok(), "expected success, got {result:?}");
}

#[rstest]
fn install_submits_primary_once_with_same_context(
    identity: ProjectIdentity,
    context: BuildContext,
) {
    let project = jar_project(identity);
    let expected = vec![project.primary_artifact().clone()];
    let context_addr = std::ptr::from_ref(&context).addr();

    let mut mock = MockStoreWriter::new();
    mock.expect_install()
        .withf(move |ctx, artifacts| {
            std::ptr::from_ref(ctx).addr() == context_addr && artifacts.to_vec() == expected
        })
        .times(1)
        .returning(|_, _| Ok(()));
    let installer = ProjectInstaller::new(mock);

    let result = installer.install(Some(&context), Some(InstallRequest::new(project)));

    assert!(result.is_ok(), "expected success, got {result:?}");
}

#[rstest]
fn plan_skips_primary_pointing_at_directory(identity: ProjectIdentity) {
    let classes = tempfile::tempdir().expect("failed to create temp dir");
    let classes_path =
        Utf8PathBuf::try_from(classes.path().to_path_buf()).expect("temp dir path not UTF-8");
    let project = Project::new(identity, Packaging::from("jar"), Some(classes_path))
        .with_attached(
            Some("tests".to_owned()),
            "jar",
            Some(Utf8PathBuf::from("target/test-tests.jar")),
        );

    let plan = plan_installation(&project).expect("plan should succeed");

    assert_eq!(plan.len(), 1);
    assert_eq!(plan.first().and_then(ArtifactRef::classifier), Some("tests"));
}

#[rstest]
fn plan_follows_primary_path_on_disk(identity: ProjectIdentity) {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).expect("temp dir path not UTF-8");
    let output = root.join("demo.jar");
    let project = Project::new(identity, Packaging::from("jar"), Some(output.clone()));

    let before = plan_installation(&project).expect("plan should succeed");
    std::fs::create_dir(&output).expect("failed to create directory");
    let after = plan_installation(&project).expect("plan should succeed");

    assert_eq!(before.len(), 1);
    assert!(after.is_empty(), "got {after:?}");
}

// -------------------------------------------------------------------------
// Attached artefacts
// -------------------------------------------------------------------------

#[rstest]
#[case::with_primary(true, 3)]
#[case::without_primary(false, 2)]
fn install_orders_primary_before_attachments(
    identity: ProjectIdentity,
    context: BuildContext,
    #[case] with_primary: bool,
    #[case] expected_len: usize,
) {
    let primary_file = with_primary.then(|| Utf8PathBuf::from("target/test.jar"));
    let project = Project::new(identity, Packaging::from("jar"), primary_file)
        .with_attached(
            Some("sources".to_owned()),
            "jar",
            Some(Utf8PathBuf::from("target/test-sources.jar")),
        )
        .with_attached(
            Some("cyclonedx".to_owned()),
            "json",
            Some(Utf8PathBuf::from("target/bom.json")),
        );

    let mut expected: Vec<ArtifactRef> = Vec::new();
    if with_primary {
        expected.push(project.primary_artifact().clone());
    }
    expected.extend(project.attached_artifacts().iter().cloned());

    let mut mock = MockStoreWriter::new();
    mock.expect_install()
        .withf(move |_, artifacts| {
            artifacts.len() == expected_len && artifacts.to_vec() == expected
        })
        .times(1)
        .returning(|_, _| Ok(()));
    let installer = ProjectInstaller::new(mock);

    let written = installer
        .install(Some(&context), Some(InstallRequest::new(project)))
        .expect("install should succeed");

    assert_eq!(written, expected_len);
}

#[rstest]
fn install_fails_when_attachment_has_no_file(identity: ProjectIdentity, context: BuildContext) {
    let project = jar_project(identity)
        .with_attached(
            Some("sources".to_owned()),
            "jar",
            Some(Utf8PathBuf::from("target/test-sources.jar")),
        )
        .with_attached(Some("javadoc".to_owned()), "jar", None);
    let installer = ProjectInstaller::new(silent_writer());

    let result = installer.install(Some(&context), Some(InstallRequest::new(project)));

    match result {
        Err(InstallError::MissingFile { coordinate }) => {
            assert_eq!(coordinate.classifier(), Some("javadoc"));
        }
        other => panic!("expected MissingFile, got {other:?}"),
    }
}

#[rstest]
fn attachments_are_required_even_for_pom_packaging(identity: ProjectIdentity) {
    let project = Project::new(identity, Packaging::from("pom"), None).with_attached(
        Some("site".to_owned()),
        "zip",
        None,
    );

    let result = plan_installation(&project);

    assert!(matches!(result, Err(InstallError::MissingFile { .. })));
}

// -------------------------------------------------------------------------
// Writer failures and determinism
// -------------------------------------------------------------------------

#[rstest]
fn install_propagates_writer_failure(identity: ProjectIdentity, context: BuildContext) {
    let project = jar_project(identity).with_attached(
        Some("sources".to_owned()),
        "jar",
        Some(Utf8PathBuf::from("target/test-sources.jar")),
    );

    let mut mock = MockStoreWriter::new();
    mock.expect_install().times(1).returning(|_, artifacts| {
        let failed = artifacts
            .last()
            .map(|artifact| artifact.coordinate().clone())
            .expect("batch should not be empty");
        Err(StoreWriteError::new(failed, "no space left on device"))
    });
    let installer = ProjectInstaller::new(mock);

    let result = installer.install(Some(&context), Some(InstallRequest::new(project)));

    match result {
        Err(InstallError::StoreWrite { coordinate, source }) => {
            assert_eq!(coordinate.classifier(), Some("sources"));
            assert!(source.to_string().contains("no space left on device"));
        }
        other => panic!("expected StoreWrite, got {other:?}"),
    }
}

#[rstest]
fn plan_is_deterministic(identity: ProjectIdentity) {
    let build = || {
        jar_project(identity.clone())
            .with_attached(
                Some("sources".to_owned()),
                "jar",
                Some(Utf8PathBuf::from("target/test-sources.jar")),
            )
            .with_attached(None, "pom", Some(Utf8PathBuf::from("pom.xml")))
    };

    let first = plan_installation(&build()).expect("plan should succeed");
    let second = plan_installation(&build()).expect("plan should succeed");

    assert_eq!(first, second);
}

#[rstest]
fn replace_writer_returns_previous_writer(identity: ProjectIdentity, context: BuildContext) {
    let mut installer = ProjectInstaller::new(silent_writer());

    let mut replacement = MockStoreWriter::new();
    replacement
        .expect_install()
        .times(1)
        .returning(|_, _| Ok(()));
    let previous = installer.replace_writer(replacement);
    drop(previous);

    let result = installer.install(
        Some(&context),
        Some(InstallRequest::new(jar_project(identity))),
    );
    assert!(result.is_ok(), "expected success, got {result:?}");
}

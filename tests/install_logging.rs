//! Log output emitted while planning installs.
//!
//! `logtest` installs a process-wide logger, so every assertion lives in a
//! single test.

use camino::Utf8PathBuf;
use logtest::Logger;
use stowage::{Packaging, Project, ProjectIdentity, plan_installation};

#[test]
fn skipped_primaries_are_logged() {
    let mut logger = Logger::start();
    let identity = ProjectIdentity::new("org.example", "demo", "1.0.0");

    let custom = Project::new(identity.clone(), Packaging::from("custom-lifecycle"), None);
    let plan = plan_installation(&custom).expect("plan should succeed");
    assert!(plan.is_empty());
    let skipped = std::iter::from_fn(|| logger.pop())
        .find(|record| record.args().contains("skipping"))
        .expect("expected a skip message");
    assert_eq!(skipped.level(), log::Level::Debug);
    assert!(skipped.args().contains("org.example:demo:custom-lifecycle:1.0.0"));

    let classes = tempfile::tempdir().expect("failed to create temp dir");
    let classes_path =
        Utf8PathBuf::try_from(classes.path().to_path_buf()).expect("temp dir path not UTF-8");
    let compiled_only = Project::new(identity, Packaging::from("jar"), Some(classes_path));
    let plan = plan_installation(&compiled_only).expect("plan should succeed");
    assert!(plan.is_empty());
    let warning = std::iter::from_fn(|| logger.pop())
        .find(|record| record.level() == log::Level::Warn)
        .expect("expected a directory warning");
    assert!(warning.args().contains("directory"));
}

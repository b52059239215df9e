//! Store writer that delegates each write to an external command.
//!
//! The command is responsible for copying the file into the store and for
//! any integrity metadata. This writer only expands argument templates and
//! runs the command once per artefact, in order, stopping at the first
//! failure.

use crate::error::InstallerError;
use crate::exec::{CommandExecutor, failure_reason};
use log::debug;
use stowage::config::WriterConfig;
use stowage::{ArtifactRef, BuildContext, StoreWriteError, StoreWriter};

/// Placeholders recognised in writer argument templates.
///
/// Build properties are reachable as `{property:NAME}` in addition to these.
pub const PLACEHOLDERS: &[&str] = &[
    "{file}",
    "{group_id}",
    "{artifact_id}",
    "{version}",
    "{classifier}",
    "{extension}",
    "{coordinate}",
    "{local_store}",
];

/// Runs the configured writer command for every artefact.
pub struct CommandStoreWriter<E> {
    executor: E,
    config: WriterConfig,
}

impl<E: CommandExecutor> CommandStoreWriter<E> {
    /// Create a writer running `config` through `executor`.
    #[must_use]
    pub fn new(executor: E, config: WriterConfig) -> Self {
        Self { executor, config }
    }

    /// The executor used to spawn the writer command.
    #[must_use]
    pub fn executor(&self) -> &E {
        &self.executor
    }

    fn write_one(
        &self,
        context: &BuildContext,
        artifact: &ArtifactRef,
    ) -> Result<(), StoreWriteError> {
        let coordinate = artifact.coordinate();
        let args = expand_args(&self.config.args, context, artifact);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        debug!("writing {coordinate} with {}", self.config.command);

        let output = self
            .executor
            .run(&self.config.command, &arg_refs)
            .map_err(|source| StoreWriteError::new(coordinate.clone(), source))?;
        if !output.status.success() {
            return Err(StoreWriteError::new(
                coordinate.clone(),
                InstallerError::WriterCommand {
                    command: self.config.command.clone(),
                    reason: failure_reason(&output),
                },
            ));
        }
        Ok(())
    }
}

impl<E: CommandExecutor> StoreWriter for CommandStoreWriter<E> {
    fn install(
        &self,
        context: &BuildContext,
        artifacts: &[ArtifactRef],
    ) -> Result<(), StoreWriteError> {
        artifacts
            .iter()
            .try_for_each(|artifact| self.write_one(context, artifact))
    }
}

/// Expand placeholder templates for one artefact.
///
/// An absent classifier expands to an empty string. Each build property
/// fills `{property:NAME}`; a name with no property is left as written.
///
/// # Examples
///
/// ```
/// use camino::Utf8PathBuf;
/// use stowage::{ArtifactRef, BuildContext, ProjectIdentity};
/// use stowage_installer::writer::expand_args;
///
/// let artifact = ArtifactRef::new(
///     ProjectIdentity::new("org.example", "demo", "1.0.0"),
///     None,
///     "jar",
///     Some(Utf8PathBuf::from("target/demo.jar")),
/// );
/// let context = BuildContext::new("/srv/store");
/// let args = expand_args(
///     &["--into={local_store}".to_owned(), "{coordinate}".to_owned()],
///     &context,
///     &artifact,
/// );
/// assert_eq!(args, ["--into=/srv/store", "org.example:demo:jar:1.0.0"]);
/// ```
#[must_use]
pub fn expand_args(
    templates: &[String],
    context: &BuildContext,
    artifact: &ArtifactRef,
) -> Vec<String> {
    let identity = artifact.identity();
    let coordinate = artifact.coordinate().to_string();
    let values = [
        ("{file}", artifact.file().map_or("", |file| file.as_str())),
        ("{group_id}", identity.group_id()),
        ("{artifact_id}", identity.artifact_id()),
        ("{version}", identity.version()),
        ("{classifier}", artifact.classifier().unwrap_or_default()),
        ("{extension}", artifact.extension()),
        ("{coordinate}", coordinate.as_str()),
        ("{local_store}", context.local_store().as_str()),
    ];

    templates
        .iter()
        .map(|template| {
            values
                .iter()
                .fold(template.clone(), |arg, &(placeholder, value)| {
                    arg.replace(placeholder, value)
                })
        })
        .map(|arg| {
            context.properties().iter().fold(arg, |arg, (name, value)| {
                arg.replace(&format!("{{property:{name}}}"), value)
            })
        })
        .collect()
}

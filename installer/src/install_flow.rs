//! Install-flow helpers shared by the binary and behaviour tests.
//!
//! [`prepare`] gathers everything one invocation needs: the project, the
//! configuration and the local store. The result can then be rendered as a
//! dry run or installed through a [`CommandExecutor`].

use crate::cli::Cli;
use crate::descriptor::load_project;
use crate::dirs::BaseDirs;
use crate::error::{InstallerError, Result};
use crate::exec::CommandExecutor;
use crate::output::DryRunInfo;
use crate::plan_output::{format_human, format_json};
use crate::resolution::{ConfigLocation, config_location, load_config, resolve_local_store};
use crate::writer::CommandStoreWriter;
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use stowage::config::StoreConfig;
use stowage::{InstallRequest, Project, ProjectInstaller, plan_installation};

/// Everything resolved for one installer invocation.
#[derive(Clone, Debug)]
pub struct Invocation {
    descriptor: Utf8PathBuf,
    project: Project,
    config_location: ConfigLocation,
    config: StoreConfig,
    local_store: Utf8PathBuf,
}

impl Invocation {
    /// The project read from the descriptor.
    #[must_use]
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Where configuration was looked up.
    #[must_use]
    pub fn config_location(&self) -> &ConfigLocation {
        &self.config_location
    }

    /// The loaded configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The resolved local store.
    #[must_use]
    pub fn local_store(&self) -> &Utf8Path {
        &self.local_store
    }
}

/// Load the descriptor and configuration, then resolve the local store.
///
/// `env_store` is the value of the local store environment override, read
/// by the caller.
///
/// # Errors
///
/// Returns descriptor, configuration and resolution errors.
pub fn prepare(
    cli: &Cli,
    dirs: &dyn BaseDirs,
    env_store: Option<Utf8PathBuf>,
) -> Result<Invocation> {
    let project = load_project(&cli.descriptor)?;
    let config_location = config_location(cli.config.as_deref(), dirs);
    let config = load_config(&config_location)?;
    let local_store = resolve_local_store(cli.local_store.as_deref(), env_store, &config, dirs)?;
    debug!(
        "installing {} into {local_store} using {}",
        project.identity(),
        config_location.describe()
    );

    Ok(Invocation {
        descriptor: cli.descriptor.clone(),
        project,
        config_location,
        config,
        local_store,
    })
}

/// Render the install plan without writing anything.
///
/// # Errors
///
/// Returns [`InstallerError::Install`] when the plan cannot be derived,
/// e.g. because an attached artefact has no file.
pub fn dry_run_report(invocation: &Invocation, json: bool) -> Result<String> {
    let plan = plan_installation(&invocation.project)?;
    let identity = invocation.project.identity();

    if json {
        return Ok(format_json(identity, &invocation.local_store, &plan));
    }

    let config = invocation.config_location.describe();
    let info = DryRunInfo {
        descriptor: &invocation.descriptor,
        config: &config,
        local_store: &invocation.local_store,
        writer: invocation
            .config
            .writer
            .as_ref()
            .map(|writer| writer.command.as_str()),
    };
    Ok(format!(
        "{}\n\n{}",
        info.display_text(),
        format_human(identity, &plan)
    ))
}

/// Install the project through the configured writer command.
///
/// Returns the number of artefacts written. A project with nothing to
/// install succeeds without consulting the writer configuration.
///
/// # Errors
///
/// Returns [`InstallerError::WriterNotConfigured`] when artefacts need
/// writing but no `[writer]` table exists, and [`InstallerError::Install`]
/// for any planning or store failure.
pub fn install_with<E: CommandExecutor>(invocation: &Invocation, executor: E) -> Result<usize> {
    let Some(writer_config) = invocation.config.writer.clone() else {
        if plan_installation(&invocation.project)?.is_empty() {
            return Ok(0);
        }
        return Err(InstallerError::WriterNotConfigured {
            config_hint: invocation.config_location.describe(),
        });
    };
    let installer = ProjectInstaller::new(CommandStoreWriter::new(executor, writer_config));
    let context = invocation
        .config
        .build_context(invocation.local_store.clone());

    installer
        .install(
            Some(&context),
            Some(InstallRequest::from(invocation.project.clone())),
        )
        .map_err(InstallerError::from)
}

//! CLI argument definitions for the stowage installer.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the main entrypoint to keep the binary small and focused on
//! orchestration.

use crate::descriptor::DEFAULT_DESCRIPTOR;
use camino::Utf8PathBuf;
use clap::Parser;

/// Install a project's built artefacts into the local store.
#[derive(Parser, Debug, Clone)]
#[command(name = "stowage-install")]
#[command(version, about)]
#[command(long_about = concat!(
    "Install a project's built artefacts into the local store.\n\n",
    "The project is read from a descriptor naming its coordinates, the primary ",
    "artefact and any attached artefacts. The primary artefact is installed ",
    "first when its file exists, followed by every attached artefact in ",
    "declared order. Each write is delegated to the command configured in the ",
    "[writer] table of stowage.toml.",
))]
#[command(after_help = concat!(
    "LOCAL STORE:\n",
    "  Taken from --local-store, then STOWAGE_LOCAL_STORE, then local_store in\n",
    "  the configuration file, then ~/.stowage/repository.\n\n",
    "EXAMPLES:\n",
    "  Install the project described by ./project.toml:\n",
    "    $ stowage-install\n\n",
    "  Preview the install plan as JSON:\n",
    "    $ stowage-install --dry-run --json\n\n",
    "  Install into a scratch store:\n",
    "    $ stowage-install -s /tmp/store -d build/project.toml",
))]
pub struct Cli {
    /// Project descriptor to install.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_DESCRIPTOR)]
    pub descriptor: Utf8PathBuf,

    /// Configuration file [default: platform-specific].
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Local store to install into.
    #[arg(short = 's', long, value_name = "DIR")]
    pub local_store: Option<Utf8PathBuf>,

    /// Print the install plan and exit without writing.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the dry-run plan as JSON.
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Suppress progress output (errors still shown).
    #[arg(short, long)]
    pub quiet: bool,
}

impl Default for Cli {
    /// Creates a `Cli` matching an invocation with no arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use stowage_installer::cli::Cli;
    ///
    /// let cli = Cli::default();
    /// assert_eq!(cli.descriptor, "project.toml");
    /// assert!(!cli.dry_run);
    /// ```
    fn default() -> Self {
        Self {
            descriptor: Utf8PathBuf::from(DEFAULT_DESCRIPTOR),
            config: None,
            local_store: None,
            dry_run: false,
            json: false,
            quiet: false,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

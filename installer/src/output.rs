//! Output formatting for the installer CLI.
//!
//! Progress and summary lines printed on stderr, plus the header shown
//! before a dry-run plan.

use camino::Utf8Path;
use std::io::Write;
use stowage::ProjectIdentity;

/// Write `message` and a newline, ignoring write failures.
pub fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}

/// Format a success message after installation.
///
/// # Example
///
/// ```
/// use camino::Utf8Path;
/// use stowage_installer::output::success_message;
///
/// let message = success_message(1, Utf8Path::new("/srv/store"));
/// assert_eq!(message, "Installed 1 artefact into /srv/store");
/// ```
#[must_use]
pub fn success_message(count: usize, local_store: &Utf8Path) -> String {
    let plural = if count == 1 { "artefact" } else { "artefacts" };
    format!("Installed {count} {plural} into {local_store}")
}

/// Message printed when a project has nothing installable.
#[must_use]
pub fn nothing_to_install_message(identity: &ProjectIdentity) -> String {
    format!("Nothing to install for {identity}")
}

/// Settings shown at the top of a dry run.
///
/// # Example
///
/// ```
/// use camino::Utf8PathBuf;
/// use stowage_installer::output::DryRunInfo;
///
/// let descriptor = Utf8PathBuf::from("project.toml");
/// let store = Utf8PathBuf::from("/srv/store");
/// let info = DryRunInfo {
///     descriptor: &descriptor,
///     config: "/home/ada/.config/stowage/stowage.toml",
///     local_store: &store,
///     writer: Some("store-put"),
/// };
///
/// let output = info.display_text();
/// assert!(output.contains("Dry run"));
/// assert!(output.contains("/srv/store"));
/// ```
#[derive(Debug)]
pub struct DryRunInfo<'a> {
    /// Descriptor the project was read from.
    pub descriptor: &'a Utf8Path,
    /// Where configuration was looked up.
    pub config: &'a str,
    /// Resolved local store.
    pub local_store: &'a Utf8Path,
    /// Configured writer command, if any.
    pub writer: Option<&'a str>,
}

impl DryRunInfo<'_> {
    /// Format the dry-run information for display.
    #[must_use]
    pub fn display_text(&self) -> String {
        [
            "Dry run - nothing will be written to the store".to_owned(),
            String::new(),
            format!("Descriptor: {}", self.descriptor),
            format!("Configuration: {}", self.config),
            format!("Local store: {}", self.local_store),
            format!("Writer: {}", self.writer.unwrap_or("(not configured)")),
        ]
        .join("\n")
    }
}

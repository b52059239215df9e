//! Installs a project's build outputs into a local artefact store.
//!
//! [`ProjectInstaller`] decides which of a project's artefacts reach the store
//! and in what order; a [`StoreWriter`] performs the writes.
//!
//! # Modules
//!
//! - [`config`] - `stowage.toml` loading
//! - [`coordinate`] - project identities and store coordinates
//! - [`error`] - installation errors
//! - [`installer`] - install planning and execution
//! - [`project`] - packaging, artefact references, and projects
//! - [`request`] - build context and install requests
//! - [`store`] - the store writer boundary

pub mod config;
pub mod coordinate;
pub mod error;
pub mod installer;
pub mod project;
pub mod request;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use coordinate::{Coordinate, ProjectIdentity};
pub use error::InstallError;
pub use installer::{ProjectInstaller, plan_installation};
pub use project::{ArtifactRef, Packaging, Project};
pub use request::{BuildContext, InstallRequest};
pub use store::{StoreWriteError, StoreWriter};

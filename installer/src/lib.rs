//! Stowage installer library.
//!
//! This crate turns a project descriptor into an install request for the
//! `stowage` core and writes the resulting artefacts through an external
//! command. It is used by the `stowage-install` CLI binary and can be
//! consumed programmatically for testing or custom installation workflows.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`descriptor`] - Project descriptor parsing
//! - [`dirs`] - Directory resolution abstraction for platform-specific paths
//! - [`error`] - Error types for the installer
//! - [`exec`] - External command execution
//! - [`install_flow`] - Per-invocation preparation, dry runs and installs
//! - [`output`] - Progress and dry-run messages
//! - [`plan_output`] - Human and JSON rendering of install plans
//! - [`resolution`] - Configuration and local store resolution
//! - [`writer`] - Store writer delegating to an external command

pub mod cli;
pub mod descriptor;
pub mod dirs;
pub mod error;
pub mod exec;
pub mod install_flow;
pub mod output;
pub mod plan_output;
pub mod resolution;
pub mod writer;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

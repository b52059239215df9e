//! Stowage installer CLI entrypoint.
//!
//! This binary reads a project descriptor and installs the project's built
//! artefacts into the local store, or prints the install plan on a dry run.

use clap::Parser;
use std::io::Write;
use stowage_installer::cli::Cli;
use stowage_installer::dirs::{BaseDirs, SystemBaseDirs};
use stowage_installer::error::Result;
use stowage_installer::exec::SystemCommandExecutor;
use stowage_installer::install_flow::{Invocation, dry_run_report, install_with, prepare};
use stowage_installer::output::{nothing_to_install_message, success_message, write_stderr_line};
use stowage_installer::resolution::local_store_from_env;

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &SystemBaseDirs, &mut stdout, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(
    cli: &Cli,
    dirs: &dyn BaseDirs,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<()> {
    let invocation = prepare(cli, dirs, local_store_from_env())?;

    if cli.dry_run {
        let report = dry_run_report(&invocation, cli.json)?;
        writeln!(stdout, "{report}")?;
        return Ok(());
    }

    install(cli, &invocation, stderr)
}

/// Installs through the host's writer command and reports the outcome.
fn install(cli: &Cli, invocation: &Invocation, stderr: &mut dyn Write) -> Result<()> {
    if !cli.quiet {
        write_stderr_line(
            stderr,
            format!(
                "Installing {} into {}...",
                invocation.project().identity(),
                invocation.local_store()
            ),
        );
    }

    let written = install_with(invocation, SystemCommandExecutor)?;

    if !cli.quiet {
        let message = if written == 0 {
            nothing_to_install_message(invocation.project().identity())
        } else {
            success_message(written, invocation.local_store())
        };
        write_stderr_line(stderr, message);
    }
    Ok(())
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}

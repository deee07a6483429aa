use std::env;
use std::process::Command;

use anyhow::Context;
use anyhow::Result;
use log::debug;

use crate::bailc;
use crate::error::ctx;

/// The seam through which every external tool is invoked.
///
/// Injectable so that the driver can be exercised in tests without any of
/// the delegated tools installed.
pub trait ShellCommander {
    /// Whether `program` resolves to an executable on the PATH.
    fn available(&self, program: &str) -> bool;

    /// Run a prepared command to completion, inheriting stdio.
    ///
    /// A non-zero exit status is an error.
    fn run(&self, cmd: Command) -> Result<()>;
}

/// Runs commands on the real system.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemShell;

impl ShellCommander for SystemShell {
    fn available(&self, program: &str) -> bool {
        let Some(paths) = env::var_os("PATH") else {
            return false;
        };

        env::split_paths(&paths).any(|dir| dir.join(program).is_file())
    }

    fn run(&self, mut cmd: Command) -> Result<()> {
        debug!("Running {cmd:?}");

        let program = cmd.get_program().to_string_lossy().into_owned();

        let status = cmd.status().with_context(ctx!(
            "Could not start {program}", ;
            "Ensure that {program} is installed and on the PATH",
        ))?;

        if !status.success() {
            bailc!(
                "{program} exited with {status}", ;
                "The invoked check reported a failure", ;
                "Inspect the output above for the offending tests",
            );
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/shell.rs"]
mod tests;

use std::path::PathBuf;
use std::process::Command;

use anyhow::Context;
use anyhow::Result;
use glob::glob;
use log::debug;
use log::warn;
use vet_lib::bailc;
use vet_lib::constants::BATS_EXTENSION;
use vet_lib::constants::BATS_RUNNER;
use vet_lib::constants::DEFAULT_BATS_JOBS;
use vet_lib::constants::PARALLEL_RUNNER;
use vet_lib::ctx;
use vet_lib::resolve::resolve_target;
use vet_lib::resolve::ResolvedTarget;
use vet_lib::resolve::TargetKind;
use vet_lib::shell::ShellCommander;
use vet_lib::tokens::Selection;

use super::Confirmer;
use super::RunContext;

/// Run the CLI acceptance tests for every resolved target.
///
/// When known-good output is being recreated the driver stops for
/// explicit operator confirmation first; tests that overwrite golden
/// output must never start silently.
pub fn run_cli(
    selection: &Selection,
    run: &RunContext,
    shell: &impl ShellCommander,
    confirm: &impl Confirmer,
) -> Result<()> {
    if let Some(kgo) = &run.config.recreate_kgo {
        warn!("Known-good output will be recreated under {kgo:?}");

        let confirmed = confirm.confirm(
            "Existing known-good output will be overwritten, continue?",
        )?;

        if !confirmed {
            bailc!(
                "Recreating known-good output was not confirmed", ;
                "The acceptance tests would overwrite the golden output", ;
                "Unset the recreation variable to compare against it instead",
            );
        }
    }

    let test_root = run.config.test_root();

    let targets: Vec<ResolvedTarget> = match selection.restricted_cli_subtests() {
        Some(tokens) => tokens
            .iter()
            .map(|token| resolve_target(token, &test_root, &run.invocation_dir))
            .collect(),
        None => vec![ResolvedTarget {
            kind: TargetKind::Directory,
            path: test_root,
        }],
    };

    for target in &targets {
        debug!("Running acceptance tests at {:?}", target.path);
        run_target(target, run, shell)?;
    }

    Ok(())
}

/// Pick a runner for one target.
///
/// GNU parallel when installed and not overridden with `--bats`, plain
/// bats on a single file, otherwise bats across every discovered test
/// file under the target.
fn run_target(
    target: &ResolvedTarget,
    run: &RunContext,
    shell: &impl ShellCommander,
) -> Result<()> {
    if !run.serial_runner && shell.available(PARALLEL_RUNNER) {
        let jobs = if run.debug { 1 } else { DEFAULT_BATS_JOBS };

        let mut cmd = Command::new(PARALLEL_RUNNER);
        cmd.arg("--jobs")
            .arg(jobs.to_string())
            .arg(BATS_RUNNER)
            .arg(":::")
            .args(test_files(target)?);

        return shell.run(cmd);
    }

    match target.kind {
        TargetKind::File => {
            let mut cmd = Command::new(BATS_RUNNER);
            cmd.arg(&target.path);

            shell.run(cmd)
        }
        TargetKind::Directory => {
            let mut cmd = Command::new(BATS_RUNNER);
            cmd.args(test_files(target)?);

            shell.run(cmd)
        }
    }
}

/// Every acceptance-test file under the target; a single file is its own
/// set.
///
/// An empty set is an error: this is where a dangling literal target from
/// the third resolution rule finally surfaces.
fn test_files(target: &ResolvedTarget) -> Result<Vec<PathBuf>> {
    if target.kind == TargetKind::File {
        return Ok(vec![target.path.clone()]);
    }

    let pattern = target.path.join("**").join(format!("*.{BATS_EXTENSION}"));
    let pattern = pattern.to_string_lossy().into_owned();

    let hits = glob(&pattern).with_context(ctx!(
        "Invalid test discovery pattern {pattern:?}", ;
        "",
    ))?;

    let mut files = Vec::new();

    for hit in hits {
        files.push(hit.with_context(ctx!(
            "Could not inspect a file matching {pattern:?}", ;
            "Ensure that you have permissions to read the test tree",
        ))?);
    }

    files.sort();

    if files.is_empty() {
        let path = &target.path;
        bailc!(
            "No acceptance tests found under {path:?}", ;
            "The target contains no .{BATS_EXTENSION} files or does not exist", ;
            "Check the subtest name or path for typos",
        );
    }

    Ok(files)
}

#[cfg(test)]
#[path = "tests/bats.rs"]
mod tests;
